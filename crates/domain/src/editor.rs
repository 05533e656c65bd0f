use crate::{
    EditError, GeneratedExercise, GeneratedProgram, GeneratedWorkout, Increment, same_exercise,
};

/// Changes to a single set. Unset fields are left unchanged.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SetChange {
    pub percent: Option<f64>,
    pub reps: Option<u32>,
    pub sets: Option<u32>,
}

/// Manual adjustments of a generated program.
///
/// Weeks and workouts are addressed by their 1-based position, exercises and
/// sets by their 0-based index. Every change keeps the totals consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramEditor {
    program: GeneratedProgram,
    rounding: Increment,
}

impl ProgramEditor {
    #[must_use]
    pub fn new(program: GeneratedProgram, rounding: Increment) -> Self {
        Self { program, rounding }
    }

    #[must_use]
    pub fn program(&self) -> &GeneratedProgram {
        &self.program
    }

    #[must_use]
    pub fn into_program(self) -> GeneratedProgram {
        self.program
    }

    /// Rename every occurrence of an exercise.
    ///
    /// If a positive maximum is given, the weights of all percentage based
    /// sets are derived from it.
    pub fn replace_exercise(&mut self, old: &str, new: &str, one_rm: f64) {
        let rounding = self.rounding;
        for exercise in self.exercises_mut() {
            if !same_exercise(&exercise.name, old) {
                continue;
            }
            new.clone_into(&mut exercise.name);
            if one_rm > 0.0 {
                exercise.one_rm = one_rm;
                for set in &mut exercise.sets {
                    set.resolve_weight(one_rm, rounding);
                }
            }
        }
        self.recalculate();
    }

    pub fn modify_set(
        &mut self,
        week: usize,
        workout: usize,
        exercise: usize,
        set: usize,
        change: SetChange,
    ) -> Result<(), EditError> {
        let rounding = self.rounding;
        let exercise = self.exercise_mut(week, workout, exercise)?;
        let one_rm = exercise.one_rm;
        let set = exercise
            .sets
            .get_mut(set)
            .ok_or(EditError::SetOutOfRange(set))?;
        if let Some(percent) = change.percent.filter(|p| *p > 0.0) {
            set.percent = percent;
            set.resolve_weight(one_rm, rounding);
        }
        if let Some(reps) = change.reps.filter(|r| *r > 0) {
            set.reps = reps;
        }
        if let Some(sets) = change.sets.filter(|s| *s > 0) {
            set.sets = sets;
        }
        self.recalculate();
        Ok(())
    }

    pub fn add_exercise(
        &mut self,
        week: usize,
        workout: usize,
        exercise: GeneratedExercise,
    ) -> Result<(), EditError> {
        self.workout_mut(week, workout)?.exercises.push(exercise);
        self.recalculate();
        Ok(())
    }

    pub fn remove_exercise(
        &mut self,
        week: usize,
        workout: usize,
        exercise: usize,
    ) -> Result<GeneratedExercise, EditError> {
        let workout = self.workout_mut(week, workout)?;
        if exercise >= workout.exercises.len() {
            return Err(EditError::ExerciseOutOfRange(exercise));
        }
        let removed = workout.exercises.remove(exercise);
        self.recalculate();
        Ok(removed)
    }

    /// Multiply all percentages by the factor and adjust the loaded weights.
    pub fn scale_intensity(&mut self, factor: f64) {
        let rounding = self.rounding;
        for exercise in self.exercises_mut() {
            let one_rm = exercise.one_rm;
            for set in &mut exercise.sets {
                let previous = set.percent;
                set.percent *= factor;
                if set.weight <= 0.0 || set.percent <= 0.0 {
                    continue;
                }
                let one_rm = if one_rm > 0.0 {
                    one_rm
                } else {
                    set.weight / (previous / 100.0)
                };
                set.weight = rounding.round(one_rm * set.percent / 100.0);
            }
        }
        self.recalculate();
    }

    pub fn recalculate(&mut self) {
        self.program.recalculate();
    }

    /// Lift count and tonnage of a week.
    pub fn week_summary(&self, week: usize) -> Result<(u32, f64), EditError> {
        let week = week
            .checked_sub(1)
            .and_then(|i| self.program.weeks.get(i))
            .ok_or(EditError::WeekOutOfRange(week))?;
        Ok((week.total_lifts, week.tonnage))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.program)
    }

    pub fn from_json(json: &str, rounding: Increment) -> Result<Self, serde_json::Error> {
        let mut editor = Self::new(serde_json::from_str(json)?, rounding);
        editor.recalculate();
        Ok(editor)
    }

    fn exercises_mut(&mut self) -> impl Iterator<Item = &mut GeneratedExercise> {
        self.program
            .weeks
            .iter_mut()
            .flat_map(|w| &mut w.workouts)
            .flat_map(|w| &mut w.exercises)
    }

    fn workout_mut(
        &mut self,
        week: usize,
        workout: usize,
    ) -> Result<&mut GeneratedWorkout, EditError> {
        let week_entry = week
            .checked_sub(1)
            .and_then(|i| self.program.weeks.get_mut(i))
            .ok_or(EditError::WeekOutOfRange(week))?;
        workout
            .checked_sub(1)
            .and_then(|i| week_entry.workouts.get_mut(i))
            .ok_or(EditError::WorkoutOutOfRange(workout))
    }

    fn exercise_mut(
        &mut self,
        week: usize,
        workout: usize,
        exercise: usize,
    ) -> Result<&mut GeneratedExercise, EditError> {
        self.workout_mut(week, workout)?
            .exercises
            .get_mut(exercise)
            .ok_or(EditError::ExerciseOutOfRange(exercise))
    }
}
