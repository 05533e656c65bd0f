use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{AthleteMaxes, ExerciseKind, Increment};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedProgram {
    pub name: String,
    pub athlete_maxes: AthleteMaxes,
    pub weeks: Vec<GeneratedWeek>,
    pub total_lifts: u32,
    pub total_tonnage: f64,
    pub lifts_by_exercise: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedWeek {
    pub number: u32,
    pub phase: String,
    pub workouts: Vec<GeneratedWorkout>,
    pub total_lifts: u32,
    pub tonnage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedWorkout {
    pub day: u32,
    pub name: String,
    pub exercises: Vec<GeneratedExercise>,
    pub total_lifts: u32,
    pub tonnage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedExercise {
    pub name: String,
    pub kind: Option<ExerciseKind>,
    pub sets: Vec<GeneratedSet>,
    /// Estimated one-repetition maximum the loads were derived from.
    pub one_rm: f64,
    pub total_lifts: u32,
    pub tonnage: f64,
    pub avg_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneratedSet {
    pub percent: f64,
    pub reps: u32,
    pub sets: u32,
    pub weight: f64,
}

impl GeneratedSet {
    #[must_use]
    pub fn lifts(&self) -> u32 {
        self.reps * self.sets
    }

    /// Total mass moved in kilograms.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.lifts())
    }

    pub(crate) fn resolve_weight(&mut self, one_rm: f64, increment: Increment) {
        if self.percent > 0.0 && one_rm > 0.0 {
            self.weight = increment.round(one_rm * self.percent / 100.0);
        }
    }
}

impl GeneratedExercise {
    #[must_use]
    pub fn new(
        name: &str,
        kind: Option<ExerciseKind>,
        one_rm: f64,
        sets: Vec<GeneratedSet>,
    ) -> Self {
        let mut exercise = Self {
            name: name.to_string(),
            kind,
            sets,
            one_rm,
            total_lifts: 0,
            tonnage: 0.0,
            avg_percent: 0.0,
        };
        exercise.recalculate();
        exercise
    }

    pub fn recalculate(&mut self) {
        self.total_lifts = self.sets.iter().map(GeneratedSet::lifts).sum();
        let volume: f64 = self.sets.iter().map(GeneratedSet::volume).sum();
        self.tonnage = volume / 1000.0;
        self.avg_percent = if self.total_lifts > 0 && volume > 0.0 && self.one_rm > 0.0 {
            volume / f64::from(self.total_lifts) / self.one_rm * 100.0
        } else {
            0.0
        };
    }

    /// Average load per lift in kilograms.
    #[must_use]
    pub fn avg_weight(&self) -> f64 {
        avg_weight(self.tonnage, self.total_lifts)
    }
}

impl GeneratedWorkout {
    #[must_use]
    pub fn new(day: u32, name: String, exercises: Vec<GeneratedExercise>) -> Self {
        let mut workout = Self {
            day,
            name,
            exercises,
            total_lifts: 0,
            tonnage: 0.0,
        };
        workout.recalculate();
        workout
    }

    /// Sum the totals of the exercises without recalculating the exercises.
    pub fn recalculate(&mut self) {
        self.total_lifts = self.exercises.iter().map(|e| e.total_lifts).sum();
        self.tonnage = self.exercises.iter().map(|e| e.tonnage).sum();
    }

    #[must_use]
    pub fn avg_weight(&self) -> f64 {
        avg_weight(self.tonnage, self.total_lifts)
    }
}

impl GeneratedWeek {
    #[must_use]
    pub fn new(number: u32, phase: String, workouts: Vec<GeneratedWorkout>) -> Self {
        let mut week = Self {
            number,
            phase,
            workouts,
            total_lifts: 0,
            tonnage: 0.0,
        };
        week.recalculate();
        week
    }

    pub fn recalculate(&mut self) {
        self.total_lifts = self.workouts.iter().map(|w| w.total_lifts).sum();
        self.tonnage = self.workouts.iter().map(|w| w.tonnage).sum();
    }

    #[must_use]
    pub fn avg_weight(&self) -> f64 {
        avg_weight(self.tonnage, self.total_lifts)
    }

    #[must_use]
    pub fn exercises(&self) -> usize {
        self.workouts.iter().map(|w| w.exercises.len()).sum()
    }
}

impl GeneratedProgram {
    #[must_use]
    pub fn new(name: &str, athlete_maxes: AthleteMaxes, weeks: Vec<GeneratedWeek>) -> Self {
        let mut program = Self {
            name: name.to_string(),
            athlete_maxes,
            weeks,
            total_lifts: 0,
            total_tonnage: 0.0,
            lifts_by_exercise: BTreeMap::new(),
        };
        program.recalculate();
        program
    }

    /// Rebuild the totals of every level from the sets upwards.
    pub fn recalculate(&mut self) {
        self.lifts_by_exercise.clear();
        for week in &mut self.weeks {
            for workout in &mut week.workouts {
                for exercise in &mut workout.exercises {
                    exercise.recalculate();
                    *self
                        .lifts_by_exercise
                        .entry(exercise.name.clone())
                        .or_default() += exercise.total_lifts;
                }
                workout.recalculate();
            }
            week.recalculate();
        }
        self.total_lifts = self.weeks.iter().map(|w| w.total_lifts).sum();
        self.total_tonnage = self.weeks.iter().map(|w| w.tonnage).sum();
    }

    /// Remove workouts without exercises and weeks without workouts.
    ///
    /// Returns the number of removed workouts.
    pub fn drop_empty(&mut self) -> usize {
        let mut removed = 0;
        for week in &mut self.weeks {
            let before = week.workouts.len();
            week.workouts.retain(|w| !w.exercises.is_empty());
            removed += before - week.workouts.len();
        }
        self.weeks.retain(|w| !w.workouts.is_empty());
        removed
    }

    #[must_use]
    pub fn workouts(&self) -> usize {
        self.weeks.iter().map(|w| w.workouts.len()).sum()
    }

    #[must_use]
    pub fn exercises(&self) -> usize {
        self.weeks.iter().map(GeneratedWeek::exercises).sum()
    }

    #[must_use]
    pub fn avg_weight(&self) -> f64 {
        avg_weight(self.total_tonnage, self.total_lifts)
    }

    /// Whether the totals of every level equal the sum of their children.
    #[must_use]
    pub fn totals_consistent(&self) -> bool {
        const TOLERANCE: f64 = 1e-9;
        let close = |a: f64, b: f64| (a - b).abs() <= TOLERANCE;

        let weeks_consistent = self.weeks.iter().all(|week| {
            let workouts_consistent = week.workouts.iter().all(|workout| {
                let exercises_consistent = workout.exercises.iter().all(|exercise| {
                    exercise.total_lifts
                        == exercise.sets.iter().map(GeneratedSet::lifts).sum::<u32>()
                        && close(
                            exercise.tonnage,
                            exercise.sets.iter().map(GeneratedSet::volume).sum::<f64>() / 1000.0,
                        )
                });
                exercises_consistent
                    && workout.total_lifts
                        == workout.exercises.iter().map(|e| e.total_lifts).sum::<u32>()
                    && close(
                        workout.tonnage,
                        workout.exercises.iter().map(|e| e.tonnage).sum(),
                    )
            });
            workouts_consistent
                && week.total_lifts == week.workouts.iter().map(|w| w.total_lifts).sum::<u32>()
                && close(week.tonnage, week.workouts.iter().map(|w| w.tonnage).sum())
        });

        weeks_consistent
            && self.total_lifts == self.weeks.iter().map(|w| w.total_lifts).sum::<u32>()
            && close(
                self.total_tonnage,
                self.weeks.iter().map(|w| w.tonnage).sum(),
            )
    }
}

fn avg_weight(tonnage: f64, lifts: u32) -> f64 {
    if lifts == 0 {
        return 0.0;
    }
    tonnage * 1000.0 / f64::from(lifts)
}

#[cfg(test)]
pub(crate) mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;

    use super::*;

    pub(crate) fn set(percent: f64, reps: u32, sets: u32, weight: f64) -> GeneratedSet {
        GeneratedSet {
            percent,
            reps,
            sets,
            weight,
        }
    }

    pub(crate) fn exercise(name: &str, weight: f64, reps: u32, sets: u32) -> GeneratedExercise {
        GeneratedExercise::new(
            name,
            Some(ExerciseKind::Competition),
            weight / 0.8,
            vec![set(80.0, reps, sets, weight)],
        )
    }

    pub(crate) fn workout(day: u32, exercises: Vec<GeneratedExercise>) -> GeneratedWorkout {
        GeneratedWorkout::new(day, format!("Тренировка {day}"), exercises)
    }

    pub(crate) fn program(weeks: Vec<Vec<GeneratedWorkout>>) -> GeneratedProgram {
        GeneratedProgram::new(
            "Программа",
            AthleteMaxes::default(),
            weeks
                .into_iter()
                .enumerate()
                .map(|(i, workouts)| {
                    GeneratedWeek::new(
                        u32::try_from(i + 1).unwrap(),
                        String::from("Фаза"),
                        workouts,
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn test_generated_exercise_totals() {
        let exercise = GeneratedExercise::new(
            "Присед",
            Some(ExerciseKind::Competition),
            150.0,
            vec![set(70.0, 3, 3, 105.0), set(80.0, 2, 2, 120.0)],
        );
        assert_eq!(exercise.total_lifts, 13);
        assert_approx_eq!(exercise.tonnage, 1.425, 1e-9);
        assert_approx_eq!(exercise.avg_weight(), 1425.0 / 13.0, 1e-9);
        assert_approx_eq!(exercise.avg_percent, 1425.0 / 13.0 / 150.0 * 100.0, 1e-9);
    }

    #[test]
    fn test_generated_exercise_without_load() {
        let exercise = GeneratedExercise::new(
            "Пресс",
            Some(ExerciseKind::Accessory),
            0.0,
            vec![set(0.0, 15, 1, 0.0), set(0.0, 15, 1, 0.0)],
        );
        assert_eq!(exercise.total_lifts, 30);
        assert_approx_eq!(exercise.tonnage, 0.0, 1e-9);
        assert_approx_eq!(exercise.avg_percent, 0.0, 1e-9);
        assert_approx_eq!(exercise.avg_weight(), 0.0, 1e-9);
    }

    #[test]
    fn test_generated_set_resolve_weight() {
        let mut s = set(70.0, 3, 3, 0.0);
        s.resolve_weight(150.0, Increment::DEFAULT);
        assert_approx_eq!(s.weight, 105.0, 1e-9);

        let mut unloaded = set(70.0, 3, 3, 20.0);
        unloaded.resolve_weight(0.0, Increment::DEFAULT);
        assert_approx_eq!(unloaded.weight, 20.0, 1e-9);
    }

    #[test]
    fn test_generated_program_totals() {
        let program = program(vec![
            vec![
                workout(1, vec![exercise("Присед", 100.0, 5, 5)]),
                workout(2, vec![exercise("Жим лёжа", 80.0, 3, 5)]),
            ],
            vec![workout(1, vec![exercise("Становая тяга", 140.0, 2, 4)])],
        ]);
        assert_eq!(program.total_lifts, 25 + 15 + 8);
        assert_approx_eq!(program.total_tonnage, 2.5 + 1.2 + 1.12, 1e-9);
        assert_eq!(program.weeks[0].total_lifts, 40);
        assert_eq!(
            program.lifts_by_exercise,
            BTreeMap::from([
                (String::from("Жим лёжа"), 15),
                (String::from("Присед"), 25),
                (String::from("Становая тяга"), 8),
            ])
        );
        assert!(program.totals_consistent());
        assert_eq!(program.workouts(), 3);
        assert_eq!(program.exercises(), 3);
    }

    #[test]
    fn test_generated_program_totals_inconsistent() {
        let mut program = program(vec![vec![workout(1, vec![exercise("Присед", 100.0, 5, 5)])]]);
        program.weeks[0].workouts[0].exercises[0].sets[0].reps = 3;
        assert!(!program.totals_consistent());
        program.recalculate();
        assert!(program.totals_consistent());
        assert_eq!(program.total_lifts, 15);
    }

    #[test]
    fn test_generated_program_drop_empty() {
        let mut program = program(vec![
            vec![
                workout(1, vec![exercise("Присед", 100.0, 5, 5)]),
                workout(2, vec![]),
            ],
            vec![workout(1, vec![])],
        ]);
        assert_eq!(program.drop_empty(), 2);
        assert_eq!(program.weeks.len(), 1);
        assert_eq!(program.weeks[0].workouts.len(), 1);
    }
}
