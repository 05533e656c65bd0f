use log::debug;

use crate::{
    Classification, ExerciseKind, GeneratedExercise, GeneratedProgram, LiftCategory, LiftType,
    MuscleGroup, classify,
};

/// Whether an exercise belongs into a program specialized on the lift type.
///
/// Squat work is kept as assistance for deadlift specialists.
#[must_use]
pub fn is_exercise_for_lift_type(name: &str, lift_type: LiftType) -> bool {
    let Classification { category, group } = classify(name);
    match lift_type {
        LiftType::Bench => {
            !matches!(
                category,
                LiftCategory::Squat | LiftCategory::Deadlift | LiftCategory::HipThrust
            ) && group != MuscleGroup::Lower
        }
        LiftType::Squat => {
            !matches!(category, LiftCategory::Bench | LiftCategory::Deadlift)
                && group != MuscleGroup::Upper
        }
        LiftType::Deadlift => category != LiftCategory::Bench && group != MuscleGroup::Upper,
        LiftType::HipThrust | LiftType::Full => true,
    }
}

/// Keep only the exercises relevant to the lift type and annotate the
/// program name with the specialization.
pub fn filter_by_lift_type(program: &mut GeneratedProgram, lift_type: LiftType) {
    let suffix = match lift_type {
        LiftType::Full => return,
        LiftType::Bench => " (только жим)",
        LiftType::Squat => " (только присед)",
        LiftType::Deadlift => " (только тяга)",
        LiftType::HipThrust => " (ягодичный мост)",
    };

    retain_exercises(program, |exercise| {
        is_exercise_for_lift_type(&exercise.name, lift_type)
    });
    program.name.push_str(suffix);
}

/// Remove all exercises marked as accessory work.
pub fn exclude_accessories(program: &mut GeneratedProgram) {
    retain_exercises(program, |exercise| {
        exercise.kind != Some(ExerciseKind::Accessory)
    });
}

fn retain_exercises(program: &mut GeneratedProgram, keep: impl Fn(&GeneratedExercise) -> bool) {
    let mut removed = 0;
    for workout in program.weeks.iter_mut().flat_map(|w| &mut w.workouts) {
        let before = workout.exercises.len();
        workout.exercises.retain(&keep);
        removed += before - workout.exercises.len();
    }
    let dropped = program.drop_empty();
    program.recalculate();
    debug!("removed {removed} exercises and {dropped} empty workouts");
}
