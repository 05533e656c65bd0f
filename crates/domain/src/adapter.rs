use std::ops::RangeInclusive;

use log::{debug, warn};

use crate::{GeneratedExercise, GeneratedProgram, GeneratedWorkout};

pub const DAYS_PER_WEEK: RangeInclusive<u32> = 2..=6;

/// Merge or split the workouts of every week to match the number of training
/// days.
///
/// Day counts outside of [`DAYS_PER_WEEK`] leave the program unchanged.
pub fn adapt_to_days(program: &mut GeneratedProgram, days: u32) {
    if !DAYS_PER_WEEK.contains(&days) {
        if days != 0 {
            warn!("ignoring unsupported number of training days: {days}");
        }
        return;
    }
    let Ok(target) = usize::try_from(days) else {
        return;
    };

    for week in &mut program.weeks {
        let current = week.workouts.len();
        if current == target {
            continue;
        }
        debug!(
            "adapting week {} from {current} to {target} workouts",
            week.number
        );
        let workouts = std::mem::take(&mut week.workouts);
        week.workouts = if current > target {
            merge(workouts, target)
        } else {
            split(workouts, target)
        };
    }

    program.drop_empty();
    program.recalculate();
}

/// Combine consecutive workouts into at most `target` workouts.
fn merge(workouts: Vec<GeneratedWorkout>, target: usize) -> Vec<GeneratedWorkout> {
    let batch = workouts.len().div_ceil(target);
    renumber(
        workouts
            .chunks(batch)
            .map(|chunk| {
                chunk
                    .iter()
                    .flat_map(|w| w.exercises.iter().cloned())
                    .collect()
            })
            .collect(),
    )
}

/// Distribute the exercises of the workouts evenly over at most `target` workouts.
fn split(workouts: Vec<GeneratedWorkout>, target: usize) -> Vec<GeneratedWorkout> {
    let exercises = workouts
        .iter()
        .flat_map(|w| w.exercises.iter().cloned())
        .collect::<Vec<_>>();
    if exercises.is_empty() {
        return workouts;
    }
    let batch = exercises.len().div_ceil(target);
    renumber(exercises.chunks(batch).map(<[_]>::to_vec).collect())
}

fn renumber(days: Vec<Vec<GeneratedExercise>>) -> Vec<GeneratedWorkout> {
    days.into_iter()
        .filter(|exercises| !exercises.is_empty())
        .zip(1..)
        .map(|(exercises, day)| GeneratedWorkout::new(day, format!("Тренировка {day}"), exercises))
        .collect()
}
