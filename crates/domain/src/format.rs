use std::fmt::{self, Display};

use crate::{GeneratedProgram, GeneratedSet, GeneratedWeek};

const RULE: &str = "─────────────────────────────────";

impl Display for GeneratedProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ПРОГРАММА: {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "1ПМ атлета:")?;
        writeln!(f, "• Присед: {:.1} кг", self.athlete_maxes.squat)?;
        writeln!(f, "• Жим лёжа: {:.1} кг", self.athlete_maxes.bench)?;
        writeln!(f, "• Тяга: {:.1} кг", self.athlete_maxes.deadlift)?;
        if self.athlete_maxes.hip_thrust > 0.0 {
            writeln!(f, "• Ягодичный мост: {:.1} кг", self.athlete_maxes.hip_thrust)?;
        }
        writeln!(f)?;

        for week in &self.weeks {
            writeln!(f, "┌{RULE}")?;
            writeln!(f, "│ НЕДЕЛЯ {} ({})", week.number, week.phase)?;
            writeln!(
                f,
                "│ КПШ: {} | Тоннаж: {:.1} т | Ср. вес: {:.1} кг",
                week.total_lifts,
                week.tonnage,
                week.avg_weight()
            )?;
            writeln!(f, "└{RULE}")?;
            writeln!(f)?;

            for workout in &week.workouts {
                writeln!(f, "━━━ {} ━━━", workout.name)?;
                writeln!(f)?;
                for (i, exercise) in workout.exercises.iter().enumerate() {
                    if exercise.tonnage > 0.0 {
                        writeln!(
                            f,
                            "{}. {} (ср. {:.0} кг)",
                            i + 1,
                            exercise.name,
                            exercise.avg_weight()
                        )?;
                    } else {
                        writeln!(f, "{}. {}", i + 1, exercise.name)?;
                    }
                    for set in &exercise.sets {
                        writeln!(f, "   {}", DetailedSet(set))?;
                    }
                }
                writeln!(f)?;
            }
        }

        writeln!(f, "══════════════════════════════════")?;
        writeln!(
            f,
            "ИТОГО: КПШ {} | Тоннаж {:.1} т | Ср. вес {:.1} кг",
            self.total_lifts,
            self.total_tonnage,
            self.avg_weight()
        )
    }
}

struct DetailedSet<'a>(&'a GeneratedSet);

impl Display for DetailedSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set = self.0;
        if set.weight > 0.0 {
            write!(
                f,
                "{:.0} кг × {} повт × {} подх ({:.0}%)",
                set.weight, set.reps, set.sets, set.percent
            )
        } else {
            write!(f, "{} повт × {} подх", set.reps, set.sets)
        }
    }
}

/// One line per exercise with the loaded sets as weight×reps×sets.
#[must_use]
pub fn compact_week(week: &GeneratedWeek) -> String {
    let mut lines = vec![format!(
        "Неделя {} | КПШ: {} | Тоннаж: {:.1} т | Ср. вес: {:.1} кг",
        week.number,
        week.total_lifts,
        week.tonnage,
        week.avg_weight()
    )];
    for workout in &week.workouts {
        lines.push(format!(
            "  {} (ср. {:.1} кг):",
            workout.name,
            workout.avg_weight()
        ));
        for exercise in &workout.exercises {
            let sets = exercise
                .sets
                .iter()
                .filter(|s| s.weight > 0.0)
                .map(|s| format!("{:.0}×{}×{}", s.weight, s.reps, s.sets))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("    {}: {sets}", exercise.name));
        }
    }
    lines
        .into_iter()
        .map(|line| line + "\n")
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        AthleteMaxes, ExerciseKind, GeneratedExercise, GeneratedWorkout,
        program::tests::{exercise, set},
    };

    fn program() -> GeneratedProgram {
        GeneratedProgram::new(
            "Русский цикл",
            AthleteMaxes {
                squat: 150.0,
                bench: 100.0,
                deadlift: 180.0,
                hip_thrust: 0.0,
            },
            vec![GeneratedWeek::new(
                1,
                String::from("Накопление объёма"),
                vec![GeneratedWorkout::new(
                    1,
                    String::from("Тренировка 1"),
                    vec![
                        GeneratedExercise::new(
                            "Присед",
                            Some(ExerciseKind::Competition),
                            150.0,
                            vec![set(70.0, 3, 3, 105.0)],
                        ),
                        GeneratedExercise::new("Пресс", None, 0.0, vec![set(0.0, 15, 2, 0.0)]),
                    ],
                )],
            )],
        )
    }

    #[test]
    fn test_display_program() {
        assert_eq!(
            program().to_string(),
            "ПРОГРАММА: Русский цикл\n\
             \n\
             1ПМ атлета:\n\
             • Присед: 150.0 кг\n\
             • Жим лёжа: 100.0 кг\n\
             • Тяга: 180.0 кг\n\
             \n\
             ┌─────────────────────────────────\n\
             │ НЕДЕЛЯ 1 (Накопление объёма)\n\
             │ КПШ: 39 | Тоннаж: 0.9 т | Ср. вес: 24.2 кг\n\
             └─────────────────────────────────\n\
             \n\
             ━━━ Тренировка 1 ━━━\n\
             \n\
             1. Присед (ср. 105 кг)\n   \
             105 кг × 3 повт × 3 подх (70%)\n\
             2. Пресс\n   \
             15 повт × 2 подх\n\
             \n\
             ══════════════════════════════════\n\
             ИТОГО: КПШ 39 | Тоннаж 0.9 т | Ср. вес 24.2 кг\n"
        );
    }

    #[test]
    fn test_compact_week() {
        let mut week = program().weeks[0].clone();
        week.workouts[0]
            .exercises
            .push(exercise("Жим лёжа", 80.0, 5, 5));
        assert_eq!(
            compact_week(&week),
            "Неделя 1 | КПШ: 39 | Тоннаж: 0.9 т | Ср. вес: 24.2 кг\n  \
             Тренировка 1 (ср. 24.2 кг):\n    \
             Присед: 105×3×3\n    \
             Пресс: \n    \
             Жим лёжа: 80×5×5\n"
        );
    }
}
