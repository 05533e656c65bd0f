use log::debug;
use powerplan_domain as domain;

use crate::record::TemplateRecord;

const RECORDS: [(&str, &str); 8] = [
    (
        "sheiko_classified.json",
        include_str!("../templates/sheiko_classified.json"),
    ),
    (
        "sheiko_competition.json",
        include_str!("../templates/sheiko_competition.json"),
    ),
    (
        "verkhoshansky_bench.json",
        include_str!("../templates/verkhoshansky_bench.json"),
    ),
    (
        "golovinsky_7.json",
        include_str!("../templates/golovinsky_7.json"),
    ),
    (
        "golovinsky_3.json",
        include_str!("../templates/golovinsky_3.json"),
    ),
    (
        "russian_cycle.json",
        include_str!("../templates/russian_cycle.json"),
    ),
    (
        "muravyev_cycle.json",
        include_str!("../templates/muravyev_cycle.json"),
    ),
    ("hip_thrust.json", include_str!("../templates/hip_thrust.json")),
];

/// Methodologies compiled into the crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledTemplates;

impl domain::TemplateRepository for BundledTemplates {
    fn read_templates(&self) -> Result<Vec<domain::Template>, domain::ReadError> {
        RECORDS
            .iter()
            .map(|(file, json)| {
                debug!("reading bundled template {file}");
                domain::Template::try_from(serde_json::from_str::<TemplateRecord>(json)?)
            })
            .collect()
    }
}

pub fn library() -> Result<domain::TemplateLibrary, domain::LibraryError> {
    domain::TemplateLibrary::load(&BundledTemplates)
}

pub fn generator() -> Result<domain::ProgramGenerator, domain::LibraryError> {
    domain::ProgramGenerator::load(&BundledTemplates)
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::tests::data::{BUNDLED_NAMES, MAXES, MAXES_WITH_HIP_THRUST, all_options};

    fn week_sizes(program: &domain::GeneratedProgram) -> Vec<usize> {
        program.weeks.iter().map(|w| w.workouts.len()).collect()
    }

    #[test]
    fn test_library() {
        let library = library().unwrap();
        assert_eq!(library.names(), BUNDLED_NAMES);
    }

    #[rstest]
    #[case("Шейко 12 недель (разрядники)", domain::WeeklyStructureKind::Phases)]
    #[case("Шейко КМС/МС (4 недели к соревнованиям)", domain::WeeklyStructureKind::Weeks)]
    #[case("Верхошанский 6 недель (жим лёжа)", domain::WeeklyStructureKind::Weeks)]
    #[case("Головинский Цикл 7", domain::WeeklyStructureKind::Microcycles)]
    #[case("Головинский Цикл 3", domain::WeeklyStructureKind::Microcycles)]
    #[case("Русский цикл", domain::WeeklyStructureKind::PerLift)]
    #[case("Цикл Муравьёва (16 недель)", domain::WeeklyStructureKind::PerLift)]
    #[case("Ягодичный мост 8 недель", domain::WeeklyStructureKind::Weeks)]
    fn test_structure_kind(#[case] name: &str, #[case] expected: domain::WeeklyStructureKind) {
        let library = library().unwrap();
        assert_eq!(library.get(name).unwrap().structure.kind(), expected);
    }

    #[test]
    fn test_recommended_templates_are_bundled() {
        let library = library().unwrap();
        for level in [
            domain::AthleteLevel::Novice,
            domain::AthleteLevel::ThirdClass,
            domain::AthleteLevel::SecondClass,
            domain::AthleteLevel::FirstClass,
            domain::AthleteLevel::CandidateMaster,
            domain::AthleteLevel::Master,
            domain::AthleteLevel::InternationalMaster,
        ] {
            for lift_type in [
                domain::LiftType::Full,
                domain::LiftType::Squat,
                domain::LiftType::Bench,
                domain::LiftType::Deadlift,
            ] {
                let name = domain::recommend_template(level, lift_type);
                assert!(library.get(name).is_some(), "{name}");
            }
        }
    }

    #[test]
    fn test_russian_cycle_first_squat_set() {
        let program = generator()
            .unwrap()
            .generate("Русский цикл", &MAXES)
            .unwrap();
        let week = &program.weeks[0];
        assert_eq!(week.number, 1);
        assert_eq!(week.workouts[0].name, "Тренировка 1 (Присед + Жим)");

        let squat = &week.workouts[0].exercises[0];
        assert_eq!(squat.name, "Присед");
        assert_eq!(
            squat.sets[0],
            domain::GeneratedSet {
                percent: 70.0,
                reps: 3,
                sets: 3,
                weight: 105.0,
            }
        );
        assert_eq!(squat.total_lifts, 9);
        assert_approx_eq!(squat.tonnage, 0.945);
    }

    #[test]
    fn test_session_layouts() {
        let generator = generator().unwrap();
        let classic = generator.generate("Русский цикл", &MAXES).unwrap();
        let muravyev = generator
            .generate("Цикл Муравьёва (16 недель)", &MAXES)
            .unwrap();

        assert_eq!(week_sizes(&classic), vec![2; 12]);
        assert_eq!(week_sizes(&muravyev), vec![3; 16]);
        assert_eq!(
            muravyev.weeks[0]
                .workouts
                .iter()
                .map(|w| w.name.as_str())
                .collect::<Vec<_>>(),
            vec!["Тренировка I (Пн)", "Тренировка II (Ср)", "Тренировка III (Пт)"]
        );
    }

    #[test]
    fn test_dated_days_rescaled() {
        let program = generator()
            .unwrap()
            .generate("Шейко КМС/МС (4 недели к соревнованиям)", &MAXES)
            .unwrap();
        assert_eq!(week_sizes(&program), vec![4; 4]);
        assert_eq!(program.weeks[0].phase, "Соревновательная подготовка");

        let squat = &program.weeks[0].workouts[0].exercises[0];
        let top = squat.sets.last().unwrap();
        assert_approx_eq!(top.weight, 135.0);
        assert_approx_eq!(top.percent, 90.0);
    }

    #[test]
    fn test_microcycles_with_template_maximum() {
        let program = generator()
            .unwrap()
            .generate("Головинский Цикл 7", &MAXES)
            .unwrap();
        let week = &program.weeks[0];
        assert_eq!(week.phase, "Микроцикл 1");
        assert_eq!(week.workouts[0].name, "День 1");

        let deadlift = &week.workouts[0].exercises[0];
        assert_eq!(
            deadlift.sets.iter().map(|s| s.weight).collect::<Vec<_>>(),
            vec![107.5, 127.5]
        );
    }

    #[test]
    fn test_microcycles_with_fractional_percentages() {
        let program = generator()
            .unwrap()
            .generate("Головинский Цикл 3", &MAXES)
            .unwrap();
        let workout = &program.weeks[0].workouts[0];
        assert_eq!(workout.name, "День 1 (01.09)");
        assert_eq!(
            workout.exercises[0].sets[0],
            domain::GeneratedSet {
                percent: 60.0,
                reps: 5,
                sets: 3,
                weight: 107.5,
            }
        );
    }

    #[test]
    fn test_hip_thrust() {
        let generator = generator().unwrap();
        let options = domain::GenerationOptions {
            lift_type: domain::LiftType::HipThrust,
            ..domain::GenerationOptions::default()
        };
        let program = generator
            .generate_with_options("Ягодичный мост 8 недель", &MAXES_WITH_HIP_THRUST, &options)
            .unwrap();
        assert_eq!(program.name, "Ягодичный мост 8 недель (ягодичный мост)");
        assert_eq!(program.weeks.len(), 8);
        assert_approx_eq!(program.weeks[0].workouts[0].exercises[0].sets[0].weight, 96.0);

        let derived = generator
            .generate("Ягодичный мост 8 недель", &MAXES)
            .unwrap();
        assert_approx_eq!(derived.weeks[0].workouts[0].exercises[0].one_rm, 195.0);
    }

    #[test]
    fn test_filter_deadlift() {
        let generator = generator().unwrap();
        let full = generator
            .generate("Шейко 12 недель (разрядники)", &MAXES)
            .unwrap();
        let filtered = generator
            .generate_with_options(
                "Шейко 12 недель (разрядники)",
                &MAXES,
                &domain::GenerationOptions {
                    lift_type: domain::LiftType::Deadlift,
                    ..domain::GenerationOptions::default()
                },
            )
            .unwrap();

        let count = |program: &domain::GeneratedProgram, category: domain::LiftCategory| {
            program
                .weeks
                .iter()
                .flat_map(|w| &w.workouts)
                .flat_map(|w| &w.exercises)
                .filter(|e| domain::lift_category(&e.name) == category)
                .count()
        };
        assert_eq!(count(&filtered, domain::LiftCategory::Bench), 0);
        assert!(count(&full, domain::LiftCategory::Bench) > 0);
        assert_eq!(
            count(&filtered, domain::LiftCategory::Deadlift),
            count(&full, domain::LiftCategory::Deadlift)
        );
        assert_eq!(
            count(&filtered, domain::LiftCategory::Squat),
            count(&full, domain::LiftCategory::Squat)
        );
        assert!(
            filtered
                .weeks
                .iter()
                .all(|w| !w.workouts.is_empty() && w.workouts.iter().all(|w| !w.exercises.is_empty()))
        );
        assert!(filtered.totals_consistent());
    }

    #[test]
    fn test_merge_and_split_preserve_totals() {
        let generator = generator().unwrap();
        let original = generator
            .generate("Шейко КМС/МС (4 недели к соревнованиям)", &MAXES)
            .unwrap();
        let mut program = original.clone();

        domain::adapt_to_days(&mut program, 2);
        assert_eq!(week_sizes(&program), vec![2; 4]);
        domain::adapt_to_days(&mut program, 4);
        assert_eq!(week_sizes(&program), vec![4; 4]);

        assert_eq!(program.exercises(), original.exercises());
        assert_eq!(program.total_lifts, original.total_lifts);
        assert_approx_eq!(program.total_tonnage, original.total_tonnage);
        assert!(program.totals_consistent());
    }

    #[test]
    fn test_generation_is_deterministic() {
        let generator = generator().unwrap();
        for name in BUNDLED_NAMES {
            for options in all_options() {
                assert_eq!(
                    generator.generate_with_options(name, &MAXES, &options),
                    generator.generate_with_options(name, &MAXES, &options)
                );
            }
        }
    }

    #[test]
    fn test_totals_consistent() {
        let generator = generator().unwrap();
        for name in BUNDLED_NAMES {
            for options in all_options() {
                let program = generator
                    .generate_with_options(name, &MAXES, &options)
                    .unwrap();
                assert!(program.totals_consistent(), "{name} {options:?}");
                assert!(
                    program.weeks.iter().all(|w| !w.workouts.is_empty()),
                    "{name} {options:?}"
                );
            }
        }
    }

    #[test]
    fn test_validate_bundled_programs() {
        let generator = generator().unwrap();
        for name in BUNDLED_NAMES {
            let report = domain::validate(&generator.generate(name, &MAXES).unwrap());
            assert!(report.is_valid(), "{name}: {:?}", report.findings);
        }
    }
}
