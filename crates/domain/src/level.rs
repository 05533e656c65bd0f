use crate::{AthleteLevel, AthleteMaxes, LiftType};

pub const RUSSIAN_CYCLE: &str = "Русский цикл";
pub const SHEIKO_CLASSIFIED: &str = "Шейко 12 недель (разрядники)";
pub const SHEIKO_COMPETITION: &str = "Шейко КМС/МС (4 недели к соревнованиям)";
pub const GOLOVINSKY_CYCLE_7: &str = "Головинский Цикл 7";
pub const MURAVYEV_CYCLE: &str = "Цикл Муравьёва (16 недель)";

/// Minimal bench press maxima of the levels, strongest first.
const BENCH_THRESHOLDS: [(f64, AthleteLevel); 6] = [
    (200.0, AthleteLevel::InternationalMaster),
    (170.0, AthleteLevel::Master),
    (145.0, AthleteLevel::CandidateMaster),
    (125.0, AthleteLevel::FirstClass),
    (105.0, AthleteLevel::SecondClass),
    (85.0, AthleteLevel::ThirdClass),
];

/// Estimate the level of an athlete from the bench press maximum.
#[must_use]
pub fn estimate_level(maxes: &AthleteMaxes) -> AthleteLevel {
    BENCH_THRESHOLDS
        .iter()
        .find(|(threshold, _)| maxes.bench >= *threshold)
        .map_or(AthleteLevel::Novice, |(_, level)| *level)
}

#[must_use]
pub fn recommend_template(level: AthleteLevel, lift_type: LiftType) -> &'static str {
    match level {
        AthleteLevel::Novice | AthleteLevel::ThirdClass => RUSSIAN_CYCLE,
        AthleteLevel::SecondClass | AthleteLevel::FirstClass => SHEIKO_CLASSIFIED,
        AthleteLevel::CandidateMaster => {
            if lift_type == LiftType::Deadlift {
                GOLOVINSKY_CYCLE_7
            } else {
                SHEIKO_COMPETITION
            }
        }
        AthleteLevel::Master | AthleteLevel::InternationalMaster => MURAVYEV_CYCLE,
    }
}
