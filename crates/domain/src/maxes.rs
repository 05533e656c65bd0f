use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

use crate::{NormalizedName, Rule, classifier::HIP_THRUST, first_match};

/// Known one-repetition maxima of an athlete in kilograms.
///
/// A value of zero (or below) means that the maximum is unknown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AthleteMaxes {
    pub squat: f64,
    pub bench: f64,
    pub deadlift: f64,
    pub hip_thrust: f64,
}

impl AthleteMaxes {
    #[must_use]
    pub fn get(&self, lift: Lift) -> Option<f64> {
        let value = match lift {
            Lift::Squat => self.squat,
            Lift::Bench => self.bench,
            Lift::Deadlift => self.deadlift,
            Lift::HipThrust => self.hip_thrust,
        };
        (value > 0.0).then_some(value)
    }
}

#[derive(Debug, Display, AsRefStr, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum Lift {
    Squat,
    Bench,
    Deadlift,
    HipThrust,
}

/// Ratios relative to the known maxima, tried in order until one of the
/// referenced maxima is known.
type Ratios = &'static [(Lift, f64)];

const HIP_THRUST_VARIANTS: [(Rule, f64); 5] = [
    (Rule::any(&["пауз"]), 0.85),
    (Rule::any(&["возвыш", "дефицит"]), 0.80),
    (Rule::any(&["резин"]), 0.70),
    (Rule::any(&["одной", "single"]), 0.50),
    (Rule::any(&["пола", "glute bridge"]), 0.60),
];

const HIP_THRUST_FROM_SQUAT: f64 = 1.3;

const COMPETITION_LIFTS: [(Rule, Ratios); 3] = [
    (
        Rule::any(&["присед"]).except(&["груди", "фронт"]),
        &[(Lift::Squat, 1.0), (Lift::Deadlift, 0.70)],
    ),
    (
        Rule::all(&["жим", "лежа"]).except(&[
            "узк", "средн", "брус", "дожим", "гантел", "наклон", "стоя", "сидя",
        ]),
        &[(Lift::Bench, 1.0)],
    ),
    (
        Rule::any(&["становая", "тяга"]).except(&[
            "блок", "прямых", "румын", "плинт", "колен", "наклон", "пояс", "гантел", "горизонт",
            "широч",
        ]),
        &[(Lift::Deadlift, 1.0)],
    ),
];

const ACCESSORIES: [(Rule, Ratios); 22] = [
    // Squat variants (front squat, paused box squat, ...)
    (
        Rule::any(&["присед"]),
        &[(Lift::Squat, 0.80), (Lift::Deadlift, 0.55)],
    ),
    // Press variants
    (
        Rule::all(&["жим"]).and_any(&["узк", "средн"]),
        &[(Lift::Bench, 0.85)],
    ),
    (
        Rule::all(&["жим"]).and_any(&["брус", "дожим"]),
        &[(Lift::Bench, 1.05)],
    ),
    (Rule::all(&["жим"]).and_any(&["гантел"]), &[(Lift::Bench, 0.45)]),
    (Rule::all(&["жим"]).and_any(&["наклон"]), &[(Lift::Bench, 0.75)]),
    (
        Rule::all(&["жим"]).and_any(&["стоя", "сидя"]),
        &[(Lift::Bench, 0.65)],
    ),
    (Rule::any(&["жим"]), &[(Lift::Bench, 0.70)]),
    // Arms
    (Rule::any(&["франц", "трицепс"]), &[(Lift::Bench, 0.40)]),
    (Rule::any(&["бицепс"]), &[(Lift::Bench, 0.30)]),
    // Rows and pulldowns
    (
        Rule::any(&["блок", "широч"]),
        &[(Lift::Deadlift, 0.40), (Lift::Bench, 0.50)],
    ),
    (
        Rule::all(&["тяга"]).and_any(&["наклон", "пояс", "горизонт", "гантел"]),
        &[(Lift::Deadlift, 0.40), (Lift::Bench, 0.50)],
    ),
    // Pull variants
    (
        Rule::any(&["тяга", "становая"]).and_any(&["плинт"]),
        &[(Lift::Deadlift, 1.10)],
    ),
    (
        Rule::any(&["тяга", "становая"]).and_any(&["колен"]),
        &[(Lift::Deadlift, 0.90)],
    ),
    (Rule::any(&["тяга", "становая"]), &[(Lift::Deadlift, 0.70)]),
    // Posterior chain
    (
        Rule::any(&["наклон"]),
        &[(Lift::Deadlift, 0.40), (Lift::Squat, 0.40)],
    ),
    (Rule::any(&["гипер"]), &[(Lift::Deadlift, 0.30)]),
    (Rule::any(&["подтяг"]), &[(Lift::Bench, 0.35)]),
    // Leg isolation
    (Rule::all(&["разгиб", "ног"]), &[(Lift::Squat, 0.30)]),
    (
        Rule::all(&["сгиб", "ног"]),
        &[(Lift::Squat, 0.25), (Lift::Deadlift, 0.20)],
    ),
    // Chest isolation
    (Rule::any(&["развод", "разведен"]), &[(Lift::Bench, 0.25)]),
    (Rule::any(&["брус"]), &[(Lift::Bench, 0.35)]),
    (Rule::any(&["пуловер"]), &[(Lift::Bench, 0.40)]),
];

/// Estimate the one-repetition maximum of the named exercise from the known
/// maxima of the competition lifts.
///
/// Returns zero if the exercise is unknown or no related maximum is known.
/// Callers treat zero as an unloaded exercise.
#[must_use]
pub fn derive_max(exercise: &str, maxes: &AthleteMaxes) -> f64 {
    let name = NormalizedName::new(exercise);

    if HIP_THRUST.matches(&name) {
        return hip_thrust_max(&name, maxes);
    }

    first_match(&COMPETITION_LIFTS, &name)
        .or_else(|| first_match(&ACCESSORIES, &name))
        .map_or(0.0, |ratios| apply(ratios, maxes))
}

fn hip_thrust_max(name: &NormalizedName, maxes: &AthleteMaxes) -> f64 {
    if let Some(hip_thrust) = maxes.get(Lift::HipThrust) {
        return hip_thrust * first_match(&HIP_THRUST_VARIANTS, name).unwrap_or(1.0);
    }
    maxes
        .get(Lift::Squat)
        .map_or(0.0, |squat| squat * HIP_THRUST_FROM_SQUAT)
}

fn apply(ratios: Ratios, maxes: &AthleteMaxes) -> f64 {
    ratios
        .iter()
        .find_map(|(lift, ratio)| maxes.get(*lift).map(|max| max * ratio))
        .unwrap_or(0.0)
}
