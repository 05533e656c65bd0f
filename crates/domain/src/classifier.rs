use strum::{AsRefStr, Display};

use crate::NormalizedName;

#[derive(Debug, Display, AsRefStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum LiftCategory {
    Squat,
    Bench,
    Deadlift,
    HipThrust,
    None,
}

#[derive(Debug, Display, AsRefStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum MuscleGroup {
    Lower,
    Back,
    Upper,
    Core,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: LiftCategory,
    pub group: MuscleGroup,
}

/// A substring rule over a normalized exercise name.
///
/// A rule matches if the name contains every pattern of `all`, at least one
/// pattern of `any` (unless `any` is empty) and none of the patterns of
/// `none`.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub all: &'static [&'static str],
    pub any: &'static [&'static str],
    pub none: &'static [&'static str],
}

impl Rule {
    pub const fn any(patterns: &'static [&'static str]) -> Self {
        Self {
            all: &[],
            any: patterns,
            none: &[],
        }
    }

    pub const fn all(patterns: &'static [&'static str]) -> Self {
        Self {
            all: patterns,
            any: &[],
            none: &[],
        }
    }

    #[must_use]
    pub const fn and_any(self, patterns: &'static [&'static str]) -> Self {
        Self {
            any: patterns,
            ..self
        }
    }

    #[must_use]
    pub const fn except(self, patterns: &'static [&'static str]) -> Self {
        Self {
            none: patterns,
            ..self
        }
    }

    #[must_use]
    pub fn matches(&self, name: &NormalizedName) -> bool {
        name.contains_all(self.all)
            && (self.any.is_empty() || name.contains_any(self.any))
            && !name.contains_any(self.none)
    }
}

/// Find the result of the first matching rule.
pub fn first_match<T: Copy>(rules: &[(Rule, T)], name: &NormalizedName) -> Option<T> {
    rules
        .iter()
        .find(|(rule, _)| rule.matches(name))
        .map(|(_, result)| *result)
}

pub(crate) const HIP_THRUST: Rule = Rule::any(&["ягодич", "мост", "hip", "thrust"]);

// Rule order is significant: "жим" and "тяга" occur in many unrelated
// exercises, so the narrower rules must come first.
const LIFT_CATEGORY_RULES: [(Rule, LiftCategory); 7] = [
    (HIP_THRUST, LiftCategory::HipThrust),
    (
        Rule::any(&["присед"]).except(&["груди", "фронт"]),
        LiftCategory::Squat,
    ),
    (Rule::any(&["присед"]), LiftCategory::None),
    (Rule::any(&["становая"]), LiftCategory::Deadlift),
    (
        Rule::all(&["тяга"]).and_any(&["блок", "наклон", "штанг", "гантел", "пояс", "горизонт"]),
        LiftCategory::None,
    ),
    (Rule::any(&["тяга"]), LiftCategory::Deadlift),
    (Rule::all(&["жим", "лежа"]), LiftCategory::Bench),
];

const MUSCLE_GROUP_RULES: [(Rule, MuscleGroup); 4] = [
    (
        Rule::any(&["присед", "ног", "выпад", "разгиб", "сгиб", "икр", "ягодиц"]),
        MuscleGroup::Lower,
    ),
    (
        Rule::any(&["тяга", "становая", "спин", "широч", "гипер", "подтяг"]),
        MuscleGroup::Back,
    ),
    (
        Rule::any(&[
            "жим", "трицепс", "бицепс", "франц", "груд", "плеч", "дельт", "развод", "пуловер",
        ]),
        MuscleGroup::Upper,
    ),
    (Rule::any(&["пресс", "планк", "скруч"]), MuscleGroup::Core),
];

#[must_use]
pub fn lift_category(name: &str) -> LiftCategory {
    first_match(&LIFT_CATEGORY_RULES, &NormalizedName::new(name)).unwrap_or(LiftCategory::None)
}

#[must_use]
pub fn muscle_group(name: &str) -> MuscleGroup {
    first_match(&MUSCLE_GROUP_RULES, &NormalizedName::new(name)).unwrap_or(MuscleGroup::Other)
}

#[must_use]
pub fn classify(name: &str) -> Classification {
    Classification {
        category: lift_category(name),
        group: muscle_group(name),
    }
}
