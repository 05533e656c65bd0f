use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{LibraryError, ReadError};

pub trait TemplateRepository {
    fn read_templates(&self) -> Result<Vec<Template>, ReadError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub name: String,
    pub author: String,
    pub levels: Vec<AthleteLevel>,
    /// Declared program length in weeks, zero if unspecified.
    pub weeks: u32,
    pub days_per_week: u32,
    pub discipline: Discipline,
    pub structure: WeeklyStructure,
}

impl Template {
    #[must_use]
    pub fn is_for_level(&self, level: AthleteLevel) -> bool {
        self.levels.contains(&level)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WeeklyStructure {
    Phases(Vec<Phase>),
    Weeks(Vec<TemplateWeek>),
    Microcycles(Vec<Microcycle>),
    PerLift {
        table: PerLiftTable,
        layout: SessionLayout,
    },
}

impl WeeklyStructure {
    /// Build a per-lift structure, detecting its session layout once.
    #[must_use]
    pub fn per_lift(table: PerLiftTable) -> Self {
        let layout = SessionLayout::detect(&table);
        debug!("detected per-lift session layout: {layout:?}");
        Self::PerLift { table, layout }
    }

    #[must_use]
    pub fn kind(&self) -> WeeklyStructureKind {
        match self {
            WeeklyStructure::Phases(_) => WeeklyStructureKind::Phases,
            WeeklyStructure::Weeks(_) => WeeklyStructureKind::Weeks,
            WeeklyStructure::Microcycles(_) => WeeklyStructureKind::Microcycles,
            WeeklyStructure::PerLift { .. } => WeeklyStructureKind::PerLift,
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeeklyStructureKind {
    Phases,
    Weeks,
    Microcycles,
    PerLift,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    pub name: String,
    pub weeks: Vec<TemplateWeek>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateWeek {
    pub number: u32,
    pub sessions: Sessions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Microcycle {
    /// Zero if the microcycle is unnumbered.
    pub number: u32,
    pub sessions: Sessions,
}

/// The two encodings of the training sessions of a week.
#[derive(Debug, Clone, PartialEq)]
pub enum Sessions {
    Numbered(Vec<TemplateWorkout>),
    Dated(Vec<TemplateDay>),
}

impl Default for Sessions {
    fn default() -> Self {
        Sessions::Numbered(vec![])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateWorkout {
    pub number: u32,
    pub exercises: Vec<TemplateExercise>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateDay {
    pub date: String,
    pub exercises: Vec<TemplateExercise>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateExercise {
    pub name: String,
    pub kind: Option<ExerciseKind>,
    pub sets: Vec<TemplateSet>,
    /// Repetitions of unloaded sets, one entry per set.
    pub rep_only_sets: Vec<u32>,
    /// One-repetition maximum the absolute weights of the template were based on.
    pub template_max: Option<f64>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TemplateSet {
    pub percent: f64,
    pub reps: u32,
    pub sets: u32,
    pub weight: f64,
}

#[derive(
    Debug, Display, AsRefStr, EnumString, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    Competition,
    Accessory,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PerLiftTable {
    pub squat: Option<LiftTable>,
    pub bench: Option<LiftTable>,
    pub deadlift: Option<LiftTable>,
}

impl PerLiftTable {
    /// Whether no lift has a single week entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [&self.squat, &self.bench, &self.deadlift]
            .into_iter()
            .all(|lift| lift.as_ref().is_none_or(|table| table.entries.is_empty()))
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct LiftTable {
    pub entries: Vec<LiftWeek>,
}

impl LiftTable {
    /// The entry of the given session within a week.
    ///
    /// An entry explicitly marked with the session number takes precedence,
    /// otherwise the n-th entry of the week is used.
    #[must_use]
    pub fn session(&self, week: u32, session: u32) -> Option<&LiftWeek> {
        let mut entries = self.entries.iter().filter(|e| e.week == week);
        entries
            .clone()
            .find(|e| e.session == Some(session))
            .or_else(|| entries.nth(usize::try_from(session).ok()?.checked_sub(1)?))
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct LiftWeek {
    pub week: u32,
    pub session: Option<u32>,
    pub sets: Vec<TemplateSet>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionLayout {
    /// One session per lift and week: squat and bench together, deadlift separately.
    OnePerWeek,
    /// Two squat and bench sessions and one deadlift session per week.
    TwoPerWeek,
}

impl SessionLayout {
    #[must_use]
    pub fn detect(table: &PerLiftTable) -> Self {
        let first_week_bench_sessions = table
            .bench
            .as_ref()
            .map_or(0, |bench| bench.entries.iter().filter(|e| e.week == 1).count());
        if first_week_bench_sessions >= 2 {
            SessionLayout::TwoPerWeek
        } else {
            SessionLayout::OnePerWeek
        }
    }
}

#[derive(Debug, Display, AsRefStr, EnumString, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AthleteLevel {
    #[strum(serialize = "novice")]
    Novice,
    #[strum(serialize = "3_разряд")]
    ThirdClass,
    #[strum(serialize = "2_разряд")]
    SecondClass,
    #[strum(serialize = "1_разряд")]
    FirstClass,
    #[strum(serialize = "КМС")]
    CandidateMaster,
    #[strum(serialize = "МС")]
    Master,
    #[strum(serialize = "МСМК")]
    InternationalMaster,
}

#[derive(Debug, Default, Display, AsRefStr, EnumString, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discipline {
    #[default]
    #[strum(serialize = "троеборье")]
    Powerlifting,
    #[strum(serialize = "присед")]
    Squat,
    #[strum(serialize = "жим")]
    Bench,
    #[strum(serialize = "тяга")]
    Deadlift,
    #[strum(serialize = "ягодичный_мост")]
    HipThrust,
}

impl Discipline {
    /// Whether a template of this discipline suits an athlete specializing in the lift type.
    #[must_use]
    pub fn suits(self, lift_type: LiftType) -> bool {
        matches!(
            (self, lift_type),
            (Discipline::Powerlifting, _)
                | (Discipline::Squat, LiftType::Squat)
                | (Discipline::Bench, LiftType::Bench)
                | (Discipline::Deadlift, LiftType::Deadlift)
                | (Discipline::HipThrust, LiftType::HipThrust)
        )
    }
}

#[derive(Debug, Default, Display, AsRefStr, EnumString, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum LiftType {
    #[default]
    #[strum(to_string = "powerlifting", serialize = "full")]
    Full,
    Squat,
    Bench,
    Deadlift,
    HipThrust,
}

/// Read-only collection of templates, ordered by name.
#[derive(Debug, Clone, Default)]
pub struct TemplateLibrary {
    templates: BTreeMap<String, Template>,
}

impl TemplateLibrary {
    pub fn new(templates: impl IntoIterator<Item = Template>) -> Result<Self, LibraryError> {
        let mut library = BTreeMap::new();
        for template in templates {
            if library.contains_key(&template.name) {
                return Err(LibraryError::Duplicate(template.name));
            }
            library.insert(template.name.clone(), template);
        }
        debug!("loaded {} templates", library.len());
        Ok(Self { templates: library })
    }

    pub fn load<R: TemplateRepository>(repository: &R) -> Result<Self, LibraryError> {
        Self::new(repository.read_templates()?)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.templates.keys().cloned().collect()
    }

    pub fn templates(&self) -> impl Iterator<Item = &Template> {
        self.templates.values()
    }

    #[must_use]
    pub fn for_level(&self, level: AthleteLevel) -> Vec<&Template> {
        self.templates().filter(|t| t.is_for_level(level)).collect()
    }

    #[must_use]
    pub fn for_lift_type(&self, lift_type: LiftType) -> Vec<&Template> {
        self.templates()
            .filter(|t| t.discipline.suits(lift_type))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
