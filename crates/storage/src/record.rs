use log::debug;
use powerplan_domain as domain;

use crate::StorageError;

/// Methodology record as stored in the JSON template files.
///
/// Exactly one of `phases`, `weeks_data`, `microcycles` and `exercises` must
/// be populated.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TemplateRecord {
    pub name: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub level: Vec<String>,
    #[serde(default)]
    pub weeks: u32,
    #[serde(default)]
    pub days_per_week: u32,
    #[serde(default, rename = "type")]
    pub discipline: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phases: Vec<PhaseRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weeks_data: Vec<WeekRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub microcycles: Vec<MicrocycleRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercises: Option<PerLiftRecord>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PhaseRecord {
    pub name: String,
    #[serde(default)]
    pub weeks: Vec<WeekRecord>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq)]
pub struct WeekRecord {
    #[serde(default)]
    pub week_num: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workouts: Vec<WorkoutRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub days: Vec<DayRecord>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq)]
pub struct WorkoutRecord {
    #[serde(default)]
    pub workout_num: u32,
    #[serde(default)]
    pub exercises: Vec<ExerciseRecord>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DayRecord {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub exercises: Vec<ExerciseRecord>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MicrocycleRecord {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub micro_num: u32,
    /// Number field of older records.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub microcycle_num: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workouts: Vec<MicrocycleWorkoutRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub days: Vec<DayRecord>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MicrocycleWorkoutRecord {
    #[serde(default)]
    pub day: u32,
    #[serde(default)]
    pub exercises: Vec<ExerciseRecord>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ExerciseRecord {
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub sets: Vec<SetRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sets_reps: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<ExerciseStatsRecord>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ExerciseStatsRecord {
    /// Maximum the absolute weights of the exercise were planned for.
    #[serde(default)]
    pub pm: f64,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct SetRecord {
    #[serde(default)]
    pub percent: f64,
    #[serde(default)]
    pub reps: u32,
    #[serde(default)]
    pub sets: u32,
    #[serde(default)]
    pub weight: f64,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PerLiftRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub squat: Option<LiftRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bench: Option<LiftRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadlift: Option<LiftRecord>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq)]
pub struct LiftRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub weeks: Vec<LiftWeekRecord>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq)]
pub struct LiftWeekRecord {
    pub week_num: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub training_num: u32,
    #[serde(default)]
    pub sets: Vec<SetRecord>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(value: &u32) -> bool {
    *value == 0
}

impl TemplateRecord {
    fn populated(&self, per_lift: bool) -> Vec<domain::WeeklyStructureKind> {
        [
            (!self.phases.is_empty(), domain::WeeklyStructureKind::Phases),
            (!self.weeks_data.is_empty(), domain::WeeklyStructureKind::Weeks),
            (
                !self.microcycles.is_empty(),
                domain::WeeklyStructureKind::Microcycles,
            ),
            (per_lift, domain::WeeklyStructureKind::PerLift),
        ]
        .into_iter()
        .filter_map(|(populated, kind)| populated.then_some(kind))
        .collect()
    }
}

impl TryFrom<TemplateRecord> for domain::Template {
    type Error = domain::ReadError;

    fn try_from(mut value: TemplateRecord) -> Result<Self, Self::Error> {
        let per_lift = value
            .exercises
            .take()
            .map(domain::PerLiftTable::from)
            .filter(|table| !table.is_empty());
        let populated = value.populated(per_lift.is_some());
        if populated.len() != 1 {
            return Err(domain::MalformedTemplate {
                name: value.name,
                populated,
            }
            .into());
        }

        let levels = value
            .level
            .iter()
            .map(|tag| {
                tag.parse::<domain::AthleteLevel>()
                    .map_err(|_| StorageError::UnknownLevel(tag.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let discipline = if value.discipline.is_empty() {
            domain::Discipline::default()
        } else {
            value
                .discipline
                .parse()
                .map_err(|_| StorageError::UnknownDiscipline(value.discipline.clone()))?
        };

        let structure = if !value.phases.is_empty() {
            domain::WeeklyStructure::Phases(value.phases.into_iter().map(Into::into).collect())
        } else if !value.weeks_data.is_empty() {
            domain::WeeklyStructure::Weeks(value.weeks_data.into_iter().map(Into::into).collect())
        } else if !value.microcycles.is_empty() {
            domain::WeeklyStructure::Microcycles(
                value.microcycles.into_iter().map(Into::into).collect(),
            )
        } else {
            domain::WeeklyStructure::per_lift(per_lift.unwrap_or_default())
        };

        Ok(Self {
            name: value.name,
            author: value.author,
            levels,
            weeks: value.weeks,
            days_per_week: value.days_per_week,
            discipline,
            structure,
        })
    }
}

impl From<PhaseRecord> for domain::Phase {
    fn from(value: PhaseRecord) -> Self {
        Self {
            name: value.name,
            weeks: value.weeks.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<WeekRecord> for domain::TemplateWeek {
    fn from(value: WeekRecord) -> Self {
        let sessions = if value.workouts.is_empty() {
            dated(value.days)
        } else {
            domain::Sessions::Numbered(
                value
                    .workouts
                    .into_iter()
                    .map(|w| domain::TemplateWorkout {
                        number: w.workout_num,
                        exercises: exercises(w.exercises),
                    })
                    .collect(),
            )
        };
        Self {
            number: value.week_num,
            sessions,
        }
    }
}

impl From<MicrocycleRecord> for domain::Microcycle {
    fn from(value: MicrocycleRecord) -> Self {
        let sessions = if value.workouts.is_empty() {
            dated(value.days)
        } else {
            domain::Sessions::Numbered(
                value
                    .workouts
                    .into_iter()
                    .map(|w| domain::TemplateWorkout {
                        number: w.day,
                        exercises: exercises(w.exercises),
                    })
                    .collect(),
            )
        };
        Self {
            number: if value.micro_num > 0 {
                value.micro_num
            } else {
                value.microcycle_num
            },
            sessions,
        }
    }
}

fn dated(days: Vec<DayRecord>) -> domain::Sessions {
    domain::Sessions::Dated(
        days.into_iter()
            .map(|d| domain::TemplateDay {
                date: d.date,
                exercises: exercises(d.exercises),
            })
            .collect(),
    )
}

fn exercises(records: Vec<ExerciseRecord>) -> Vec<domain::TemplateExercise> {
    records.into_iter().map(Into::into).collect()
}

impl From<ExerciseRecord> for domain::TemplateExercise {
    fn from(value: ExerciseRecord) -> Self {
        let kind = if value.kind.is_empty() {
            None
        } else {
            let kind = value.kind.parse().ok();
            if kind.is_none() {
                debug!("ignoring unknown type \"{}\" of {}", value.kind, value.name);
            }
            kind
        };
        Self {
            name: value.name,
            kind,
            sets: value.sets.into_iter().map(Into::into).collect(),
            rep_only_sets: value.sets_reps,
            template_max: value.stats.map(|s| s.pm).filter(|pm| *pm > 0.0),
        }
    }
}

impl From<SetRecord> for domain::TemplateSet {
    fn from(value: SetRecord) -> Self {
        Self {
            percent: value.percent,
            reps: value.reps,
            sets: value.sets,
            weight: value.weight,
        }
    }
}

impl From<PerLiftRecord> for domain::PerLiftTable {
    fn from(value: PerLiftRecord) -> Self {
        Self {
            squat: value.squat.map(Into::into),
            bench: value.bench.map(Into::into),
            deadlift: value.deadlift.map(Into::into),
        }
    }
}

impl From<LiftRecord> for domain::LiftTable {
    fn from(value: LiftRecord) -> Self {
        Self {
            entries: value
                .weeks
                .into_iter()
                .map(|w| domain::LiftWeek {
                    week: w.week_num,
                    session: (w.training_num > 0).then_some(w.training_num),
                    sets: w.sets.into_iter().map(Into::into).collect(),
                })
                .collect(),
        }
    }
}
