use std::{collections::BTreeMap, fmt};

use crate::{GeneratedProgram, NormalizedName, Rule};

const MIN_LIFTS_PER_WEEK: f64 = 40.0;
const MAX_LIFTS_PER_WEEK: f64 = 150.0;

const COMPETITION_MOVEMENTS: [Rule; 3] = [
    Rule::any(&["жим"]).except(&["стоя", "сидя"]),
    Rule::any(&["присед"]),
    Rule::any(&["тяга"]).except(&["блок", "наклон", "гантел"]),
];

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub findings: Vec<Finding>,
    pub stats: ProgramStats,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.findings.iter().any(Finding::is_error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| !f.is_error())
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_error())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    LowVolume { lifts_per_week: f64 },
    HighVolume { lifts_per_week: f64 },
    NoCompetitionMovement,
}

impl Finding {
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Finding::NoCompetitionMovement)
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::LowVolume { lifts_per_week } => write!(
                f,
                "Низкий КПШ в неделю: {lifts_per_week:.0} (рекомендуется 50-100)"
            ),
            Finding::HighVolume { lifts_per_week } => write!(
                f,
                "Высокий КПШ в неделю: {lifts_per_week:.0} (риск перетренированности)"
            ),
            Finding::NoCompetitionMovement => write!(f, "Не найдено соревновательное движение"),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProgramStats {
    pub total_weeks: usize,
    pub total_workouts: usize,
    pub total_lifts: u32,
    pub total_tonnage: f64,
    pub avg_lifts_per_week: f64,
    pub avg_tonnage_per_week: f64,
    pub lifts_by_exercise: BTreeMap<String, u32>,
}

impl ProgramStats {
    #[must_use]
    pub fn new(program: &GeneratedProgram) -> Self {
        let mut stats = Self {
            total_weeks: program.weeks.len(),
            total_workouts: program.workouts(),
            ..Self::default()
        };
        for week in &program.weeks {
            stats.total_lifts += week.total_lifts;
            stats.total_tonnage += week.tonnage;
            for exercise in week.workouts.iter().flat_map(|w| &w.exercises) {
                *stats
                    .lifts_by_exercise
                    .entry(exercise.name.clone())
                    .or_default() += exercise.total_lifts;
            }
        }
        if let Ok(weeks) = u32::try_from(stats.total_weeks)
            && weeks > 0
        {
            stats.avg_lifts_per_week = f64::from(stats.total_lifts) / f64::from(weeks);
            stats.avg_tonnage_per_week = stats.total_tonnage / f64::from(weeks);
        }
        stats
    }
}

/// Check the training volume of a program and the presence of a competition
/// movement.
#[must_use]
pub fn validate(program: &GeneratedProgram) -> ValidationReport {
    let stats = ProgramStats::new(program);
    let mut findings = vec![];

    let lifts_per_week = stats.avg_lifts_per_week;
    if lifts_per_week < MIN_LIFTS_PER_WEEK {
        findings.push(Finding::LowVolume { lifts_per_week });
    }
    if lifts_per_week > MAX_LIFTS_PER_WEEK {
        findings.push(Finding::HighVolume { lifts_per_week });
    }

    let has_competition_movement = stats.lifts_by_exercise.keys().any(|name| {
        let name = NormalizedName::new(name);
        COMPETITION_MOVEMENTS.iter().any(|rule| rule.matches(&name))
    });
    if !has_competition_movement {
        findings.push(Finding::NoCompetitionMovement);
    }

    ValidationReport { findings, stats }
}
