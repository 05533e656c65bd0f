use log::debug;

use crate::{
    AthleteLevel, AthleteMaxes, ExerciseKind, GeneratedExercise, GeneratedProgram, GeneratedSet,
    GeneratedWeek, GeneratedWorkout, Increment, LiftTable, LiftType, LiftWeek, Microcycle,
    PerLiftTable, Phase, SessionLayout, Sessions, Settings, Template, TemplateExercise,
    TemplateSet, TemplateWeek, WeeklyStructure, adapter, derive_max, filter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    pub lift_type: LiftType,
    /// Requested training days per week, zero to keep the days of the template.
    pub days_per_week: u32,
    pub include_accessory: bool,
    /// Athlete level used for automatic template selection.
    pub level: Option<AthleteLevel>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            lift_type: LiftType::Full,
            days_per_week: 0,
            include_accessory: true,
            level: None,
        }
    }
}

pub const SQUAT: &str = "Присед";
pub const BENCH: &str = "Жим лёжа";
pub const DEADLIFT: &str = "Становая тяга";

const DEFAULT_PER_LIFT_WEEKS: u32 = 12;
const FLAT_WEEK_PHASE: &str = "Соревновательная подготовка";
/// Share of the one-repetition maximum assumed for the heaviest absolute
/// weight of a dated template day.
const TEMPLATE_TOP_SET_INTENSITY: f64 = 0.9;

/// Generate a program from a template and apply the post-processing passes
/// requested by the options.
#[must_use]
pub fn generate(
    template: &Template,
    maxes: &AthleteMaxes,
    options: &GenerationOptions,
    settings: &Settings,
) -> GeneratedProgram {
    debug!(
        "generating program from template \"{}\" ({})",
        template.name,
        template.structure.kind()
    );

    let generator = Generator {
        maxes,
        increment: settings.rounding,
    };
    let weeks = match &template.structure {
        WeeklyStructure::Phases(phases) => generator.phases(phases),
        WeeklyStructure::Weeks(weeks) => generator.flat_weeks(weeks),
        WeeklyStructure::Microcycles(microcycles) => generator.microcycles(microcycles),
        WeeklyStructure::PerLift { table, layout } => {
            generator.per_lift(table, *layout, template.weeks)
        }
    };
    let mut program = GeneratedProgram::new(&template.name, *maxes, weeks);

    if !options.include_accessory {
        filter::exclude_accessories(&mut program);
    }
    if options.lift_type != LiftType::Full {
        filter::filter_by_lift_type(&mut program, options.lift_type);
    }
    if options.days_per_week != 0 {
        adapter::adapt_to_days(&mut program, options.days_per_week);
    }

    debug!(
        "generated program \"{}\" with {} weeks and {} workouts",
        program.name,
        program.weeks.len(),
        program.workouts()
    );

    program
}

/// Treat percentages given as a fraction of one as whole percentages.
#[must_use]
pub fn normalize_percent(percent: f64) -> f64 {
    if percent > 0.0 && percent < 1.0 {
        percent * 100.0
    } else {
        percent
    }
}

#[derive(Clone, Copy)]
enum Style {
    /// Workouts named "Тренировка", absolute weights of dated days rescaled.
    Weekly,
    /// Workouts named "День", dated days loaded like numbered ones.
    Microcycle,
}

struct Generator<'a> {
    maxes: &'a AthleteMaxes,
    increment: Increment,
}

impl Generator<'_> {
    fn phases(&self, phases: &[Phase]) -> Vec<GeneratedWeek> {
        phases
            .iter()
            .flat_map(|phase| phase.weeks.iter().map(move |week| (phase, week)))
            .enumerate()
            .filter_map(|(i, (phase, week))| {
                self.week(position(i), &phase.name, &week.sessions, Style::Weekly)
            })
            .collect()
    }

    fn flat_weeks(&self, weeks: &[TemplateWeek]) -> Vec<GeneratedWeek> {
        weeks
            .iter()
            .enumerate()
            .filter_map(|(i, week)| {
                let number = if week.number > 0 {
                    week.number
                } else {
                    position(i)
                };
                self.week(number, FLAT_WEEK_PHASE, &week.sessions, Style::Weekly)
            })
            .collect()
    }

    fn microcycles(&self, microcycles: &[Microcycle]) -> Vec<GeneratedWeek> {
        microcycles
            .iter()
            .enumerate()
            .filter_map(|(i, microcycle)| {
                let number = if microcycle.number > 0 {
                    microcycle.number
                } else {
                    position(i)
                };
                self.week(
                    number,
                    &format!("Микроцикл {number}"),
                    &microcycle.sessions,
                    Style::Microcycle,
                )
            })
            .collect()
    }

    fn per_lift(
        &self,
        table: &PerLiftTable,
        layout: SessionLayout,
        weeks: u32,
    ) -> Vec<GeneratedWeek> {
        let total = if weeks == 0 {
            DEFAULT_PER_LIFT_WEEKS
        } else {
            weeks
        };
        let squat = table.squat.as_ref();
        let bench = table.bench.as_ref();
        let deadlift = table.deadlift.as_ref();

        (1..=total)
            .filter_map(|week| {
                let workouts = match layout {
                    SessionLayout::TwoPerWeek => vec![
                        self.lift_workout(
                            week,
                            1,
                            "Тренировка I (Пн)",
                            &[(SQUAT, squat, 1), (BENCH, bench, 1)],
                        ),
                        self.lift_workout(week, 2, "Тренировка II (Ср)", &[(DEADLIFT, deadlift, 1)]),
                        self.lift_workout(
                            week,
                            3,
                            "Тренировка III (Пт)",
                            &[(SQUAT, squat, 2), (BENCH, bench, 2)],
                        ),
                    ],
                    SessionLayout::OnePerWeek => vec![
                        self.lift_workout(
                            week,
                            1,
                            "Тренировка 1 (Присед + Жим)",
                            &[(SQUAT, squat, 1), (BENCH, bench, 1)],
                        ),
                        self.lift_workout(week, 2, "Тренировка 2 (Тяга)", &[(DEADLIFT, deadlift, 1)]),
                    ],
                };
                let workouts = workouts.into_iter().flatten().collect::<Vec<_>>();
                if workouts.is_empty() {
                    debug!("dropped empty week {week}");
                    return None;
                }
                Some(GeneratedWeek::new(
                    week,
                    progress_phase(week, total).to_string(),
                    workouts,
                ))
            })
            .collect()
    }

    fn lift_workout(
        &self,
        week: u32,
        day: u32,
        name: &str,
        lifts: &[(&str, Option<&LiftTable>, u32)],
    ) -> Option<GeneratedWorkout> {
        let exercises = lifts
            .iter()
            .filter_map(|(lift, table, session)| {
                let entry = (*table)?.session(week, *session)?;
                self.lift_exercise(lift, entry)
            })
            .collect::<Vec<_>>();
        (!exercises.is_empty()).then(|| GeneratedWorkout::new(day, name.to_string(), exercises))
    }

    fn lift_exercise(&self, lift: &str, entry: &LiftWeek) -> Option<GeneratedExercise> {
        let one_rm = self.one_rm(lift);
        let sets = entry.sets.iter().map(|s| self.set(s, one_rm)).collect();
        finish(lift, Some(ExerciseKind::Competition), one_rm, sets)
    }

    fn week(
        &self,
        number: u32,
        phase: &str,
        sessions: &Sessions,
        style: Style,
    ) -> Option<GeneratedWeek> {
        let workouts = match sessions {
            Sessions::Numbered(workouts) => workouts
                .iter()
                .filter_map(|workout| {
                    let name = match style {
                        Style::Weekly => format!("Тренировка {}", workout.number),
                        Style::Microcycle => format!("День {}", workout.number),
                    };
                    let exercises = workout
                        .exercises
                        .iter()
                        .filter_map(|e| self.exercise(e))
                        .collect();
                    non_empty_workout(workout.number, name, exercises)
                })
                .collect::<Vec<_>>(),
            Sessions::Dated(days) => days
                .iter()
                .enumerate()
                .filter_map(|(i, day)| {
                    let number = position(i);
                    let (name, exercises) = match style {
                        Style::Weekly => (
                            format!("Тренировка {number}"),
                            day.exercises
                                .iter()
                                .filter_map(|e| self.rescaled_exercise(e))
                                .collect(),
                        ),
                        Style::Microcycle => (
                            format!("День {number} ({})", day.date),
                            day.exercises
                                .iter()
                                .filter_map(|e| self.exercise(e))
                                .collect(),
                        ),
                    };
                    non_empty_workout(number, name, exercises)
                })
                .collect::<Vec<_>>(),
        };

        if workouts.is_empty() {
            debug!("dropped empty week {number}");
            return None;
        }

        Some(GeneratedWeek::new(number, phase.to_string(), workouts))
    }

    /// Resolve an exercise given by percentages or absolute weights.
    ///
    /// If the template states the maximum its weights were planned for, the
    /// weights are scaled to the maximum of the athlete instead.
    fn exercise(&self, exercise: &TemplateExercise) -> Option<GeneratedExercise> {
        let one_rm = self.one_rm(&exercise.name);
        let mut sets = match exercise.template_max.filter(|max| *max > 0.0) {
            Some(template_max) if one_rm > 0.0 => {
                let ratio = one_rm / template_max;
                exercise
                    .sets
                    .iter()
                    .map(|s| GeneratedSet {
                        percent: normalize_percent(s.percent),
                        reps: s.reps,
                        sets: s.sets.max(1),
                        weight: self.increment.round(s.weight * ratio),
                    })
                    .collect()
            }
            Some(_) => vec![],
            None => exercise
                .sets
                .iter()
                .map(|s| self.set(s, one_rm))
                .collect::<Vec<_>>(),
        };
        if !sets.is_empty() || exercise.template_max.is_none() {
            sets.extend(exercise.rep_only_sets.iter().map(|reps| GeneratedSet {
                percent: 0.0,
                reps: *reps,
                sets: 1,
                weight: 0.0,
            }));
        }
        finish(&exercise.name, exercise.kind, one_rm, sets)
    }

    /// Resolve an exercise given by absolute weights planned for an unknown
    /// athlete, scaling the weights to the maximum of this athlete.
    fn rescaled_exercise(&self, exercise: &TemplateExercise) -> Option<GeneratedExercise> {
        let one_rm = self.one_rm(&exercise.name);
        let top_set = exercise.sets.iter().map(|s| s.weight).fold(0.0, f64::max);
        let ratio = if top_set > 0.0 && one_rm > 0.0 {
            one_rm / (top_set / TEMPLATE_TOP_SET_INTENSITY)
        } else {
            1.0
        };
        let sets = exercise
            .sets
            .iter()
            .map(|s| {
                let weight = self.increment.round(s.weight * ratio);
                GeneratedSet {
                    percent: if one_rm > 0.0 {
                        weight / one_rm * 100.0
                    } else {
                        0.0
                    },
                    reps: s.reps,
                    sets: s.sets.max(1),
                    weight,
                }
            })
            .collect();
        finish(&exercise.name, exercise.kind, one_rm, sets)
    }

    fn set(&self, set: &TemplateSet, one_rm: f64) -> GeneratedSet {
        let percent = normalize_percent(set.percent);
        let weight = if percent > 0.0 && one_rm > 0.0 {
            self.increment.round(one_rm * percent / 100.0)
        } else if set.weight > 0.0 {
            self.increment.round(set.weight)
        } else {
            0.0
        };
        GeneratedSet {
            percent,
            reps: set.reps,
            sets: set.sets.max(1),
            weight,
        }
    }

    fn one_rm(&self, exercise: &str) -> f64 {
        let one_rm = derive_max(exercise, self.maxes);
        if one_rm <= 0.0 {
            debug!("no maximum known for \"{exercise}\", using zero load");
        }
        one_rm
    }
}

fn finish(
    name: &str,
    kind: Option<ExerciseKind>,
    one_rm: f64,
    sets: Vec<GeneratedSet>,
) -> Option<GeneratedExercise> {
    if sets.is_empty() {
        debug!("dropped exercise \"{name}\" without sets");
        return None;
    }
    Some(GeneratedExercise::new(name, kind, one_rm, sets))
}

fn non_empty_workout(
    day: u32,
    name: String,
    exercises: Vec<GeneratedExercise>,
) -> Option<GeneratedWorkout> {
    if exercises.is_empty() {
        debug!("dropped empty workout \"{name}\"");
        return None;
    }
    Some(GeneratedWorkout::new(day, name, exercises))
}

fn progress_phase(week: u32, total: u32) -> &'static str {
    let progress = f64::from(week) / f64::from(total);
    if progress <= 0.33 {
        "Накопление объёма"
    } else if progress <= 0.66 {
        "Интенсификация"
    } else {
        "Реализация"
    }
}

fn position(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}
