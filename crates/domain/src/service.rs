use log::{debug, error};

use crate::{
    AthleteLevel, AthleteMaxes, GenerateError, GeneratedProgram, GenerationOptions, Increment,
    LibraryError, LiftType, Settings, Template, TemplateLibrary, TemplateRepository,
    estimate_level, generator, recommend_template,
};

macro_rules! log_on_error {
    ($result: expr, $action: literal, $entity: literal) => {{
        let result = $result;
        if let Err(ref err) = result {
            error!("failed to {} {}: {err}", $action, $entity);
        }
        result
    }};
}

pub struct ProgramGenerator {
    library: TemplateLibrary,
    settings: Settings,
}

impl ProgramGenerator {
    #[must_use]
    pub fn new(library: TemplateLibrary, settings: Settings) -> Self {
        Self { library, settings }
    }

    pub fn load<R: TemplateRepository>(repository: &R) -> Result<Self, LibraryError> {
        let library = log_on_error!(TemplateLibrary::load(repository), "load", "templates")?;
        Ok(Self::new(library, Settings::default()))
    }

    pub fn set_rounding(&mut self, rounding: Increment) {
        debug!("rounding weights to {rounding} kg");
        self.settings.rounding = rounding;
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn library(&self) -> &TemplateLibrary {
        &self.library
    }

    #[must_use]
    pub fn list_templates(&self) -> Vec<String> {
        self.library.names()
    }

    #[must_use]
    pub fn templates_for_level(&self, level: AthleteLevel) -> Vec<&Template> {
        self.library.for_level(level)
    }

    /// All template names, the recommended template for the level first.
    #[must_use]
    pub fn templates_by_level(&self, level: AthleteLevel) -> Vec<String> {
        let recommended = recommend_template(level, LiftType::Full);
        std::iter::once(recommended.to_string())
            .chain(
                self.library
                    .names()
                    .into_iter()
                    .filter(|name| name != recommended),
            )
            .collect()
    }

    #[must_use]
    pub fn templates_for_discipline(&self, lift_type: LiftType) -> Vec<&Template> {
        self.library.for_lift_type(lift_type)
    }

    pub fn generate(
        &self,
        template: &str,
        maxes: &AthleteMaxes,
    ) -> Result<GeneratedProgram, GenerateError> {
        self.generate_with_options(template, maxes, &GenerationOptions::default())
    }

    pub fn generate_with_options(
        &self,
        template: &str,
        maxes: &AthleteMaxes,
        options: &GenerationOptions,
    ) -> Result<GeneratedProgram, GenerateError> {
        let template = log_on_error!(
            self.library
                .get(template)
                .ok_or_else(|| GenerateError::NotFound(template.to_string())),
            "find",
            "template"
        )?;
        Ok(generator::generate(
            template,
            maxes,
            options,
            &self.settings,
        ))
    }

    /// Generate a program from the template recommended for the athlete.
    ///
    /// The level of the options takes precedence over the level estimated from
    /// the maxima.
    pub fn generate_automatic(
        &self,
        maxes: &AthleteMaxes,
        options: &GenerationOptions,
    ) -> Result<GeneratedProgram, GenerateError> {
        let level = options.level.unwrap_or_else(|| estimate_level(maxes));
        let template = recommend_template(level, options.lift_type);
        debug!("selected template \"{template}\" for level {level}");
        self.generate_with_options(template, maxes, options)
    }
}
