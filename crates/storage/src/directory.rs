use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use log::debug;
use powerplan_domain as domain;

use crate::{StorageError, record::TemplateRecord};

/// Template records read from the JSON files of a directory.
///
/// Files are read in name order, files without a `.json` extension are ignored.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    path: PathBuf,
}

impl DirectoryTemplates {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_records(&self) -> Result<Vec<TemplateRecord>, anyhow::Error> {
        let mut files = fs::read_dir(&self.path)
            .with_context(|| format!("failed to read directory {}", self.path.display()))?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("failed to list directory {}", self.path.display()))?;
        files.retain(|file| file.extension().is_some_and(|ext| ext == "json"));
        files.sort();

        files
            .iter()
            .map(|file| -> Result<TemplateRecord, anyhow::Error> {
                debug!("reading template {}", file.display());
                let json = fs::read_to_string(file)
                    .with_context(|| format!("failed to read {}", file.display()))?;
                serde_json::from_str(&json)
                    .with_context(|| format!("failed to parse {}", file.display()))
            })
            .collect()
    }
}

impl domain::TemplateRepository for DirectoryTemplates {
    fn read_templates(&self) -> Result<Vec<domain::Template>, domain::ReadError> {
        self.read_records()
            .map_err(StorageError::from)?
            .into_iter()
            .map(domain::Template::try_from)
            .collect()
    }
}
