#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use powerplan_domain as domain;

pub mod bundled;
pub mod directory;
pub mod record;

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("unknown athlete level \"{0}\"")]
    UnknownLevel(String),
    #[error("unknown discipline \"{0}\"")]
    UnknownDiscipline(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<StorageError> for domain::ReadError {
    fn from(value: StorageError) -> Self {
        domain::ReadError::Other(Box::new(value))
    }
}
