use crate::WeeklyStructureKind;

#[derive(thiserror::Error, Debug)]
pub enum LibraryError {
    #[error(transparent)]
    Malformed(#[from] MalformedTemplate),
    #[error("duplicate template \"{0}\"")]
    Duplicate(String),
    #[error(transparent)]
    Read(ReadError),
}

impl From<ReadError> for LibraryError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::Malformed(malformed) => LibraryError::Malformed(malformed),
            other => LibraryError::Read(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Malformed(#[from] MalformedTemplate),
    #[error("invalid template data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

/// A template record that does not populate exactly one weekly structure.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("template \"{name}\" must define exactly one weekly structure, found {populated:?}")]
pub struct MalformedTemplate {
    pub name: String,
    pub populated: Vec<WeeklyStructureKind>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("template \"{0}\" not found")]
    NotFound(String),
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    #[error("invalid week number: {0}")]
    WeekOutOfRange(usize),
    #[error("invalid workout number: {0}")]
    WorkoutOutOfRange(usize),
    #[error("invalid exercise index: {0}")]
    ExerciseOutOfRange(usize),
    #[error("invalid set index: {0}")]
    SetOutOfRange(usize),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_library_error_from_read_error() {
        let malformed = MalformedTemplate {
            name: String::from("A"),
            populated: vec![],
        };
        assert!(matches!(
            LibraryError::from(ReadError::Malformed(malformed.clone())),
            LibraryError::Malformed(m) if m == malformed
        ));
        assert!(matches!(
            LibraryError::from(ReadError::Other("foo".into())),
            LibraryError::Read(ReadError::Other(error)) if error.to_string() == "foo"
        ));
    }

    #[test]
    fn test_malformed_template_display() {
        let error = MalformedTemplate {
            name: String::from("A"),
            populated: vec![WeeklyStructureKind::Phases, WeeklyStructureKind::Weeks],
        };
        assert_eq!(
            error.to_string(),
            "template \"A\" must define exactly one weekly structure, found [Phases, Weeks]"
        );
    }

    #[test]
    fn test_generate_error_display() {
        assert_eq!(
            GenerateError::NotFound(String::from("X")).to_string(),
            "template \"X\" not found"
        );
    }
}
