use derive_more::Display;

/// Exercise name prepared for substring matching.
///
/// Names are lower-cased and `ё` is folded into `е`, so that spelling variants
/// of the same exercise match the same rules.
#[derive(Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedName(String);

impl NormalizedName {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase().replace('ё', "е"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn contains(&self, pattern: &str) -> bool {
        self.0.contains(pattern)
    }

    #[must_use]
    pub fn contains_any(&self, patterns: &[&str]) -> bool {
        patterns.iter().any(|p| self.0.contains(p))
    }

    #[must_use]
    pub fn contains_all(&self, patterns: &[&str]) -> bool {
        patterns.iter().all(|p| self.0.contains(p))
    }
}

impl AsRef<str> for NormalizedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NormalizedName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Compare two exercise names the way the classifier sees them.
#[must_use]
pub fn same_exercise(a: &str, b: &str) -> bool {
    NormalizedName::new(a) == NormalizedName::new(b)
}
