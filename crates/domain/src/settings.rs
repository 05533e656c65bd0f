use derive_more::{Display, Into};
use serde::{Deserialize, Serialize};

/// Step to which all resolved loads are rounded, in kilograms.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Increment(f64);

impl Increment {
    pub const DEFAULT: Increment = Increment(2.5);

    pub fn new(value: f64) -> Result<Self, IncrementError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(IncrementError::NotPositive);
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn round(self, weight: f64) -> f64 {
        (weight / self.0).round() * self.0
    }
}

impl Default for Increment {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Increment {
    type Error = IncrementError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Increment::new(value)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum IncrementError {
    #[error("Rounding increment must be a positive number of kilograms")]
    NotPositive,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub rounding: Increment,
}
