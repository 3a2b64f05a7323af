//! Points value object (1-100 scale).

use std::fmt;

use super::ValidationError;

/// Points awarded for a fully correct answer, between 1 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Points(u8);

impl Points {
    /// Smallest allowed value.
    pub const MIN: Self = Self(1);

    /// Largest allowed value.
    pub const MAX: Self = Self(100);

    /// Creates Points, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value < Self::MIN.0 || value > Self::MAX.0 {
            return Err(ValidationError::out_of_range(
                "points",
                i64::from(Self::MIN.0),
                i64::from(Self::MAX.0),
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Points {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u8> for Points {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pts", self.0)
    }
}
