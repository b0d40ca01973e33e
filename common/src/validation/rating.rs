use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Inclusive bounds for the optional rating field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingRange {
    pub min: f64,
    pub max: f64,
}

impl RatingRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// An unset rating is valid. Anything else must parse as a number inside
    /// the bounds; text that is not a number fails the same way as one that is
    /// out of range.
    pub fn evaluate(&self, value: Option<&str>) -> Option<ValidationError> {
        let text = value?;
        match text.trim().parse::<f64>() {
            Ok(number) if !number.is_nan() && self.min <= number && number <= self.max => None,
            _ => Some(ValidationError::Range),
        }
    }
}

impl Default for RatingRange {
    fn default() -> Self {
        Self::new(1.0, 5.0)
    }
}
