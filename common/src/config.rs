use serde::{Deserialize, Serialize};

use crate::validation::RatingRange;

pub const DEFAULT_EMAIL_DEBOUNCE_MS: u32 = 1000;

/// Tunables of the customer form. Every field falls back to its default when
/// missing from a deserialized document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormOptions {
    /// Quiet period after the last email keystroke before the message is recomputed.
    pub email_debounce_ms: u32,
    pub rating: RatingRange,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            email_debounce_ms: DEFAULT_EMAIL_DEBOUNCE_MS,
            rating: RatingRange::default(),
        }
    }
}
