use thiserror::Error;

/// Operational failures of the form engine.
///
/// Field validation failures are never reported through this type; they live
/// on the fields themselves as [`crate::validation::ValidationErrors`].
#[derive(Debug, Error)]
pub enum FormError {
    #[error("no address at position {index} (form has {len})")]
    UnknownAddress { index: usize, len: usize },

    #[error("unknown notification channel `{0}`")]
    UnknownNotificationChannel(String),

    #[error("unknown address type `{0}`")]
    UnknownAddressType(String),

    #[error("failed to serialize form value: {0}")]
    Serialize(#[from] serde_json::Error),
}
