use crate::form::Field;
use crate::validation::ValidationError;

/// User-facing text for an email rule failure, if there is one.
pub fn validation_message(error: &ValidationError) -> Option<&'static str> {
    match error {
        ValidationError::Required => Some("Please enter your email address"),
        ValidationError::Email => Some("Please enter a valid email address"),
        _ => None,
    }
}

/// The message shown under the email input.
///
/// Empty until the field has been touched or edited; after that it lists the
/// message of every failed rule, in rule order, separated by single spaces.
/// Failures without a message are skipped.
pub fn email_message(field: &Field<String>) -> String {
    if !field.shows_errors() {
        return String::new();
    }
    field
        .errors()
        .iter()
        .filter_map(validation_message)
        .collect::<Vec<_>>()
        .join(" ")
}
