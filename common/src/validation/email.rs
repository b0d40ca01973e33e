use regex::Regex;
use std::sync::LazyLock;

use super::ValidationError;
use crate::form::Field;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"#,
    )
    .expect("email pattern is valid")
});

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_LOCAL_PART_LENGTH: usize = 64;

/// Checks `text` against the HTML email grammar.
pub fn is_email(text: &str) -> bool {
    if text.is_empty() || text.len() > MAX_EMAIL_LENGTH {
        return false;
    }
    match text.split_once('@') {
        Some((local, _)) if !local.is_empty() && local.len() <= MAX_LOCAL_PART_LENGTH => {
            EMAIL_PATTERN.is_match(text)
        }
        _ => false,
    }
}

/// Cross-field rule for the email group.
///
/// Inconclusive (passes) while either field is still pristine, so a mismatch
/// is only reported once the user has typed into both. After that the two
/// values must be exactly equal.
pub fn email_matcher(email: &Field<String>, confirm: &Field<String>) -> Option<ValidationError> {
    if email.is_pristine() || confirm.is_pristine() {
        return None;
    }
    (email.value() != confirm.value()).then_some(ValidationError::Match)
}
