//! Field validation rules.
//!
//! Every rule is a pure function of a field's current text: rules never touch
//! the field tree, they only report what is wrong with it. A field collects
//! the failures of all of its rules into [`ValidationErrors`], in the order the
//! rules were attached.

mod email;
mod rating;

pub use email::{email_matcher, is_email};
pub use rating::RatingRange;

use std::fmt;

/// A declarative rule attached to a field.
#[derive(Debug, Clone, PartialEq)]
pub enum Validator {
    /// Fails on an unset or empty value.
    Required,
    /// Fails when a non-empty value has fewer characters than given.
    MinLength(usize),
    /// Fails when the value has more characters than given.
    MaxLength(usize),
    /// Fails when a non-empty value is not a well-formed email address.
    Email,
    /// Fails when a set value is not a number within the range.
    Range(RatingRange),
}

impl Validator {
    /// Evaluates the rule. `None` means the field has no value at all.
    pub fn check(&self, value: Option<&str>) -> Option<ValidationError> {
        match self {
            Validator::Required => match value {
                Some(text) if !text.is_empty() => None,
                _ => Some(ValidationError::Required),
            },
            Validator::MinLength(required) => {
                let actual = value.map_or(0, |text| text.chars().count());
                // Empty values are left to `Required`.
                (actual > 0 && actual < *required).then_some(ValidationError::MinLength {
                    required: *required,
                    actual,
                })
            }
            Validator::MaxLength(required) => {
                let actual = value.map_or(0, |text| text.chars().count());
                (actual > *required).then_some(ValidationError::MaxLength {
                    required: *required,
                    actual,
                })
            }
            Validator::Email => match value {
                Some(text) if !text.is_empty() && !is_email(text) => Some(ValidationError::Email),
                _ => None,
            },
            Validator::Range(range) => range.evaluate(value),
        }
    }
}

/// One failed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Required,
    MinLength { required: usize, actual: usize },
    MaxLength { required: usize, actual: usize },
    Email,
    Range,
    /// Raised by the email group when email and confirmation differ.
    Match,
}

impl ValidationError {
    /// Stable rule name, used to look up user-facing messages.
    pub fn key(&self) -> &'static str {
        match self {
            ValidationError::Required => "required",
            ValidationError::MinLength { .. } => "minlength",
            ValidationError::MaxLength { .. } => "maxlength",
            ValidationError::Email => "email",
            ValidationError::Range => "range",
            ValidationError::Match => "match",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Failures of a field or group, in the order their rules were attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Runs every rule against `value`, keeping the failures.
    pub fn evaluate(validators: &[Validator], value: Option<&str>) -> Self {
        Self(validators.iter().filter_map(|rule| rule.check(value)).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|error| error.key() == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(ValidationError::key)
    }
}

impl From<Option<ValidationError>> for ValidationErrors {
    fn from(error: Option<ValidationError>) -> Self {
        Self(error.into_iter().collect())
    }
}
