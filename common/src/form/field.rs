use crate::model::address::AddressType;
use crate::model::customer::NotificationChannel;
use crate::validation::{ValidationErrors, Validator};

/// Values a [`Field`] can hold. Validators see the text form of the value;
/// `None` means the field is unset.
pub trait FieldValue: Clone + PartialEq {
    fn as_text(&self) -> Option<&str>;
}

impl FieldValue for String {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl FieldValue for Option<String> {
    fn as_text(&self) -> Option<&str> {
        self.as_deref()
    }
}

impl FieldValue for bool {
    fn as_text(&self) -> Option<&str> {
        Some(if *self { "true" } else { "false" })
    }
}

impl FieldValue for NotificationChannel {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl FieldValue for AddressType {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

/// A scalar field of the form: its value plus the interaction flags and the
/// rules attached to it.
///
/// Failures are cached in `errors` and refreshed by every value change and by
/// [`Field::revalidate`]. Swapping the rule set alone does not refresh them.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<T> {
    value: T,
    touched: bool,
    dirty: bool,
    validators: Vec<Validator>,
    errors: ValidationErrors,
}

impl<T: FieldValue> Field<T> {
    pub fn new(value: T, validators: Vec<Validator>) -> Self {
        let mut field = Self {
            value,
            touched: false,
            dirty: false,
            validators,
            errors: ValidationErrors::default(),
        };
        field.revalidate();
        field
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_pristine(&self) -> bool {
        !self.dirty
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    /// True when the user has interacted with the field and it is invalid.
    pub fn shows_errors(&self) -> bool {
        (self.touched || self.dirty) && !self.is_valid()
    }

    /// A value typed by the user. Marks the field dirty.
    pub fn input(&mut self, value: T) {
        self.value = value;
        self.dirty = true;
        self.revalidate();
    }

    /// A value written by code. Leaves the dirty flag alone.
    pub fn set_value(&mut self, value: T) {
        self.value = value;
        self.revalidate();
    }

    pub fn mark_touched(&mut self) {
        self.touched = true;
    }

    pub fn set_validators(&mut self, validators: Vec<Validator>) {
        self.validators = validators;
    }

    pub fn clear_validators(&mut self) {
        self.validators.clear();
    }

    pub fn revalidate(&mut self) {
        self.errors = ValidationErrors::evaluate(&self.validators, self.value.as_text());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_field_is_pristine_but_validated() {
        let field = Field::new(String::new(), vec![Validator::Required]);
        assert!(field.is_pristine());
        assert!(!field.is_touched());
        assert!(field.errors().contains("required"));
        assert!(!field.shows_errors());
    }

    #[test]
    fn input_marks_dirty_and_revalidates() {
        let mut field = Field::new(String::new(), vec![Validator::Required]);
        field.input("Jack".to_string());
        assert!(field.is_dirty());
        assert!(field.is_valid());
        field.input(String::new());
        assert!(field.shows_errors());
    }

    #[test]
    fn set_value_keeps_field_pristine() {
        let mut field = Field::new(String::new(), vec![Validator::Required]);
        field.set_value("Jack".to_string());
        assert!(field.is_pristine());
        assert!(field.is_valid());
    }

    #[test]
    fn validator_changes_wait_for_revalidate() {
        let mut field = Field::new(String::new(), vec![Validator::Required]);
        field.clear_validators();
        assert!(!field.is_valid());
        field.revalidate();
        assert!(field.is_valid());

        field.set_validators(vec![Validator::Required]);
        assert!(field.is_valid());
        field.revalidate();
        assert!(!field.is_valid());
    }

    #[test]
    fn touching_surfaces_errors() {
        let mut field = Field::new(None::<String>, vec![Validator::Required]);
        assert!(!field.shows_errors());
        field.mark_touched();
        assert!(field.shows_errors());
    }
}
