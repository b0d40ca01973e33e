//! The customer field tree: scalar fields with interaction flags and rules,
//! the email group with its cross-field check, and the repeatable address
//! blocks.

mod customer_form;
mod field;
mod value;

pub use customer_form::{
    AddressField, AddressGroup, CustomerForm, EmailGroup, FieldEdit, TextField, ValueChanges,
    FIRST_NAME_MIN_LENGTH, LAST_NAME_MAX_LENGTH,
};
pub use field::{Field, FieldValue};
pub use value::{CustomerFormValue, EmailGroupValue};
