use log::debug;

use super::field::Field;
use super::value::{CustomerFormValue, EmailGroupValue};
use crate::error::FormError;
use crate::model::address::{Address, AddressType};
use crate::model::customer::{Customer, NotificationChannel};
use crate::reactions::ChannelValidators;
use crate::validation::{email_matcher, RatingRange, ValidationErrors, Validator};

pub const FIRST_NAME_MIN_LENGTH: usize = 3;
pub const LAST_NAME_MAX_LENGTH: usize = 50;

/// Plain text inputs at the top level of the form (including the email group).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    FirstName,
    LastName,
    Email,
    ConfirmEmail,
}

/// Text inputs of an address block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    Street1,
    Street2,
    City,
    State,
    Zip,
}

/// A single user edit to the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Text(TextField, String),
    /// Phone text. Starts unset; once typed into it holds whatever was typed.
    Phone(String),
    /// Raw rating text; blank text clears the rating.
    Rating(String),
    Notifications(NotificationChannel),
    SendCatalog(bool),
    AddressText { index: usize, field: AddressField, value: String },
    AddressType { index: usize, value: AddressType },
}

/// Which value-change notifications an edit produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueChanges {
    pub email: bool,
    pub notifications: Option<NotificationChannel>,
}

/// Email and its confirmation, validated together.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailGroup {
    pub(crate) email: Field<String>,
    pub(crate) confirm_email: Field<String>,
    errors: ValidationErrors,
}

impl EmailGroup {
    fn new(email: Field<String>, confirm_email: Field<String>) -> Self {
        let mut group = Self {
            email,
            confirm_email,
            errors: ValidationErrors::default(),
        };
        group.revalidate();
        group
    }

    pub fn email(&self) -> &Field<String> {
        &self.email
    }

    pub fn confirm_email(&self) -> &Field<String> {
        &self.confirm_email
    }

    /// Group-level failures (the email/confirmation match).
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.email.is_valid() && self.confirm_email.is_valid()
    }

    pub(crate) fn revalidate(&mut self) {
        self.errors = email_matcher(&self.email, &self.confirm_email).into();
    }

    fn value(&self) -> EmailGroupValue {
        EmailGroupValue {
            email: self.email.value().clone(),
            confirm_email: self.confirm_email.value().clone(),
        }
    }
}

/// One repeatable address block.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressGroup {
    address_type: Field<AddressType>,
    street1: Field<String>,
    street2: Field<String>,
    city: Field<String>,
    state: Field<String>,
    zip: Field<String>,
}

impl AddressGroup {
    pub fn from_address(address: &Address) -> Self {
        Self {
            address_type: Field::new(address.address_type, Vec::new()),
            street1: Field::new(address.street1.clone(), Vec::new()),
            street2: Field::new(address.street2.clone(), Vec::new()),
            city: Field::new(address.city.clone(), Vec::new()),
            state: Field::new(address.state.clone(), Vec::new()),
            zip: Field::new(address.zip.clone(), Vec::new()),
        }
    }

    pub fn address_type(&self) -> &Field<AddressType> {
        &self.address_type
    }

    pub fn text(&self, field: AddressField) -> &Field<String> {
        match field {
            AddressField::Street1 => &self.street1,
            AddressField::Street2 => &self.street2,
            AddressField::City => &self.city,
            AddressField::State => &self.state,
            AddressField::Zip => &self.zip,
        }
    }

    fn text_mut(&mut self, field: AddressField) -> &mut Field<String> {
        match field {
            AddressField::Street1 => &mut self.street1,
            AddressField::Street2 => &mut self.street2,
            AddressField::City => &mut self.city,
            AddressField::State => &mut self.state,
            AddressField::Zip => &mut self.zip,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.address_type.is_valid()
            && [&self.street1, &self.street2, &self.city, &self.state, &self.zip]
                .iter()
                .all(|field| field.is_valid())
    }

    pub fn value(&self) -> Address {
        Address {
            address_type: *self.address_type.value(),
            street1: self.street1.value().clone(),
            street2: self.street2.value().clone(),
            city: self.city.value().clone(),
            state: self.state.value().clone(),
            zip: self.zip.value().clone(),
        }
    }
}

impl Default for AddressGroup {
    fn default() -> Self {
        Self::from_address(&Address::default())
    }
}

/// The customer field tree.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerForm {
    first_name: Field<String>,
    last_name: Field<String>,
    email_group: EmailGroup,
    phone: Field<Option<String>>,
    notifications: Field<NotificationChannel>,
    rating: Field<Option<String>>,
    send_catalog: Field<bool>,
    addresses: Vec<AddressGroup>,
}

impl CustomerForm {
    pub fn new() -> Self {
        Self::from_template(&Customer::default(), RatingRange::default())
    }

    /// Builds the tree from seed values. The email/phone rules follow the
    /// template's notification channel, and at least one address block is
    /// always present.
    pub fn from_template(customer: &Customer, rating_range: RatingRange) -> Self {
        let channel = ChannelValidators::for_channel(customer.notification);

        let mut addresses: Vec<AddressGroup> =
            customer.addresses.iter().map(AddressGroup::from_address).collect();
        if addresses.is_empty() {
            addresses.push(AddressGroup::default());
        }

        Self {
            first_name: Field::new(
                customer.first_name.clone(),
                vec![Validator::Required, Validator::MinLength(FIRST_NAME_MIN_LENGTH)],
            ),
            last_name: Field::new(
                customer.last_name.clone(),
                vec![Validator::Required, Validator::MaxLength(LAST_NAME_MAX_LENGTH)],
            ),
            email_group: EmailGroup::new(
                Field::new(customer.email.clone(), channel.email),
                Field::new(String::new(), vec![Validator::Required]),
            ),
            phone: Field::new(customer.phone.clone(), channel.phone),
            notifications: Field::new(customer.notification, Vec::new()),
            rating: Field::new(customer.rating.clone(), vec![Validator::Range(rating_range)]),
            send_catalog: Field::new(customer.send_catalog, Vec::new()),
            addresses,
        }
    }

    pub fn text(&self, field: TextField) -> &Field<String> {
        match field {
            TextField::FirstName => &self.first_name,
            TextField::LastName => &self.last_name,
            TextField::Email => &self.email_group.email,
            TextField::ConfirmEmail => &self.email_group.confirm_email,
        }
    }

    pub fn first_name(&self) -> &Field<String> {
        &self.first_name
    }

    pub fn last_name(&self) -> &Field<String> {
        &self.last_name
    }

    pub fn email_group(&self) -> &EmailGroup {
        &self.email_group
    }

    pub fn email(&self) -> &Field<String> {
        &self.email_group.email
    }

    pub fn phone(&self) -> &Field<Option<String>> {
        &self.phone
    }

    pub fn notifications(&self) -> &Field<NotificationChannel> {
        &self.notifications
    }

    pub fn rating(&self) -> &Field<Option<String>> {
        &self.rating
    }

    pub fn send_catalog(&self) -> &Field<bool> {
        &self.send_catalog
    }

    pub fn addresses(&self) -> &[AddressGroup] {
        &self.addresses
    }

    pub fn is_valid(&self) -> bool {
        self.first_name.is_valid()
            && self.last_name.is_valid()
            && self.email_group.is_valid()
            && self.phone.is_valid()
            && self.notifications.is_valid()
            && self.rating.is_valid()
            && self.send_catalog.is_valid()
            && self.addresses.iter().all(AddressGroup::is_valid)
    }

    /// Applies a user edit and reports which value-change notifications fired.
    pub fn apply(&mut self, edit: FieldEdit) -> Result<ValueChanges, FormError> {
        let mut changes = ValueChanges::default();
        match edit {
            FieldEdit::Rating(value) => {
                let value = (!value.trim().is_empty()).then_some(value);
                self.rating.input(value);
            }
            FieldEdit::Text(field, value) => {
                self.text_mut(field).input(value);
                if matches!(field, TextField::Email | TextField::ConfirmEmail) {
                    self.email_group.revalidate();
                }
                changes.email = field == TextField::Email;
            }
            FieldEdit::Phone(value) => self.phone.input(Some(value)),
            FieldEdit::Notifications(channel) => {
                self.notifications.input(channel);
                changes.notifications = Some(channel);
            }
            FieldEdit::SendCatalog(value) => self.send_catalog.input(value),
            FieldEdit::AddressText { index, field, value } => {
                self.address_mut(index)?.text_mut(field).input(value);
            }
            FieldEdit::AddressType { index, value } => {
                self.address_mut(index)?.address_type.input(value);
            }
        }
        Ok(changes)
    }

    /// Marks a text field as having lost focus.
    pub fn touch(&mut self, field: TextField) {
        self.text_mut(field).mark_touched();
    }

    pub fn touch_phone(&mut self) {
        self.phone.mark_touched();
    }

    pub fn touch_rating(&mut self) {
        self.rating.mark_touched();
    }

    /// Installs the email/phone rule sets for a channel and revalidates both
    /// fields (and the email group) in the same step.
    pub fn apply_channel_validators(&mut self, validators: ChannelValidators) {
        self.phone.set_validators(validators.phone);
        self.email_group.email.set_validators(validators.email);

        self.phone.revalidate();
        self.email_group.email.revalidate();
        self.email_group.revalidate();
    }

    /// Appends one default address block.
    pub fn add_address(&mut self) {
        self.addresses.push(AddressGroup::default());
        debug!("address added, form now has {}", self.addresses.len());
    }

    /// Writes fixed first and last names without touching any other field.
    pub fn populate_test_data(&mut self) {
        self.first_name.set_value("Tatiana".to_string());
        self.last_name.set_value("Shapovalova".to_string());
    }

    /// Snapshot of every value in the tree, valid or not.
    pub fn value(&self) -> CustomerFormValue {
        CustomerFormValue {
            first_name: self.first_name.value().clone(),
            last_name: self.last_name.value().clone(),
            email_group: self.email_group.value(),
            phone: self.phone.value().clone(),
            notifications: *self.notifications.value(),
            rating: self.rating.value().clone(),
            send_catalog: *self.send_catalog.value(),
            addresses: self.addresses.iter().map(AddressGroup::value).collect(),
        }
    }

    fn text_mut(&mut self, field: TextField) -> &mut Field<String> {
        match field {
            TextField::FirstName => &mut self.first_name,
            TextField::LastName => &mut self.last_name,
            TextField::Email => &mut self.email_group.email,
            TextField::ConfirmEmail => &mut self.email_group.confirm_email,
        }
    }

    fn address_mut(&mut self, index: usize) -> Result<&mut AddressGroup, FormError> {
        let len = self.addresses.len();
        self.addresses
            .get_mut(index)
            .ok_or(FormError::UnknownAddress { index, len })
    }
}

impl Default for CustomerForm {
    fn default() -> Self {
        Self::new()
    }
}
