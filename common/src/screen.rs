//! The customer screen: one form instance plus the reactions wired to it.
//!
//! The screen is single-threaded and event driven. The host calls [`CustomerScreen::apply`]
//! for every user edit; when the email value-change stream fires, `apply` returns
//! a [`Ticket`] and the host arms a one-shot timer for
//! [`CustomerScreen::debounce_window_ms`] that calls [`CustomerScreen::settle`].
//! A newer ticket always supersedes an older one, so only the last edit of a
//! burst recomputes the email message.

use log::{debug, info};

use crate::config::FormOptions;
use crate::debounce::{Debouncer, Ticket};
use crate::error::FormError;
use crate::form::{CustomerForm, CustomerFormValue, FieldEdit, TextField};
use crate::model::customer::Customer;
use crate::reactions::{email_message, switch_channel};

#[derive(Debug, Clone)]
pub struct CustomerScreen {
    form: CustomerForm,
    email_debounce: Debouncer,
    email_message: String,
}

impl CustomerScreen {
    pub fn new(options: &FormOptions) -> Self {
        Self::from_template(&Customer::default(), options)
    }

    pub fn from_template(customer: &Customer, options: &FormOptions) -> Self {
        Self {
            form: CustomerForm::from_template(customer, options.rating),
            email_debounce: Debouncer::new(options.email_debounce_ms),
            email_message: String::new(),
        }
    }

    pub fn form(&self) -> &CustomerForm {
        &self.form
    }

    pub fn email_message(&self) -> &str {
        &self.email_message
    }

    pub fn debounce_window_ms(&self) -> u32 {
        self.email_debounce.window_ms()
    }

    /// Applies a user edit and runs the reactions it triggers. Returns a
    /// ticket when the email message needs a debounced recompute.
    pub fn apply(&mut self, edit: FieldEdit) -> Result<Option<Ticket>, FormError> {
        let changes = self.form.apply(edit)?;
        let mut email_changed = changes.email;

        if let Some(channel) = changes.notifications {
            switch_channel(&mut self.form, channel);
            // Revalidating email re-emits its value.
            email_changed = true;
        }

        Ok(email_changed.then(|| self.email_debounce.schedule()))
    }

    pub fn touch(&mut self, field: TextField) {
        self.form.touch(field);
    }

    pub fn touch_phone(&mut self) {
        self.form.touch_phone();
    }

    pub fn touch_rating(&mut self) {
        self.form.touch_rating();
    }

    /// True while an email message recompute is waiting for its timer.
    pub fn has_pending_email_message(&self) -> bool {
        self.email_debounce.is_pending()
    }

    /// Timer callback. Recomputes the email message if `ticket` is still the
    /// latest one; returns whether it did.
    pub fn settle(&mut self, ticket: Ticket) -> bool {
        if !self.email_debounce.fire(ticket) {
            return false;
        }
        self.refresh_email_message();
        true
    }

    pub fn add_address(&mut self) {
        self.form.add_address();
    }

    pub fn populate_test_data(&mut self) {
        self.form.populate_test_data();
    }

    /// Serializes the whole tree, valid or not, and logs it. Returns the JSON
    /// for the caller to hand on.
    pub fn save(&self) -> Result<String, FormError> {
        let value: CustomerFormValue = self.form.value();
        let json = serde_json::to_string(&value)?;
        info!("Saved: {json} (valid: {})", self.form.is_valid());
        Ok(json)
    }

    /// Drops any pending email recompute.
    pub fn teardown(&mut self) {
        if self.email_debounce.is_pending() {
            debug!("discarding pending email message recompute");
        }
        self.email_debounce.cancel();
    }

    fn refresh_email_message(&mut self) {
        self.email_message = email_message(self.form.email());
        debug!("email message recomputed: {:?}", self.email_message);
    }
}

impl Default for CustomerScreen {
    fn default() -> Self {
        Self::new(&FormOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::customer::NotificationChannel;

    #[test]
    fn non_email_edits_do_not_schedule() {
        let mut screen = CustomerScreen::default();
        let ticket = screen
            .apply(FieldEdit::Text(TextField::FirstName, "Jack".to_string()))
            .unwrap();
        assert_eq!(ticket, None);
    }

    #[test]
    fn channel_switch_schedules_email_message() {
        let mut screen = CustomerScreen::default();
        screen.touch(TextField::Email);
        let ticket = screen
            .apply(FieldEdit::Notifications(NotificationChannel::Text))
            .unwrap()
            .unwrap();
        assert!(screen.settle(ticket));
        assert_eq!(screen.email_message(), "");

        let ticket = screen
            .apply(FieldEdit::Notifications(NotificationChannel::Email))
            .unwrap()
            .unwrap();
        assert!(screen.settle(ticket));
        assert_eq!(screen.email_message(), "Please enter your email address");
    }

    #[test]
    fn stale_settle_keeps_newer_recompute_pending() {
        let mut screen = CustomerScreen::default();
        let stale = screen
            .apply(FieldEdit::Text(TextField::Email, "j".to_string()))
            .unwrap()
            .unwrap();
        let current = screen
            .apply(FieldEdit::Text(TextField::Email, "jack@".to_string()))
            .unwrap()
            .unwrap();

        assert!(!screen.settle(stale));
        assert!(screen.has_pending_email_message());
        assert!(screen.settle(current));
        assert!(!screen.has_pending_email_message());
        assert_eq!(screen.email_message(), "Please enter a valid email address");
    }

    #[test]
    fn teardown_cancels_pending_recompute() {
        let mut screen = CustomerScreen::default();
        let ticket = screen
            .apply(FieldEdit::Text(TextField::Email, "x".to_string()))
            .unwrap()
            .unwrap();
        screen.teardown();
        assert!(!screen.settle(ticket));
        assert_eq!(screen.email_message(), "");
    }

    #[test]
    fn save_serializes_invalid_forms_too() {
        let screen = CustomerScreen::default();
        assert!(!screen.form().is_valid());
        let json = screen.save().unwrap();
        assert!(json.contains(r#""sendCatalog":true"#));
    }
}
