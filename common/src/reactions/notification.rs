use log::debug;

use crate::form::CustomerForm;
use crate::model::customer::NotificationChannel;
use crate::validation::Validator;

/// Rule sets for the two fields the notification channel controls.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelValidators {
    pub email: Vec<Validator>,
    pub phone: Vec<Validator>,
}

impl ChannelValidators {
    /// Texting needs a phone number and nothing from email; email needs a
    /// well-formed address and nothing from phone.
    pub fn for_channel(channel: NotificationChannel) -> Self {
        match channel {
            NotificationChannel::Text => Self {
                email: Vec::new(),
                phone: vec![Validator::Required],
            },
            NotificationChannel::Email => Self {
                email: vec![Validator::Required, Validator::Email],
                phone: Vec::new(),
            },
        }
    }
}

/// Reconfigures the email and phone rules for `channel`.
pub fn switch_channel(form: &mut CustomerForm, channel: NotificationChannel) {
    debug!("notification channel switched to {channel}");
    form.apply_channel_validators(ChannelValidators::for_channel(channel));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FieldEdit, TextField};

    #[test]
    fn text_mode_requires_phone_and_clears_email() {
        let mut form = CustomerForm::new();
        form.apply(FieldEdit::Text(TextField::Email, "not-an-email".to_string())).unwrap();
        assert!(form.email().errors().contains("email"));

        switch_channel(&mut form, NotificationChannel::Text);

        assert!(form.email().is_valid());
        assert!(form.email().validators().is_empty());
        assert!(form.phone().errors().contains("required"));
    }

    #[test]
    fn email_mode_restores_email_rules() {
        let mut form = CustomerForm::new();
        switch_channel(&mut form, NotificationChannel::Text);
        form.apply(FieldEdit::Text(TextField::Email, "still-bad".to_string())).unwrap();
        assert!(form.email().is_valid());

        switch_channel(&mut form, NotificationChannel::Email);

        assert!(form.phone().is_valid());
        assert!(form.phone().validators().is_empty());
        assert!(form.email().errors().contains("email"));
    }

    #[test]
    fn switching_twice_is_stable() {
        let mut form = CustomerForm::new();
        switch_channel(&mut form, NotificationChannel::Text);
        let once = form.clone();
        switch_channel(&mut form, NotificationChannel::Text);
        assert_eq!(form, once);
    }
}
