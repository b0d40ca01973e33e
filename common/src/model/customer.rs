use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormError;
use crate::model::address::Address;

/// Seed values for the customer form.
///
/// A `Customer` is only an initial-value template: the form copies these
/// values into its fields once, at construction, and from then on the live
/// field tree is the source of truth. Nothing reads the template back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Unset until the user enters a number.
    pub phone: Option<String>,
    /// Free-text rating as typed by the user. `None` means "not rated".
    pub rating: Option<String>,
    pub send_catalog: bool,
    pub notification: NotificationChannel,
    pub addresses: Vec<Address>,
}

impl Default for Customer {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: None,
            rating: None,
            send_catalog: true,
            notification: NotificationChannel::Email,
            addresses: vec![Address::default()],
        }
    }
}

/// How the customer wants to be contacted. Drives which of email/phone is mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    #[default]
    Email,
    Text,
}

impl NotificationChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationChannel::Email => "email",
            NotificationChannel::Text => "text",
        }
    }
}

impl fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationChannel {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(NotificationChannel::Email),
            "text" => Ok(NotificationChannel::Text),
            other => Err(FormError::UnknownNotificationChannel(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_has_one_home_address() {
        let customer = Customer::default();
        assert_eq!(customer.addresses, vec![Address::default()]);
        assert!(customer.send_catalog);
        assert_eq!(customer.notification, NotificationChannel::Email);
    }

    #[test]
    fn channel_parses_only_known_values() {
        assert_eq!("text".parse::<NotificationChannel>().ok(), Some(NotificationChannel::Text));
        assert!(matches!(
            "sms".parse::<NotificationChannel>(),
            Err(FormError::UnknownNotificationChannel(value)) if value == "sms"
        ));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let customer: Customer = serde_json::from_str(r#"{"firstName":"Ada"}"#).unwrap();
        assert_eq!(customer.first_name, "Ada");
        assert!(customer.send_catalog);
        assert_eq!(customer.addresses.len(), 1);
    }
}
