use serde::{Deserialize, Serialize};

use crate::model::address::Address;
use crate::model::customer::NotificationChannel;

/// Plain value object produced by [`super::CustomerForm::value`]. Mirrors the
/// shape of the field tree, including the nested email group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerFormValue {
    pub first_name: String,
    pub last_name: String,
    pub email_group: EmailGroupValue,
    pub phone: Option<String>,
    pub notifications: NotificationChannel,
    pub rating: Option<String>,
    pub send_catalog: bool,
    pub addresses: Vec<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailGroupValue {
    pub email: String,
    pub confirm_email: String,
}
