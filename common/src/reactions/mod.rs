//! Side effects wired to value changes: the notification-channel switch and
//! the email validation message.

mod message;
mod notification;

pub use message::{email_message, validation_message};
pub use notification::{switch_channel, ChannelValidators};
