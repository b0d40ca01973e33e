//! Component state for the customer form.

use common::screen::CustomerScreen;
use gloo_timers::callback::Timeout;

use super::props::CustomerProps;

/// State container for the `CustomerComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update` modules.
pub struct CustomerComponent {
    /// The form tree, its reactions and the current email message.
    pub screen: CustomerScreen,

    /// Pending email debounce timer. Replacing or dropping the handle cancels it.
    pub email_timer: Option<Timeout>,
}

impl CustomerComponent {
    pub fn new(props: &CustomerProps) -> Self {
        let screen = match &props.template {
            Some(customer) => CustomerScreen::from_template(customer, &props.options),
            None => CustomerScreen::new(&props.options),
        };
        Self {
            screen,
            email_timer: None,
        }
    }

    /// Cancels the pending email timer, if any.
    pub fn cancel_email_timer(&mut self) {
        self.email_timer = None;
    }
}
