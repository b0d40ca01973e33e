//! Update function for the customer form component.
//!
//! Elm-style: receives the component state, the `Context` and a `Msg`,
//! forwards the message to the form screen and returns whether the view
//! should re-render.

use gloo_console::{error, log};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use common::debounce::Ticket;
use common::error::FormError;

use super::helpers::show_toast;
use super::messages::Msg;
use super::state::CustomerComponent;

pub fn update(
    component: &mut CustomerComponent,
    ctx: &Context<CustomerComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Edit(edit) => {
            match component.screen.apply(edit) {
                Ok(Some(ticket)) => arm_email_timer(component, ctx, ticket),
                Ok(None) => {}
                Err(err) => report(&err),
            }
            true
        }
        Msg::Blur(field) => {
            component.screen.touch(field);
            true
        }
        Msg::BlurPhone => {
            component.screen.touch_phone();
            true
        }
        Msg::BlurRating => {
            component.screen.touch_rating();
            true
        }
        Msg::EmailSettled(ticket) => {
            // A stale ticket must not drop the newer pending timer.
            let settled = component.screen.settle(ticket);
            if settled {
                component.email_timer = None;
            }
            settled
        }
        Msg::AddAddress => {
            component.screen.add_address();
            true
        }
        Msg::PopulateTestData => {
            component.screen.populate_test_data();
            true
        }
        Msg::Save => {
            match component.screen.save() {
                Ok(json) => {
                    log!("Saved:", json);
                    show_toast("Customer saved.");
                }
                Err(err) => report(&err),
            }
            false
        }
        Msg::Rejected(err) => {
            report(&err);
            false
        }
    }
}

/// Starts the quiet-period timer for `ticket`. Storing the new handle drops
/// the previous one, which cancels it.
fn arm_email_timer(
    component: &mut CustomerComponent,
    ctx: &Context<CustomerComponent>,
    ticket: Ticket,
) {
    let link = ctx.link().clone();
    component.email_timer = Some(Timeout::new(
        component.screen.debounce_window_ms(),
        move || link.send_message(Msg::EmailSettled(ticket)),
    ));
}

fn report(err: &FormError) {
    error!(err.to_string());
    show_toast(&err.to_string());
}
