//! Utility functions for the customer form component: DOM value extraction,
//! per-field validation messages and the toast notification.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use common::form::{Field, TextField, FIRST_NAME_MIN_LENGTH, LAST_NAME_MAX_LENGTH};
use common::validation::{RatingRange, ValidationError};

/// Current text of the `<input>` that raised `event`.
pub fn input_value(event: &Event) -> String {
    let input: HtmlInputElement = event.target_unchecked_into();
    input.value()
}

pub fn input_checked(event: &Event) -> bool {
    let input: HtmlInputElement = event.target_unchecked_into();
    input.checked()
}

pub fn select_value(event: &Event) -> String {
    let select: HtmlSelectElement = event.target_unchecked_into();
    select.value()
}

/// Bootstrap classes for an input, flagged invalid when `invalid`.
pub fn input_class(invalid: bool) -> Classes {
    classes!("form-control", invalid.then_some("is-invalid"))
}

/// Inline message for a non-email text field. The email input uses the
/// debounced message kept by the screen instead.
pub fn field_message(field: TextField, state: &Field<String>) -> String {
    if !state.shows_errors() {
        return String::new();
    }
    state
        .errors()
        .iter()
        .filter_map(|error| text_field_message(field, error))
        .collect::<Vec<_>>()
        .join(" ")
}

fn text_field_message(field: TextField, error: &ValidationError) -> Option<String> {
    let message = match (field, error) {
        (TextField::FirstName, ValidationError::Required) => {
            "Please enter your first name.".to_string()
        }
        (TextField::FirstName, ValidationError::MinLength { .. }) => {
            format!("The first name must be at least {FIRST_NAME_MIN_LENGTH} characters.")
        }
        (TextField::LastName, ValidationError::Required) => {
            "Please enter your last name.".to_string()
        }
        (TextField::LastName, ValidationError::MaxLength { .. }) => {
            format!("The last name must be less than {LAST_NAME_MAX_LENGTH} characters.")
        }
        (TextField::ConfirmEmail, ValidationError::Required) => {
            "Please confirm your email address.".to_string()
        }
        _ => return None,
    };
    Some(message)
}

pub fn phone_message(state: &Field<Option<String>>) -> String {
    if state.shows_errors() && state.errors().contains("required") {
        "Please enter your phone number.".to_string()
    } else {
        String::new()
    }
}

pub fn rating_message(range: &RatingRange) -> String {
    format!("Please rate your experience from {} to {}.", range.min, range.max)
}

pub const MISMATCH_MESSAGE: &str = "The confirmation does not match the email address.";

/// Displays a temporary notification message at the bottom of the screen.
///
/// Creates and injects a styled `div` into the document body and removes it
/// again after three seconds. Used to confirm a save and to report edits the
/// form rejected.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    for (property, value) in [
        ("position", "fixed"),
        ("bottom", "20px"),
        ("left", "50%"),
        ("transform", "translateX(-50%)"),
        ("background", "rgba(0, 0, 0, 0.8)"),
        ("color", "#fff"),
        ("padding", "10px 20px"),
        ("border-radius", "4px"),
        ("z-index", "10000"),
    ] {
        style.set_property(property, value).ok();
    }

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}
