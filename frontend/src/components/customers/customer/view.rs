//! View rendering for the customer form component.
//!
//! One Bootstrap-styled form: name fields, the email group, phone,
//! notification channel, rating, catalog opt-in, the repeatable address
//! blocks and the action buttons. Every input forwards its value as a
//! `FieldEdit`; blur events mark the field touched.

use yew::html::Scope;
use yew::prelude::*;

use common::form::{AddressField, AddressGroup, FieldEdit, TextField};
use common::model::address::AddressType;
use common::model::customer::NotificationChannel;

use super::helpers::{
    field_message, input_checked, input_class, input_value, phone_message, rating_message,
    select_value, MISMATCH_MESSAGE,
};
use super::messages::Msg;
use super::state::CustomerComponent;

pub fn view(component: &CustomerComponent, ctx: &Context<CustomerComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="card">
            <div class="card-header">{"Sign Up!"}</div>
            <div class="card-body">
                <form novalidate=true onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Save
                })}>
                    { text_row(component, link, TextField::FirstName, "First Name", "text") }
                    { text_row(component, link, TextField::LastName, "Last Name", "text") }
                    { build_email_group(component, link) }
                    { build_phone(component, link) }
                    { build_notifications(component, link) }
                    { build_rating(component, ctx) }
                    { build_send_catalog(component, link) }
                    {
                        if *component.screen.form().send_catalog().value() {
                            build_addresses(component, link)
                        } else {
                            html! {}
                        }
                    }
                    { build_actions(component, link) }
                </form>
            </div>
        </div>
    }
}

fn text_row(
    component: &CustomerComponent,
    link: &Scope<CustomerComponent>,
    field: TextField,
    label: &'static str,
    input_type: &'static str,
) -> Html {
    let state = component.screen.form().text(field);
    let id = field_id(field);

    html! {
        <div class="form-group row mb-2">
            <label class="col-md-2 col-form-label" for={id}>{ label }</label>
            <div class="col-md-8">
                <input
                    class={input_class(state.shows_errors())}
                    id={id}
                    type={input_type}
                    placeholder={format!("{label} (required)")}
                    value={state.value().clone()}
                    oninput={link.callback(move |e: InputEvent| Msg::Edit(FieldEdit::Text(field, input_value(&e))))}
                    onblur={link.callback(move |_| Msg::Blur(field))}
                />
                <span class="invalid-feedback">{ field_message(field, state) }</span>
            </div>
        </div>
    }
}

/// Email and confirmation. The email message is the debounced one kept by the
/// screen; the confirmation also shows the group-level mismatch.
fn build_email_group(component: &CustomerComponent, link: &Scope<CustomerComponent>) -> Html {
    let group = component.screen.form().email_group();
    let email_message = component.screen.email_message();
    let mismatch = group.errors().contains("match");

    let confirm = group.confirm_email();
    let mut confirm_message = field_message(TextField::ConfirmEmail, confirm);
    if mismatch {
        if !confirm_message.is_empty() {
            confirm_message.push(' ');
        }
        confirm_message.push_str(MISMATCH_MESSAGE);
    }

    html! {
        <div class={classes!("email-group", mismatch.then_some("has-error"))}>
            <div class="form-group row mb-2">
                <label class="col-md-2 col-form-label" for="emailId">{"Email"}</label>
                <div class="col-md-8">
                    <input
                        class={input_class(!email_message.is_empty())}
                        id="emailId"
                        type="email"
                        placeholder="Email (required)"
                        value={group.email().value().clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Edit(FieldEdit::Text(TextField::Email, input_value(&e))))}
                        onblur={link.callback(|_| Msg::Blur(TextField::Email))}
                    />
                    <span class="invalid-feedback">{ email_message }</span>
                </div>
            </div>
            <div class="form-group row mb-2">
                <label class="col-md-2 col-form-label" for="confirmEmailId">{"Confirm Email"}</label>
                <div class="col-md-8">
                    <input
                        class={input_class(confirm.shows_errors() || mismatch)}
                        id="confirmEmailId"
                        type="email"
                        placeholder="Confirm Email (required)"
                        value={confirm.value().clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Edit(FieldEdit::Text(TextField::ConfirmEmail, input_value(&e))))}
                        onblur={link.callback(|_| Msg::Blur(TextField::ConfirmEmail))}
                    />
                    <span class="invalid-feedback">{ confirm_message }</span>
                </div>
            </div>
        </div>
    }
}

fn build_phone(component: &CustomerComponent, link: &Scope<CustomerComponent>) -> Html {
    let phone = component.screen.form().phone();

    html! {
        <div class="form-group row mb-2">
            <label class="col-md-2 col-form-label" for="phoneId">{"Phone"}</label>
            <div class="col-md-8">
                <input
                    class={input_class(phone.shows_errors())}
                    id="phoneId"
                    type="tel"
                    placeholder="Phone"
                    value={phone.value().clone().unwrap_or_default()}
                    oninput={link.callback(|e: InputEvent| Msg::Edit(FieldEdit::Phone(input_value(&e))))}
                    onblur={link.callback(|_| Msg::BlurPhone)}
                />
                <span class="invalid-feedback">{ phone_message(phone) }</span>
            </div>
        </div>
    }
}

fn build_notifications(component: &CustomerComponent, link: &Scope<CustomerComponent>) -> Html {
    let selected = *component.screen.form().notifications().value();
    let radio = |channel: NotificationChannel, label: &'static str| {
        html! {
            <label class="form-check-label me-3">
                <input
                    class="form-check-input"
                    type="radio"
                    name="notifications"
                    value={channel.as_str()}
                    checked={selected == channel}
                    onchange={link.callback(move |_| Msg::Edit(FieldEdit::Notifications(channel)))}
                />
                { label }
            </label>
        }
    };

    html! {
        <div class="form-group row mb-2">
            <label class="col-md-2 col-form-label">{"Send Notifications"}</label>
            <div class="col-md-8">
                { radio(NotificationChannel::Email, "Email") }
                { radio(NotificationChannel::Text, "Text") }
            </div>
        </div>
    }
}

fn build_rating(component: &CustomerComponent, ctx: &Context<CustomerComponent>) -> Html {
    let link = ctx.link();
    let rating = component.screen.form().rating();
    let message = if rating.shows_errors() {
        rating_message(&ctx.props().options.rating)
    } else {
        String::new()
    };

    html! {
        <div class="form-group row mb-2">
            <label class="col-md-2 col-form-label" for="ratingId">{"Rating"}</label>
            <div class="col-md-8">
                <input
                    class={input_class(rating.shows_errors())}
                    id="ratingId"
                    type="number"
                    value={rating.value().clone().unwrap_or_default()}
                    oninput={link.callback(|e: InputEvent| Msg::Edit(FieldEdit::Rating(input_value(&e))))}
                    onblur={link.callback(|_| Msg::BlurRating)}
                />
                <span class="invalid-feedback">{ message }</span>
            </div>
        </div>
    }
}

fn build_send_catalog(component: &CustomerComponent, link: &Scope<CustomerComponent>) -> Html {
    html! {
        <div class="form-group row mb-2">
            <div class="col-md-8 offset-md-2">
                <div class="form-check">
                    <label class="form-check-label">
                        <input
                            class="form-check-input"
                            id="sendCatalogId"
                            type="checkbox"
                            checked={*component.screen.form().send_catalog().value()}
                            onchange={link.callback(|e: Event| Msg::Edit(FieldEdit::SendCatalog(input_checked(&e))))}
                        />
                        {"Send me your catalog"}
                    </label>
                </div>
            </div>
        </div>
    }
}

fn build_addresses(component: &CustomerComponent, link: &Scope<CustomerComponent>) -> Html {
    html! {
        <div class="addresses">
            <div>
                {
                    for component.screen.form().addresses().iter().enumerate()
                        .map(|(index, address)| build_address(index, address, link))
                }
            </div>
            <div class="form-group row mb-2">
                <div class="col-md-4">
                    <button
                        class="btn btn-outline-primary"
                        type="button"
                        onclick={link.callback(|_| Msg::AddAddress)}
                    >
                        {"Add Another Address"}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn build_address(index: usize, address: &AddressGroup, link: &Scope<CustomerComponent>) -> Html {
    let address_type = *address.address_type().value();
    let text = |field: AddressField, label: &'static str| {
        html! {
            <div class="form-group row mb-2">
                <label class="col-md-2 col-form-label" for={format!("{}{index}", address_field_id(field))}>
                    { label }
                </label>
                <div class="col-md-8">
                    <input
                        class="form-control"
                        id={format!("{}{index}", address_field_id(field))}
                        type="text"
                        placeholder={label}
                        value={address.text(field).value().clone()}
                        oninput={link.callback(move |e: InputEvent| Msg::Edit(FieldEdit::AddressText {
                            index,
                            field,
                            value: input_value(&e),
                        }))}
                    />
                </div>
            </div>
        }
    };

    html! {
        <div class="card card-body mb-2" key={index}>
            <div class="form-group row mb-2">
                <label class="col-md-2 col-form-label" for={format!("addressType{index}")}>{"Address Type"}</label>
                <div class="col-md-8">
                    <select
                        class="form-select"
                        id={format!("addressType{index}")}
                        onchange={link.callback(move |e: Event| match select_value(&e).parse::<AddressType>() {
                            Ok(value) => Msg::Edit(FieldEdit::AddressType { index, value }),
                            Err(err) => Msg::Rejected(err),
                        })}
                    >
                        <option value="home" selected={address_type == AddressType::Home}>{"Home"}</option>
                        <option value="work" selected={address_type == AddressType::Work}>{"Work"}</option>
                    </select>
                </div>
            </div>
            { text(AddressField::Street1, "Street Address 1") }
            { text(AddressField::Street2, "Street Address 2") }
            { text(AddressField::City, "City") }
            { text(AddressField::State, "State") }
            { text(AddressField::Zip, "Zip Code") }
        </div>
    }
}

fn build_actions(component: &CustomerComponent, link: &Scope<CustomerComponent>) -> Html {
    html! {
        <div class="form-group row mb-2">
            <div class="offset-md-2 col-md-4">
                <button class="btn btn-primary me-3" type="submit">{"Save"}</button>
                <button
                    class="btn btn-outline-secondary"
                    type="button"
                    onclick={link.callback(|_| Msg::PopulateTestData)}
                >
                    {"Test Data"}
                </button>
            </div>
            <div class="col-md-4 text-end">
                {
                    if component.screen.form().is_valid() {
                        html! { <span class="text-success">{"Form is valid"}</span> }
                    } else {
                        html! { <span class="text-muted">{"Form has errors"}</span> }
                    }
                }
            </div>
        </div>
    }
}

fn field_id(field: TextField) -> &'static str {
    match field {
        TextField::FirstName => "firstNameId",
        TextField::LastName => "lastNameId",
        TextField::Email => "emailId",
        TextField::ConfirmEmail => "confirmEmailId",
    }
}

fn address_field_id(field: AddressField) -> &'static str {
    match field {
        AddressField::Street1 => "street1Id",
        AddressField::Street2 => "street2Id",
        AddressField::City => "cityId",
        AddressField::State => "stateId",
        AddressField::Zip => "zipId",
    }
}
