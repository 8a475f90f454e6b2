use chrono::Utc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::countdown::use_countdown;
use crate::components::notification::{Notification, NotificationKind};
use crate::contact::client::FunctionsClient;
use crate::contact::models::{ContactFormData, Region};
use crate::contact::submission::{prepare, send, SubmissionState};
use crate::error::SubmitError;
use crate::rate_limiter::SharedRateLimiter;
use crate::validation::{Field, ValidationResult};

pub const SERVICES: &[&str] = &[
    "Managed IT Support",
    "Network Setup",
    "Cybersecurity",
    "Cloud & Microsoft 365",
    "Hardware & Procurement",
    "Other",
];

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub limiter: SharedRateLimiter,
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Builds the form payload from what the visitor typed. Values are only
/// trimmed here so validation sees the real input; scrubbing happens once
/// the form has passed validation.
pub fn collect_form_data(
    name: &str,
    email: &str,
    company: &str,
    phone: &str,
    service: &str,
    message: &str,
) -> ContactFormData {
    ContactFormData {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        company: optional(company),
        phone: optional(phone),
        service: optional(service),
        message: message.trim().to_string(),
    }
}

fn field_error(errors: &ValidationResult, field: Field) -> Html {
    match errors.error(field) {
        Some(message) => html! { <p class="field-error" id={format!("{}-error", field)}>{message}</p> },
        None => html! {},
    }
}

fn input_class(errors: &ValidationResult, field: Field) -> Classes {
    classes!("contact-input", errors.error(field).map(|_| "invalid"))
}

#[function_component]
pub fn ContactForm(props: &ContactFormProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let company = use_state(String::new);
    let phone = use_state(String::new);
    let service = use_state(String::new);
    let message = use_state(String::new);
    let errors = use_state(ValidationResult::default);
    let state = use_state(SubmissionState::default);
    // Authoritative copy, read synchronously so a double click cannot send twice
    let machine = use_mut_ref(SubmissionState::default);
    let notification = use_state(|| None::<(NotificationKind, String)>);
    let countdown = use_countdown();

    let text_input = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            handle.set(input.value());
        })
    };

    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let on_service = {
        let service = service.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            service.set(select.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let company = company.clone();
        let phone = phone.clone();
        let service = service.clone();
        let message = message.clone();
        let errors = errors.clone();
        let state = state.clone();
        let machine = machine.clone();
        let notification = notification.clone();
        let countdown = countdown.clone();
        let limiter = props.limiter.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if !machine.borrow_mut().begin() {
                log::warn!("Submit ignored, a message is already being sent");
                return;
            }
            state.set(SubmissionState::Submitting);

            let data = collect_form_data(&name, &email, &company, &phone, &service, &message);

            let prepared = {
                let mut limiter = limiter.borrow_mut();
                prepare(data, &mut limiter, Utc::now())
            };

            let request = match prepared {
                Ok(request) => request,
                Err(err) => {
                    match &err {
                        SubmitError::Invalid(result) => errors.set(result.clone()),
                        SubmitError::RateLimited { retry_after_ms } => {
                            countdown.start_from_ms(*retry_after_ms);
                            notification.set(Some((NotificationKind::Error, err.user_message())));
                        }
                        _ => notification.set(Some((NotificationKind::Error, err.user_message()))),
                    }
                    let outcome = Err(err);
                    machine.borrow_mut().finish(&outcome);
                    state.set(machine.borrow().clone());
                    return;
                }
            };
            errors.set(ValidationResult::default());

            let name = name.clone();
            let email = email.clone();
            let company = company.clone();
            let phone = phone.clone();
            let service = service.clone();
            let message = message.clone();
            let state = state.clone();
            let machine = machine.clone();
            let notification = notification.clone();

            spawn_local(async move {
                let outcome = match FunctionsClient::from_env() {
                    Ok(client) => send(&client, &request).await,
                    Err(e) => {
                        log::error!("Contact form cannot be sent: {}", e);
                        Err(e)
                    }
                };

                match &outcome {
                    Ok(()) => {
                        log::info!("Contact form sent");
                        for field in [&name, &email, &company, &phone, &service, &message] {
                            field.set(String::new());
                        }
                        notification.set(Some((
                            NotificationKind::Success,
                            "Thanks! Your message has been sent. We'll be in touch shortly."
                                .to_string(),
                        )));
                    }
                    Err(err) => {
                        notification.set(Some((NotificationKind::Error, err.user_message())));
                    }
                }

                machine.borrow_mut().finish(&outcome);
                state.set(machine.borrow().clone());
            });
        })
    };

    let close_notification = {
        let notification = notification.clone();
        Callback::from(move |_: ()| notification.set(None))
    };

    let submitting = state.is_submitting();
    let blocked = submitting || countdown.is_running();
    let region = Region::from_phone(Some(phone.as_str()).filter(|p| !p.trim().is_empty()));

    html! {
        <form class="contact-form" onsubmit={on_submit} novalidate={true}>
            <div class="form-row">
                <label for="name">{"Name *"}</label>
                <input id="name" type="text" class={input_class(&errors, Field::Name)}
                    value={(*name).clone()} oninput={text_input(&name)} placeholder="Jane Doe" />
                {field_error(&errors, Field::Name)}
            </div>

            <div class="form-row">
                <label for="email">{"Email *"}</label>
                <input id="email" type="email" class={input_class(&errors, Field::Email)}
                    value={(*email).clone()} oninput={text_input(&email)} placeholder="jane@example.com" />
                {field_error(&errors, Field::Email)}
            </div>

            <div class="form-row split">
                <div>
                    <label for="company">{"Company"}</label>
                    <input id="company" type="text" class={input_class(&errors, Field::Company)}
                        value={(*company).clone()} oninput={text_input(&company)} />
                    {field_error(&errors, Field::Company)}
                </div>
                <div>
                    <label for="phone">{"Phone"}</label>
                    <input id="phone" type="tel" class={input_class(&errors, Field::Phone)}
                        value={(*phone).clone()} oninput={text_input(&phone)} placeholder="+61412345678" />
                    {field_error(&errors, Field::Phone)}
                </div>
            </div>

            <div class="form-row">
                <label for="service">{"Service"}</label>
                <select id="service" class={input_class(&errors, Field::Service)} onchange={on_service}>
                    <option value="" selected={service.is_empty()}>{"Select a service"}</option>
                    { for SERVICES.iter().map(|s| html! {
                        <option value={*s} selected={*service == *s}>{*s}</option>
                    }) }
                </select>
                {field_error(&errors, Field::Service)}
            </div>

            <div class="form-row">
                <label for="message">{"Message *"}</label>
                <textarea id="message" rows="6" class={input_class(&errors, Field::Message)}
                    value={(*message).clone()} oninput={on_message}
                    placeholder="Tell us what you need help with" />
                {field_error(&errors, Field::Message)}
            </div>

            <p class="form-hint">
                {format!("Your enquiry will be handled by our {} team.", region.label())}
            </p>

            <button type="submit" class="contact-submit" disabled={blocked}>
                {
                    if submitting {
                        html! { <><span class="loading-spinner"></span>{" Sending..."}</> }
                    } else if countdown.is_running() {
                        html! { {format!("Try again in {}s", countdown.remaining())} }
                    } else {
                        html! { {"Send Message"} }
                    }
                }
            </button>

            {
                if let Some((kind, text)) = (*notification).clone() {
                    html! { <Notification {kind} message={text} on_close={close_notification} /> }
                } else {
                    html! {}
                }
            }
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_form_data;

    #[test]
    fn disallowed_characters_are_reported_on_their_fields() {
        let data = collect_form_data(
            "<Jane Doe>",
            "jane@example.com",
            "",
            "+61<412345678>",
            "",
            "I need help with my network setup please.",
        );

        assert_eq!(data.name, "<Jane Doe>");
        let result = validate_form_data(&data);
        assert!(!result.is_valid);
        assert!(result.error(Field::Name).is_some());
        assert!(result.error(Field::Phone).is_some());
    }

    #[test]
    fn blank_optionals_are_absent_and_values_trimmed() {
        let data = collect_form_data(
            "  Jane Doe ",
            " jane@example.com ",
            "   ",
            "",
            "",
            "  I need help with my network setup please. ",
        );

        assert_eq!(data.name, "Jane Doe");
        assert_eq!(data.email, "jane@example.com");
        assert_eq!(data.company, None);
        assert_eq!(data.phone, None);
        assert_eq!(data.service, None);
        assert!(validate_form_data(&data).is_valid);
    }
}
