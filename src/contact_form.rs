use std::collections::HashMap;

use folio_core::contact::{ContactField, ContactForm};
use gloo::net::http::Request;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::notice::{self, NoticeKind};

const FORM_HOST_PATH: &str = "/";
const SUBMIT_LABEL: &str = "Send Message";
const SENDING_LABEL: &str = "Sending...";
const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
const FAILED_MESSAGE: &str = "Unable to send message. Please check your connection and try again.";

#[derive(Clone, Debug, PartialEq, Eq)]
enum FieldStatus {
    Valid,
    Invalid(String),
}

type FieldStatuses = HashMap<ContactField, FieldStatus>;

fn field_id(field: ContactField) -> &'static str {
    field.name()
}

fn input_value(event: &InputEvent) -> Option<String> {
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    target
        .dyn_ref::<HtmlTextAreaElement>()
        .map(|area| area.value())
}

fn check_all(form: &ContactForm) -> FieldStatuses {
    ContactField::ALL
        .iter()
        .map(|field| {
            let status = match form.check(*field) {
                Ok(()) => FieldStatus::Valid,
                Err(err) => FieldStatus::Invalid(err.to_string()),
            };
            (*field, status)
        })
        .collect()
}

async fn submit_to_host(form: &ContactForm) -> Result<(), String> {
    let response = Request::post(FORM_HOST_PATH)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(form.encode_for_host())
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;
    if response.ok() {
        Ok(())
    } else {
        Err(format!(
            "Form submission failed with status: {}",
            response.status()
        ))
    }
}

#[function_component(ContactFormView)]
pub(crate) fn contact_form_view() -> Html {
    let form = use_state(ContactForm::default);
    let statuses = use_state(FieldStatuses::new);
    let submitting = use_state(|| false);

    let on_input = |field: ContactField| {
        let form = form.clone();
        let statuses = statuses.clone();
        Callback::from(move |event: InputEvent| {
            let Some(value) = input_value(&event) else {
                return;
            };
            let mut next = (*form).clone();
            *next.value_mut(field) = value;
            form.set(next);
            if statuses.contains_key(&field) {
                let mut cleared = (*statuses).clone();
                cleared.remove(&field);
                statuses.set(cleared);
            }
        })
    };

    let on_blur = |field: ContactField| {
        let form = form.clone();
        let statuses = statuses.clone();
        Callback::from(move |_event: FocusEvent| {
            let status = match form.check(field) {
                Ok(()) => FieldStatus::Valid,
                Err(err) => FieldStatus::Invalid(err.to_string()),
            };
            let mut next = (*statuses).clone();
            next.insert(field, status);
            statuses.set(next);
        })
    };

    let on_honeypot = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let Some(value) = input_value(&event) else {
                return;
            };
            let mut next = (*form).clone();
            next.website = value;
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let statuses = statuses.clone();
        let submitting = submitting.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }
            let checked = check_all(&form);
            let all_valid = checked
                .values()
                .all(|status| matches!(status, FieldStatus::Valid));
            statuses.set(checked);
            if !all_valid {
                return;
            }
            if form.is_spam() {
                gloo::console::warn!("Honeypot field filled, possible spam submission");
                return;
            }
            submitting.set(true);
            let snapshot = (*form).clone();
            let form = form.clone();
            let statuses = statuses.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                match submit_to_host(&snapshot).await {
                    Ok(()) => {
                        notice::show(SENT_MESSAGE, NoticeKind::Success);
                        form.set(ContactForm::default());
                        statuses.set(FieldStatuses::new());
                    }
                    Err(err) => {
                        gloo::console::error!("contact form submission error", err);
                        notice::show(FAILED_MESSAGE, NoticeKind::Danger);
                    }
                }
                submitting.set(false);
            });
        })
    };

    let field_class = |field: ContactField| {
        let mut class = classes!("form-control");
        match statuses.get(&field) {
            Some(FieldStatus::Valid) => class.push("is-valid"),
            Some(FieldStatus::Invalid(_)) => class.push("is-invalid"),
            None => {}
        }
        class
    };
    let field_error = |field: ContactField| match statuses.get(&field) {
        Some(FieldStatus::Invalid(message)) => message.clone(),
        _ => String::new(),
    };
    let submit_label = if *submitting { SENDING_LABEL } else { SUBMIT_LABEL };

    html! {
        <form id="contactForm" name="contact" novalidate=true onsubmit={on_submit}>
            <div class="mb-3">
                <label for={field_id(ContactField::FullName)} class="form-label">
                    {"Full Name"}
                </label>
                <input
                    type="text"
                    id={field_id(ContactField::FullName)}
                    name={ContactField::FullName.name()}
                    class={field_class(ContactField::FullName)}
                    required=true
                    value={form.full_name.clone()}
                    oninput={on_input(ContactField::FullName)}
                    onblur={on_blur(ContactField::FullName)}
                />
                <div id="fullNameError" class="invalid-feedback">
                    {field_error(ContactField::FullName)}
                </div>
            </div>
            <div class="mb-3">
                <label for={field_id(ContactField::Email)} class="form-label">{"Email"}</label>
                <input
                    type="email"
                    id={field_id(ContactField::Email)}
                    name={ContactField::Email.name()}
                    class={field_class(ContactField::Email)}
                    required=true
                    value={form.email.clone()}
                    oninput={on_input(ContactField::Email)}
                    onblur={on_blur(ContactField::Email)}
                />
                <div id="emailError" class="invalid-feedback">
                    {field_error(ContactField::Email)}
                </div>
            </div>
            <div class="mb-3">
                <label for={field_id(ContactField::Message)} class="form-label">{"Message"}</label>
                <textarea
                    id={field_id(ContactField::Message)}
                    name={ContactField::Message.name()}
                    class={field_class(ContactField::Message)}
                    rows="5"
                    required=true
                    value={form.message.clone()}
                    oninput={on_input(ContactField::Message)}
                    onblur={on_blur(ContactField::Message)}
                />
                <div id="messageError" class="invalid-feedback">
                    {field_error(ContactField::Message)}
                </div>
            </div>
            <div class="visually-hidden" aria-hidden="true">
                <label for="website">{"Website"}</label>
                <input
                    type="text"
                    id="website"
                    name={folio_core::contact::HONEYPOT_FIELD}
                    tabindex="-1"
                    autocomplete="off"
                    value={form.website.clone()}
                    oninput={on_honeypot}
                />
            </div>
            <button type="submit" class="btn btn-primary" disabled={*submitting}>
                {submit_label}
            </button>
        </form>
    }
}
