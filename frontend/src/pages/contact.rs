use chrono::Utc;
use gloo_net::http::Request;
use log::{info, warn};
use serde::Deserialize;
use serde_json::{json, Value};
use wasm_bindgen_futures::spawn_local;
use web_sys::SubmitEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::contact_fields::{ContactFormData, ContactFormFields, FieldErrors};
use crate::components::decor::{Blob, FloatingShape, Wave};
use crate::config;

const MIN_MESSAGE_LEN: usize = 10;

/// Everything the contact form owns: current values and the current verdict.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub data: ContactFormData,
    pub errors: FieldErrors,
}

impl FormState {
    pub fn with_subject(subject: Option<String>) -> Self {
        Self {
            data: ContactFormData {
                subject: subject.unwrap_or_default(),
                ..Default::default()
            },
            errors: FieldErrors::new(),
        }
    }

    /// Stores the new value and clears any error on that field.
    pub fn change(&mut self, field: &str, value: String) {
        self.data.set(field, value);
        self.errors.remove(field);
    }
}

pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

/// Subject is optional and never checked.
pub fn validate(data: &ContactFormData) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if data.name.trim().is_empty() {
        errors.insert("name".to_string(), "Name is required".to_string());
    }
    let email = data.email.trim();
    if email.is_empty() {
        errors.insert("email".to_string(), "Email is required".to_string());
    } else if !is_valid_email(email) {
        errors.insert("email".to_string(), "Enter a valid email address".to_string());
    }
    let message = data.message.trim();
    if message.is_empty() {
        errors.insert("message".to_string(), "Message is required".to_string());
    } else if message.chars().count() < MIN_MESSAGE_LEN {
        errors.insert(
            "message".to_string(),
            format!("Message must be at least {} characters", MIN_MESSAGE_LEN),
        );
    }
    errors
}

pub fn contact_payload(data: &ContactFormData, submitted_at: &str) -> Value {
    json!({
        "name": data.name.trim(),
        "email": data.email.trim(),
        "subject": data.subject.trim(),
        "message": data.message.trim(),
        "submitted_at": submitted_at,
    })
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

async fn send_contact(payload: Value) -> Result<(), String> {
    let response = Request::post(&config::site().contact_endpoint())
        .json(&payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.ok() {
        return Ok(());
    }
    gloo_console::log!(format!("Contact request failed with status {}", response.status()));
    match response.json::<ErrorResponse>().await {
        Ok(err) => Err(err.error),
        Err(_) => Err(format!("Request failed with status {}", response.status())),
    }
}

#[derive(Clone, Debug, PartialEq)]
enum SubmitStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let subject = use_search_param("subject".to_string());
    let form = use_state(move || FormState::with_subject(subject));
    let status = use_state(|| SubmitStatus::Idle);

    let on_change = {
        let form = form.clone();
        Callback::from(move |(field, value): (String, String)| {
            let mut next = (*form).clone();
            next.change(&field, value);
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == SubmitStatus::Sending {
                return;
            }
            let errors = validate(&form.data);
            if !errors.is_empty() {
                warn!("Contact form has {} invalid field(s)", errors.len());
                form.set(FormState {
                    data: form.data.clone(),
                    errors,
                });
                return;
            }

            let payload = contact_payload(&form.data, &Utc::now().to_rfc3339());
            let form = form.clone();
            let status = status.clone();
            status.set(SubmitStatus::Sending);
            spawn_local(async move {
                match send_contact(payload).await {
                    Ok(()) => {
                        info!("Contact message sent");
                        form.set(FormState::default());
                        status.set(SubmitStatus::Sent);
                    }
                    Err(err) => {
                        warn!("Contact message failed: {}", err);
                        status.set(SubmitStatus::Failed(err));
                    }
                }
            });
        })
    };

    let sending = *status == SubmitStatus::Sending;

    html! {
        <form class="contact-form rounded-3xl bg-white p-8 shadow-xl md:p-12" onsubmit={on_submit}>
            <ContactFormFields
                form_data={form.data.clone()}
                errors={form.errors.clone()}
                on_change={on_change}
            />
            <div class="mt-8 flex flex-wrap items-center gap-4">
                <button
                    type="submit"
                    disabled={sending}
                    class="rounded-full bg-indigo-700 px-8 py-4 font-bold text-white hover:bg-indigo-600 focus:outline-none focus-visible:ring-4 focus-visible:ring-indigo-300 disabled:cursor-wait disabled:opacity-70"
                >
                    { if sending { "Sending..." } else { "Send Message" } }
                </button>
                <div role="status" aria-live="polite" class="text-sm">
                    {
                        match &*status {
                            SubmitStatus::Sent => html! {
                                <p class="font-semibold text-teal-700">{"Thanks! We will get back to you within two business days."}</p>
                            },
                            SubmitStatus::Failed(err) => html! {
                                <p class="font-semibold text-red-700">
                                    {format!("Your message could not be sent ({}). Please email us at {}.", err, config::site().contact_email)}
                                </p>
                            },
                            _ => html! {},
                        }
                    }
                </div>
            </div>
        </form>
    }
}

#[function_component(ContactHero)]
pub fn contact_hero() -> Html {
    let site = config::site();
    html! {
        <section class="contact-hero relative overflow-hidden bg-indigo-950 pb-32 pt-40 text-white" aria-labelledby="contact-heading">
            <Blob color="bg-fuchsia-500/20" position="-top-20 right-10" />
            <FloatingShape shape="circle" position="bottom-24 left-1/3" size="w-12 h-12" />
            <div class="relative z-10 mx-auto max-w-4xl px-6 text-center">
                <h1 id="contact-heading" class="mb-6 text-4xl font-extrabold md:text-6xl">{"Let's Talk Accessibility"}</h1>
                <p class="mx-auto max-w-2xl text-lg text-indigo-100">
                    {"Tell us about your product and deadlines. An auditor, not a salesperson, will reply."}
                </p>
                <p class="mt-6">
                    <a
                        href={format!("mailto:{}", site.contact_email)}
                        aria-label={format!("Email us at {}", site.contact_email)}
                        class="font-semibold text-amber-300 underline-offset-4 hover:underline"
                    >
                        {site.contact_email}
                    </a>
                </p>
            </div>
            <Wave color="text-slate-50" />
        </section>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="contact-page bg-slate-50">
            <ContactHero />
            <div class="mx-auto -mt-16 max-w-3xl px-6 pb-24">
                <ContactForm />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(name: &str, email: &str, subject: &str, message: &str) -> ContactFormData {
        ContactFormData {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn empty_form_flags_required_fields_but_not_subject() {
        let errors = validate(&ContactFormData::default());
        assert_eq!(errors.get("name").map(String::as_str), Some("Name is required"));
        assert_eq!(errors.get("email").map(String::as_str), Some("Email is required"));
        assert_eq!(errors.get("message").map(String::as_str), Some("Message is required"));
        assert!(!errors.contains_key("subject"));
    }

    #[test]
    fn valid_form_has_no_errors() {
        let errors = validate(&data("Ada", "ada@example.com", "", "We need an audit soon."));
        assert!(errors.is_empty());
    }

    #[test]
    fn short_message_and_bad_email_are_rejected() {
        let errors = validate(&data("Ada", "ada@", "", "Hi"));
        assert_eq!(
            errors.get("email").map(String::as_str),
            Some("Enter a valid email address")
        );
        assert_eq!(
            errors.get("message").map(String::as_str),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b@mail.example.org"));
        assert!(!is_valid_email("ada.example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada@@example.com"));
        assert!(!is_valid_email("ada lovelace@example.com"));
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut state = FormState::default();
        state.errors = validate(&state.data);
        state.change("name", "Ada".to_string());
        assert_eq!(state.data.name, "Ada");
        assert!(!state.errors.contains_key("name"));
        assert!(state.errors.contains_key("email"));
    }

    #[test]
    fn subject_can_be_prefilled() {
        let state = FormState::with_subject(Some("Training".to_string()));
        assert_eq!(state.data.subject, "Training");
        assert_eq!(FormState::with_subject(None), FormState::default());
    }

    #[test]
    fn payload_is_trimmed() {
        let payload = contact_payload(
            &data(" Ada ", "ada@example.com ", "", "Please audit our shop."),
            "2026-01-01T00:00:00+00:00",
        );
        assert_eq!(payload["name"], "Ada");
        assert_eq!(payload["email"], "ada@example.com");
        assert_eq!(payload["subject"], "");
        assert_eq!(payload["submitted_at"], "2026-01-01T00:00:00+00:00");
    }
}
