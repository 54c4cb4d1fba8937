use std::collections::HashMap;

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormData {
    /// Writes `value` into the field called `field`. Unknown names are ignored.
    pub fn set(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "email" => self.email = value,
            "subject" => self.subject = value,
            "message" => self.message = value,
            _ => {}
        }
    }
}

/// Field name to error message, holding only the fields that are currently invalid.
pub type FieldErrors = HashMap<String, String>;

/// Accessibility wiring for one field, derived from the parent's error map.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldA11y {
    pub error_id: String,
    pub error: Option<String>,
}

impl FieldA11y {
    pub fn for_field(field: &str, errors: &FieldErrors) -> Self {
        Self {
            error_id: format!("{}-error", field),
            error: errors.get(field).cloned(),
        }
    }

    pub fn invalid(&self) -> Option<AttrValue> {
        self.error.as_ref().map(|_| AttrValue::from("true"))
    }

    pub fn described_by(&self) -> Option<AttrValue> {
        self.error
            .as_ref()
            .map(|_| AttrValue::from(self.error_id.clone()))
    }

    pub fn input_class(&self) -> &'static str {
        if self.error.is_some() {
            "w-full rounded-lg border-2 border-red-600 bg-white px-4 py-3 text-slate-900 focus:outline-none focus:ring-2 focus:ring-red-600"
        } else {
            "w-full rounded-lg border border-slate-300 bg-white px-4 py-3 text-slate-900 focus:border-indigo-600 focus:outline-none focus:ring-2 focus:ring-indigo-600"
        }
    }

    fn view_error(&self) -> Html {
        match &self.error {
            Some(message) => html! {
                <p id={self.error_id.clone()} class="mt-2 text-sm font-medium text-red-700" role="alert">
                    {message}
                </p>
            },
            None => html! {},
        }
    }
}

/// Maps a field's raw input value to the parent's `(field, value)` change callback.
pub fn change_for(field: &'static str, on_change: &Callback<(String, String)>) -> Callback<String> {
    on_change.reform(move |value: String| (field.to_string(), value))
}

/// One change callback per form field, each tagged with its own field name.
#[derive(Clone)]
pub struct FieldChanges {
    pub name: Callback<String>,
    pub email: Callback<String>,
    pub subject: Callback<String>,
    pub message: Callback<String>,
}

impl FieldChanges {
    pub fn new(on_change: &Callback<(String, String)>) -> Self {
        Self {
            name: change_for("name", on_change),
            email: change_for("email", on_change),
            subject: change_for("subject", on_change),
            message: change_for("message", on_change),
        }
    }
}

fn input_value(change: Callback<String>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        change.emit(input.value());
    })
}

fn textarea_value(change: Callback<String>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        change.emit(input.value());
    })
}

const LABEL_CLASS: &str = "mb-2 block text-sm font-semibold text-slate-800";

#[derive(Properties, PartialEq)]
pub struct ContactFormFieldsProps {
    pub form_data: ContactFormData,
    pub errors: FieldErrors,
    /// Receives `(field_name, new_value)` for every keystroke.
    pub on_change: Callback<(String, String)>,
}

#[function_component(ContactFormFields)]
pub fn contact_form_fields(props: &ContactFormFieldsProps) -> Html {
    let changes = FieldChanges::new(&props.on_change);

    let name = FieldA11y::for_field("name", &props.errors);
    let email = FieldA11y::for_field("email", &props.errors);
    let message = FieldA11y::for_field("message", &props.errors);

    html! {
        <div class="contact-fields space-y-6">
            <div class="grid gap-6 md:grid-cols-2">
                <div>
                    <label for="name" class={LABEL_CLASS}>{"Name"}</label>
                    <input
                        id="name"
                        name="name"
                        type="text"
                        autocomplete="name"
                        aria-required="true"
                        class={name.input_class()}
                        value={props.form_data.name.clone()}
                        oninput={input_value(changes.name.clone())}
                        aria-invalid={name.invalid()}
                        aria-describedby={name.described_by()}
                    />
                    { name.view_error() }
                </div>
                <div>
                    <label for="email" class={LABEL_CLASS}>{"Email"}</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        autocomplete="email"
                        aria-required="true"
                        class={email.input_class()}
                        value={props.form_data.email.clone()}
                        oninput={input_value(changes.email.clone())}
                        aria-invalid={email.invalid()}
                        aria-describedby={email.described_by()}
                    />
                    { email.view_error() }
                </div>
            </div>
            // Subject is optional and carries no error slot.
            <div>
                <label for="subject" class={LABEL_CLASS}>{"Subject"}</label>
                <input
                    id="subject"
                    name="subject"
                    type="text"
                    class="w-full rounded-lg border border-slate-300 bg-white px-4 py-3 text-slate-900 focus:border-indigo-600 focus:outline-none focus:ring-2 focus:ring-indigo-600"
                    value={props.form_data.subject.clone()}
                    oninput={input_value(changes.subject.clone())}
                />
            </div>
            <div>
                <label for="message" class={LABEL_CLASS}>{"Message"}</label>
                <textarea
                    id="message"
                    name="message"
                    rows="6"
                    aria-required="true"
                    class={message.input_class()}
                    value={props.form_data.message.clone()}
                    oninput={textarea_value(changes.message.clone())}
                    aria-invalid={message.invalid()}
                    aria-describedby={message.described_by()}
                />
                { message.view_error() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use yew::ServerRenderer;

    fn errors(pairs: &[(&str, &str)]) -> FieldErrors {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn one_keystroke_emits_one_change() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let on_change = {
            let calls = calls.clone();
            Callback::from(move |change: (String, String)| calls.borrow_mut().push(change))
        };

        change_for("email", &on_change).emit("a".to_string());

        assert_eq!(*calls.borrow(), vec![("email".to_string(), "a".to_string())]);
    }

    #[test]
    fn each_field_reports_under_its_own_name() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let on_change = {
            let calls = calls.clone();
            Callback::from(move |change: (String, String)| calls.borrow_mut().push(change))
        };

        let changes = FieldChanges::new(&on_change);
        changes.name.emit("Ada".to_string());
        changes.email.emit("ada@example.com".to_string());
        changes.subject.emit("Audit".to_string());
        changes.message.emit("Hello there".to_string());

        let mut data = ContactFormData::default();
        for (field, value) in calls.borrow().iter() {
            data.set(field, value.clone());
        }
        assert_eq!(calls.borrow().len(), 4);
        assert_eq!(
            data,
            ContactFormData {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                subject: "Audit".to_string(),
                message: "Hello there".to_string(),
            }
        );
    }

    #[test]
    fn error_wiring_follows_the_map() {
        let errs = errors(&[("name", "Name is required")]);
        let name = FieldA11y::for_field("name", &errs);
        assert_eq!(name.error.as_deref(), Some("Name is required"));
        assert_eq!(name.invalid(), Some(AttrValue::from("true")));
        assert_eq!(name.described_by(), Some(AttrValue::from("name-error")));

        let email = FieldA11y::for_field("email", &errs);
        assert_eq!(email.error, None);
        assert_eq!(email.invalid(), None);
        assert_eq!(email.described_by(), None);
        assert!(!email.input_class().contains("red"));
    }

    #[test]
    fn set_ignores_unknown_fields() {
        let mut data = ContactFormData::default();
        data.set("email", "ada@example.com".to_string());
        data.set("phone", "555".to_string());
        assert_eq!(data.email, "ada@example.com");
        assert_eq!(
            data,
            ContactFormData {
                email: "ada@example.com".to_string(),
                ..Default::default()
            }
        );
    }

    #[tokio::test]
    async fn only_the_named_field_is_marked_invalid() {
        let html = ServerRenderer::<ContactFormFields>::with_props(|| ContactFormFieldsProps {
            form_data: ContactFormData::default(),
            errors: errors(&[("name", "Name is required")]),
            on_change: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await;

        assert_eq!(html.matches(r#"aria-invalid="true""#).count(), 1);
        assert!(html.contains("Name is required"));
        assert!(html.contains(r#"id="name-error""#));
        assert!(html.contains(r#"aria-describedby="name-error""#));
        assert!(!html.contains("email-error"));
    }

    #[tokio::test]
    async fn subject_error_is_never_shown() {
        let html = ServerRenderer::<ContactFormFields>::with_props(|| ContactFormFieldsProps {
            form_data: ContactFormData::default(),
            errors: errors(&[("subject", "Subject is too long")]),
            on_change: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(!html.contains("Subject is too long"));
        assert!(!html.contains("aria-invalid"));
    }

    #[tokio::test]
    async fn inputs_show_the_parent_value() {
        let html = ServerRenderer::<ContactFormFields>::with_props(|| ContactFormFieldsProps {
            form_data: ContactFormData {
                email: "ada@example.com".to_string(),
                ..Default::default()
            },
            errors: FieldErrors::new(),
            on_change: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains(r#"value="ada@example.com""#));
    }
}
