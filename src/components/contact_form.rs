//! Contact Form Component
//!
//! Sends the form through the EmailJS relay. The submit button's label,
//! icon, gradient and disabled flag all come from the form state; after a
//! success or a failure the button returns to idle once that attempt's
//! cooldown ends.

use dioxus::prelude::*;
use gloo::timers::future::sleep;
use neuralglass_core::{transmit, ContactForm, FormFields, NAME_FIELD, NAME_MIRROR_FIELD};

use crate::context::{use_relay, use_site_config};

const EMAIL_FIELD: &str = "email";
const SUBJECT_FIELD: &str = "subject";
const MESSAGE_FIELD: &str = "message";

#[component]
pub fn ContactFormPanel() -> Element {
    let config = use_site_config();
    let relay = use_relay();
    let cooldown = config.form.cooldown();

    let mut form = use_signal(|| ContactForm::new(&config.relay));
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut name_mirror = use_signal(String::new);

    let collect_fields = move || {
        FormFields::new()
            .with(NAME_FIELD, name())
            .with(EMAIL_FIELD, email())
            .with(SUBJECT_FIELD, subject())
            .with(MESSAGE_FIELD, message())
            .with(NAME_MIRROR_FIELD, name_mirror())
    };

    let mut apply_fields = move |fields: &FormFields| {
        let value = |field: &str| fields.get(field).unwrap_or_default().to_string();
        name.set(value(NAME_FIELD));
        email.set(value(EMAIL_FIELD));
        subject.set(value(SUBJECT_FIELD));
        message.set(value(MESSAGE_FIELD));
        name_mirror.set(value(NAME_MIRROR_FIELD));
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let mut fields = collect_fields();
        let submission = match form.write().submit(&mut fields) {
            Ok(submission) => submission,
            Err(e) => {
                tracing::debug!(error = %e, "Submit ignored");
                return;
            }
        };
        let attempt = form.peek().attempt();
        name_mirror.set(fields.get(NAME_MIRROR_FIELD).unwrap_or_default().to_string());

        let relay = relay.clone();
        spawn(async move {
            let outcome = transmit(&relay, &submission).await;

            let mut fields = collect_fields();
            let state = form.write().resolve(&outcome, &mut fields);
            apply_fields(&fields);

            if state.needs_cooldown() {
                sleep(cooldown).await;
                form.write().cool_down(attempt);
            }
        });
    };

    let view = form.read().view();

    rsx! {
        form { class: "contact-form", id: "contact-form", onsubmit: on_submit,
            div { class: "form-row",
                input {
                    r#type: "text",
                    name: NAME_FIELD,
                    placeholder: "Your Name",
                    required: true,
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                input {
                    r#type: "email",
                    name: EMAIL_FIELD,
                    placeholder: "Your Email",
                    required: true,
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
            }
            input {
                r#type: "text",
                name: SUBJECT_FIELD,
                placeholder: "Subject",
                value: "{subject}",
                oninput: move |evt| subject.set(evt.value()),
            }
            textarea {
                name: MESSAGE_FIELD,
                placeholder: "Your Message",
                rows: "5",
                required: true,
                value: "{message}",
                oninput: move |evt| message.set(evt.value()),
            }
            input {
                r#type: "hidden",
                name: NAME_MIRROR_FIELD,
                value: "{name_mirror}",
            }

            button {
                r#type: "submit",
                class: "submit-btn",
                style: view.style(),
                disabled: view.disabled,
                i { class: "{view.icon}" }
                " {view.label}"
            }
        }
    }
}
