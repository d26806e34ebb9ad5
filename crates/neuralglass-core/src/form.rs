//! Contact form submission state machine
//!
//! ```text
//! Idle ──submit──▶ Transmitting ──ok──▶ Success ──cooldown──▶ Idle
//!                        │
//!                        └──err──▶ Error ──cooldown──▶ Idle
//! ```
//!
//! The submit button is derived entirely from [`FormState`] via
//! [`ContactForm::view`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::RelayConfig;
use crate::error::{SiteError, SiteResult};
use crate::relay::Submission;

/// Name of the visible name input
pub const NAME_FIELD: &str = "name";

/// Hidden field the relay template reads the sender's name from
pub const NAME_MIRROR_FIELD: &str = "nom_prenom";

/// Submission state of the contact form
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FormState {
    #[default]
    Idle,
    Transmitting,
    Success,
    Error,
}

/// Rendered state of the submit button
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ButtonView {
    pub label: &'static str,
    /// Font Awesome classes for the leading icon
    pub icon: &'static str,
    pub gradient: &'static str,
    pub disabled: bool,
}

impl ButtonView {
    pub fn style(&self) -> String {
        format!("background: {};", self.gradient)
    }
}

impl FormState {
    pub fn view(&self) -> ButtonView {
        match self {
            FormState::Idle => ButtonView {
                label: "SEND MESSAGE",
                icon: "fas fa-paper-plane",
                gradient: "linear-gradient(45deg, #00ffff, #ff0080)",
                disabled: false,
            },
            FormState::Transmitting => ButtonView {
                label: "TRANSMITTING...",
                icon: "fas fa-spinner fa-spin",
                gradient: "linear-gradient(45deg, #8000ff, #00ffff)",
                disabled: true,
            },
            FormState::Success => ButtonView {
                label: "TRANSMISSION COMPLETE",
                icon: "fas fa-check",
                gradient: "linear-gradient(45deg, #00ff00, #00ffff)",
                disabled: true,
            },
            // Re-enabled immediately so the user can retry during the cooldown
            FormState::Error => ButtonView {
                label: "ERROR: TRY AGAIN",
                icon: "fas fa-exclamation-triangle",
                gradient: "linear-gradient(45deg, #ff0000, #ff6b8b)",
                disabled: false,
            },
        }
    }

    /// Whether a cooldown timer should follow this state
    pub fn needs_cooldown(&self) -> bool {
        matches!(self, FormState::Success | FormState::Error)
    }
}

/// The form's field set, keyed by input name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormFields(BTreeMap<String, String>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Copy the name input into the hidden mirror field.
    pub fn mirror_name(&mut self) {
        if let Some(name) = self.0.get(NAME_FIELD).cloned() {
            self.0.insert(NAME_MIRROR_FIELD.to_string(), name);
        }
    }

    /// Empty every field, keeping the field names.
    pub fn clear(&mut self) {
        for value in self.0.values_mut() {
            value.clear();
        }
    }

    pub fn is_blank(&self) -> bool {
        self.0.values().all(|value| value.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Contact form state machine.
#[derive(Debug, Clone)]
pub struct ContactForm {
    state: FormState,
    /// Incremented on every accepted submit; cooldowns are tied to it
    attempt: u64,
    service_id: String,
    template_id: String,
}

impl ContactForm {
    pub fn new(relay: &RelayConfig) -> Self {
        Self {
            state: FormState::Idle,
            attempt: 0,
            service_id: relay.service_id.clone(),
            template_id: relay.template_id.clone(),
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn view(&self) -> ButtonView {
        self.state.view()
    }

    /// Number of the most recent accepted submission.
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    /// Begin a submission: mirror the name field and enter Transmitting.
    ///
    /// Rejected while the button is disabled (Transmitting or Success).
    pub fn submit(&mut self, fields: &mut FormFields) -> SiteResult<Submission> {
        if self.view().disabled {
            return Err(SiteError::InvalidOperation(format!(
                "cannot submit while {:?}",
                self.state
            )));
        }

        fields.mirror_name();
        self.attempt += 1;
        self.state = FormState::Transmitting;
        tracing::info!(
            attempt = self.attempt,
            service = %self.service_id,
            template = %self.template_id,
            "Transmitting contact form"
        );

        Ok(Submission {
            service_id: self.service_id.clone(),
            template_id: self.template_id.clone(),
            fields: fields.clone(),
        })
    }

    /// Apply the relay's outcome. Success clears the fields.
    pub fn resolve(&mut self, outcome: &SiteResult<()>, fields: &mut FormFields) -> FormState {
        if self.state != FormState::Transmitting {
            tracing::debug!(state = ?self.state, "Ignoring relay outcome outside Transmitting");
            return self.state;
        }

        self.state = match outcome {
            Ok(()) => {
                fields.clear();
                FormState::Success
            }
            Err(_) => FormState::Error,
        };
        self.state
    }

    /// Return to Idle after the Success/Error cooldown of `attempt`.
    ///
    /// A timer left over from an earlier attempt does nothing, so a retry's
    /// outcome always gets its full cooldown.
    pub fn cool_down(&mut self, attempt: u64) -> FormState {
        if attempt != self.attempt {
            tracing::debug!(attempt, current = self.attempt, "Ignoring stale cooldown");
            return self.state;
        }
        if self.state.needs_cooldown() {
            self.state = FormState::Idle;
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> FormFields {
        FormFields::new()
            .with("name", "Ada")
            .with("email", "ada@example.com")
            .with("message", "Hello")
            .with(NAME_MIRROR_FIELD, "")
    }

    #[test]
    fn idle_view() {
        let view = FormState::Idle.view();
        assert_eq!(view.label, "SEND MESSAGE");
        assert_eq!(view.icon, "fas fa-paper-plane");
        assert!(!view.disabled);
        assert_eq!(view.style(), "background: linear-gradient(45deg, #00ffff, #ff0080);");
    }

    #[test]
    fn disabled_only_while_busy_or_complete() {
        assert!(FormState::Transmitting.view().disabled);
        assert!(FormState::Success.view().disabled);
        assert!(!FormState::Error.view().disabled);
        assert!(!FormState::Idle.view().disabled);
    }

    #[test]
    fn submit_mirrors_name() {
        let mut form = ContactForm::new(&RelayConfig::default());
        let mut fields = fields();
        let submission = form.submit(&mut fields).unwrap();

        assert_eq!(form.state(), FormState::Transmitting);
        assert_eq!(fields.get(NAME_MIRROR_FIELD), Some("Ada"));
        assert_eq!(submission.fields.get(NAME_MIRROR_FIELD), Some("Ada"));
        assert_eq!(submission.service_id, "service_pxz1y57");
        assert_eq!(submission.template_id, "template_s3ddk8a");
    }

    #[test]
    fn double_submit_is_rejected() {
        let mut form = ContactForm::new(&RelayConfig::default());
        let mut fields = fields();
        form.submit(&mut fields).unwrap();
        let err = form.submit(&mut fields).unwrap_err();
        assert!(matches!(err, SiteError::InvalidOperation(_)));
    }

    #[test]
    fn success_clears_and_cools_down() {
        let mut form = ContactForm::new(&RelayConfig::default());
        let mut fields = fields();
        form.submit(&mut fields).unwrap();

        assert_eq!(form.resolve(&Ok(()), &mut fields), FormState::Success);
        assert!(fields.is_blank());
        assert_eq!(fields.get("email"), Some(""));

        assert_eq!(form.cool_down(form.attempt()), FormState::Idle);
        assert!(!form.view().disabled);
    }

    #[test]
    fn error_keeps_fields_and_allows_retry() {
        let mut form = ContactForm::new(&RelayConfig::default());
        let mut fields = fields();
        form.submit(&mut fields).unwrap();

        let outcome = Err(SiteError::Relay("status 500".to_string()));
        assert_eq!(form.resolve(&outcome, &mut fields), FormState::Error);
        assert_eq!(fields.get("message"), Some("Hello"));
        assert!(!form.view().disabled);

        // Retry during the cooldown is allowed
        assert!(form.submit(&mut fields).is_ok());
    }

    #[test]
    fn stale_outcome_is_ignored() {
        let mut form = ContactForm::new(&RelayConfig::default());
        let mut fields = fields();
        assert_eq!(form.resolve(&Ok(()), &mut fields), FormState::Idle);
        assert_eq!(fields.get("name"), Some("Ada"));
    }

    #[test]
    fn cool_down_from_idle_is_noop() {
        let mut form = ContactForm::new(&RelayConfig::default());
        assert_eq!(form.cool_down(form.attempt()), FormState::Idle);
    }

    #[test]
    fn mirror_without_name_is_noop() {
        let mut fields = FormFields::new().with("email", "x@example.com");
        fields.mirror_name();
        assert_eq!(fields.get(NAME_MIRROR_FIELD), None);
    }

    #[test]
    fn earlier_cooldown_cannot_end_a_retry_early() {
        let mut form = ContactForm::new(&RelayConfig::default());
        let mut fields = fields();

        form.submit(&mut fields).unwrap();
        let failed = form.attempt();
        let outcome = Err(SiteError::Relay("status 500".to_string()));
        assert_eq!(form.resolve(&outcome, &mut fields), FormState::Error);

        form.submit(&mut fields).unwrap();
        let retried = form.attempt();
        assert_ne!(failed, retried);
        assert_eq!(form.resolve(&Ok(()), &mut fields), FormState::Success);

        // The failed attempt's timer fires while Success is showing
        assert_eq!(form.cool_down(failed), FormState::Success);
        assert!(form.view().disabled);

        assert_eq!(form.cool_down(retried), FormState::Idle);
    }
}
