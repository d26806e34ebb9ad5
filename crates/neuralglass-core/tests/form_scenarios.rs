//! Contact form scenarios
//!
//! Drives the form state machine through a scripted relay, with the
//! cooldown timer running on tokio's paused clock.

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use neuralglass_core::logging::{DiagnosticLayer, MemorySink};
use neuralglass_core::{
    transmit, ContactForm, FormFields, FormState, Relay, SiteConfig, SiteError, SiteResult,
    Submission, NAME_MIRROR_FIELD,
};
use tracing_subscriber::prelude::*;

// ============================================================================
// Test Relay
// ============================================================================

/// Relay that answers with a fixed outcome and remembers what it was sent.
struct ScriptedRelay {
    fail_with: Option<String>,
    sent: Mutex<Vec<Submission>>,
}

impl ScriptedRelay {
    fn accepting() -> Self {
        Self {
            fail_with: None,
            sent: Mutex::new(Vec::new()),
        }
    }

    fn failing(reason: &str) -> Self {
        Self {
            fail_with: Some(reason.to_string()),
            sent: Mutex::new(Vec::new()),
        }
    }

    fn sent(&self) -> Vec<Submission> {
        self.sent.lock().unwrap().clone()
    }
}

impl Relay for ScriptedRelay {
    fn send(&self, submission: &Submission) -> impl Future<Output = SiteResult<()>> {
        self.sent.lock().unwrap().push(submission.clone());
        let outcome = match &self.fail_with {
            None => Ok(()),
            Some(reason) => Err(SiteError::Relay(reason.clone())),
        };
        async move {
            tokio::task::yield_now().await;
            outcome
        }
    }
}

fn filled_form() -> FormFields {
    FormFields::new()
        .with("name", "Grace Hopper")
        .with("email", "grace@example.com")
        .with("subject", "Hello")
        .with("message", "Let's talk about compilers.")
        .with(NAME_MIRROR_FIELD, "")
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test(start_paused = true)]
async fn success_scenario() {
    let config = SiteConfig::default();
    let relay = ScriptedRelay::accepting();
    let mut form = ContactForm::new(&config.relay);
    let mut fields = filled_form();

    let submission = form.submit(&mut fields).unwrap();
    let view = form.view();
    assert_eq!(view.label, "TRANSMITTING...");
    assert!(view.disabled);

    let outcome = transmit(&relay, &submission).await;
    form.resolve(&outcome, &mut fields);

    let view = form.view();
    assert_eq!(form.state(), FormState::Success);
    assert_eq!(view.label, "TRANSMISSION COMPLETE");
    assert!(view.disabled);
    assert!(fields.is_blank());

    let start = tokio::time::Instant::now();
    tokio::time::sleep(config.form.cooldown()).await;
    assert!(start.elapsed() >= config.form.cooldown());
    form.cool_down(form.attempt());

    let view = form.view();
    assert_eq!(view.label, "SEND MESSAGE");
    assert!(!view.disabled);

    let sent = relay.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].service_id, "service_pxz1y57");
    assert_eq!(sent[0].template_id, "template_s3ddk8a");
    assert_eq!(sent[0].fields.get(NAME_MIRROR_FIELD), Some("Grace Hopper"));
}

#[tokio::test(start_paused = true)]
async fn failure_scenario() {
    let config = SiteConfig::default();
    let relay = ScriptedRelay::failing("status 412");
    let mut form = ContactForm::new(&config.relay);
    let mut fields = filled_form();

    let sink = MemorySink::default();
    let subscriber = tracing_subscriber::registry().with(DiagnosticLayer::new(sink.clone()));
    let _guard = tracing::subscriber::set_default(subscriber);

    let submission = form.submit(&mut fields).unwrap();
    assert_eq!(form.view().label, "TRANSMITTING...");
    assert!(form.view().disabled);

    let outcome = transmit(&relay, &submission).await;
    form.resolve(&outcome, &mut fields);

    let view = form.view();
    assert_eq!(form.state(), FormState::Error);
    assert_eq!(view.label, "ERROR: TRY AGAIN");
    assert!(!view.disabled, "error state re-enables immediately");
    assert_eq!(fields.get("message"), Some("Let's talk about compilers."));

    tokio::time::sleep(config.form.cooldown()).await;
    form.cool_down(form.attempt());

    let view = form.view();
    assert_eq!(view.label, "SEND MESSAGE");
    assert!(!view.disabled);

    let errors = sink.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].msg, "Relay call failed");
    let recorded = errors[0].fields.as_ref().unwrap();
    assert!(recorded["error"].as_str().unwrap().contains("status 412"));
}

#[tokio::test(start_paused = true)]
async fn retry_after_failure_can_succeed() {
    let config = SiteConfig::default();
    let mut form = ContactForm::new(&config.relay);
    let mut fields = filled_form();

    let submission = form.submit(&mut fields).unwrap();
    let outcome = transmit(&ScriptedRelay::failing("offline"), &submission).await;
    form.resolve(&outcome, &mut fields);
    assert_eq!(form.state(), FormState::Error);

    // User retries before the cooldown elapses
    let submission = form.submit(&mut fields).unwrap();
    let outcome = transmit(&ScriptedRelay::accepting(), &submission).await;
    form.resolve(&outcome, &mut fields);
    assert_eq!(form.state(), FormState::Success);
    assert!(fields.is_blank());
}

#[tokio::test(start_paused = true)]
async fn success_after_retry_keeps_its_full_cooldown() {
    let config = SiteConfig::default();
    let cooldown = config.form.cooldown();
    let mut form = ContactForm::new(&config.relay);
    let mut fields = filled_form();

    let submission = form.submit(&mut fields).unwrap();
    let failed = form.attempt();
    let outcome = transmit(&ScriptedRelay::failing("offline"), &submission).await;
    form.resolve(&outcome, &mut fields);
    assert_eq!(form.state(), FormState::Error);

    // Retry two seconds into the error cooldown
    tokio::time::sleep(cooldown - Duration::from_secs(3)).await;
    let submission = form.submit(&mut fields).unwrap();
    let retried = form.attempt();
    let outcome = transmit(&ScriptedRelay::accepting(), &submission).await;
    form.resolve(&outcome, &mut fields);
    assert_eq!(form.state(), FormState::Success);

    // The failed attempt's timer expires three seconds into Success
    tokio::time::sleep(Duration::from_secs(3)).await;
    form.cool_down(failed);
    assert_eq!(form.state(), FormState::Success);
    assert_eq!(form.view().label, "TRANSMISSION COMPLETE");
    assert!(form.view().disabled);

    // Only the successful attempt's own timer re-enables the button
    tokio::time::sleep(cooldown - Duration::from_secs(3)).await;
    form.cool_down(retried);
    assert_eq!(form.view().label, "SEND MESSAGE");
    assert!(!form.view().disabled);
}

#[tokio::test]
async fn submit_is_rejected_while_transmitting() {
    let mut form = ContactForm::new(&SiteConfig::default().relay);
    let mut fields = filled_form();

    form.submit(&mut fields).unwrap();
    assert!(matches!(
        form.submit(&mut fields),
        Err(SiteError::InvalidOperation(_))
    ));
    assert_eq!(form.state(), FormState::Transmitting);
}
