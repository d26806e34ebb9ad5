//! Email relay capability
//!
//! The contact form never talks to the network itself. It hands a
//! [`Submission`] to a [`Relay`] and reacts to the binary outcome.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::config::RelayConfig;
use crate::error::{SiteError, SiteResult};
use crate::form::FormFields;

/// One relay invocation: which service and template, and the form's fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub service_id: String,
    pub template_id: String,
    pub fields: FormFields,
}

/// Something that can deliver a submission.
pub trait Relay {
    fn send(&self, submission: &Submission) -> impl Future<Output = SiteResult<()>>;
}

/// Send a submission and report failures on the diagnostic channel.
///
/// No retry is attempted; the caller decides what an error means.
pub async fn transmit<R: Relay>(relay: &R, submission: &Submission) -> SiteResult<()> {
    let outcome = relay.send(submission).await;
    match &outcome {
        Ok(()) => tracing::info!(template = %submission.template_id, "Relay accepted submission"),
        Err(e) => tracing::error!(error = %e, "Relay call failed"),
    }
    outcome
}

/// Body of an EmailJS `email/send` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailJsPayload {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: FormFields,
}

impl EmailJsPayload {
    /// Build the request body for a submission.
    ///
    /// Fails when no public key is configured; EmailJS would reject the
    /// request anyway.
    pub fn new(submission: &Submission, config: &RelayConfig) -> SiteResult<Self> {
        if config.public_key.trim().is_empty() {
            return Err(SiteError::Config("relay public key is not set".to_string()));
        }
        Ok(Self {
            service_id: submission.service_id.clone(),
            template_id: submission.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: submission.fields.clone(),
        })
    }

    pub fn to_json(&self) -> SiteResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> Submission {
        Submission {
            service_id: "service_pxz1y57".to_string(),
            template_id: "template_s3ddk8a".to_string(),
            fields: FormFields::new()
                .with("name", "Ada")
                .with("nom_prenom", "Ada"),
        }
    }

    #[test]
    fn payload_shape() {
        let config = RelayConfig {
            public_key: "pk_live".to_string(),
            ..RelayConfig::default()
        };
        let payload = EmailJsPayload::new(&submission(), &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();

        assert_eq!(value["service_id"], "service_pxz1y57");
        assert_eq!(value["template_id"], "template_s3ddk8a");
        assert_eq!(value["user_id"], "pk_live");
        assert_eq!(value["template_params"]["nom_prenom"], "Ada");
    }

    #[test]
    fn missing_public_key_is_config_error() {
        let err = EmailJsPayload::new(&submission(), &RelayConfig::default()).unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }
}
