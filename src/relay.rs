//! EmailJS transport for the contact form.

use std::future::Future;

use gloo::net::http::Request;
use neuralglass_core::{EmailJsPayload, Relay, RelayConfig, SiteError, SiteResult, Submission};

/// Relay that POSTs submissions to the EmailJS REST endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct EmailJsRelay {
    config: RelayConfig,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }
}

impl Relay for EmailJsRelay {
    fn send(&self, submission: &Submission) -> impl Future<Output = SiteResult<()>> {
        let payload = EmailJsPayload::new(submission, &self.config);
        let endpoint = self.config.endpoint.clone();

        async move {
            let payload = payload?;
            let response = Request::post(&endpoint)
                .json(&payload)
                .map_err(|e| SiteError::Relay(e.to_string()))?
                .send()
                .await
                .map_err(|e| SiteError::Relay(e.to_string()))?;

            if response.ok() {
                return Ok(());
            }

            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(SiteError::Relay(format!("status {}: {}", status, body)))
        }
    }
}
