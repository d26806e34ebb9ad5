//! Site configuration
//!
//! Every timing, threshold and identifier the page behaviors use. All fields
//! default to the values the Neural Glass template ships with, so a partial
//! JSON document only needs to name what it overrides.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SiteResult;

/// Default EmailJS REST endpoint
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Default EmailJS service identifier
pub const DEFAULT_SERVICE_ID: &str = "service_pxz1y57";

/// Default EmailJS template identifier
pub const DEFAULT_TEMPLATE_ID: &str = "template_s3ddk8a";

/// Top-level configuration for all page behaviors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub scroll: ScrollConfig,
    pub parallax: ParallaxConfig,
    pub pulse: PulseConfig,
    pub particles: ParticleConfig,
    pub reveal: RevealOptions,
    pub form: FormConfig,
    pub relay: RelayConfig,
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON configuration document.
    pub fn from_json(json: &str) -> SiteResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Header styling and active-section detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Header is "scrolled" strictly above this offset (px)
    pub header_threshold_px: f64,
    /// Added to the scroll offset before testing section ranges (px)
    pub section_probe_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_threshold_px: 50.0,
            section_probe_px: 100.0,
        }
    }
}

/// Parallax factors for decorative shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Translation per px of scroll, multiplied by `index + 1`
    pub speed_step: f64,
    /// Degrees of rotation per px of scroll
    pub rotation_per_px: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            speed_step: 0.3,
            rotation_per_px: 0.1,
        }
    }
}

/// Neural-line pulse timings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    pub period_ms: u64,
    /// Delay between consecutive lines reaching their peak
    pub stagger_ms: u64,
    /// How long a line holds its peak before resting
    pub hold_ms: u64,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            period_ms: 2000,
            stagger_ms: 300,
            hold_ms: 200,
        }
    }
}

impl PulseConfig {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }
}

/// Particle emission and appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub spawn_interval_ms: u64,
    pub min_size_px: f64,
    pub max_size_px: f64,
    pub min_duration_ms: u64,
    pub max_duration_ms: u64,
    /// Drift is drawn from `[-max_drift_px, max_drift_px)`
    pub max_drift_px: f64,
    pub palette: Vec<String>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            spawn_interval_ms: 1500,
            min_size_px: 1.0,
            max_size_px: 5.0,
            min_duration_ms: 2000,
            max_duration_ms: 5000,
            max_drift_px: 100.0,
            palette: vec![
                "#00ffff".to_string(),
                "#ff0080".to_string(),
                "#8000ff".to_string(),
            ],
        }
    }
}

impl ParticleConfig {
    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    /// Upper bound on concurrently live particles under constant-rate spawning.
    pub fn steady_state_bound(&self) -> usize {
        let interval = self.spawn_interval_ms.max(1);
        self.max_duration_ms.div_ceil(interval) as usize
    }
}

/// Intersection watcher options for reveal-on-scroll elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible
    pub threshold: f64,
    /// CSS margin applied to the viewport when testing intersection
    pub root_margin: String,
    /// Initial downward offset of hidden elements (px)
    pub offset_px: f64,
    pub transition_secs: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            offset_px: 50.0,
            transition_secs: 0.8,
        }
    }
}

/// Contact form behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Delay before a Success or Error button returns to Idle
    pub cooldown_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self { cooldown_ms: 5000 }
    }
}

impl FormConfig {
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }
}

/// Email relay (EmailJS) identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    /// EmailJS public key (`user_id`); empty means the relay is not configured
    pub public_key: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            service_id: DEFAULT_SERVICE_ID.to_string(),
            template_id: DEFAULT_TEMPLATE_ID.to_string(),
            public_key: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_template() {
        let config = SiteConfig::default();
        assert_eq!(config.scroll.header_threshold_px, 50.0);
        assert_eq!(config.scroll.section_probe_px, 100.0);
        assert_eq!(config.pulse.period(), Duration::from_millis(2000));
        assert_eq!(config.particles.spawn_interval(), Duration::from_millis(1500));
        assert_eq!(config.particles.palette.len(), 3);
        assert_eq!(config.reveal.root_margin, "0px 0px -50px 0px");
        assert_eq!(config.form.cooldown(), Duration::from_secs(5));
        assert_eq!(config.relay.service_id, "service_pxz1y57");
        assert_eq!(config.relay.template_id, "template_s3ddk8a");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{"relay": {"public_key": "pk_test"}}"#).unwrap();
        assert_eq!(config.relay.public_key, "pk_test");
        assert_eq!(config.relay.service_id, DEFAULT_SERVICE_ID);
        assert_eq!(config.form.cooldown_ms, 5000);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SiteConfig::from_json("{\"scroll\": 3").is_err());
    }

    #[test]
    fn steady_state_bound_rounds_up() {
        let config = ParticleConfig::default();
        assert_eq!(config.steady_state_bound(), 4);
    }
}
