#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod dom;
mod logging;
mod pages;
mod relay;
mod theme;

use neuralglass_core::SiteConfig;
use tracing::Level;

/// Site configuration, embedded at compile time
const SITE_CONFIG: &str = include_str!("../assets/site.json");

/// Parse the embedded configuration, falling back to defaults.
fn load_config() -> SiteConfig {
    match SiteConfig::from_json(SITE_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Invalid site configuration, using defaults");
            SiteConfig::default()
        }
    }
}

fn main() {
    logging::init(Level::INFO);

    let config = load_config();
    if config.relay.public_key.is_empty() {
        tracing::warn!("No EmailJS public key configured; contact form submissions will fail");
    }

    tracing::info!(
        service = %config.relay.service_id,
        template = %config.relay.template_id,
        "Starting Neural Glass"
    );

    dioxus::LaunchBuilder::web()
        .with_context(config)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses_to_defaults() {
        let config = SiteConfig::from_json(SITE_CONFIG).unwrap();
        assert_eq!(config, SiteConfig::default());
    }
}
