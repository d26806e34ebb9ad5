//! Neural Glass Core Library
//!
//! Page behaviors for the Neural Glass landing page, modelled as explicit
//! state machines and pure functions so they can be tested without a browser.
//!
//! ## Components
//!
//! - **Navigation**: mobile menu open/close ([`nav`])
//! - **Anchors**: same-page smooth scroll targets ([`anchor`])
//! - **Scroll styling**: scrolled header and active nav link ([`scroll`])
//! - **Ambient animation**: parallax shapes and neural-line pulse ([`ambient`])
//! - **Particles**: short-lived rising particles ([`particles`])
//! - **Reveal**: one-way fade-in on intersection ([`reveal`])
//! - **Contact form**: submit state machine around an email relay ([`form`], [`relay`])
//!
//! ## Quick Start
//!
//! ```ignore
//! use neuralglass_core::{ScrollStyler, SectionBounds, SiteConfig};
//!
//! let config = SiteConfig::default();
//! let styler = ScrollStyler::new(config.scroll.clone());
//! let sections = vec![
//!     SectionBounds::new("home", 0.0, 800.0),
//!     SectionBounds::new("about", 800.0, 600.0),
//! ];
//!
//! let snapshot = styler.react(750.0, &sections);
//! assert!(snapshot.scrolled);
//! assert_eq!(snapshot.active.as_deref(), Some("about"));
//! ```

pub mod ambient;
pub mod anchor;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod nav;
pub mod particles;
pub mod relay;
pub mod reveal;
pub mod scroll;

// Re-exports
pub use ambient::{LineVisual, PulseSchedule, PulseStep, ShapeTransform};
pub use anchor::{resolve_anchor, AnchorAction};
pub use config::{
    FormConfig, ParallaxConfig, ParticleConfig, PulseConfig, RelayConfig, RevealOptions,
    ScrollConfig, SiteConfig,
};
pub use error::{SiteError, SiteResult};
pub use form::{ButtonView, ContactForm, FormFields, FormState, NAME_FIELD, NAME_MIRROR_FIELD};
pub use nav::{ClickTarget, MenuState};
pub use particles::{ParticleEmitter, ParticleField, ParticleSpec};
pub use relay::{transmit, EmailJsPayload, Relay, Submission};
pub use reveal::{RevealState, RevealTracker};
pub use scroll::{active_section, header_scrolled, link_is_active, ScrollSnapshot, ScrollStyler, SectionBounds};
