//! UI Components for Neural Glass.
//!
//! Each component renders classes and inline styles computed by
//! `neuralglass-core`; browser access goes through [`crate::dom`].

mod ambient;
mod anchor_link;
mod contact_form;
mod mobile_nav;
mod nav_header;
mod particles;
mod reveal;

pub use ambient::{NeuralLines, ParallaxShapes};
pub use anchor_link::AnchorLink;
pub use contact_form::ContactFormPanel;
pub use nav_header::NavHeader;
pub use particles::ParticleLayer;
pub use reveal::{use_reveal_provider, Reveal};
