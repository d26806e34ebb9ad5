//! Visual theme for Neural Glass.

mod styles;

pub use styles::{FONT_AWESOME, GLOBAL_STYLES};
