//! Page-wide context for Neural Glass.
//!
//! `App` provides the site configuration and the relay; the landing page
//! provides the live scroll snapshot, the mobile menu state and the reveal
//! tracker so that every component reads the same source of truth.
//!
//! ## Usage
//!
//! ```ignore
//! // In a child component
//! let config = use_site_config();
//! let scroll = use_scroll();
//! let header_class = scroll.read().header_class();
//! ```

use dioxus::prelude::*;
use neuralglass_core::{MenuState, RevealTracker, ScrollSnapshot, ScrollStyler, SiteConfig};

use crate::dom;
use crate::relay::EmailJsRelay;

/// Hook to access the site configuration from context.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

/// Hook to access the contact form relay from context.
pub fn use_relay() -> EmailJsRelay {
    use_context::<EmailJsRelay>()
}

/// Latest scroll reaction, shared by the header and the parallax shapes.
pub fn use_scroll() -> Signal<ScrollSnapshot> {
    use_context::<Signal<ScrollSnapshot>>()
}

/// Mobile menu open/closed state.
pub fn use_menu() -> Signal<MenuState> {
    use_context::<Signal<MenuState>>()
}

/// Reveal state for every observed element.
pub fn use_reveal() -> Signal<RevealTracker> {
    use_context::<Signal<RevealTracker>>()
}

/// Provide the scroll snapshot and keep it current.
///
/// Reacts once after mount and then on every window scroll event. The
/// listener is removed when the providing component unmounts.
pub fn use_scroll_provider() -> Signal<ScrollSnapshot> {
    let config = use_site_config();
    let mut snapshot = use_context_provider(|| Signal::new(ScrollSnapshot::default()));
    let styler = use_hook(|| ScrollStyler::new(config.scroll.clone()));

    let mut listener = use_signal(|| None);
    use_effect(move || {
        let styler = styler.clone();
        let react = move || snapshot.set(styler.react(dom::scroll_offset(), &dom::measure_sections()));
        let mut react_now = react.clone();
        react_now();
        listener.set(dom::on_window_scroll(react));
    });

    snapshot
}

/// Provide the mobile menu state and close it on document clicks.
pub fn use_menu_provider() -> Signal<MenuState> {
    let mut menu = use_context_provider(|| Signal::new(MenuState::default()));

    let mut listener = use_signal(|| None);
    use_effect(move || {
        listener.set(dom::on_document_click(move |target| {
            let next = menu.peek().on_click(target);
            if next != *menu.peek() {
                menu.set(next);
            }
        }));
    });

    menu
}
