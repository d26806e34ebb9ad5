//! Mobile Navigation Component
//!
//! Slide-down panel for screens < 768px, opened by the header toggle.

use dioxus::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::nav_header::NavSection;
use crate::context::{use_menu, use_scroll};
use crate::dom::MOBILE_NAV_ID;

/// Mobile navigation panel
///
/// Open and close transitions are driven by the document click listener
/// installed with the menu state; this component only renders it.
#[component]
pub fn MobileNav() -> Element {
    let scroll = use_scroll();
    let menu = use_menu();

    let snapshot = scroll.read().clone();
    let menu_class = menu.read().class();

    rsx! {
        nav { id: MOBILE_NAV_ID, class: "mobile-nav {menu_class}",
            ul {
                for section in NavSection::ALL {
                    li { key: "{section:?}",
                        AnchorLink {
                            href: section.href(),
                            class: snapshot.link_class(&section.href()),
                            {section.display_name()}
                        }
                    }
                }
            }
        }
    }
}
