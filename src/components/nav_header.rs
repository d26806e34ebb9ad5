//! Navigation Header Component
//!
//! Fixed glass header with the logo, desktop links and the mobile menu
//! toggle. Picks up the `scrolled` class past the scroll threshold and
//! highlights the link of the section in view.

use dioxus::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::mobile_nav::MobileNav;
use crate::context::{use_menu, use_scroll};
use crate::dom::MENU_TOGGLE_ID;

/// Page section reachable from the navigation
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavSection {
    Home,
    Features,
    Showcase,
    Timeline,
    Contact,
}

impl NavSection {
    pub const ALL: [NavSection; 5] = [
        NavSection::Home,
        NavSection::Features,
        NavSection::Showcase,
        NavSection::Timeline,
        NavSection::Contact,
    ];

    /// Get the display name for this section
    pub fn display_name(&self) -> &'static str {
        match self {
            NavSection::Home => "Home",
            NavSection::Features => "Features",
            NavSection::Showcase => "Showcase",
            NavSection::Timeline => "Timeline",
            NavSection::Contact => "Contact",
        }
    }

    /// Element id of the section
    pub fn id(&self) -> &'static str {
        match self {
            NavSection::Home => "home",
            NavSection::Features => "features",
            NavSection::Showcase => "showcase",
            NavSection::Timeline => "timeline",
            NavSection::Contact => "contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }
}

/// Navigation Header component
///
/// - Left: "Neural Glass" logo
/// - Center: section links, `active` on the section in view
/// - Right (mobile only): hamburger toggle sharing the menu state with
///   [`MobileNav`]
#[component]
pub fn NavHeader() -> Element {
    let scroll = use_scroll();
    let menu = use_menu();

    let snapshot = scroll.read().clone();
    let menu_class = menu.read().class();

    rsx! {
        header { class: snapshot.header_class(),
            nav { class: "nav-container",
                AnchorLink { href: "#home", class: "logo",
                    div { class: "logo-icon" }
                    span { class: "logo-text", "Neural Glass" }
                }

                ul { class: "nav-links",
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

                button {
                    id: MENU_TOGGLE_ID,
                    class: "mobile-menu-toggle {menu_class}",
                    "aria-label": "Toggle menu",
                    span {}
                    span {}
                    span {}
                }
            }
        }

        MobileNav {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neuralglass_core::{ScrollConfig, ScrollSnapshot, ScrollStyler, SectionBounds};

    #[test]
    fn hrefs_match_section_ids() {
        for section in NavSection::ALL {
            assert_eq!(section.href(), format!("#{}", section.id()));
        }
    }

    #[test]
    fn only_the_section_in_view_is_highlighted() {
        let sections: Vec<SectionBounds> = NavSection::ALL
            .iter()
            .enumerate()
            .map(|(i, s)| SectionBounds::new(s.id(), i as f64 * 800.0, 800.0))
            .collect();
        let snapshot: ScrollSnapshot =
            ScrollStyler::new(ScrollConfig::default()).react(1650.0, &sections);

        let active: Vec<NavSection> = NavSection::ALL
            .into_iter()
            .filter(|s| snapshot.link_class(&s.href()) == "active")
            .collect();
        assert_eq!(active, vec![NavSection::Showcase]);
    }
}
