//! Landing page - the single Neural Glass page.
//!
//! Owns the page-wide state (scroll snapshot, mobile menu, reveal tracker)
//! and lays out the sections the navigation links point at.

use dioxus::prelude::*;

use crate::components::{
    use_reveal_provider, AnchorLink, ContactFormPanel, NavHeader, NeuralLines, ParallaxShapes,
    ParticleLayer, Reveal,
};
use crate::context::{use_menu_provider, use_scroll_provider};

const FEATURES: [(&str, &str, &str); 6] = [
    ("fas fa-brain", "Neural Processing", "Adaptive pipelines that learn from every interaction."),
    ("fas fa-shield-alt", "Quantum Security", "Encryption layered through every transmission."),
    ("fas fa-bolt", "Instant Sync", "Changes propagate across the network in real time."),
    ("fas fa-cube", "Glass Interface", "Translucent layers that keep context in view."),
    ("fas fa-network-wired", "Mesh Topology", "No single point of failure, no central server."),
    ("fas fa-chart-line", "Live Insight", "Signals surface the moment they matter."),
];

const SHOWCASE: [(&str, &str); 3] = [
    ("Synaptic Grid", "A living map of connected nodes."),
    ("Prism Console", "Every metric refracted into a single view."),
    ("Echo Chamber", "Feedback loops tuned for clarity."),
];

const TIMELINE: [(&str, &str, &str); 4] = [
    ("2021", "Genesis", "The first neural lattice goes online."),
    ("2022", "Expansion", "The mesh grows past a thousand nodes."),
    ("2023", "Refraction", "The glass interface replaces the old console."),
    ("2024", "Convergence", "Every layer speaks the same protocol."),
];

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    use_scroll_provider();
    use_menu_provider();
    use_reveal_provider();

    rsx! {
        ParticleLayer {}
        NavHeader {}

        main {
            section { id: "home", class: "hero",
                ParallaxShapes {}
                NeuralLines {}
                div { class: "hero-content",
                    h1 { class: "hero-title", "Neural Glass" }
                    p { class: "hero-subtitle",
                        "Where intelligence meets transparency"
                    }
                    div { class: "cta-buttons",
                        AnchorLink { href: "#features", class: "btn btn-primary", "Explore" }
                        AnchorLink { href: "#contact", class: "btn btn-secondary", "Connect" }
                    }
                }
            }

            section { id: "features", class: "features",
                h2 { class: "section-title", "Core Features" }
                div { class: "hexagon-grid",
                    for (index, (icon, title, text)) in FEATURES.iter().enumerate() {
                        Reveal { key: "{index}", id: format!("hexagon-{}", index), class: "hexagon",
                            div { class: "hexagon-inner",
                                i { class: "{icon}" }
                                h3 { "{title}" }
                                p { "{text}" }
                            }
                        }
                    }
                }
            }

            section { id: "showcase", class: "showcase",
                h2 { class: "section-title", "Showcase" }
                div { class: "showcase-grid",
                    for (title, text) in SHOWCASE {
                        div { key: "{title}", class: "glass-card",
                            h3 { "{title}" }
                            p { "{text}" }
                        }
                    }
                }
                // Same-page link with an empty fragment: suppressed, no scroll
                AnchorLink { href: "#", class: "showcase-more", "More coming soon" }
            }

            section { id: "timeline", class: "timeline-section",
                h2 { class: "section-title", "Evolution" }
                div { class: "timeline",
                    for (index, (year, title, text)) in TIMELINE.iter().enumerate() {
                        div { key: "{year}", class: "timeline-item",
                            Reveal { id: format!("timeline-{}", index), class: "timeline-content",
                                span { class: "timeline-year", "{year}" }
                                h3 { "{title}" }
                                p { "{text}" }
                            }
                        }
                    }
                }
            }

            section { id: "contact", class: "contact",
                h2 { class: "section-title", "Get In Touch" }
                div { class: "contact-glass",
                    ContactFormPanel {}
                }
            }
        }

        footer {
            p { "© 2025 Neural Glass. All rights reserved." }
        }
    }
}
