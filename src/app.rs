use dioxus::prelude::*;

use crate::context::use_site_config;
use crate::pages::Landing;
use crate::relay::EmailJsRelay;
use crate::theme::{FONT_AWESOME, GLOBAL_STYLES};

/// Application routes.
///
/// - `/` - The landing page; every other navigation is a same-page anchor
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
}

/// Root application component.
///
/// Provides global styles, the contact relay, and routing. The site
/// configuration itself is supplied at launch.
#[component]
pub fn App() -> Element {
    let config = use_site_config();
    use_context_provider(|| EmailJsRelay::new(config.relay.clone()));

    rsx! {
        document::Link { rel: "stylesheet", href: FONT_AWESOME }
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
