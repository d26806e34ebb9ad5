//! Fade-and-rise on first intersection.

use dioxus::prelude::*;
use neuralglass_core::{RevealState, RevealTracker};

use crate::context::{use_reveal, use_site_config};
use crate::dom::{RevealObserver, REVEAL_CLASS};

/// Provide the reveal tracker and watch every element rendered by [`Reveal`].
///
/// Elements are observed once after mount. The observer disconnects when
/// the providing component unmounts.
pub fn use_reveal_provider() -> Signal<RevealTracker> {
    let config = use_site_config();
    let options = config.reveal.clone();
    let mut tracker = use_context_provider(|| Signal::new(RevealTracker::new(options)));

    let mut observer = use_signal(|| None);
    use_effect(move || {
        let options = tracker.peek().options().clone();
        let watcher = RevealObserver::new(&options, move |key, is_intersecting| {
            if tracker.peek().state(key) == RevealState::Revealed {
                return;
            }
            if tracker.write().on_intersection(key, is_intersecting) {
                tracing::trace!(element = key, "revealed");
            }
        });

        match watcher {
            Ok(watcher) => {
                for key in watcher.observe_marked() {
                    tracker.write().observe(key);
                }
                observer.set(Some(watcher));
            }
            Err(e) => tracing::warn!(error = ?e, "IntersectionObserver unavailable"),
        }
    });

    tracker
}

#[derive(Props, Clone, PartialEq)]
pub struct RevealProps {
    /// Element id, also the tracker key
    #[props(into)]
    pub id: String,
    #[props(default, into)]
    pub class: String,
    pub children: Element,
}

/// Container that starts hidden and is revealed by the shared observer.
///
/// Carries the [`REVEAL_CLASS`] marker the observer selects on.
#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let tracker = use_reveal();
    let style = tracker.read().style(&props.id);

    rsx! {
        div {
            id: "{props.id}",
            class: "{props.class} {REVEAL_CLASS}",
            style: "{style}",
            {props.children}
        }
    }
}
