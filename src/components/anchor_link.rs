//! Same-page anchor with smooth scrolling.

use dioxus::prelude::*;
use neuralglass_core::{resolve_anchor, AnchorAction};

use crate::dom;

#[derive(Props, Clone, PartialEq)]
pub struct AnchorLinkProps {
    #[props(into)]
    pub href: String,
    #[props(default, into)]
    pub class: String,
    pub children: Element,
}

/// `a` element that smooth-scrolls to its fragment instead of jumping.
///
/// Links that are not same-page fragments navigate normally.
#[component]
pub fn AnchorLink(props: AnchorLinkProps) -> Element {
    let href = props.href.clone();

    let on_click = move |evt: MouseEvent| {
        let Some(action) = resolve_anchor(&href) else {
            return;
        };
        evt.prevent_default();

        if let AnchorAction::ScrollTo(id) = action {
            if !dom::scroll_to_fragment(&id) {
                tracing::debug!(target_id = %id, "Anchor target not found");
            }
        }
    };

    rsx! {
        a {
            href: "{props.href}",
            class: "{props.class}",
            onclick: on_click,
            {props.children}
        }
    }
}
