//! Browser DOM access.
//!
//! Thin wrappers over `web-sys` for the few things Dioxus does not model:
//! window scroll offset, section geometry, smooth scrolling and the
//! intersection watcher. Every lookup degrades to a no-op when the element
//! or the browser API is missing.

use std::rc::Rc;

use gloo::events::EventListener;
use neuralglass_core::{ClickTarget, RevealOptions, SectionBounds};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Node, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

/// Class marking elements that fade in on first intersection
pub const REVEAL_CLASS: &str = "reveal-target";

pub const MENU_TOGGLE_ID: &str = "mobile-menu-toggle";
pub const MOBILE_NAV_ID: &str = "mobile-nav";

fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

/// Current vertical scroll offset of the page.
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Geometry of every `section[id]`, in document order.
pub fn measure_sections() -> Vec<SectionBounds> {
    let Some(nodes) = document().and_then(|doc| doc.query_selector_all("section[id]").ok()) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| {
            SectionBounds::new(
                section.id(),
                f64::from(section.offset_top()),
                f64::from(section.offset_height()),
            )
        })
        .collect()
}

/// Smooth-scroll the element with this id to the top of the viewport.
///
/// Returns `false` when no such element exists.
pub fn scroll_to_fragment(id: &str) -> bool {
    let Some(target) = document().and_then(|doc| doc.get_element_by_id(id)) else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Listen for window scroll events until the returned handle is dropped.
pub fn on_window_scroll(mut handler: impl FnMut() + 'static) -> Option<EventListener> {
    let window = web_sys::window()?;
    Some(EventListener::new(&window, "scroll", move |_event| handler()))
}

/// Listen for clicks anywhere in the document until the handle is dropped.
pub fn on_document_click(mut handler: impl FnMut(ClickTarget) + 'static) -> Option<EventListener> {
    let document = document()?;
    Some(EventListener::new(&document, "click", move |event| {
        handler(classify_click(event.target().as_ref()));
    }))
}

/// Locate a click relative to the menu toggle and the mobile panel.
pub fn classify_click(target: Option<&EventTarget>) -> ClickTarget {
    let Some(node) = target.and_then(|t| t.dyn_ref::<Node>()) else {
        return ClickTarget::Outside;
    };
    let Some(document) = document() else {
        return ClickTarget::Outside;
    };

    let toggle = document.get_element_by_id(MENU_TOGGLE_ID);
    if toggle.is_some_and(|toggle| toggle.contains(Some(node))) {
        return ClickTarget::Toggle;
    }

    let Some(panel) = document
        .get_element_by_id(MOBILE_NAV_ID)
        .filter(|panel| panel.contains(Some(node)))
    else {
        return ClickTarget::Outside;
    };

    // Text nodes have no `closest`; start from their parent element.
    let element = match node.dyn_ref::<Element>() {
        Some(element) => Some(element.clone()),
        None => node.parent_element(),
    };
    let link = element.and_then(|element| element.closest("a").ok().flatten());
    match link {
        Some(link) if panel.contains(Some(&*link)) => ClickTarget::MenuLink,
        _ => ClickTarget::Panel,
    }
}

/// Owned `IntersectionObserver`; disconnects when dropped.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealObserver {
    /// Create an observer that reports `(element id, is_intersecting)`.
    pub fn new(
        options: &RevealOptions,
        mut on_report: impl FnMut(&str, bool) + 'static,
    ) -> Result<Rc<Self>, JsValue> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        on_report(&entry.target().id(), entry.is_intersecting());
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        Ok(Rc::new(Self {
            observer,
            _callback: callback,
        }))
    }

    /// Observe every element carrying [`REVEAL_CLASS`]; returns their ids.
    pub fn observe_marked(&self) -> Vec<String> {
        let selector = reveal_selector();
        let Some(nodes) = document().and_then(|doc| doc.query_selector_all(&selector).ok()) else {
            return Vec::new();
        };

        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| {
                self.observer.observe(&element);
                element.id()
            })
            .collect()
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// CSS selector matching every element rendered with [`REVEAL_CLASS`].
pub fn reveal_selector() -> String {
    format!(".{}", REVEAL_CLASS)
}

/// Seed for the particle generator, drawn from the browser's `Math.random`.
pub fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_matches_marker_class() {
        assert_eq!(reveal_selector(), format!(".{}", REVEAL_CLASS));
        assert!(!REVEAL_CLASS.contains(' '));
    }
}
