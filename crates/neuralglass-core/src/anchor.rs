//! Same-page anchor resolution

/// What to do with a click on an anchor
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AnchorAction {
    /// Suppress default navigation and do nothing else (`href="#"`)
    Suppress,
    /// Suppress default navigation and smooth-scroll to the element with this id
    ScrollTo(String),
}

/// Resolve an anchor's `href`.
///
/// Returns `None` for links that are not same-page fragments; those keep
/// their default navigation.
pub fn resolve_anchor(href: &str) -> Option<AnchorAction> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() {
        Some(AnchorAction::Suppress)
    } else {
        Some(AnchorAction::ScrollTo(fragment.to_string()))
    }
}
