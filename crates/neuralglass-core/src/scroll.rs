//! Scroll-reactive styling
//!
//! Both reactions are recomputed from scratch for every offset: the header's
//! "scrolled" flag and the section whose range contains the probe point.

use crate::config::ScrollConfig;

/// Measured geometry of a page section
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open containment: `[top, top + height)`
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Whether the header carries the "scrolled" style at this offset.
pub fn header_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Id of the active section: the last one, in document order, whose range
/// contains `offset + probe`.
pub fn active_section(sections: &[SectionBounds], offset: f64, probe: f64) -> Option<&str> {
    let y = offset + probe;
    sections
        .iter()
        .rev()
        .find(|section| section.contains(y))
        .map(|section| section.id.as_str())
}

/// Whether a nav link with this `href` is the active one.
pub fn link_is_active(href: &str, current: Option<&str>) -> bool {
    match (href.strip_prefix('#'), current) {
        (Some(fragment), Some(current)) => fragment == current,
        _ => false,
    }
}

/// Result of one scroll reaction
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollSnapshot {
    pub offset: f64,
    pub scrolled: bool,
    pub active: Option<String>,
}

impl ScrollSnapshot {
    pub fn header_class(&self) -> &'static str {
        if self.scrolled {
            "scrolled"
        } else {
            ""
        }
    }

    pub fn link_class(&self, href: &str) -> &'static str {
        if link_is_active(href, self.active.as_deref()) {
            "active"
        } else {
            ""
        }
    }
}

/// Computes [`ScrollSnapshot`]s from the current offset and section layout.
#[derive(Debug, Clone, Default)]
pub struct ScrollStyler {
    config: ScrollConfig,
}

impl ScrollStyler {
    pub fn new(config: ScrollConfig) -> Self {
        Self { config }
    }

    pub fn react(&self, offset: f64, sections: &[SectionBounds]) -> ScrollSnapshot {
        ScrollSnapshot {
            offset,
            scrolled: header_scrolled(offset, self.config.header_threshold_px),
            active: active_section(sections, offset, self.config.section_probe_px)
                .map(str::to_string),
        }
    }
}
