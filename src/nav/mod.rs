//! Active-section tracking for scroll-driven navigation highlights.
//!
//! Maps a scroll offset to the single page section the navigation should
//! highlight. The rule: a fixed reference line below the viewport top
//! (default 200px) is active inside whichever section's vertical bounds
//! contain it. The computation is a pure function of its inputs, so the
//! same offset always yields the same section; callers may throttle scroll
//! events freely without changing the result.

use serde::{Deserialize, Serialize};

/// Default distance of the reference line from the viewport top, in pixels.
pub const REFERENCE_OFFSET: f64 = 200.0;

/// A named page section with document-space vertical bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section identifier (anchor id).
    pub id: String,
    /// Top boundary, in document-space pixels.
    pub top: f64,
    /// Bottom boundary, in document-space pixels.
    pub bottom: f64,
}

impl Section {
    /// Create a section from an id and its vertical bounds.
    pub fn new<S: Into<String>>(id: S, top: f64, bottom: f64) -> Self {
        Section {
            id: id.into(),
            top,
            bottom,
        }
    }
}

/// Determine the active section for a scroll offset.
///
/// The reference line sits at `scroll_offset + reference_offset` in
/// document space. A section qualifies when the line falls within
/// `[top, bottom]`; if overlapping sections both qualify, the one whose
/// top is greatest (closest to the line without passing it) wins. Returns
/// `None` when no section contains the line.
pub fn active_section<'a>(
    scroll_offset: f64,
    sections: &'a [Section],
    reference_offset: f64,
) -> Option<&'a str> {
    let line = scroll_offset + reference_offset;

    sections
        .iter()
        .filter(|s| s.top <= line && s.bottom >= line)
        .fold(None::<&Section>, |closest, section| match closest {
            Some(best) if best.top >= section.top => Some(best),
            _ => Some(section),
        })
        .map(|s| s.id.as_str())
}

/// Convenience wrapper holding a section list and reference offset.
///
/// Intentionally stateless between calls: `active` is the same pure
/// function as [`active_section`], packaged for callers that keep the
/// section list around.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    sections: Vec<Section>,
    reference_offset: f64,
}

impl SectionTracker {
    /// Create a tracker with the default reference offset.
    pub fn new(sections: Vec<Section>) -> Self {
        SectionTracker {
            sections,
            reference_offset: REFERENCE_OFFSET,
        }
    }

    /// Override the reference offset.
    pub fn reference_offset(mut self, offset: f64) -> Self {
        self.reference_offset = offset;
        self
    }

    /// The tracked sections.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Determine the active section for a scroll offset.
    pub fn active(&self, scroll_offset: f64) -> Option<&str> {
        active_section(scroll_offset, &self.sections, self.reference_offset)
    }
}
