//! Page geometry for navigation highlighting and the scroll track.

/// Snapshot of a section's vertical extent (document coordinates, px).
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Id of the section containing `probe_y`. When boxes overlap the last one in
/// document order wins.
pub fn active_section(sections: &[SectionBox], probe_y: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| s.contains(probe_y))
        .map(|s| s.id.as_str())
}

/// Scroll offset that puts `section_top` just below a fixed header.
#[inline]
pub fn scroll_target(section_top: f64, header_height: f64) -> f64 {
    (section_top - header_height).max(0.0)
}

/// Reading progress in percent, 0 when the document does not scroll.
pub fn scroll_percentage(scroll_top: f64, document_height: f64, window_height: f64) -> f64 {
    let scrollable = document_height - window_height;
    if !(scrollable > 0.0) {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Section id named by an in-page anchor (`#about` -> `about`). A bare `#`
/// and non-anchor links yield `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
