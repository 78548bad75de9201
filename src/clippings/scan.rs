//! One-time scan of the DOM into a flat marker sequence.

use crate::dom::Dom;

/// Kind of marker element in the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// `sectionHeading` - a chapter/section title.
    Section,
    /// `noteHeading` - page/position metadata for one highlight or note.
    NoteHeading,
    /// `noteText` - a highlighted passage or an attached reader note.
    NoteText,
}

/// One marker element, flattened out of the DOM.
#[derive(Debug, Clone)]
pub struct Marker {
    pub kind: MarkerKind,
    /// Full descendant text, untrimmed.
    pub text: String,
    /// Number of direct `<span>` element children. Kindle wraps the
    /// highlight color in a single span; headings with any other shape
    /// are treated as malformed.
    pub span_children: usize,
}

impl Marker {
    /// Trimmed marker text.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }
}

/// Collect every marker element in document order.
pub fn scan_markers(dom: &Dom) -> Vec<Marker> {
    let mut markers = Vec::new();
    for id in dom.descendants() {
        if !dom.is_element(id) {
            continue;
        }
        let kind = if dom.has_class(id, "sectionHeading") {
            MarkerKind::Section
        } else if dom.has_class(id, "noteHeading") {
            MarkerKind::NoteHeading
        } else if dom.has_class(id, "noteText") {
            MarkerKind::NoteText
        } else {
            continue;
        };
        markers.push(Marker {
            kind,
            text: dom.collect_text(id),
            span_children: dom.count_child_elements(id, "span"),
        });
    }
    markers
}
