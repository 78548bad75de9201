//! The highlight extractor: flat marker walk + text formatting.

use std::sync::LazyLock;

use regex::Regex;

use super::{Marker, MarkerKind, scan_markers};
use crate::dom::parse_html;
use crate::note::sanitize_title;

static PAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(Page|Página) (\d+)").unwrap());
static POSITION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Posición (\d+)|Position (\d+)").unwrap());

/// Result of extracting a notebook export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Book title, trimmed and stripped of filesystem-illegal characters.
    pub title: String,
    /// Author line, trimmed. Deliberately not sanitized: the author only
    /// ever appears inside the note, never in a filename.
    pub author: String,
    /// Number of well-formed note headings encountered.
    pub highlight_count: u32,
    /// Formatted highlight entries, ready to place under the
    /// `## Highlights` header.
    pub body: String,
}

/// Extract page number from a note heading, matching both English and
/// Spanish exports.
fn page_number(heading: &str) -> Option<&str> {
    PAGE_RE
        .captures(heading)
        .and_then(|c| c.get(2))
        .map(|m| m.as_str())
}

/// Extract position number, whichever locale alternative matched.
fn position_number(heading: &str) -> Option<&str> {
    POSITION_RE
        .captures(heading)
        .and_then(|c| c.get(1).or_else(|| c.get(2)))
        .map(|m| m.as_str())
}

/// The trimmed text of `markers[i]` if it is a note text, else `""`.
fn note_text_at(markers: &[Marker], i: usize) -> &str {
    match markers.get(i) {
        Some(m) if m.kind == MarkerKind::NoteText => m.trimmed(),
        _ => "",
    }
}

/// Parse a Kindle notebook export and format its highlights.
///
/// Total over all inputs: a missing title or author yields an empty
/// string, an unmatched page/position pattern yields an `N/A` placeholder
/// in the output, and note headings that don't have exactly one `<span>`
/// child are skipped without being counted. Nothing ever fails.
pub fn extract(html: &str) -> Extraction {
    let dom = parse_html(html);

    let title = dom
        .find_by_class("bookTitle")
        .map(|id| sanitize_title(dom.collect_text(id).trim()))
        .unwrap_or_default();

    let author = dom
        .find_by_class("authors")
        .map(|id| dom.collect_text(id).trim().to_string())
        .unwrap_or_default();

    let markers = scan_markers(&dom);
    let mut body = String::new();
    let mut highlight_count: u32 = 0;

    for (i, marker) in markers.iter().enumerate() {
        match marker.kind {
            MarkerKind::Section => {
                let chapter = marker.trimmed();
                if !chapter.is_empty() {
                    body.push_str(&format!("# {chapter}\n\n"));
                }
            }
            MarkerKind::NoteHeading => {
                // Kindle note headings carry exactly one span (the
                // highlight color); anything else is malformed or a
                // reader-note heading consumed by the lookahead below.
                if marker.span_children != 1 {
                    continue;
                }

                let page = page_number(&marker.text).unwrap_or("N/A");
                let position = position_number(&marker.text).unwrap_or("N/A");
                let highlight = note_text_at(&markers, i + 1);

                body.push_str(&format!(
                    "> {highlight}\n- Page: {page}, Position: {position}\n\n"
                ));

                // Lookahead for an attached reader note: two markers ahead
                // sits its heading (span-less, not a section), three ahead
                // its text. Past-the-end means no note, never an error.
                if let Some(next_heading) = markers.get(i + 2)
                    && next_heading.span_children == 0
                    && next_heading.kind != MarkerKind::Section
                {
                    let user_note = note_text_at(&markers, i + 3);
                    body.push_str(&format!(">[!{user_note}] \n\n"));
                }

                body.push_str("---\n\n");
                highlight_count += 1;
            }
            MarkerKind::NoteText => {}
        }
    }

    Extraction {
        title,
        author,
        highlight_count,
        body,
    }
}
