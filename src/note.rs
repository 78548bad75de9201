//! Note composition: frontmatter, document layout, filename sanitization.

use crate::clippings::Extraction;

/// Characters that are illegal in filenames on at least one platform.
const ILLEGAL_FILENAME_CHARS: &[char] = &['\\', '/', '*', '<', '>', ':', '|', '?', '"'];

/// Strip filesystem-illegal characters from a note title.
///
/// Idempotent: sanitizing an already-sanitized title is a no-op.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| !ILLEGAL_FILENAME_CHARS.contains(c))
        .collect()
}

/// Frontmatter block: author as a wiki-style reference plus the count.
fn frontmatter(author: &str, highlights: u32) -> String {
    format!("---\nauthor: \"[[{author}]]\"\nhighlights: {highlights}\n---\n")
}

/// Compose the full note document from an extraction.
///
/// The layout is fixed: frontmatter, a `## Highlights` header, then the
/// formatted body. Downstream tooling matches on this exact shape.
pub fn compose_document(extraction: &Extraction) -> String {
    format!(
        "{}\n\n## Highlights \n\n{}",
        frontmatter(&extraction.author, extraction.highlight_count),
        extraction.body
    )
}
