//! Kindle notebook-export parsing.
//!
//! The export is a linear sequence of class-marked elements: a book title,
//! an author line, then interleaved section headings (chapters), note
//! headings (one per highlight, carrying page/position metadata), and note
//! texts (the highlighted passage, or a reader's own note attached to the
//! preceding highlight).
//!
//! [`scan`] flattens the DOM into that sequence once; [`extract`] walks it
//! by index with a small lookahead window, which keeps the sibling-offset
//! logic explicit and testable instead of buried in tree navigation.

mod extract;
mod scan;

pub use extract::{Extraction, extract};
pub use scan::{Marker, MarkerKind, scan_markers};
