//! # kindling
//!
//! A fast, lightweight converter for Kindle "notebook export" HTML files.
//!
//! Kindle devices and apps can export the highlights and notes for a book
//! as a single HTML file. kindling parses that export and produces a
//! Markdown note: a frontmatter block (author reference, highlight count)
//! followed by the highlights grouped under their chapter headings, each
//! with its page/position metadata and any attached reader note.
//!
//! ## Quick Start
//!
//! ```
//! use kindling::{compose_document, extract};
//!
//! let html = r#"
//!     <div class="bookTitle">My Book</div>
//!     <div class="authors">Jane Doe</div>
//!     <div class="sectionHeading">Chapter 1</div>
//!     <div class="noteHeading">Highlight (<span>yellow</span>) - Page 5 · Position 120</div>
//!     <div class="noteText">Great quote</div>
//! "#;
//!
//! let extraction = extract(html);
//! assert_eq!(extraction.title, "My Book");
//! assert_eq!(extraction.highlight_count, 1);
//!
//! let note = compose_document(&extraction);
//! assert!(note.starts_with("---\nauthor: \"[[Jane Doe]]\""));
//! ```
//!
//! Extraction is total: it never fails, whatever the input. Missing
//! metadata becomes an empty string, unmatched page/position patterns
//! become `N/A` placeholders, and malformed note headings are skipped.
//!
//! Writing the note to disk is a separate step ([`write_note`]) that
//! distinguishes a missing destination folder from a pre-existing file at
//! the target path.

pub mod clippings;
pub mod dom;
pub mod error;
pub mod note;
#[cfg(feature = "cli")]
pub mod settings;
pub(crate) mod util;
pub mod writer;

pub use clippings::{Extraction, extract};
pub use error::{Error, Result};
pub use note::{compose_document, sanitize_title};
#[cfg(feature = "cli")]
pub use settings::Settings;
pub use util::decode_text;
pub use writer::write_note;
