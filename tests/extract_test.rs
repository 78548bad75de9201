//! End-to-end extraction tests against a realistic notebook export.

use kindling::{compose_document, extract, write_note};
use tempfile::TempDir;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!("{}/{}", FIXTURES_DIR, name)).expect("Failed to read fixture")
}

#[test]
fn test_notebook_metadata() {
    let result = extract(&fixture("notebook.html"));

    // The colon is stripped from the title but kept in the author line
    assert_eq!(
        result.title,
        "The Pragmatic Programmer Your Journey to Mastery"
    );
    assert_eq!(result.author, "Thomas, David; Hunt, Andrew");
    assert_eq!(result.highlight_count, 3);
}

#[test]
fn test_notebook_body() {
    let result = extract(&fixture("notebook.html"));

    assert_eq!(
        result.body,
        "# Chapter 1: A Pragmatic Philosophy\n\n\
         > Care about your craft.\n- Page: 2, Position: 85\n\n\
         ---\n\n\
         > Think about your work.\n- Page: 4, Position: 120\n\n\
         >[!Revisit this during reviews.] \n\n\
         ---\n\n\
         # Chapter 2: A Pragmatic Approach\n\n\
         > Every piece of knowledge must have a single representation.\n- Page: 31, Position: 540\n\n\
         ---\n\n"
    );
}

#[test]
fn test_notebook_document_shape() {
    let result = extract(&fixture("notebook.html"));
    let doc = compose_document(&result);

    assert!(doc.starts_with(
        "---\nauthor: \"[[Thomas, David; Hunt, Andrew]]\"\nhighlights: 3\n---\n\n\n## Highlights \n\n"
    ));
    assert!(doc.ends_with(&result.body));
}

#[test]
fn test_notebook_import_to_folder() {
    let result = extract(&fixture("notebook.html"));
    let doc = compose_document(&result);

    let dir = TempDir::new().unwrap();
    let path = write_note(dir.path(), &result.title, &doc).unwrap();

    assert_eq!(
        path.file_name().unwrap(),
        "The Pragmatic Programmer Your Journey to Mastery.md"
    );
    assert_eq!(std::fs::read_to_string(&path).unwrap(), doc);

    // Importing the same export twice must not clobber the first note
    assert!(write_note(dir.path(), &result.title, &doc).is_err());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), doc);
}
