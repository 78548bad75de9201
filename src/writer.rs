//! Note persistence.
//!
//! Writes the composed document to `<folder>/<title>.md` with create-new
//! semantics: an existing note is never overwritten, and the two failure
//! modes a user can act on are kept distinct ([`Error::DestinationMissing`]
//! vs [`Error::DestinationConflict`]).

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Write a note into `folder`, returning the path of the created file.
///
/// `title` is expected to be pre-sanitized (see [`crate::sanitize_title`]);
/// the extractor already does this.
pub fn write_note(folder: impl AsRef<Path>, title: &str, contents: &str) -> Result<PathBuf> {
    let folder = folder.as_ref();
    if !folder.is_dir() {
        return Err(Error::DestinationMissing(folder.to_path_buf()));
    }

    let path = folder.join(format!("{title}.md"));
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => Error::DestinationConflict(path.clone()),
            ErrorKind::NotFound => Error::DestinationMissing(folder.to_path_buf()),
            _ => Error::Io(e),
        })?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = write_note(dir.path(), "My Book", "contents").unwrap();

        assert_eq!(path, dir.path().join("My Book.md"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "contents");
    }

    #[test]
    fn test_missing_folder() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        match write_note(&missing, "My Book", "contents") {
            Err(Error::DestinationMissing(p)) => assert_eq!(p, missing),
            other => panic!("expected DestinationMissing, got {other:?}"),
        }
    }

    #[test]
    fn test_existing_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("My Book.md");
        std::fs::write(&path, "original").unwrap();

        match write_note(dir.path(), "My Book", "replacement") {
            Err(Error::DestinationConflict(p)) => assert_eq!(p, path),
            other => panic!("expected DestinationConflict, got {other:?}"),
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "original");
    }
}
