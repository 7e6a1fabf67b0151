//! Utility functions for the model module. Contains the error type shared by the whole crate and the helpers to parse and atomically rewrite the bookmark file.

use super::bookmark::Bookmark;
use custom_error::custom_error;
use log::debug;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

custom_error! {pub BookmarkError
    Io{source: std::io::Error} = "Unable to access the bookmark file: {source}",
    Parse{source: serde_yaml::Error} = "Unable to parse the bookmark file: {source}",
    Persist{source: tempfile::PersistError} = "Unable to replace the bookmark file: {source}",
    Render{format: String, details: String} = "Unable to render the bookmark as {format}: {details}",
    Output{target: String, cause: std::io::Error} = "Unable to write the output to {target}: {cause}",
    Invalid{details: String} = "Invalid bookmark: {details}",
    UnknownFormat{format: String} = "Unsupported output format: {format}, expected one of debug, yaml, json, plain.",
}

/// An empty (or whitespace only) file is an empty bookmark list. serde_yaml refuses an empty document, so we handle it before parsing.
pub fn parse_bookmarks(content: &str) -> Result<Vec<Bookmark>, BookmarkError> {
    if content.trim().is_empty() {
        return Ok(vec![]);
    }

    let bookmarks: Vec<Bookmark> = serde_yaml::from_str(content)?;
    Ok(bookmarks)
}

pub fn format_bookmarks(bookmarks: &[Bookmark]) -> Result<String, BookmarkError> {
    let content = serde_yaml::to_string(bookmarks)?;
    Ok(content)
}

/// Write the content into a temporary file next to the target and rename it over the target.
///
/// A symlink is resolved first so the file it points to is replaced, not the link. An existing file keeps its permissions.
pub fn write_atomically(path: &Path, content: &[u8]) -> Result<(), BookmarkError> {
    let (target, permissions) = match fs::canonicalize(path) {
        Ok(resolved) => {
            let permissions = fs::metadata(&resolved)?.permissions();
            (resolved, Some(permissions))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => (path.to_path_buf(), None),
        Err(e) => return Err(e.into()),
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut temp_file = NamedTempFile::new_in(&dir)?;
    temp_file.write_all(content)?;
    if let Some(permissions) = permissions {
        temp_file.as_file().set_permissions(permissions)?;
    }
    temp_file.as_file().sync_all()?;
    debug!(
        "Move {} to {}.",
        temp_file.path().display(),
        target.display()
    );
    temp_file.persist(&target)?;

    Ok(())
}
