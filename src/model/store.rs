//! The bookmark store binds the bookmark operations to a YAML file on disk.
//!
//! Every call reads the whole file, applies one operation and rewrites the file only when the operation changed something. The rewrite goes through a temporary file in the same directory, so a reader never sees a half-written file. A file which can't be parsed is never overwritten.

use super::bookmark::{self, Bookmark};
use super::util::{format_bookmarks, parse_bookmarks, write_atomically, BookmarkError};
use log::{debug, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_BOOKMARK_FILE: &str = "bookmarks";

#[derive(Debug, Clone, PartialEq)]
pub struct BookmarkStore {
    path: PathBuf,
}

impl BookmarkStore {
    pub fn new<P: AsRef<Path>>(path: P) -> BookmarkStore {
        BookmarkStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all bookmarks, the file must exist.
    pub fn load(&self) -> Result<Vec<Bookmark>, BookmarkError> {
        debug!("Loading bookmarks from {}.", self.path.display());
        let content = fs::read_to_string(&self.path)?;
        parse_bookmarks(&content)
    }

    /// Same as `load`, but a missing file is an empty list.
    fn load_or_default(&self) -> Result<Vec<Bookmark>, BookmarkError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => parse_bookmarks(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "{} does not exist, it will be created.",
                    self.path.display()
                );
                Ok(vec![])
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, bookmarks: &[Bookmark]) -> Result<(), BookmarkError> {
        let content = format_bookmarks(bookmarks)?;
        write_atomically(&self.path, content.as_bytes())?;
        debug!(
            "Saved {} bookmarks to {}.",
            bookmarks.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Add a bookmark or update the offset of an existing one. Returns the bookmark which was replaced.
    pub fn add(&self, name: &str, offset: f64) -> Result<Option<Bookmark>, BookmarkError> {
        let new_bookmark = Bookmark::new(name, offset);
        new_bookmark.check()?;

        let mut bookmarks = self.load_or_default()?;
        let previous = bookmark::upsert(&mut bookmarks, new_bookmark);
        self.save(&bookmarks)?;

        match &previous {
            Some(b) => info!("Updated bookmark {}: {} -> {}.", name, b.offset, offset),
            None => info!("Added bookmark {} at {}.", name, offset),
        };

        Ok(previous)
    }

    /// Remove a bookmark. The file is left untouched when the name is unknown.
    pub fn remove(&self, name: &str) -> Result<Option<Bookmark>, BookmarkError> {
        let mut bookmarks = self.load()?;
        let removed = bookmark::remove(&mut bookmarks, name);

        if removed.is_some() {
            self.save(&bookmarks)?;
            info!("Removed bookmark {}.", name);
        }

        Ok(removed)
    }

    pub fn query(&self, name: &str) -> Result<Option<Bookmark>, BookmarkError> {
        let bookmarks = self.load()?;
        Ok(bookmark::find(&bookmarks, name).cloned())
    }

    pub fn list(&self) -> Result<Vec<Bookmark>, BookmarkError> {
        self.load()
    }
}
