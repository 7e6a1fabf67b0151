//! Bookmark model module which contains the bookmark record, the file backed store and the shared helpers for reading and writing the bookmark file.

pub mod bookmark;
pub mod store;
pub mod util;
