//! The bookmark record and the operations on a list of bookmarks. A bookmark is a named time offset (in seconds), e.g. the position where a reader stopped in an audio book.

use super::util::BookmarkError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const BOOKMARK_NAME_MAX_LENGTH: u64 = 255;
pub const BOOKMARK_NAME_MIN_LENGTH: u64 = 1;

lazy_static! {
    // Names are written one per line in the plain output, so line breaks and tabs are not allowed.
    pub static ref BOOKMARK_NAME_REGEX: Regex = Regex::new(r"^[^\r\n\t]+$").unwrap();
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, PartialOrd, Validate)]
pub struct Bookmark {
    #[validate(length(
        max = "BOOKMARK_NAME_MAX_LENGTH",
        min = "BOOKMARK_NAME_MIN_LENGTH",
        message = "The length of name should be between 1 and 255."
    ))]
    #[validate(regex(
        path = "BOOKMARK_NAME_REGEX",
        message = "The name should not contain line breaks or tabs."
    ))]
    pub name: String,

    pub offset: f64,
}

impl Bookmark {
    pub fn new(name: &str, offset: f64) -> Bookmark {
        Bookmark {
            name: name.to_string(),
            offset,
        }
    }

    /// Check the bookmark before it is written into the bookmark file.
    pub fn check(&self) -> Result<(), BookmarkError> {
        match self.validate() {
            Ok(_) => {}
            Err(e) => {
                return Err(BookmarkError::Invalid {
                    details: e.to_string(),
                })
            }
        };

        // NaN can't be ordered and inf can't be read back by most consumers.
        if !self.offset.is_finite() {
            return Err(BookmarkError::Invalid {
                details: format!("The offset should be a finite number, got {}.", self.offset),
            });
        }

        Ok(())
    }
}

/// Add the bookmark or update the offset of the bookmark with the same name, then sort the list by offset.
///
/// Entries sharing the name are collapsed into one, so the names are unique afterwards. Returns the replaced bookmark if there was one.
pub fn upsert(bookmarks: &mut Vec<Bookmark>, bookmark: Bookmark) -> Option<Bookmark> {
    let previous = find(bookmarks, &bookmark.name).cloned();
    bookmarks.retain(|b| b.name != bookmark.name);
    bookmarks.push(bookmark);
    sort_by_offset(bookmarks);

    previous
}

/// Remove the first bookmark with the name, the order of the others is kept.
pub fn remove(bookmarks: &mut Vec<Bookmark>, name: &str) -> Option<Bookmark> {
    bookmarks
        .iter()
        .position(|b| b.name == name)
        .map(|index| bookmarks.remove(index))
}

pub fn find<'a>(bookmarks: &'a [Bookmark], name: &str) -> Option<&'a Bookmark> {
    bookmarks.iter().find(|b| b.name == name)
}

/// Stable sort, bookmarks with the same offset keep their relative order.
pub fn sort_by_offset(bookmarks: &mut [Bookmark]) {
    bookmarks.sort_by(|a, b| a.offset.total_cmp(&b.offset));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(bookmarks: &[Bookmark]) -> Vec<&str> {
        bookmarks.iter().map(|b| b.name.as_str()).collect()
    }

    #[test]
    fn test_debug_format() {
        let bookmark = Bookmark::new("chapter 1", 12.5);
        assert_eq!(
            format!("{:?}", bookmark),
            "Bookmark { name: \"chapter 1\", offset: 12.5 }"
        );
    }

    #[test]
    fn test_check() {
        assert!(Bookmark::new("chapter 1", 0.0).check().is_ok());
        assert!(Bookmark::new("rewind", -3.0).check().is_ok());

        let invalid = vec![
            Bookmark::new("", 1.0),
            Bookmark::new("two\nlines", 1.0),
            Bookmark::new("with\ttab", 1.0),
            Bookmark::new(&"x".repeat(256), 1.0),
            Bookmark::new("nan", f64::NAN),
            Bookmark::new("inf", f64::INFINITY),
        ];
        for bookmark in invalid {
            let result = bookmark.check();
            assert!(
                matches!(result, Err(BookmarkError::Invalid { .. })),
                "{:?} should be rejected",
                bookmark
            );
        }
    }

    #[test]
    fn test_upsert_inserts_sorted() {
        let mut bookmarks = vec![];
        assert_eq!(upsert(&mut bookmarks, Bookmark::new("c", 30.0)), None);
        assert_eq!(upsert(&mut bookmarks, Bookmark::new("a", 10.0)), None);
        assert_eq!(upsert(&mut bookmarks, Bookmark::new("b", 20.0)), None);
        assert_eq!(names(&bookmarks), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_upsert_updates_existing() {
        let mut bookmarks = vec![Bookmark::new("a", 10.0), Bookmark::new("b", 20.0)];
        let previous = upsert(&mut bookmarks, Bookmark::new("a", 25.0));
        assert_eq!(previous, Some(Bookmark::new("a", 10.0)));
        assert_eq!(
            bookmarks,
            vec![Bookmark::new("b", 20.0), Bookmark::new("a", 25.0)]
        );
    }

    #[test]
    fn test_upsert_collapses_duplicates() {
        // A hand edited file may contain the same name twice.
        let mut bookmarks = vec![
            Bookmark::new("a", 1.0),
            Bookmark::new("b", 2.0),
            Bookmark::new("a", 3.0),
        ];
        let previous = upsert(&mut bookmarks, Bookmark::new("a", 0.5));
        assert_eq!(previous, Some(Bookmark::new("a", 1.0)));
        assert_eq!(
            bookmarks,
            vec![Bookmark::new("a", 0.5), Bookmark::new("b", 2.0)]
        );
    }

    #[test]
    fn test_sort_is_stable() {
        let mut bookmarks = vec![
            Bookmark::new("x", 5.0),
            Bookmark::new("y", 1.0),
            Bookmark::new("z", 5.0),
        ];
        sort_by_offset(&mut bookmarks);
        assert_eq!(names(&bookmarks), vec!["y", "x", "z"]);
    }

    #[test]
    fn test_remove() {
        let mut bookmarks = vec![
            Bookmark::new("a", 1.0),
            Bookmark::new("b", 2.0),
            Bookmark::new("c", 3.0),
        ];
        assert_eq!(remove(&mut bookmarks, "b"), Some(Bookmark::new("b", 2.0)));
        assert_eq!(names(&bookmarks), vec!["a", "c"]);
        assert_eq!(remove(&mut bookmarks, "b"), None);
        assert_eq!(bookmarks.len(), 2);
    }

    #[test]
    fn test_find() {
        let bookmarks = vec![Bookmark::new("a", 1.0), Bookmark::new("b", 2.0)];
        assert_eq!(find(&bookmarks, "b"), Some(&Bookmark::new("b", 2.0)));
        assert_eq!(find(&bookmarks, "missing"), None);
    }
}
