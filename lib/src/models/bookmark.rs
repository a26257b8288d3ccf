use serde::{Deserialize, Serialize};

/// A single bookmark ready to be written to a Netscape bookmarks file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
    /// Creation time in epoch seconds
    pub add_date: i64,
}

impl Bookmark {
    /// Create a new Bookmark
    pub fn new(title: impl Into<String>, url: impl Into<String>, add_date: i64) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            add_date,
        }
    }
}
