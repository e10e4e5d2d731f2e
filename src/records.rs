use serde::{Deserialize, Serialize};

/// One normalized article entry from a listing page
///
/// Records carry no identity beyond their field values and are never
/// mutated after extraction. Missing source fields are represented by
/// the sentinel values in `crate::parse`, never by an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Article title
    pub title: String,

    /// Link target of the title, absolute
    pub url: String,

    /// Submitting user, or the sentinel when the entry has none
    pub author: String,

    /// Free-text age label as rendered on the page (e.g. "3 hours ago")
    pub age: String,

    /// Score, 0 when the page renders no score label
    pub upvotes: u32,

    /// Comment count, 0 when absent or unparseable
    pub comments: u32,
}
