// Re-export modules
pub mod browser;
pub mod config;
pub mod parse;
pub mod pipeline;
pub mod records;
pub mod writer;

// Re-export commonly used types for convenience
pub use records::ArticleRecord;

use serde::{Deserialize, Serialize};

/// The remote listings a snapshot can be taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Listing {
    /// Today's front page, ranked by popularity
    #[default]
    Top,
    /// Newest submissions
    Newest,
    /// The previous day's front page
    Past,
}

impl Listing {
    /// URL the listing is served from
    pub fn url(self) -> &'static str {
        match self {
            Listing::Top => "https://news.ycombinator.com/news",
            Listing::Newest => "https://news.ycombinator.com/newest",
            Listing::Past => "https://news.ycombinator.com/front",
        }
    }
}

/// Secondary ordering applied to the collected records before writing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Keep the on-page order
    #[default]
    None,
    /// Upvotes, descending
    Votes,
    /// Comment count, descending
    Comments,
    /// Both orderings: comment pass first, vote pass second,
    /// so vote order wins ties
    VotesAndComments,
}

impl SortMode {
    pub fn by_votes(self) -> bool {
        matches!(self, SortMode::Votes | SortMode::VotesAndComments)
    }

    pub fn by_comments(self) -> bool {
        matches!(self, SortMode::Comments | SortMode::VotesAndComments)
    }
}
