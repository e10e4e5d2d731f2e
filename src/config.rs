use crate::{Listing, SortMode};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Largest number of articles a single run may request. Keeps the
/// pagination loop bounded.
pub const MAX_COUNT: usize = 60;

/// Configuration for one snapshot run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Which listing to visit
    #[serde(default)]
    pub listing: Listing,

    /// How many articles to collect, 1..=60
    #[serde(default = "default_count")]
    pub count: usize,

    /// Secondary ordering applied before writing
    #[serde(default)]
    pub sort: SortMode,

    /// Path of the CSV file to write
    #[serde(default = "default_output")]
    pub output: String,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            listing: Listing::default(),
            count: default_count(),
            sort: SortMode::default(),
            output: default_output(),
            webdriver_url: default_webdriver_url(),
        }
    }
}

impl SnapshotConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Override the WebDriver URL from the environment, if set
    pub fn apply_env_overrides(&mut self) {
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.webdriver_url = webdriver_url;
            }
        }
    }

    /// Reject out-of-range counts before any session is opened
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.count == 0 || self.count > MAX_COUNT {
            return Err(format!(
                "article count must be between 1 and {}, got {}",
                MAX_COUNT, self.count
            )
            .into());
        }
        Ok(())
    }
}

/// Default number of articles to collect
fn default_count() -> usize {
    10
}

/// Default output path
fn default_output() -> String {
    "hacker_news_articles.csv".to_string()
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}
