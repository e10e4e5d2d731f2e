pub mod collect;
pub mod rank;

#[cfg(test)]
mod tests;

pub use collect::collect;
pub use rank::finalize;

use crate::browser::Browser;
use crate::config::SnapshotConfig;
use crate::writer;
use std::error::Error;

/// Capability the pagination driver needs from a page renderer
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Navigate to a listing URL and wait for its entries to appear
    async fn open(&mut self, url: &str) -> Result<(), Box<dyn Error>>;

    /// Source markup of the currently loaded page
    async fn page_html(&mut self) -> Result<String, Box<dyn Error>>;

    /// Trigger the pagination affordance and wait for the next page's
    /// content. Returns false when no affordance exists.
    async fn advance(&mut self) -> Result<bool, Box<dyn Error>>;
}

/// Outcome of a completed run
#[derive(Debug)]
pub struct RunSummary {
    /// Records written to the output file
    pub written: usize,
    /// Records the user asked for
    pub requested: usize,
    /// Where the records went
    pub output: String,
}

/// Runs one snapshot: acquire a WebDriver session, drive collection and
/// ranking, hand the final sequence to the writer.
///
/// The session is released on every exit path, including extraction or
/// navigation failures.
pub async fn run(config: &SnapshotConfig) -> Result<RunSummary, Box<dyn Error>> {
    config.validate()?;

    let mut browser = Browser::connect(&config.webdriver_url).await?;
    let collected = collect(&mut browser, config.listing, config.count).await;
    browser.close().await;

    let accumulated = collected?;
    let records = rank::finalize(accumulated, config.count, config.sort);

    writer::write_csv(&records, &config.output)?;
    ::log::info!("Wrote {} records to {}", records.len(), config.output);

    Ok(RunSummary {
        written: records.len(),
        requested: config.count,
        output: config.output.clone(),
    })
}
