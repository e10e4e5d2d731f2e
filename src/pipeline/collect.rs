use crate::Listing;
use crate::parse::Extractor;
use crate::pipeline::PageSource;
use crate::records::ArticleRecord;
use std::error::Error;

/// Collects records from successive listing pages until `desired` have
/// been gathered or no further page exists.
///
/// The loop is strictly sequential: each advancement settles before the
/// next extraction, and no rendered document is extracted twice. Ending
/// up with fewer records than requested is an accepted outcome, not an
/// error. The result is not yet truncated; windowing happens in
/// `rank::finalize`.
pub async fn collect<S: PageSource>(
    source: &mut S,
    listing: Listing,
    desired: usize,
) -> Result<Vec<ArticleRecord>, Box<dyn Error>> {
    let extractor = Extractor::new();
    let mut accumulated: Vec<ArticleRecord> = Vec::new();

    ::log::info!("Collecting {} records from {}", desired, listing.url());
    source.open(listing.url()).await?;

    loop {
        let html = source.page_html().await?;
        let batch = extractor.extract(&html, listing.url());
        accumulated.extend(batch);
        ::log::info!("{} of {} records collected", accumulated.len(), desired);

        if accumulated.len() >= desired {
            break;
        }
        if !source.advance().await? {
            ::log::info!(
                "No further pages; stopping with {} of {} requested records",
                accumulated.len(),
                desired
            );
            break;
        }
    }

    Ok(accumulated)
}
