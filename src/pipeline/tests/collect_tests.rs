use crate::pipeline::{PageSource, collect, finalize};
use crate::{Listing, SortMode};
use std::error::Error;

/// In-memory stand-in for the WebDriver renderer: a fixed sequence of
/// pre-rendered pages plus call counters
struct FakeSource {
    pages: Vec<String>,
    current: usize,
    fetches: usize,
    advances: usize,
}

impl FakeSource {
    fn new(pages: Vec<String>) -> Self {
        Self {
            pages,
            current: 0,
            fetches: 0,
            advances: 0,
        }
    }
}

impl PageSource for FakeSource {
    async fn open(&mut self, _url: &str) -> Result<(), Box<dyn Error>> {
        self.current = 0;
        Ok(())
    }

    async fn page_html(&mut self) -> Result<String, Box<dyn Error>> {
        self.fetches += 1;
        Ok(self.pages[self.current].clone())
    }

    async fn advance(&mut self) -> Result<bool, Box<dyn Error>> {
        self.advances += 1;
        if self.current + 1 < self.pages.len() {
            self.current += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

/// Renders a listing page of `count` entries numbered from `first`.
/// Scores cycle so vote-sorted output differs from page order.
fn listing_page(first: usize, count: usize) -> String {
    let mut rows = String::new();
    for i in first..first + count {
        let score = (i * 37) % 100;
        rows.push_str(&format!(
            r#"<tr class="athing" id="{i}">
  <td class="title"><span class="titleline"><a href="https://example.com/{i}">Story {i}</a></span></td>
</tr>
<tr>
  <td class="subtext">
    <span class="score">{score} points</span> by <a href="user?id=u{i}" class="hnuser">u{i}</a>
    <span class="age"><a href="item?id={i}">1 hour ago</a></span>
    | <a href="item?id={i}">{i} comments</a>
  </td>
</tr>
"#
        ));
    }
    format!("<html><body><table><tbody>{rows}</tbody></table></body></html>")
}

#[cfg(test)]
mod driver {
    use super::*;

    #[tokio::test]
    async fn test_single_page_satisfies_small_requests() {
        let mut source = FakeSource::new(vec![listing_page(1, 30)]);
        let accumulated = collect(&mut source, Listing::Top, 10).await.unwrap();

        // One fetch cycle, no advancement, nothing truncated yet
        assert_eq!(source.fetches, 1);
        assert_eq!(source.advances, 0);
        assert_eq!(accumulated.len(), 30);

        let windowed = finalize(accumulated, 10, SortMode::None);
        assert_eq!(windowed.len(), 10);
        assert_eq!(windowed[0].title, "Story 1");
        assert_eq!(windowed[9].title, "Story 10");
    }

    #[tokio::test]
    async fn test_exact_page_boundary_needs_one_cycle() {
        let mut source = FakeSource::new(vec![listing_page(1, 30), listing_page(31, 30)]);
        let accumulated = collect(&mut source, Listing::Top, 30).await.unwrap();

        assert_eq!(source.fetches, 1);
        assert_eq!(source.advances, 0);
        assert_eq!(accumulated.len(), 30);
    }

    #[tokio::test]
    async fn test_two_cycles_for_forty_five_records() {
        let mut source = FakeSource::new(vec![listing_page(1, 30), listing_page(31, 30)]);
        let accumulated = collect(&mut source, Listing::Top, 45).await.unwrap();

        assert_eq!(source.fetches, 2);
        assert_eq!(source.advances, 1);
        assert_eq!(accumulated.len(), 60);

        let windowed = finalize(accumulated, 45, SortMode::None);
        assert_eq!(windowed.len(), 45);
        // Later pages append after earlier pages, page order intact
        assert_eq!(windowed[0].title, "Story 1");
        assert_eq!(windowed[29].title, "Story 30");
        assert_eq!(windowed[30].title, "Story 31");
        assert_eq!(windowed[44].title, "Story 45");
    }

    #[tokio::test]
    async fn test_running_out_of_pages_is_not_an_error() {
        let mut source = FakeSource::new(vec![listing_page(1, 30), listing_page(31, 8)]);
        let accumulated = collect(&mut source, Listing::Top, 45).await.unwrap();

        // Second advance finds no further page and the loop ends cleanly
        assert_eq!(source.advances, 2);
        assert_eq!(accumulated.len(), 38);

        let windowed = finalize(accumulated, 45, SortMode::None);
        assert_eq!(windowed.len(), 38);
    }

    #[tokio::test]
    async fn test_empty_listing_terminates_cleanly() {
        let page = String::from("<html><body><table></table></body></html>");
        let mut source = FakeSource::new(vec![page]);
        let accumulated = collect(&mut source, Listing::Newest, 10).await.unwrap();

        assert!(accumulated.is_empty());
        assert_eq!(source.advances, 1);
    }

    #[tokio::test]
    async fn test_vote_sorted_output_is_non_increasing() {
        let mut source = FakeSource::new(vec![listing_page(1, 30)]);
        let accumulated = collect(&mut source, Listing::Top, 10).await.unwrap();
        let windowed = finalize(accumulated, 10, SortMode::Votes);

        assert_eq!(windowed.len(), 10);
        for pair in windowed.windows(2) {
            assert!(pair[0].upvotes >= pair[1].upvotes);
        }
    }
}
