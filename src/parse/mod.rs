use crate::records::ArticleRecord;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;


/// Title sentinel for entries with no resolvable title link
pub const NO_TITLE: &str = "No title";
/// Link sentinel for entries with no resolvable title link
pub const UNKNOWN_LINK: &str = "Unknown link";
/// Author sentinel; some entry types legitimately carry no authorship marker
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Extracts normalized article records from rendered listing markup.
///
/// Selectors and the numeric-label pattern are compiled once at
/// construction.
pub struct Extractor {
    entry: Selector,
    title_link: Selector,
    metadata: Selector,
    score: Selector,
    author: Selector,
    age: Selector,
    any_link: Selector,
    leading_int: Regex,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            entry: Selector::parse("tr.athing").expect("valid selector"),
            title_link: Selector::parse("span.titleline > a, a.titlelink")
                .expect("valid selector"),
            metadata: Selector::parse("td.subtext").expect("valid selector"),
            score: Selector::parse("span.score").expect("valid selector"),
            author: Selector::parse("a.hnuser").expect("valid selector"),
            age: Selector::parse("span.age").expect("valid selector"),
            any_link: Selector::parse("a").expect("valid selector"),
            leading_int: Regex::new(r"^\d+").expect("valid regex"),
        }
    }

    /// Parses one rendered listing page into records, in document order.
    ///
    /// Every entry produces exactly one record; missing fields degrade to
    /// sentinels or zero rather than dropping the entry or failing the
    /// batch. Pure transformation of the given markup, so extracting the
    /// same document twice yields identical sequences.
    pub fn extract(&self, html: &str, base_url: &str) -> Vec<ArticleRecord> {
        let doc = Html::parse_document(html);
        let base = Url::parse(base_url).ok();

        let mut batch = Vec::new();
        for entry in doc.select(&self.entry) {
            batch.push(self.extract_entry(entry, base.as_ref()));
        }

        ::log::debug!("Extracted {} entries from listing markup", batch.len());
        batch
    }

    fn extract_entry(&self, entry: ElementRef, base: Option<&Url>) -> ArticleRecord {
        let title_link = entry.select(&self.title_link).next();

        let title = title_link
            .map(element_text)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| NO_TITLE.to_string());

        let url = title_link
            .and_then(|a| a.value().attr("href"))
            .map(|href| resolve_href(href, base))
            .unwrap_or_else(|| UNKNOWN_LINK.to_string());

        // The metadata row is the <tr> immediately following the entry row.
        let metadata = entry
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .next()
            .and_then(|row| row.select(&self.metadata).next());

        let author = metadata
            .and_then(|m| m.select(&self.author).next())
            .map(element_text)
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

        let age = metadata
            .and_then(|m| m.select(&self.age).next())
            .map(element_text)
            .unwrap_or_default();

        // Zero-score entries render no score label at all.
        let upvotes = metadata
            .and_then(|m| m.select(&self.score).next())
            .map(|el| self.parse_leading_int(&element_text(el)))
            .unwrap_or(0);

        // The metadata row holds a variable number of links; the comment
        // link is reliably the last one, not at a fixed index.
        let comments = metadata
            .and_then(|m| m.select(&self.any_link).last())
            .map(|el| self.parse_leading_int(&element_text(el)))
            .unwrap_or(0);

        ArticleRecord {
            title,
            url,
            author,
            age,
            upvotes,
            comments,
        }
    }

    /// Leading integer of a "<N> points" / "<N> comments" style label.
    /// Labels without a leading integer ("discuss") yield 0.
    fn parse_leading_int(&self, text: &str) -> u32 {
        self.leading_int
            .find(text.trim())
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    }
}

/// Collects the text content of an element, trimmed
fn element_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Resolves a possibly relative href against the listing URL
fn resolve_href(href: &str, base: Option<&Url>) -> String {
    match Url::parse(href) {
        Ok(url) => url.to_string(),
        Err(_) => base
            .and_then(|b| b.join(href).ok())
            .map(|url| url.to_string())
            .unwrap_or_else(|| href.to_string()),
    }
}
