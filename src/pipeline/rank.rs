use crate::SortMode;
use crate::records::ArticleRecord;

/// Applies the requested secondary ordering and truncates to `desired`.
///
/// Both passes are stable sorts, so equal keys keep their prior relative
/// order; the on-page order is the only tie-break. When both orderings
/// are enabled the comment pass runs first and the vote pass second, so
/// vote order wins any ties the comment pass produced.
pub fn finalize(
    mut records: Vec<ArticleRecord>,
    desired: usize,
    sort: SortMode,
) -> Vec<ArticleRecord> {
    if sort.by_comments() {
        records.sort_by(|a, b| b.comments.cmp(&a.comments));
    }
    if sort.by_votes() {
        records.sort_by(|a, b| b.upvotes.cmp(&a.upvotes));
    }
    records.truncate(desired);
    records
}
