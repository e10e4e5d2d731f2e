use crate::records::ArticleRecord;
use std::error::Error;

/// Header row of the output file, in column order
const HEADER: [&str; 6] = ["Title", "URL", "Author", "Upvotes", "Comments", "Time"];

/// Writes the final record sequence as CSV, one row per record.
///
/// The file at `path` is overwritten on each run.
pub fn write_csv(records: &[ArticleRecord], path: &str) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(HEADER)?;
    for record in records {
        let upvotes = record.upvotes.to_string();
        let comments = record.comments.to_string();
        writer.write_record([
            record.title.as_str(),
            record.url.as_str(),
            record.author.as_str(),
            upvotes.as_str(),
            comments.as_str(),
            record.age.as_str(),
        ])?;
    }
    writer.flush()?;

    Ok(())
}
