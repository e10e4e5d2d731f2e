use dialoguer::{Input, Select, theme::ColorfulTheme};
use hn_snapshot::config::{MAX_COUNT, SnapshotConfig};
use hn_snapshot::{Listing, SortMode};
use std::error::Error;

/// Fills in the run options interactively, starting from the current
/// configuration values
pub fn collect_options(config: &mut SnapshotConfig) -> Result<(), Box<dyn Error>> {
    let theme = ColorfulTheme::default();

    let listings = [
        "Today's front page",
        "Newest submissions",
        "Yesterday's front page",
    ];
    let listing = Select::with_theme(&theme)
        .with_prompt("Which listing?")
        .items(&listings)
        .default(0)
        .interact()?;
    config.listing = match listing {
        0 => Listing::Top,
        1 => Listing::Newest,
        _ => Listing::Past,
    };

    config.count = Input::with_theme(&theme)
        .with_prompt(format!("How many articles? (1-{})", MAX_COUNT))
        .default(config.count)
        .validate_with(|n: &usize| {
            if (1..=MAX_COUNT).contains(n) {
                Ok(())
            } else {
                Err(format!("enter a number between 1 and {}", MAX_COUNT))
            }
        })
        .interact_text()?;

    let orderings = [
        "Keep page order",
        "Most upvotes first",
        "Most comments first",
        "Most comments, then most upvotes",
    ];
    let ordering = Select::with_theme(&theme)
        .with_prompt("How should the results be ordered?")
        .items(&orderings)
        .default(0)
        .interact()?;
    config.sort = match ordering {
        0 => SortMode::None,
        1 => SortMode::Votes,
        2 => SortMode::Comments,
        _ => SortMode::VotesAndComments,
    };

    Ok(())
}
