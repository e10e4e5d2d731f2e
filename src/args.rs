use clap::{Parser, ValueEnum};
use hn_snapshot::config::SnapshotConfig;
use hn_snapshot::{Listing, SortMode};

#[derive(Parser, Debug)]
#[command(name = "hn-snapshot")]
#[command(about = "Saves a snapshot of Hacker News listings to a CSV file")]
#[command(version)]
pub struct Args {
    /// Listing to fetch (top, newest, past)
    #[arg(short, long, value_enum)]
    pub listing: Option<ListingArg>,

    /// Number of articles to collect (1-60)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Secondary ordering applied before writing
    #[arg(short, long, value_enum)]
    pub sort: Option<SortArg>,

    /// Output CSV path
    #[arg(short, long)]
    pub output: Option<String>,

    /// Load run configuration from a JSON file (flags still override)
    #[arg(long)]
    pub config: Option<String>,

    /// Pick the listing, count and ordering interactively
    #[arg(short, long, default_value_t = false)]
    pub interactive: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListingArg {
    Top,
    Newest,
    Past,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    None,
    Votes,
    Comments,
    VotesComments,
}

/// Convert from CLI argument listing type to internal listing type
pub fn convert_listing(arg: ListingArg) -> Listing {
    match arg {
        ListingArg::Top => Listing::Top,
        ListingArg::Newest => Listing::Newest,
        ListingArg::Past => Listing::Past,
    }
}

/// Convert from CLI argument sort type to internal sort type
pub fn convert_sort(arg: SortArg) -> SortMode {
    match arg {
        SortArg::None => SortMode::None,
        SortArg::Votes => SortMode::Votes,
        SortArg::Comments => SortMode::Comments,
        SortArg::VotesComments => SortMode::VotesAndComments,
    }
}

/// Lay explicitly given flags over the base configuration
pub fn apply_overrides(args: &Args, config: &mut SnapshotConfig) {
    if let Some(listing) = args.listing {
        config.listing = convert_listing(listing);
    }
    if let Some(count) = args.count {
        config.count = count;
    }
    if let Some(sort) = args.sort {
        config.sort = convert_sort(sort);
    }
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
}
