use clap::Parser;
use hn_snapshot::config::SnapshotConfig;
use hn_snapshot::pipeline;

mod args;
mod prompt;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    // Start from the config file when given, defaults otherwise
    let mut config = match &args.config {
        Some(path) => match SnapshotConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => SnapshotConfig::default(),
    };

    // Explicit flags override file values
    args::apply_overrides(&args, &mut config);
    config.apply_env_overrides();

    if args.interactive {
        if let Err(e) = prompt::collect_options(&mut config) {
            ::log::error!("Prompt failed: {}", e);
            std::process::exit(1);
        }
    }

    ::log::info!(
        "Starting snapshot of {} ({} articles)",
        config.listing.url(),
        config.count
    );
    println!("Note: fetching requires a WebDriver server (e.g., ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
    );

    let start_time = std::time::Instant::now();
    match pipeline::run(&config).await {
        Ok(summary) => {
            if summary.written < summary.requested {
                println!(
                    "Collected {} of {} requested articles (the listing ran out of pages).",
                    summary.written, summary.requested
                );
            }
            println!("Data has been written to {} successfully.", summary.output);
            ::log::info!(
                "Snapshot complete - {} records in {:.2} seconds",
                summary.written,
                start_time.elapsed().as_secs_f64()
            );
        }
        Err(e) => {
            ::log::error!("Snapshot failed: {}", e);
            std::process::exit(1);
        }
    }
}
