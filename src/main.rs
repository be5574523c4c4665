use clap::Parser;
use policy_scrape::{CrawlError, RecordSink, crawler};

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();
    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("unusable configuration: {}", e);
            std::process::exit(2);
        }
    };

    ::log::info!("searching policy library for: {}", config.query);

    let mut sink = RecordSink::new(config.output_path());
    let result = crawler::run(&config, &mut sink).await;

    // Report the crawl outcome before touching the filesystem, so a flush
    // failure cannot mask the root cause.
    if let Err(e) = &result {
        ::log::error!("crawl failed: {}", e);
        if matches!(e, CrawlError::Connect(_)) {
            ::log::error!("no page was ever loaded; output will contain the header row only");
        }
    }

    // The artifact is written on every path, even when the crawl failed
    // before extracting anything (header row only in that case).
    match sink.flush() {
        Ok(()) => ::log::info!(
            "wrote {} records to {}",
            sink.len(),
            sink.path().display()
        ),
        Err(e) => {
            ::log::error!("failed to write output: {}", e);
            std::process::exit(1);
        }
    }

    if result.is_err() {
        std::process::exit(1);
    }
}
