use crate::config::CrawlConfig;
use crate::error::ConnectError;
use fantoccini::Client;
use std::time::Duration;

/// Open the initial search page, retrying on transient navigation failure.
///
/// Each failed attempt is logged with its count and the underlying error;
/// exhausting the retry budget is fatal for the run. Success says nothing
/// about whether result items will render, only that navigation completed.
pub async fn establish(client: &Client, url: &str, config: &CrawlConfig) -> Result<(), ConnectError> {
    let mut attempts = 0;
    loop {
        ::log::info!("opening {}", url);
        match client.goto(url).await {
            Ok(()) => return Ok(()),
            Err(e) => {
                attempts += 1;
                ::log::warn!(
                    "attempt {}/{} to open {} failed: {}",
                    attempts,
                    config.max_retries,
                    url,
                    e
                );
                if attempts >= config.max_retries {
                    ::log::error!("reached maximum retries, giving up");
                    return Err(ConnectError::RetriesExhausted {
                        attempts,
                        source: e,
                    });
                }
                tokio::time::sleep(Duration::from_secs(config.retry_delay_secs)).await;
            }
        }
    }
}
