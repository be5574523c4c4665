pub mod connect;
pub mod extract;
pub mod paginate;

use crate::config::CrawlConfig;
use crate::error::CrawlError;
use crate::sink::RecordSink;
use fantoccini::{Client, ClientBuilder};
use paginate::PageStep;

/// Run the whole crawl: acquire the WebDriver session, establish the first
/// page, walk the result pages, and release the session on every exit path.
///
/// Page-level failures are logged and end the walk without surfacing here,
/// so the caller can still flush whatever the sink has gathered. Only a
/// session failure or initial-load retry exhaustion is returned as an error.
pub async fn run(config: &CrawlConfig, sink: &mut RecordSink) -> Result<(), CrawlError> {
    let search_url = config.search_url()?;
    ::log::info!("visiting: {}", search_url);

    let client = ClientBuilder::native()
        .connect(&config.webdriver_url)
        .await
        .map_err(|source| CrawlError::Session {
            url: config.webdriver_url.clone(),
            source,
        })?;

    let result = match connect::establish(&client, search_url.as_str(), config).await {
        Ok(()) => {
            crawl_pages(&client, config, sink).await;
            Ok(())
        }
        Err(e) => Err(CrawlError::Connect(e)),
    };

    if let Err(e) = client.close().await {
        ::log::warn!("failed to close WebDriver session: {}", e);
    }

    result
}

/// The extract -> append -> advance loop over result pages.
///
/// Any page-level error terminates the loop; records appended so far stay
/// in the sink.
async fn crawl_pages(client: &Client, config: &CrawlConfig, sink: &mut RecordSink) {
    let mut page = 1usize;
    loop {
        match extract::extract_current_page(client, config).await {
            Ok(records) => {
                ::log::info!("page {}: {} records", page, records.len());
                sink.append(records);
            }
            Err(e) => {
                ::log::error!("stopping crawl on page {}: {}", page, e);
                return;
            }
        }

        match paginate::advance_or_stop(client, config).await {
            Ok(PageStep::Advanced) => page += 1,
            Ok(PageStep::Stopped) => return,
            Err(e) => {
                ::log::error!("stopping crawl after page {}: {}", page, e);
                return;
            }
        }
    }
}
