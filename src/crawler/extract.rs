use crate::config::CrawlConfig;
use crate::error::{ItemError, PageError};
use crate::records::PolicyRecord;
use fantoccini::elements::Element;
use fantoccini::{Client, Locator};
use std::time::Duration;

/// Marker class of a rendered search-result item
pub const RESULT_ITEM: &str = ".dys_middle_result_content_item";

/// Title element under the item's anchor
const ITEM_TITLE: &str = ".dysMiddleResultConItemTitle";

/// Summary element under the item
const ITEM_SUMMARY: &str = ".dysMiddleResultConItemMemo";

/// Container whose spans carry category and publish time
const ITEM_RELEVANT: &str = ".dysMiddleResultConItemRelevant.clearfix1";

/// Block until at least one result item is present on the current page.
///
/// Shared between the initial extraction and the post-pagination wait.
pub async fn wait_for_results(client: &Client, config: &CrawlConfig) -> Result<(), PageError> {
    client
        .wait()
        .at_most(Duration::from_secs(config.wait_timeout_secs))
        .for_element(Locator::Css(RESULT_ITEM))
        .await
        .map(|_| ())
        .map_err(PageError::from_wait)
}

/// Extract all records from the currently rendered result items.
///
/// Items are snapshotted first and then read independently: a failure on
/// one item (stale reference, missing sub-element, any other driver error)
/// skips that item and moves on to the next.
pub async fn extract_current_page(
    client: &Client,
    config: &CrawlConfig,
) -> Result<Vec<PolicyRecord>, PageError> {
    wait_for_results(client, config).await?;

    let items = client
        .find_all(Locator::Css(RESULT_ITEM))
        .await
        .map_err(PageError::Driver)?;

    let mut records = Vec::with_capacity(items.len());
    for item in &items {
        match extract_item(item).await {
            Ok(record) => {
                ::log::info!("extracted: {}", record.title);
                records.push(record);
            }
            Err(ItemError::Stale) => {
                ::log::warn!("skipping item: element went stale mid-read");
            }
            Err(e) => {
                ::log::warn!("skipping item: {}", e);
            }
        }
    }

    Ok(records)
}

/// Read the five fields of one result item.
///
/// A missing category or publish-time span yields an empty string; any
/// other missing sub-element fails the whole item.
async fn extract_item(item: &Element) -> Result<PolicyRecord, ItemError> {
    let anchor = item
        .find(Locator::Css("a"))
        .await
        .map_err(ItemError::from_cmd)?;

    let title = anchor
        .find(Locator::Css(ITEM_TITLE))
        .await
        .map_err(ItemError::from_cmd)?
        .text()
        .await
        .map_err(ItemError::from_cmd)?;

    let url = anchor
        .attr("href")
        .await
        .map_err(ItemError::from_cmd)?
        .ok_or(ItemError::MissingHref)?;

    let summary = item
        .find(Locator::Css(ITEM_SUMMARY))
        .await
        .map_err(ItemError::from_cmd)?
        .text()
        .await
        .map_err(ItemError::from_cmd)?;

    let relevant = item
        .find(Locator::Css(ITEM_RELEVANT))
        .await
        .map_err(ItemError::from_cmd)?;
    let spans = relevant
        .find_all(Locator::Css("span"))
        .await
        .map_err(ItemError::from_cmd)?;

    let category = match spans.first() {
        Some(span) => span.text().await.map_err(ItemError::from_cmd)?,
        None => String::new(),
    };
    let published_at = match spans.get(1) {
        Some(span) => span.text().await.map_err(ItemError::from_cmd)?,
        None => String::new(),
    };

    Ok(PolicyRecord::new(title, category, published_at, summary, url))
}
