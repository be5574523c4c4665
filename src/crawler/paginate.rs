use crate::config::CrawlConfig;
use crate::crawler::extract;
use crate::error::PageError;
use fantoccini::{Client, Locator};

/// Next-page control in the pagination bar
const NEXT_BUTTON: &str = ".btn-next";

/// Outcome of a pagination step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStep {
    /// Moved to the next page and its result items have rendered
    Advanced,
    /// No further pages: control absent or disabled
    Stopped,
}

/// Advance to the next result page, or report that the crawl is complete.
///
/// A missing control and a control carrying the `disabled` attribute are
/// both ordinary terminal conditions, not errors. Anything else that fails
/// while probing or clicking surfaces as a page-level error.
pub async fn advance_or_stop(client: &Client, config: &CrawlConfig) -> Result<PageStep, PageError> {
    let next = match client.find(Locator::Css(NEXT_BUTTON)).await {
        Ok(element) => element,
        Err(e) if e.is_no_such_element() => {
            ::log::info!("no next-page control found, crawl complete");
            return Ok(PageStep::Stopped);
        }
        Err(e) => return Err(PageError::Pagination(e)),
    };

    let disabled = next
        .attr("disabled")
        .await
        .map_err(PageError::Pagination)?;
    if disabled.is_some() {
        ::log::info!("next-page control disabled, last page reached");
        return Ok(PageStep::Stopped);
    }

    next.click().await.map_err(PageError::Pagination)?;
    extract::wait_for_results(client, config).await?;
    Ok(PageStep::Advanced)
}
