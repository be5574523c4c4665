use fantoccini::error::{CmdError, ErrorStatus, NewSessionError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors while establishing the initial page
#[derive(Debug, Error)]
pub enum ConnectError {
    /// The initial navigation kept failing until the retry budget ran out.
    /// The crawl cannot proceed without a first page, so this is fatal.
    #[error("initial page load failed after {attempts} attempts: {source}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: CmdError,
    },
}

/// Page-level errors: these halt the crawl but keep everything gathered so far
#[derive(Debug, Error)]
pub enum PageError {
    #[error("timed out waiting for result items to render")]
    WaitTimeout,

    #[error("failed while probing the next-page control: {0}")]
    Pagination(#[source] CmdError),

    #[error("driver command failed: {0}")]
    Driver(#[source] CmdError),
}

impl PageError {
    /// Classify a failure from the readiness wait
    pub fn from_wait(err: CmdError) -> Self {
        match err {
            CmdError::WaitTimeout => PageError::WaitTimeout,
            other => PageError::Driver(other),
        }
    }
}

/// Item-level errors: logged and skipped, never abort the page
#[derive(Debug, Error)]
pub enum ItemError {
    /// The item's backing DOM node was replaced between lookup and read.
    /// Policy is skip without retry; re-locating the node is not reliable.
    #[error("element went stale during extraction")]
    Stale,

    #[error("required sub-element not found: {0}")]
    Missing(#[source] CmdError),

    #[error("result anchor has no href attribute")]
    MissingHref,

    #[error("driver command failed: {0}")]
    Driver(#[source] CmdError),
}

impl ItemError {
    /// Classify a driver failure raised while reading one result item.
    /// Stale references get their own kind because they are handled
    /// differently from a genuinely absent element.
    pub fn from_cmd(err: CmdError) -> Self {
        if is_stale(&err) {
            ItemError::Stale
        } else if err.is_no_such_element() {
            ItemError::Missing(err)
        } else {
            ItemError::Driver(err)
        }
    }
}

/// Fatal errors for the whole run
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("failed to start WebDriver session at {url}: {source}")]
    Session {
        url: String,
        #[source]
        source: NewSessionError,
    },

    #[error(transparent)]
    Connect(#[from] ConnectError),

    #[error("invalid search endpoint: {0}")]
    Url(#[from] url::ParseError),
}

/// Errors while persisting the output artifact
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize csv: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Whether a driver error is a stale element reference
pub fn is_stale(err: &CmdError) -> bool {
    matches!(err, CmdError::Standard(w) if matches!(w.error, ErrorStatus::StaleElementReference))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fantoccini::error::WebDriver;

    #[test]
    fn test_stale_classification() {
        let stale = CmdError::Standard(WebDriver::new(
            ErrorStatus::StaleElementReference,
            "stale element reference".to_string(),
        ));
        assert!(is_stale(&stale));
        assert!(matches!(ItemError::from_cmd(stale), ItemError::Stale));

        assert!(!is_stale(&CmdError::WaitTimeout));
    }

    #[test]
    fn test_missing_classification() {
        let missing = CmdError::Standard(WebDriver::new(
            ErrorStatus::NoSuchElement,
            "no such element".to_string(),
        ));
        assert!(missing.is_no_such_element());
        assert!(!is_stale(&missing));
        assert!(matches!(
            ItemError::from_cmd(missing),
            ItemError::Missing(_)
        ));
    }

    #[test]
    fn test_wait_classification() {
        assert!(matches!(
            PageError::from_wait(CmdError::WaitTimeout),
            PageError::WaitTimeout
        ));
        let other = CmdError::NotJson("not json".to_string());
        assert!(matches!(PageError::from_wait(other), PageError::Driver(_)));
    }
}
