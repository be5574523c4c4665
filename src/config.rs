use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use url::Url;

/// Configuration for a single crawl run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// Free-text query sent to the policy library search
    #[serde(default)]
    pub query: String,

    /// Search endpoint of the policy document library
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Maximum attempts for the initial page load
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Delay between initial-load retries, in seconds
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,

    /// Upper bound on waiting for result items to render, in seconds
    #[serde(default = "default_wait_timeout_secs")]
    pub wait_timeout_secs: u64,

    /// Output file path (defaults to a name derived from the query)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

/// Default search endpoint
fn default_endpoint() -> String {
    "https://sousuo.www.gov.cn/zcwjk/policyDocumentLibrary".to_string()
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default value for max_retries
fn default_max_retries() -> u32 {
    5
}

/// Default delay between retries
fn default_retry_delay_secs() -> u64 {
    5
}

/// Default readiness-wait timeout
fn default_wait_timeout_secs() -> u64 {
    10
}

impl CrawlConfig {
    /// Create a new configuration with default values
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            endpoint: default_endpoint(),
            webdriver_url: default_webdriver_url(),
            max_retries: default_max_retries(),
            retry_delay_secs: default_retry_delay_secs(),
            wait_timeout_secs: default_wait_timeout_secs(),
            output: None,
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Build the search URL with the query percent-encoded
    pub fn search_url(&self) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&self.endpoint)?;
        url.query_pairs_mut()
            .append_pair("q", &self.query)
            .append_pair("t", "zhengcelibrary")
            .append_pair("orpro", "");
        Ok(url)
    }

    /// Path of the output artifact, derived from the query unless overridden
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}政策文件.csv", self.query)))
    }
}
