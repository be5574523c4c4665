use clap::Parser;
use policy_scrape::CrawlConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "policy-scrape")]
#[command(about = "Collects policy-document metadata from the gov.cn policy library search")]
#[command(version)]
pub struct Args {
    /// Free-text query for the policy document library
    pub query: String,

    /// URL of the WebDriver instance (e.g. ChromeDriver)
    #[arg(long, default_value = "http://localhost:4444")]
    pub webdriver_url: String,

    /// Output CSV path (defaults to <query>政策文件.csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum attempts for the initial page load
    #[arg(long, default_value_t = 5)]
    pub max_retries: u32,

    /// Delay between initial-load retries in seconds
    #[arg(long, default_value_t = 5)]
    pub retry_delay: u64,

    /// Seconds to wait for result items to render
    #[arg(long, default_value_t = 10)]
    pub wait_timeout: u64,

    /// JSON configuration file; flags on the command line are ignored
    /// except for the query and --output
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Build the crawl configuration from the parsed arguments
    pub fn into_config(self) -> Result<CrawlConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => CrawlConfig::from_file(path)?,
            None => {
                let mut config = CrawlConfig::new(&self.query);
                config.webdriver_url = self.webdriver_url.clone();
                config.max_retries = self.max_retries;
                config.retry_delay_secs = self.retry_delay;
                config.wait_timeout_secs = self.wait_timeout;
                config
            }
        };

        config.query = self.query;
        if let Some(output) = self.output {
            config.output = Some(output);
        }
        Ok(config)
    }
}
