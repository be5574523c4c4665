// Re-export modules
pub mod config;
pub mod crawler;
pub mod error;
pub mod records;
pub mod sink;

// Re-export commonly used types for convenience
pub use config::CrawlConfig;
pub use error::CrawlError;
pub use records::PolicyRecord;
pub use sink::RecordSink;
