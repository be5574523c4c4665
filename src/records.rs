use serde::{Deserialize, Serialize};

/// A single policy document entry extracted from a rendered result item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRecord {
    /// Document title
    pub title: String,

    /// Document category (empty if the page shows none)
    pub category: String,

    /// Publish time as displayed (empty if the page shows none)
    pub published_at: String,

    /// Short summary text
    pub summary: String,

    /// Absolute URL of the document page
    pub url: String,
}

impl PolicyRecord {
    /// Create a new record
    pub fn new(
        title: String,
        category: String,
        published_at: String,
        summary: String,
        url: String,
    ) -> Self {
        Self {
            title,
            category,
            published_at,
            summary,
            url,
        }
    }
}
