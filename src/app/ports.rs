use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::Result;

/// What the report store answered for a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Found(String),
    NotFound,
}

// Fetch-side port
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Fetch the raw markdown report for `date`.
    async fn fetch(&self, date: NaiveDate) -> Result<FetchOutcome>;

    /// Human-readable location of the report for `date`, for logs.
    fn location(&self, date: NaiveDate) -> String;
}
