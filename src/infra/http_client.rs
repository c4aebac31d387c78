use crate::app::load_report_use_case::date_key;
use crate::app::ports::{DocumentFetcher, FetchOutcome};
use crate::constants::report_key;
use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::CONTENT_LENGTH;
use std::time::Duration;
use tracing::debug;

/// Reads `<base_url>/<YYYY-MM-DD>.md` over HTTP.
pub struct HttpDocumentFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDocumentFetcher {
    pub fn new(base_url: &str, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, date: NaiveDate) -> String {
        format!("{}/{}", self.base_url, report_key(&date_key(date)))
    }
}

#[async_trait]
impl DocumentFetcher for HttpDocumentFetcher {
    async fn fetch(&self, date: NaiveDate) -> Result<FetchOutcome> {
        let url = self.url_for(date);
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        debug!(
            "GET {} -> {} content_length={:?}",
            url,
            status.as_u16(),
            resp.headers().get(CONTENT_LENGTH).and_then(|v| v.to_str().ok())
        );

        // S3 answers 403 rather than 404 for missing keys on public buckets
        if !status.is_success() {
            return Ok(FetchOutcome::NotFound);
        }
        Ok(FetchOutcome::Found(resp.text().await?))
    }

    fn location(&self, date: NaiveDate) -> String {
        self.url_for(date)
    }
}
