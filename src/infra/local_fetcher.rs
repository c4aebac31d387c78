use crate::app::load_report_use_case::date_key;
use crate::app::ports::{DocumentFetcher, FetchOutcome};
use crate::constants::report_key;
use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Reads `<dir>/<YYYY-MM-DD>.md` from a local directory of published reports.
pub struct LocalDocumentFetcher {
    dir: PathBuf,
}

impl LocalDocumentFetcher {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(report_key(&date_key(date)))
    }
}

#[async_trait]
impl DocumentFetcher for LocalDocumentFetcher {
    async fn fetch(&self, date: NaiveDate) -> Result<FetchOutcome> {
        match tokio::fs::read_to_string(self.path_for(date)).await {
            Ok(text) => Ok(FetchOutcome::Found(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(FetchOutcome::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    fn location(&self, date: NaiveDate) -> String {
        self.path_for(date).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_report_for_date() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("2025-11-29.md"), "# Daily Cloud Incident Report - 2025-11-29").unwrap();
        let fetcher = LocalDocumentFetcher::new(dir.path());

        let found = fetcher
            .fetch(NaiveDate::from_ymd_opt(2025, 11, 29).unwrap())
            .await
            .unwrap();
        assert_eq!(
            found,
            FetchOutcome::Found("# Daily Cloud Incident Report - 2025-11-29".to_string())
        );

        let missing = fetcher
            .fetch(NaiveDate::from_ymd_opt(2025, 11, 30).unwrap())
            .await
            .unwrap();
        assert_eq!(missing, FetchOutcome::NotFound);
    }
}
