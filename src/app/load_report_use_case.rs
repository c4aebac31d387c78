use chrono::{Local, NaiveDate};
use tracing::{error, info, warn};

use crate::app::ports::{DocumentFetcher, FetchOutcome};
use crate::constants::{
    CONTENT_LOAD_ERROR, STATUS_FAILED, STATUS_LOADED, STATUS_NOT_FOUND, STATUS_SELECT_DATE,
};
use crate::error::{Result, ViewerError};
use crate::parser::parse_report;
use crate::render::{render, RenderedReport};
use crate::types::ReportRecord;

/// Everything the dashboard shows after one load cycle.
#[derive(Debug, Clone)]
pub struct LoadedView {
    pub date: NaiveDate,
    pub status: String,
    /// Raw markdown when found, otherwise the message shown in its place.
    pub content: String,
    pub record: Option<ReportRecord>,
    pub rendered: RenderedReport,
}

impl LoadedView {
    pub fn date_key(&self) -> String {
        date_key(self.date)
    }

    /// Build the view for an already-available document.
    pub fn from_document(date: NaiveDate, document: String) -> Self {
        let record = parse_report(Some(&document)).into_record();
        let rendered = render(record.as_ref());
        Self {
            date,
            status: STATUS_LOADED.to_string(),
            content: document,
            record,
            rendered,
        }
    }

    fn without_record(date: NaiveDate, status: &str, content: String) -> Self {
        Self {
            date,
            status: status.to_string(),
            content,
            record: None,
            rendered: render(None),
        }
    }
}

/// Runs fetch → parse → render for one date at a time.
pub struct ReportViewer {
    fetcher: Box<dyn DocumentFetcher>,
}

impl ReportViewer {
    pub fn new(fetcher: Box<dyn DocumentFetcher>) -> Self {
        Self { fetcher }
    }

    pub fn loading_status(date: NaiveDate) -> String {
        format!("Loading report for {}...", date_key(date))
    }

    /// One load cycle. Never fails: fetch errors become the "failed" view.
    pub async fn load(&self, date: NaiveDate) -> LoadedView {
        info!("{}", Self::loading_status(date));
        let location = self.fetcher.location(date);

        match self.fetcher.fetch(date).await {
            Ok(FetchOutcome::Found(document)) => {
                let view = LoadedView::from_document(date, document);
                info!(
                    "Loaded report from {} ({} incidents)",
                    location,
                    view.record.as_ref().map_or(0, |r| r.incidents.len())
                );
                view
            }
            Ok(FetchOutcome::NotFound) => {
                warn!("No report at {}", location);
                LoadedView::without_record(
                    date,
                    STATUS_NOT_FOUND,
                    format!("No report found for {}.", date_key(date)),
                )
            }
            Err(e) => {
                error!("Failed to load report from {}: {}", location, e);
                LoadedView::without_record(date, STATUS_FAILED, CONTENT_LOAD_ERROR.to_string())
            }
        }
    }
}

/// `YYYY-MM-DD` key for a date.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a user-supplied `YYYY-MM-DD` key.
pub fn parse_date_key(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ViewerError::InvalidDate(STATUS_SELECT_DATE.to_string()));
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|e| ViewerError::InvalidDate(format!("'{}' is not YYYY-MM-DD: {}", input, e)))
}

/// Today's date in local time, the default selection.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
