/// Markers and column names shared with the report generator.
/// These strings are matched byte-for-byte against published reports, so any
/// change here must be mirrored on the publishing side.

// Title line prefix; the date follows the last hyphen
pub const TITLE_PREFIX: &str = "# Daily Cloud Incident Report";

// Section marker lines (matched case-insensitively after trimming)
pub const SUMMARY_MARKER: &str = "**Summary**";
pub const BY_EVENT_MARKER: &str = "**By event type**";
pub const BY_REMEDIATION_MARKER: &str = "**By remediation type**";

// Table heading (matched as a prefix after trimming)
pub const INCIDENT_DETAILS_HEADING: &str = "## Incident Details";

// Summary keys, lower-cased as the parser stores them
pub const KEY_TOTAL_INCIDENTS: &str = "total incidents";
pub const KEY_SUCCESS: &str = "success (heuristic)";
pub const KEY_FAILED: &str = "failed (heuristic)";
pub const KEY_UNIQUE_INSTANCES: &str = "unique instances";

// Incident table headers (case-sensitive)
pub const COL_TIME: &str = "Time (created_at)";
pub const COL_EVENT_TYPE: &str = "Event Type";
pub const COL_INSTANCE_ID: &str = "Instance ID";
pub const COL_REMEDIATION_TYPE: &str = "Remediation Type";
pub const COL_ACTION: &str = "Action";
pub const COL_MESSAGE: &str = "Message";

/// Column order of the incident table, as rendered.
pub const INCIDENT_COLUMNS: [&str; 6] = [
    COL_TIME,
    COL_EVENT_TYPE,
    COL_INSTANCE_ID,
    COL_REMEDIATION_TYPE,
    COL_ACTION,
    COL_MESSAGE,
];

// Display placeholders
pub const VALUE_PLACEHOLDER: &str = "–";
pub const NO_REPORT_LOADED: &str = "No report loaded.";
pub const NO_DATA: &str = "No data.";
pub const NO_INCIDENTS_RECORDED: &str = "No incidents recorded for this date.";

// Viewer status lines
pub const STATUS_LOADED: &str = "Report loaded.";
pub const STATUS_NOT_FOUND: &str = "Report not found.";
pub const STATUS_FAILED: &str = "Failed to load report.";
pub const STATUS_SELECT_DATE: &str = "Please select a date.";
pub const CONTENT_LOAD_ERROR: &str = "Error loading report.";

// Default report store
pub const DEFAULT_BUCKET_URL: &str =
    "https://cloud-incident-reports-scott.s3.amazonaws.com/daily-reports";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 15;
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Object key for a report date, e.g. `2025-11-29.md`.
pub fn report_key(date_key: &str) -> String {
    format!("{}.md", date_key)
}
