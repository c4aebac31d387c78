use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// A summary value: the integer when the label's value parsed as one,
/// otherwise the trimmed text as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SummaryValue {
    Int(i64),
    Text(String),
}

impl fmt::Display for SummaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryValue::Int(n) => write!(f, "{}", n),
            SummaryValue::Text(s) => f.write_str(s),
        }
    }
}

/// Ordered label → value mapping from the summary section.
///
/// Keeps first-seen order; inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    entries: Vec<(String, SummaryValue)>,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: String, value: SummaryValue) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&SummaryValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SummaryValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Summary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// One `name: count` line from a breakdown section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownItem {
    pub name: String,
    pub count: i64,
}

impl BreakdownItem {
    pub fn new(name: impl Into<String>, count: i64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// One incident table row, keyed by the header cells of its table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidentRow {
    cells: Vec<(String, String)>,
}

impl IncidentRow {
    /// Pairs headers with cells. Callers ensure both have the same length.
    ///
    /// A repeated header keeps its first position and its last cell.
    pub fn from_cells(headers: &[String], cells: Vec<String>) -> Self {
        let mut row = Self::default();
        for (header, cell) in headers.iter().zip(cells) {
            match row.cells.iter_mut().find(|(h, _)| h == header) {
                Some(entry) => entry.1 = cell,
                None => row.cells.push((header.clone(), cell)),
            }
        }
        row
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, c)| c.as_str())
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(h, _)| h.as_str())
    }

}

impl Serialize for IncidentRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (h, c) in &self.cells {
            map.serialize_entry(h, c)?;
        }
        map.end()
    }
}

/// Structured view of one daily incident report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    pub date: Option<String>,
    pub summary: Summary,
    pub by_event: Vec<BreakdownItem>,
    pub by_remediation: Vec<BreakdownItem>,
    pub incidents: Vec<IncidentRow>,
}

impl ReportRecord {
    /// The title date as a calendar date, when it is written as `YYYY-MM-DD`.
    pub fn report_date(&self) -> Option<NaiveDate> {
        self.date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }
}

/// Result of parsing a report document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Parsed(ReportRecord),
    /// No document, or an empty one.
    Empty,
}

impl ParseOutcome {
    pub fn record(&self) -> Option<&ReportRecord> {
        match self {
            ParseOutcome::Parsed(record) => Some(record),
            ParseOutcome::Empty => None,
        }
    }

    pub fn into_record(self) -> Option<ReportRecord> {
        match self {
            ParseOutcome::Parsed(record) => Some(record),
            ParseOutcome::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ParseOutcome::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_insert_replaces_in_place() {
        let mut summary = Summary::new();
        summary.insert("a".to_string(), SummaryValue::Int(1));
        summary.insert("b".to_string(), SummaryValue::Int(2));
        summary.insert("a".to_string(), SummaryValue::Text("x".to_string()));

        assert_eq!(summary.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(summary.get("a"), Some(&SummaryValue::Text("x".to_string())));
        assert_eq!(summary.len(), 2);
    }

    #[test]
    fn test_record_serializes_with_wire_field_names() {
        let mut summary = Summary::new();
        summary.insert("total incidents".to_string(), SummaryValue::Int(2));
        summary.insert("note".to_string(), SummaryValue::Text("see ticket".to_string()));
        let headers = vec!["Action".to_string(), "Message".to_string()];
        let record = ReportRecord {
            date: Some("2025-11-29".to_string()),
            summary,
            by_event: vec![BreakdownItem::new("EC2_HIGH_CPU", 2)],
            by_remediation: vec![],
            incidents: vec![IncidentRow::from_cells(
                &headers,
                vec!["REBOOT".to_string(), "ok".to_string()],
            )],
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "date": "2025-11-29",
                "summary": {"total incidents": 2, "note": "see ticket"},
                "byEvent": [{"name": "EC2_HIGH_CPU", "count": 2}],
                "byRemediation": [],
                "incidents": [{"Action": "REBOOT", "Message": "ok"}]
            })
        );
    }

    #[test]
    fn test_repeated_header_keeps_last_cell() {
        let headers = vec!["Action".to_string(), "Action".to_string()];
        let row = IncidentRow::from_cells(&headers, vec!["first".to_string(), "second".to_string()]);

        assert_eq!(row.headers().collect::<Vec<_>>(), vec!["Action"]);
        assert_eq!(row.get("Action"), Some("second"));
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"Action":"second"}"#
        );
    }

    #[test]
    fn test_report_date_only_for_calendar_dates() {
        let mut record = ReportRecord {
            date: Some("2024-05-01".to_string()),
            ..Default::default()
        };
        assert_eq!(record.report_date(), NaiveDate::from_ymd_opt(2024, 5, 1));

        record.date = Some("yesterday".to_string());
        assert_eq!(record.report_date(), None);
    }
}
