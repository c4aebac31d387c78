//! Line-oriented extractor for the daily incident report.
//!
//! The report is a narrow, generator-controlled markdown dialect, so extraction
//! is four independent scans over the same line slice rather than a markdown
//! parse. Every scan is total: missing or malformed structure degrades to an
//! empty value for that section and never affects the other sections.

use tracing::debug;

use crate::constants::{
    BY_EVENT_MARKER, BY_REMEDIATION_MARKER, INCIDENT_DETAILS_HEADING, SUMMARY_MARKER,
    TITLE_PREFIX,
};
use crate::types::{BreakdownItem, IncidentRow, ParseOutcome, ReportRecord, Summary, SummaryValue};

/// Parse a report document. `None` and empty input yield [`ParseOutcome::Empty`].
pub fn parse_report(document: Option<&str>) -> ParseOutcome {
    let text = match document {
        Some(t) if !t.is_empty() => t,
        _ => return ParseOutcome::Empty,
    };

    let lines: Vec<&str> = text.split('\n').collect();
    debug!("parse_report: start lines={}", lines.len());

    let record = ReportRecord {
        date: extract_date(&lines),
        summary: extract_summary(&lines, SUMMARY_MARKER),
        by_event: extract_breakdown(&lines, BY_EVENT_MARKER),
        by_remediation: extract_breakdown(&lines, BY_REMEDIATION_MARKER),
        incidents: extract_incidents(&lines),
    };

    debug!(
        "parse_report: date={:?} summary={} by_event={} by_remediation={} incidents={}",
        record.date,
        record.summary.len(),
        record.by_event.len(),
        record.by_remediation.len(),
        record.incidents.len()
    );
    ParseOutcome::Parsed(record)
}

/// Text after the last ` - ` separator of the first title line.
///
/// Hyphens inside the date itself are not separators; a title with no
/// whitespace-delimited hyphen falls back to its last hyphen.
pub fn extract_date(lines: &[&str]) -> Option<String> {
    let title = lines.iter().find(|l| l.starts_with(TITLE_PREFIX))?;
    let idx = date_separator(title)?;
    Some(title[idx + 1..].trim().to_string())
}

fn date_separator(title: &str) -> Option<usize> {
    title
        .match_indices('-')
        .map(|(i, _)| i)
        .filter(|&i| {
            let before = title[..i].chars().next_back().is_some_and(char::is_whitespace);
            let after = title[i + 1..].chars().next().map_or(true, char::is_whitespace);
            before && after
        })
        .last()
        .or_else(|| title.rfind('-'))
}

/// `label: value` bullets under `marker`, keyed by the lower-cased label.
pub fn extract_summary(lines: &[&str], marker: &str) -> Summary {
    let mut summary = Summary::new();
    for bullet in section_bullets(lines, marker) {
        let Some((label, value)) = bullet.split_once(':') else {
            continue;
        };
        let key = label.trim().to_lowercase();
        if key.is_empty() {
            continue;
        }
        let value = match parse_leading_int(value) {
            Some(n) => SummaryValue::Int(n),
            None => SummaryValue::Text(value.trim().to_string()),
        };
        summary.insert(key, value);
    }
    summary
}

/// `name: count` bullets under `marker`, in document order.
pub fn extract_breakdown(lines: &[&str], marker: &str) -> Vec<BreakdownItem> {
    section_bullets(lines, marker)
        .filter_map(|bullet| {
            let (name, count) = bullet.split_once(':')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some(BreakdownItem::new(name, parse_leading_int(count).unwrap_or(0)))
        })
        .collect()
}

/// Rows of the first pipe table after the incident details heading.
///
/// The line after the header row is taken to be the separator and skipped
/// without inspection. Rows whose cell count differs from the header's are dropped.
pub fn extract_incidents(lines: &[&str]) -> Vec<IncidentRow> {
    let Some(heading) = lines
        .iter()
        .position(|l| l.trim().starts_with(INCIDENT_DETAILS_HEADING))
    else {
        return Vec::new();
    };

    let Some(header_idx) = (heading..lines.len()).find(|&i| is_table_line(lines[i])) else {
        return Vec::new();
    };

    let headers = split_cells(lines[header_idx]);
    if headers.is_empty() {
        return Vec::new();
    }

    let mut rows = Vec::new();
    let mut dropped = 0usize;
    for line in lines
        .iter()
        .skip(header_idx + 2)
        .take_while(|l| is_table_line(l))
    {
        let cells = split_cells(line);
        if cells.len() == headers.len() {
            rows.push(IncidentRow::from_cells(&headers, cells));
        } else {
            dropped += 1;
        }
    }
    if dropped > 0 {
        debug!(
            "extract_incidents: dropped {} rows with a cell count other than {}",
            dropped,
            headers.len()
        );
    }
    rows
}

/// Bullet bodies (leading `-` removed, trimmed) of the consecutive bullet lines
/// that follow the marker line. Empty when the marker is absent.
fn section_bullets<'a>(lines: &'a [&'a str], marker: &str) -> impl Iterator<Item = &'a str> + 'a {
    let marker = marker.to_lowercase();
    let start = lines
        .iter()
        .position(|l| l.trim().to_lowercase() == marker)
        .map(|i| i + 1)
        .unwrap_or(lines.len());

    lines[start..]
        .iter()
        .map(|l| l.trim())
        .take_while(|l| l.starts_with('-'))
        .map(|l| l[1..].trim())
}

fn is_table_line(line: &str) -> bool {
    line.trim().starts_with('|')
}

fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

/// Base-10 integer at the start of `s`: leading whitespace and an optional sign
/// are accepted, parsing stops at the first non-digit. `None` without digits
/// or on overflow.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
