//! Markdown report generator, the publishing side of the report format.
//!
//! Produces exactly the sub-grammar the parser reads: every generated table row
//! has one non-empty cell per column, so it survives `parse_report` as long as
//! no field contains a `|`.

use serde::Deserialize;
use std::collections::HashSet;

use crate::constants::{
    BY_EVENT_MARKER, BY_REMEDIATION_MARKER, INCIDENT_COLUMNS, INCIDENT_DETAILS_HEADING,
    NO_INCIDENTS_RECORDED, SUMMARY_MARKER, TITLE_PREFIX,
};

const MESSAGE_MAX_CHARS: usize = 80;
const MESSAGE_CUT_CHARS: usize = 77;
const MISSING_FIELD: &str = "-";
const UNKNOWN_TYPE: &str = "UNKNOWN";

/// One stored incident. Every field may be missing in the incident store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Incident {
    pub created_at: Option<String>,
    pub event_type: Option<String>,
    pub instance_id: Option<String>,
    pub remediation_type: Option<String>,
    pub action: Option<String>,
    pub message: Option<String>,
}

impl Incident {
    /// Failure heuristic: "FAILED" anywhere in action or message, any case.
    pub fn is_failed(&self) -> bool {
        let text = format!(
            "{}{}",
            self.action.as_deref().unwrap_or_default(),
            self.message.as_deref().unwrap_or_default()
        );
        text.to_uppercase().contains("FAILED")
    }
}

/// Render the daily report for `date_key` (`YYYY-MM-DD`).
pub fn generate_markdown(date_key: &str, incidents: &[Incident]) -> String {
    let mut lines: Vec<String> = vec![format!("{} - {}", TITLE_PREFIX, date_key), String::new()];

    if incidents.is_empty() {
        lines.push(NO_INCIDENTS_RECORDED.to_string());
        return lines.join("\n");
    }

    let total = incidents.len();
    let failed = incidents.iter().filter(|i| i.is_failed()).count();
    let unique_instances = incidents
        .iter()
        .filter_map(|i| i.instance_id.as_deref())
        .filter(|id| !id.is_empty())
        .collect::<HashSet<_>>()
        .len();

    lines.push(SUMMARY_MARKER.to_string());
    lines.push(format!("- Total incidents: {}", total));
    lines.push(format!("- Success (heuristic): {}", total - failed));
    lines.push(format!("- Failed (heuristic): {}", failed));
    lines.push(format!("- Unique instances: {}", unique_instances));
    lines.push(String::new());

    lines.push(BY_EVENT_MARKER.to_string());
    for (name, count) in most_common(incidents.iter().map(|i| i.event_type.as_deref())) {
        lines.push(format!("- {}: {}", name, count));
    }
    lines.push(String::new());

    lines.push(BY_REMEDIATION_MARKER.to_string());
    for (name, count) in most_common(incidents.iter().map(|i| i.remediation_type.as_deref())) {
        lines.push(format!("- {}: {}", name, count));
    }
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());

    lines.push(INCIDENT_DETAILS_HEADING.to_string());
    lines.push(String::new());
    lines.push(format!("| {} |", INCIDENT_COLUMNS.join(" | ")));
    lines.push(format!(
        "|{}|",
        INCIDENT_COLUMNS
            .iter()
            .map(|c| "-".repeat(c.len() + 2))
            .collect::<Vec<_>>()
            .join("|")
    ));

    let mut sorted: Vec<&Incident> = incidents.iter().collect();
    sorted.sort_by(|a, b| {
        a.created_at
            .as_deref()
            .unwrap_or_default()
            .cmp(b.created_at.as_deref().unwrap_or_default())
    });
    for inc in sorted {
        let field = |v: &Option<String>| match v.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => MISSING_FIELD.to_string(),
        };
        lines.push(format!(
            "| {} | {} | {} | {} | {} | {} |",
            field(&inc.created_at),
            field(&inc.event_type),
            field(&inc.instance_id),
            field(&inc.remediation_type),
            field(&inc.action),
            table_message(inc.message.as_deref().unwrap_or_default())
        ));
    }

    lines.join("\n")
}

/// Counts per name, highest first; ties keep first-seen order.
fn most_common<'a>(names: impl Iterator<Item = Option<&'a str>>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for name in names {
        let name = name.unwrap_or(UNKNOWN_TYPE);
        match counts.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 += 1,
            None => counts.push((name.to_string(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

// Empty cells vanish when the table is read back, so they become `-` too.
fn table_message(message: &str) -> String {
    let message = message.replace('\n', " ");
    if message.trim().is_empty() {
        MISSING_FIELD.to_string()
    } else if message.chars().count() > MESSAGE_MAX_CHARS {
        let cut: String = message.chars().take(MESSAGE_CUT_CHARS).collect();
        format!("{}...", cut)
    } else {
        message
    }
}

/// Demo incidents for `date_key`, one of each remediation outcome.
pub fn sample_incidents(date_key: &str) -> Vec<Incident> {
    let incident = |time: &str, event: &str, instance: &str, remediation: &str, action: &str, message: &str| Incident {
        created_at: Some(format!("{}T{}Z", date_key, time)),
        event_type: Some(event.to_string()),
        instance_id: Some(instance.to_string()),
        remediation_type: Some(remediation.to_string()),
        action: Some(action.to_string()),
        message: Some(message.to_string()),
    };
    vec![
        incident(
            "01:20:00",
            "EC2_HIGH_CPU",
            "i-samplecpu-001",
            "EC2_HIGH_CPU",
            "NO_ACTION",
            "CPU reached 92% for over 3 minutes.",
        ),
        incident(
            "02:50:00",
            "EC2_HIGH_CPU",
            "i-samplecpu-002",
            "EC2_HIGH_CPU",
            "REBOOT",
            "High CPU persisted. Reboot attempted.",
        ),
        incident(
            "05:10:00",
            "StatusCheckFailed",
            "i-samplestatus-001",
            "EC2_STATUS_CHECK_FAILED",
            "FAILED",
            "StatusCheckFailed detected. Reboot dry-run failed.",
        ),
        incident(
            "09:00:00",
            "UnexpectedStop",
            "i-samplestop-003",
            "EC2_UNEXPECTED_STOP",
            "STARTED",
            "Instance unexpectedly stopped. Auto-start executed.",
        ),
    ]
}
