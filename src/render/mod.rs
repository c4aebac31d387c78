//! Render adapter: turns a parsed report into fragment descriptions for the
//! three dashboard regions (summary cards, breakdown cards, incident table body).
//!
//! Region state is replaced wholesale on every render, never patched.

pub mod html;
pub mod output;
pub mod text;

use serde::Serialize;

use crate::constants::{
    INCIDENT_COLUMNS, KEY_FAILED, KEY_SUCCESS, KEY_TOTAL_INCIDENTS, KEY_UNIQUE_INSTANCES,
    NO_REPORT_LOADED, VALUE_PLACEHOLDER,
};
use crate::types::{BreakdownItem, ReportRecord};

/// Label, summary key and hint for each summary card, in display order.
const SUMMARY_CARDS: [(&str, &str, &str); 4] = [
    (
        "Total incidents",
        KEY_TOTAL_INCIDENTS,
        "All incidents processed in this period.",
    ),
    (
        "Success",
        KEY_SUCCESS,
        "Heuristically successful remediations.",
    ),
    (
        "Failed",
        KEY_FAILED,
        "Incidents requiring manual follow-up.",
    ),
    (
        "Unique instances",
        KEY_UNIQUE_INSTANCES,
        "Distinct EC2 instances involved.",
    ),
];

pub const BY_EVENT_TITLE: &str = "By event type";
pub const BY_REMEDIATION_TITLE: &str = "By remediation type";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryCard {
    pub label: String,
    pub value: String,
    pub hint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "lines", rename_all = "snake_case")]
pub enum BreakdownLines {
    Items(Vec<String>),
    NoData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownCard {
    pub title: String,
    pub headline: String,
    pub lines: BreakdownLines,
}

impl BreakdownCard {
    pub fn items(&self) -> &[String] {
        match &self.lines {
            BreakdownLines::Items(items) => items,
            BreakdownLines::NoData => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.lines, BreakdownLines::NoData)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableBody {
    /// One row spanning `colspan` columns.
    Placeholder { text: String, colspan: usize },
    Rows { rows: Vec<Vec<String>> },
}

impl TableBody {
    pub fn placeholder() -> Self {
        TableBody::Placeholder {
            text: NO_REPORT_LOADED.to_string(),
            colspan: INCIDENT_COLUMNS.len(),
        }
    }
}

/// Region handles the adapter writes into. Each call replaces the region's
/// previous contents.
pub trait ReportView {
    fn set_summary_cards(&mut self, cards: Vec<SummaryCard>);
    fn set_breakdown_cards(&mut self, cards: Vec<BreakdownCard>);
    fn set_incident_body(&mut self, body: TableBody);
}

/// Plain in-memory snapshot of the three regions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedReport {
    pub summary_cards: Vec<SummaryCard>,
    pub breakdown_cards: Vec<BreakdownCard>,
    pub incident_body: TableBody,
}

impl RenderedReport {
    /// The state shown before any report is loaded.
    pub fn cleared() -> Self {
        Self {
            summary_cards: Vec::new(),
            breakdown_cards: Vec::new(),
            incident_body: TableBody::placeholder(),
        }
    }
}

impl Default for RenderedReport {
    fn default() -> Self {
        Self::cleared()
    }
}

impl ReportView for RenderedReport {
    fn set_summary_cards(&mut self, cards: Vec<SummaryCard>) {
        self.summary_cards = cards;
    }

    fn set_breakdown_cards(&mut self, cards: Vec<BreakdownCard>) {
        self.breakdown_cards = cards;
    }

    fn set_incident_body(&mut self, body: TableBody) {
        self.incident_body = body;
    }
}

/// Render into a fresh snapshot.
pub fn render(record: Option<&ReportRecord>) -> RenderedReport {
    let mut view = RenderedReport::cleared();
    render_into(&mut view, record);
    view
}

/// Clear every region, then fill them from `record` when there is one.
///
/// An empty incident list leaves the "No report loaded." placeholder in place.
pub fn render_into<V: ReportView + ?Sized>(view: &mut V, record: Option<&ReportRecord>) {
    view.set_summary_cards(Vec::new());
    view.set_breakdown_cards(Vec::new());
    view.set_incident_body(TableBody::placeholder());

    let Some(record) = record else {
        return;
    };

    view.set_summary_cards(summary_cards(record));
    view.set_breakdown_cards(vec![
        breakdown_card(BY_EVENT_TITLE, &record.by_event),
        breakdown_card(BY_REMEDIATION_TITLE, &record.by_remediation),
    ]);

    if !record.incidents.is_empty() {
        let rows = record
            .incidents
            .iter()
            .map(|row| {
                INCIDENT_COLUMNS
                    .iter()
                    .map(|col| row.get(col).unwrap_or_default().to_string())
                    .collect()
            })
            .collect();
        view.set_incident_body(TableBody::Rows { rows });
    }
}

fn summary_cards(record: &ReportRecord) -> Vec<SummaryCard> {
    SUMMARY_CARDS
        .iter()
        .map(|(label, key, hint)| SummaryCard {
            label: label.to_string(),
            value: record
                .summary
                .get(key)
                .map(|v| v.to_string())
                .unwrap_or_else(|| VALUE_PLACEHOLDER.to_string()),
            hint: hint.to_string(),
        })
        .collect()
}

// A zero total shows the placeholder even when the list has entries.
fn breakdown_card(title: &str, items: &[BreakdownItem]) -> BreakdownCard {
    let total = items.iter().fold(0i64, |acc, it| acc.saturating_add(it.count));
    let headline = if total == 0 {
        VALUE_PLACEHOLDER.to_string()
    } else {
        total.to_string()
    };
    let lines = if items.is_empty() {
        BreakdownLines::NoData
    } else {
        BreakdownLines::Items(
            items
                .iter()
                .map(|it| format!("{} · {}", it.name, it.count))
                .collect(),
        )
    };
    BreakdownCard {
        title: title.to_string(),
        headline,
        lines,
    }
}
