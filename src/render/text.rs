use crate::constants::{INCIDENT_COLUMNS, NO_DATA};

use super::{RenderedReport, TableBody};

/// Terminal rendering of the three regions under a status line.
pub fn render_text(status: &str, view: &RenderedReport) -> String {
    let mut out = String::new();
    out.push_str(status);
    out.push('\n');

    if !view.summary_cards.is_empty() {
        out.push('\n');
        for card in &view.summary_cards {
            out.push_str(&format!("{:<18} {}\n", card.label, card.value));
            out.push_str(&format!("  {}\n", card.hint));
        }
    }

    for card in &view.breakdown_cards {
        out.push('\n');
        out.push_str(&format!("{:<18} {}\n", card.title, card.headline));
        if card.is_empty() {
            out.push_str(&format!("  {}\n", NO_DATA));
        }
        for line in card.items() {
            out.push_str(&format!("  {}\n", line));
        }
    }

    out.push('\n');
    match &view.incident_body {
        TableBody::Placeholder { text, .. } => {
            out.push_str(text);
            out.push('\n');
        }
        TableBody::Rows { rows } => {
            out.push_str(&table_line(INCIDENT_COLUMNS.iter().copied()));
            for row in rows {
                out.push_str(&table_line(row.iter().map(String::as_str)));
            }
        }
    }
    out
}

fn table_line<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let cells: Vec<&str> = cells.collect();
    format!("| {} |\n", cells.join(" | "))
}
