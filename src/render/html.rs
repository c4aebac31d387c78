use askama::Template;

use crate::constants::{INCIDENT_COLUMNS, NO_DATA};
use crate::error::Result;

use super::{RenderedReport, TableBody};

/// Static dashboard page: status line, the three regions and the raw markdown.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate<'a> {
    pub date_key: &'a str,
    pub status: &'a str,
    pub content: &'a str,
    pub view: &'a RenderedReport,
}

impl<'a> DashboardTemplate<'a> {
    fn columns(&self) -> &'static [&'static str] {
        &INCIDENT_COLUMNS
    }

    fn no_data(&self) -> &'static str {
        NO_DATA
    }

    /// Text and column span of the placeholder row, when the body is one.
    fn placeholder(&self) -> Option<(&str, usize)> {
        match &self.view.incident_body {
            TableBody::Placeholder { text, colspan } => Some((text.as_str(), *colspan)),
            TableBody::Rows { .. } => None,
        }
    }

    fn rows(&self) -> &[Vec<String>] {
        match &self.view.incident_body {
            TableBody::Rows { rows } => rows,
            TableBody::Placeholder { .. } => &[],
        }
    }
}

pub fn render_html(
    date_key: &str,
    status: &str,
    content: &str,
    view: &RenderedReport,
) -> Result<String> {
    let page = DashboardTemplate {
        date_key,
        status,
        content,
        view,
    };
    Ok(page.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_report;
    use crate::render::render;

    #[test]
    fn test_cleared_page_has_placeholder_row() {
        let html = render_html("2025-11-29", "Report not found.", "", &RenderedReport::cleared())
            .unwrap();

        assert!(html.contains("<p id=\"status-text\">Report not found.</p>"));
        assert!(html.contains("<td colspan=\"6\">No report loaded.</td>"));
        assert!(!html.contains("<div class=\"summary-card-label\">"));
    }

    #[test]
    fn test_page_escapes_report_text() {
        let doc = "**By event type**\n- <script>alert(1)</script>: 1\n\n## Incident Details\n| Time (created_at) | Event Type | Instance ID | Remediation Type | Action | Message |\n|---|---|---|---|---|---|\n| t | e | i | r | a | <b>bold</b> |";
        let outcome = parse_report(Some(doc));
        let html = render_html("2025-11-29", "Report loaded.", doc, &render(outcome.record())).unwrap();

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>bold</b>"));
        assert!(html.contains("&lt;b&gt;bold"));
        assert!(html.contains("<span class=\"summary-card-hint\">No data.</span>"));
        assert!(!html.contains("No report loaded."));
    }

    #[test]
    fn test_placeholder_row_uses_body_colspan() {
        let mut view = RenderedReport::cleared();
        view.incident_body = TableBody::Placeholder {
            text: "Nothing yet.".to_string(),
            colspan: 3,
        };
        let html = render_html("", "", "", &view).unwrap();

        assert!(html.contains("<td colspan=\"3\">Nothing yet.</td>"));
    }
}
