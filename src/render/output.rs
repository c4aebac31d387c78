use clap::ValueEnum;
use serde::Serialize;

use crate::app::load_report_use_case::LoadedView;
use crate::error::Result;
use crate::types::ReportRecord;

use super::html::render_html;
use super::text::render_text;
use super::RenderedReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    date: String,
    status: &'a str,
    record: Option<&'a ReportRecord>,
    view: &'a RenderedReport,
}

/// Render a loaded view in the requested format.
pub fn render_output(format: OutputFormat, loaded: &LoadedView) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(&loaded.status, &loaded.rendered)),
        OutputFormat::Json => {
            let out = JsonOutput {
                date: loaded.date_key(),
                status: &loaded.status,
                record: loaded.record.as_ref(),
                view: &loaded.rendered,
            };
            Ok(serde_json::to_string_pretty(&out)?)
        }
        OutputFormat::Html => render_html(
            &loaded.date_key(),
            &loaded.status,
            &loaded.content,
            &loaded.rendered,
        ),
    }
}
