use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use incident_report_viewer::app::load_report_use_case::{
    date_key, parse_date_key, today, LoadedView, ReportViewer,
};
use incident_report_viewer::config::Config;
use incident_report_viewer::constants::report_key;
use incident_report_viewer::generator::{generate_markdown, sample_incidents, Incident};
use incident_report_viewer::infra::fetcher_from_config;
use incident_report_viewer::logging;
use incident_report_viewer::render::output::{render_output, OutputFormat};

#[derive(Parser)]
#[command(name = "incident-viewer")]
#[command(about = "Daily cloud incident report viewer")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the report for a date and render it
    Show {
        /// Report date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Parse a local markdown report and render it
    Parse {
        file: PathBuf,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Generate a markdown report from sample or supplied incidents
    Sample {
        /// Report date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
        /// JSON array of incidents to report instead of the built-in samples
        #[arg(long)]
        incidents: Option<PathBuf>,
        /// Output file; defaults to <output dir>/<date>.md
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn resolve_date(date: Option<&str>) -> anyhow::Result<chrono::NaiveDate> {
    match date {
        Some(d) => Ok(parse_date_key(d)?),
        None => Ok(today()),
    }
}

fn emit(text: &str, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load().context("loading configuration")?;

    match cli.command {
        Commands::Show { date, format, out } => {
            let date = resolve_date(date.as_deref())?;
            let viewer = ReportViewer::new(fetcher_from_config(&config)?);
            let loaded = viewer.load(date).await;
            emit(&render_output(format, &loaded)?, out.as_deref())?;
        }
        Commands::Parse { file, format, out } => {
            let document = fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let mut loaded = LoadedView::from_document(today(), document);
            // Prefer the report's own title date over today's
            if let Some(date) = loaded.record.as_ref().and_then(|r| r.report_date()) {
                loaded.date = date;
            }
            emit(&render_output(format, &loaded)?, out.as_deref())?;
        }
        Commands::Sample {
            date,
            incidents,
            out,
        } => {
            let key = date_key(resolve_date(date.as_deref())?);
            let incidents: Vec<Incident> = match incidents {
                Some(path) => {
                    let raw = fs::read_to_string(&path)
                        .with_context(|| format!("reading {}", path.display()))?;
                    serde_json::from_str(&raw)
                        .with_context(|| format!("parsing incidents in {}", path.display()))?
                }
                None => sample_incidents(&key),
            };
            let markdown = generate_markdown(&key, &incidents);
            let path = out.unwrap_or_else(|| config.output.dir.join(report_key(&key)));
            emit(&markdown, Some(&path))?;
            println!("Generated markdown report: {}", path.display());
        }
    }
    Ok(())
}
