use std::fs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "viewer.log";
const DEFAULT_FILTER: &str = "incident_report_viewer=info,warn";

/// Installs the global subscriber: JSON lines into `logs/viewer.log.<date>`
/// and a readable layer on stderr, so rendered output on stdout stays clean.
///
/// `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    let _ = fs::create_dir_all(LOG_DIR);

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(LOG_DIR, LOG_FILE));

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_writer(file_writer))
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();

    // the writer flushes only while its guard lives; keep it for the process
    std::mem::forget(guard);
}
