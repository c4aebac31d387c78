pub mod http_client;
pub mod local_fetcher;

use crate::app::ports::DocumentFetcher;
use crate::config::Config;
use crate::error::Result;
use tracing::info;

/// Pick the fetcher the configuration asks for: a local directory when one is
/// set, otherwise the HTTP report store.
pub fn fetcher_from_config(config: &Config) -> Result<Box<dyn DocumentFetcher>> {
    match &config.source.local_dir {
        Some(dir) => {
            info!("Reading reports from local directory {}", dir.display());
            Ok(Box::new(local_fetcher::LocalDocumentFetcher::new(dir.clone())))
        }
        None => {
            info!("Reading reports from {}", config.source.bucket_url);
            Ok(Box::new(http_client::HttpDocumentFetcher::new(
                &config.source.bucket_url,
                config.source.timeout_seconds,
            )?))
        }
    }
}
