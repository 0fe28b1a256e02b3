// file: src/logging/logger.rs
// version: 1.0.0
// guid: 05985556-7579-4f7e-8c8f-3c1842042b1b

//! Logger initialization and configuration

use crate::error::AgentError;
use crate::Result;
use tracing::{error, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(level_filter(verbose, quiet))
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| crate::error::AgentError::config(format!("Failed to initialize logger: {}", e)))?;

    Ok(())
}

fn level_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    }
}

/// Log a failed run. The page snippet goes out at the same level as the
/// error, so `--quiet` keeps both.
pub fn report_error(err: &AgentError) {
    let snippet = err.snippet();
    if err.is_warning() {
        warn!("{}", err);
        if let Some(snippet) = snippet {
            warn!("Response content snippet:\n{}", snippet);
        }
    } else {
        error!("{}", err);
        if let Some(snippet) = snippet {
            error!("Response content snippet:\n{}", snippet);
        }
    }
}

/// Run a future inside a named operation span
pub async fn with_async_operation_span<F, Fut, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = R>,
{
    let span = tracing::info_span!("operation", name = operation);
    async move { f().await }.instrument(span).await
}

use tracing::Instrument;
