//! Shared UI Gallery - Main Entry Point
//!
//! Live gallery for the shared UI component library.

use anyhow::Context as _;
use shared_ui::app::application::run_app;
use shared_ui::helpers::get_or_create_data_dir;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "shared-ui-gallery.log";

/// Log to stderr and to a daily file in the data directory.
/// The returned guard flushes the file writer when dropped.
fn init_logging() -> anyhow::Result<WorkerGuard> {
    let log_dir = get_or_create_data_dir()
        .context("failed to resolve data directory")?
        .join("logs");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .init();

    Ok(guard)
}

fn main() -> anyhow::Result<()> {
    let _guard = init_logging()?;

    tracing::info!("Starting Shared UI Gallery...");

    // Run the GPUI application
    run_app();
    Ok(())
}
