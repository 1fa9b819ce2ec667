//! Diiwaan binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;
use diiwaan::{app, args, theme};

/// Local wall-clock timestamps for log lines.
struct DiiwaanTimer;

impl tracing_subscriber::fmt::time::FormatTime for DiiwaanTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S");
        write!(w, "{ts}")
    }
}

/// Keeps the non-blocking log writer alive for the whole process.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Build the filter from `RUST_LOG`, else the level chosen on the command line.
fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
}

/// What: Initialize tracing to `<config>/logs/diiwaan.log`, falling back to stderr.
///
/// Details:
/// - Logging goes to a file because the interface owns the terminal.
fn init_logging(level: &str) {
    let log_path = theme::logs_dir().join("diiwaan.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(DiiwaanTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(DiiwaanTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = args::Args::parse();
    init_logging(&args::determine_log_level(&args));

    if let Some(code) = args::process_args(&args).await {
        std::process::exit(code);
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Diiwaan starting");
    if let Err(err) = app::run(&args).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("diiwaan: {err}");
        std::process::exit(1);
    }
    tracing::info!("Diiwaan exited");
}
