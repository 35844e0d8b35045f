//! `tably-tui` — Terminal viewer for restaurant reservation lists.
//!
//! Fetches a static reservation feed once at startup, then lets the user
//! filter, search, sort, and page through the results in a table. Built
//! on [ratatui](https://ratatui.rs) with reactive data from
//! `tably-core`'s [`ReservationStream`](tably_core::ReservationStream).
//!
//! Logs are written to a file (default `/tmp/tably-tui.log`) to avoid
//! corrupting the terminal UI. A background data bridge task forwards
//! store updates into the TUI action loop.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and app launch.

mod action;
mod app;
mod component;
mod data_bridge;
mod event;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use tably_api::FeedClient;
use tably_core::{PageSize, ReservationStore};

use crate::app::App;

/// Terminal viewer for restaurant reservation lists.
#[derive(Parser, Debug)]
#[command(name = "tably-tui", version, about)]
struct Cli {
    /// Reservation feed URL (overrides the config file)
    #[arg(short = 'u', long)]
    url: Option<String>,

    /// Explicit config file path (defaults to the platform config dir)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Log file path (defaults to /tmp/tably-tui.log)
    #[arg(long, default_value = "/tmp/tably-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr — that
/// would corrupt the TUI output. Returns a guard that must be held for
/// the lifetime of the application to ensure logs are flushed.
fn setup_tracing(log_file: &std::path::Path, verbose: u8) -> WorkerGuard {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "tably_tui={log_level},tably_core={log_level},tably_api={log_level}"
            ))
        });

    let log_dir = log_file.parent().unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("tably-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

/// Resolve config from file/env, then layer CLI overrides on top.
fn resolve_config(cli: &Cli) -> Result<tably_config::Config> {
    let mut config = match &cli.config {
        Some(path) => tably_config::load_config_from(path)?,
        None => tably_config::load_config()?,
    };
    if let Some(url) = &cli.url {
        config.feed_url.clone_from(url);
    }
    if config.feed_url.is_empty() {
        return Err(eyre!(
            "no feed URL configured; pass --url or set feed_url in {}",
            tably_config::config_path()
                .unwrap_or_else(|| PathBuf::from("config.toml"))
                .display()
        ));
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file — hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli.log_file, cli.verbose);

    let config = resolve_config(&cli)?;
    let feed_url = config.feed_url()?;
    let page_size = config
        .initial_page_size()
        .unwrap_or(PageSize::Five);

    info!(url = %feed_url, "starting tably-tui");

    let client = FeedClient::new(feed_url, &config.transport())?;
    let store = Arc::new(ReservationStore::new());

    let mut app = App::new(store, client, page_size);
    app.run().await?;

    Ok(())
}
