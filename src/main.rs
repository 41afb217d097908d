//! Entry point for the portfolio gallery.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load user configuration from `conf/config.toml`.
//! - Load the portfolio manifest via `portfolio`.
//! - Launch the GUI application with the loaded manifest and config.

mod app;
mod config;
mod masonry;
mod pagination;
mod portfolio;
mod theme;

use crate::app::run_app;
use crate::config::{AppConfig, load_config};
use crate::portfolio::load_portfolio;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());

    let manifest_path = parse_args(&config)?;
    info!(
        path = %manifest_path.display(),
        level = %config.log_level,
        "Starting portfolio gallery"
    );

    let portfolio = load_portfolio(&manifest_path)?;
    run_app(portfolio, config, manifest_path).context("Failed to start the GUI")?;
    Ok(())
}

/// An optional positional argument overrides the configured manifest path.
fn parse_args(config: &AppConfig) -> Result<PathBuf> {
    let mut args = env::args().skip(1);
    let path = match args.next() {
        Some(arg) => PathBuf::from(arg),
        None => PathBuf::from(&config.manifest_path),
    };

    if !path.exists() {
        return Err(anyhow!("Manifest not found: {}", path.display()));
    }
    Ok(path)
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
