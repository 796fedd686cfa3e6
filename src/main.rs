// Entry point: parse flags, load the tenant configuration and run the TUI.
//
// The terminal belongs to the dashboard, so tracing goes to a log file.

use clap::Parser;
use once_cell::sync::Lazy;
use cpi_navigator::browser::SystemBrowser;
use cpi_navigator::config::Config;
use cpi_navigator::cpi::CpiClient;
use cpi_navigator::ui::bars::{long_version, APP_NAME};
use cpi_navigator::ui::render::Styles;
use cpi_navigator::ui::{self, Session};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

static LONG_VERSION: Lazy<String> = Lazy::new(|| long_version(lipgloss::color_profile()));

#[derive(Parser)]
#[command(name = "cpi-navigator")]
#[command(about = "Browse the content packages and artifacts of an SAP Cloud Integration tenant")]
#[command(version, long_version = LONG_VERSION.as_str())]
struct Cli {
    /// Path to config.yaml (default: ./config.yaml, then ~/.config/cpi-navigator/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "cpi_navigator=trace" (overrides RUST_LOG)
    #[arg(short, long)]
    log_level: Option<String>,

    /// File receiving the log output
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_file = cli
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("cpi-navigator.log"));
    if let Err(e) = init_tracing(&log_file, cli.log_level.as_deref()) {
        eprintln!("Error: cannot open log file {}: {e}", log_file.display());
        process::exit(1);
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "{APP_NAME} starting");

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "configuration rejected");
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    tracing::info!(tenant = %config.tenant.name, api = %config.tenant.base_url, "configuration loaded");

    let session = Session {
        data: Arc::new(CpiClient::new(&config.tenant)),
        browser: Arc::new(SystemBrowser),
        styles: Styles::default(),
        config,
    };

    if let Err(e) = ui::run(session).await {
        tracing::error!(error = %e, "program exited with error");
        eprintln!("Error: {e}");
        process::exit(2);
    }
    tracing::info!("{APP_NAME} stopped");
}

fn init_tracing(path: &Path, level: Option<&str>) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = match level {
        Some(level) => tracing_subscriber::EnvFilter::new(level),
        None => tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::INFO.into()),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
