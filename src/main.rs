use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use silica::domain::Role;
use silica::settings::{Overrides, Settings};
use silica_config::ClinicConfig;

#[derive(Parser, Debug)]
#[command(name = "silica", about = "Silica clinic dashboard, in your terminal")]
struct Cli {
    /// Path to a YAML config file (default: ./silica.yaml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Splash screen duration in milliseconds
    #[arg(long, value_name = "MS")]
    splash_ms: Option<u64>,

    /// Role pre-selected on the login screen
    #[arg(long, value_parser = parse_role)]
    role: Option<Role>,

    /// Where to write logs (the TUI owns stdout)
    #[arg(long, default_value = "silica.log")]
    log_file: PathBuf,

    /// Disable mouse capture
    #[arg(long)]
    no_mouse: bool,
}

fn parse_role(s: &str) -> Result<Role, String> {
    s.parse()
}

fn init_tracing(log_file: &Path, default_filter: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("opening log file {}", log_file.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("resolving working directory")?;
    let config = ClinicConfig::discover(cli.config.as_deref(), &cwd)
        .context("loading configuration")?;
    let overrides = Overrides {
        splash_ms: cli.splash_ms,
        role: cli.role,
        no_mouse: cli.no_mouse,
    };
    let settings = Settings::resolve(config, &overrides).context("invalid configuration")?;

    init_tracing(&cli.log_file, &settings.log_filter)?;
    info!(
        clinic = %settings.branding.clinic_name,
        splash_delay = ?settings.splash_delay,
        role = %settings.initial_role,
        "configuration loaded"
    );

    silica::tui::runner::run(settings).await
}
