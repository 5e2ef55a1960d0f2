use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gyanify_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "gyanify")]
#[command(author, version, about = "Animated terminal pitch page for Gyanify")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the pitch page
    Run,
    /// Show or change the persisted color theme
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },
    /// Print the effective configuration
    Config {
        /// Write the defaults to the config file if it does not exist yet
        #[arg(long)]
        init: bool,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeAction {
    Light,
    Dark,
    Toggle,
    Show,
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    )
}

/// The TUI owns the terminal, so its logs go to a file in the data directory
fn init_file_logging(config: &AppConfig) -> Result<()> {
    let path = config.log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn init_stderr_logging(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    match cli.command {
        Some(Commands::Run) | None => {
            init_file_logging(&config)?;
            commands::run::run(config)
        }
        Some(Commands::Theme { action }) => {
            init_stderr_logging(&config);
            match action {
                ThemeAction::Light => commands::theme::set(&config, gyanify_core::ThemeMode::Light),
                ThemeAction::Dark => commands::theme::set(&config, gyanify_core::ThemeMode::Dark),
                ThemeAction::Toggle => commands::theme::toggle(&config),
                ThemeAction::Show => commands::theme::show(&config),
            }
        }
        Some(Commands::Config { init }) => {
            init_stderr_logging(&config);
            commands::config::run(&config, init)
        }
    }
}
