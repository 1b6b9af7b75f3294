//! Activity Board CLI
//!
//! Terminal front end for the Activity Directory Service:
//! - List activities and their participants
//! - Sign a participant up
//! - Unregister a participant
//! - Generate a default config file

use activity_board::config::{generate_default_config, Config, LoggingConfig};
use activity_board::{ActionOutcome, ActivityBoard, HttpActivityService, RefreshOutcome, TerminalView};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "activity-board")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse activities and manage sign-ups")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Activity Directory Service URL (overrides the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List activities with their participants
    List,

    /// Sign a participant up for an activity
    Signup {
        /// Activity name, as listed
        activity: String,
        /// Participant email
        email: String,
    },

    /// Remove a participant from an activity
    Unregister {
        /// Activity name, as listed
        activity: String,
        /// Participant email
        email: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.base_url {
        config.service.base_url = url;
    }

    init_logging(&config.logging);

    let service = HttpActivityService::new(&config.service)?;
    let board = ActivityBoard::new(service, TerminalView::new(std::io::stdout()));
    tracing::debug!(base_url = board.service().base_url(), "Using Activity Directory Service");

    let succeeded = match cli.command {
        Commands::List => board.refresh().await == RefreshOutcome::Rendered,
        Commands::Signup { activity, email } => {
            board.signup(&activity, &email).await == ActionOutcome::Succeeded
        }
        Commands::Unregister { activity, email } => {
            board.unregister(Some(&activity), Some(&email)).await == ActionOutcome::Succeeded
        }
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Wrote default config to {}", path.display());
                }
                None => print!("{}", content),
            }
            true
        }
    };

    if !succeeded {
        std::process::exit(1);
    }

    Ok(())
}

/// Logs go to stderr; stdout carries the board
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("activity_board={}", logging.level)));

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
