//! CLI command definitions and dispatch.

pub mod password;
pub mod serve;
pub mod token;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use userhub_core::config::AppConfig;
use userhub_core::error::AppError;

/// UserHub: credential issuance and user records
#[derive(Debug, Parser)]
#[command(name = "userhub", version, about, long_about = None)]
pub struct Cli {
    /// Path to a configuration file (defaults to `config/` + `USERHUB_ENV`)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the UserHub server
    Serve(serve::ServeArgs),
    /// Print an Argon2id hash for a password
    HashPassword(password::HashPasswordArgs),
    /// Validate a token and show its claims
    InspectToken(token::InspectTokenArgs),
}

impl Cli {
    /// Execute the CLI command against an already loaded configuration
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::HashPassword(args) => password::execute(args, &config),
            Commands::InspectToken(args) => token::execute(args, &config, self.format),
        }
    }
}

/// Helper: load configuration from an explicit file or the `config/` directory
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig, AppError> {
    match config_path {
        Some(path) => AppConfig::load_file(path),
        None => {
            let env = std::env::var("USERHUB_ENV").unwrap_or_else(|_| "development".to_string());
            AppConfig::load(&env)
        }
    }
}
