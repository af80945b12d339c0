//! CLI options.

use std::path::PathBuf;

use clap::{Args, Parser};

pub fn parse() -> Opts {
    Opts::parse()
}

#[derive(Parser)]
#[command(version, about)]
pub struct Opts {
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand)]
pub enum Subcommand {
    Web(WebOpts),
    Fit(FitOpts),
}

/// Runs the web application
#[derive(Args)]
pub struct WebOpts {
    #[command(flatten)]
    pub training: TrainingOpts,

    /// Web application bind host
    #[arg(long, default_value = "::")]
    pub host: String,

    /// Web application bind port
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Origin allowed to make cross-origin requests, may be repeated.
    /// Without it, any origin is allowed
    #[arg(long = "allowed-origin")]
    pub allowed_origins: Vec<String>,
}

/// Fits the model and prints the coefficients as JSON
#[derive(Args)]
pub struct FitOpts {
    #[command(flatten)]
    pub training: TrainingOpts,
}

#[derive(Args)]
pub struct TrainingOpts {
    /// Path to the historical observations CSV
    #[arg(short, long, env = "SOLAR_DASHBOARD_TRAINING_DATA")]
    pub training_data: PathBuf,
}
