use std::{path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser};
use wxnow_core::{Config, Services, current_conditions};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "wxnow",
    version,
    about = "Current weather for a place, or for wherever your IP address says you are"
)]
pub struct Cli {
    /// Place name, e.g. "Paris" or "Portland, OR". Detected from your IP address if omitted.
    pub location: Option<String>,

    /// Optional TOML file overriding the fallback place, endpoints or timeout.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log diagnostics to stderr; repeat for more detail (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        let services = Services::from_config(&config)?;

        match current_conditions(self.location, &config, &services).await {
            Ok(report) => {
                println!("{report}");
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => {
                tracing::debug!(error = ?err, "lookup failed");
                eprintln!("{err}");
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
