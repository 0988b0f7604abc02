//! mysql-preflight binary entry point.
//!
//! Probes the configured MySQL server once and exits: status 0 with a
//! confirmation line on success, non-zero with the failure reason on
//! standard output otherwise.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use mysql_preflight::config::DbConfig;
use mysql_preflight::db::MySqlProvider;
use mysql_preflight::startup::{self, Outcome};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = DbConfig::from_env();
    tracing::info!("starting mysql-preflight");

    // Probe the database
    let provider = MySqlProvider::new(config);
    let mut stdout = std::io::stdout();

    match startup::run(&provider, &mut stdout).await {
        Outcome::Connected => ExitCode::SUCCESS,
        Outcome::Failed => ExitCode::FAILURE,
    }
}
