//! rolekeeper - role-based access control service

#![allow(missing_docs)]

use clap::Parser;
use rolekeeper::server::{self, builder::DEFAULT_CONFIG_PATH};
use rolekeeper::storage::Database;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "rolekeeper", version, about)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "ROLEKEEPER_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Apply database migrations and exit
    #[arg(long)]
    migrate_only: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn migrate(config_path: &std::path::Path) -> rolekeeper::Result<()> {
    let config = server::builder::load_config(config_path).await?;
    let database = Database::new(config.database()).await?;
    database.migrate().await?;
    database.close().await?;
    info!("Migrations applied");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let result = if cli.migrate_only {
        migrate(&cli.config).await
    } else {
        server::run_server(&cli.config).await
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
