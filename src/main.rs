//! Bibliodesk - Personal Library Management

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bibliodesk::{
    cli::{self, Cli},
    config::AppConfig,
    error::AppResult,
    repository::Repository,
    services::Library,
    storage::FileStore,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("bibliodesk={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::debug!("Starting Bibliodesk v{}", env!("CARGO_PKG_VERSION"));

    if let Err(err) = run(cli, &config) {
        eprintln!("{}", err);
        std::process::exit(err.code() as i32);
    }

    Ok(())
}

fn run(cli: Cli, config: &AppConfig) -> AppResult<()> {
    let store = Arc::new(FileStore::open(&config.storage.path)?);
    let mut library = Library::open(Repository::new(store))?;
    cli::run(cli.command, &mut library)
}
