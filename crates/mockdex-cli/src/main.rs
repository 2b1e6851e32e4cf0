mod export;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "mockdex")]
#[command(about = "Mock-interview page scraper and dataset exporter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch every linked interview page and write the combined CSV table
    Export {
        /// CSV of candidate URLs, first column only (overrides MOCKDEX_LINKS_PATH)
        #[arg(long)]
        links: Option<PathBuf>,

        /// Destination CSV path (overrides MOCKDEX_OUTPUT_PATH)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = mockdex_core::load_app_config_from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Export { links, output } => export::run_export(&config, links, output).await,
    }
}
