//! EcoAdvice command-line client
//!
//! Thin driver over [`ecoadvice::AdviceClient`]: create and fetch home
//! profiles, and stream recommendations to stdout as they arrive.

use std::cell::Cell;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;

use ecoadvice::{AdviceClient, AdviceConfig, HomeProfile};

#[derive(Parser)]
#[command(name = "ecoadvice")]
#[command(about = "Home energy advice client")]
#[command(version)]
struct Cli {
    /// Configuration file path (defaults to ~/.ecoadvice/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a home profile from a JSON file
    Create {
        /// Path to a JSON home profile document
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Fetch a stored home profile
    Get {
        /// Id of the home profile
        home_id: String,
    },
    /// Stream energy-saving recommendations for a home
    Advise {
        /// Id of the home profile to analyze
        home_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = AdviceConfig::resolve(cli.config.as_deref())?;
    let client = AdviceClient::new(config)?;

    match cli.command {
        Commands::Create { file } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let profile: HomeProfile = serde_json::from_str(&content)
                .with_context(|| format!("invalid home profile in {}", file.display()))?;
            let stored = client.create_home(&profile).await?;
            println!("{}", serde_json::to_string_pretty(&stored)?);
        }
        Commands::Get { home_id } => {
            let profile = client.get_home(&home_id).await?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        Commands::Advise { home_id } => {
            advise(&client, &home_id).await;
        }
    }

    Ok(())
}

async fn advise(client: &AdviceClient, home_id: &str) {
    let mut count = 0u32;
    let failed = Cell::new(false);

    client
        .stream_advice(
            home_id,
            |rec| {
                count += 1;
                println!(
                    "{}. {} [{} priority, {}]",
                    count, rec.title, rec.priority, rec.category
                );
                println!("   {}", rec.description);
                println!(
                    "   cost: {}, savings: {}",
                    rec.estimated_cost, rec.estimated_savings
                );
            },
            || {},
            Some(|err: String| {
                eprintln!("error: {}", err);
                failed.set(true);
            }),
        )
        .await;

    if failed.get() {
        std::process::exit(1);
    }
    println!("{} recommendation(s) received", count);
}
