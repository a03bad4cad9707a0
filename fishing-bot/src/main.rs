//! fishing-bot CLI: interactive chat or a one-shot location probe. Config from
//! env (.env supported) with the API key overridable on the command line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use fishing_bot::{run_chat, run_probe_location, BotConfig};

#[derive(Parser)]
#[command(name = "fishing-bot")]
#[command(about = "Fishing spot chat bot: chat, probe-location", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive chat session (key can override GEMINI_API_KEY).
    Chat {
        #[arg(short, long)]
        key: Option<String>,
        /// Model name; defaults to MODEL env var or gemini-2.5-flash.
        #[arg(short, long)]
        model: Option<String>,
    },
    /// Attempt the one-shot location lookup and print the result.
    ProbeLocation,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat { key, model } => {
            let mut config = BotConfig::load(key)?;
            if let Some(model) = model {
                config.model = model;
            }
            chat_core::init_tracing(&config.log_file)?;
            run_chat(config).await
        }
        Commands::ProbeLocation => {
            let endpoint = std::env::var("GEOLOCATE_URL").ok();
            run_probe_location(endpoint).await
        }
    }
}
