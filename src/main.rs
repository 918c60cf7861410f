mod commands;

use std::net::IpAddr;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use agora::config::DEFAULT_BASE_URL;

// ============================================================================
// CLI Types
// ============================================================================

/// Agora - a minimal multi-agent server with well-known api-catalog discovery
#[derive(Parser, Debug)]
#[command(version = agora::build_info::VERSION, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the agent server
    Serve {
        /// Path to configuration file
        #[arg(short, long, default_value = "agora.yaml")]
        config: String,

        /// Host to bind to (overrides config file)
        #[arg(long)]
        host: Option<IpAddr>,

        /// Port to listen on (overrides config file)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Fetch and print a server's agent catalog
    Catalog {
        /// Base URL of the catalog host
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// Print the raw linkset JSON instead of a summary
        #[arg(long)]
        json: bool,

        /// Also fetch and print each entry's agent card
        #[arg(long)]
        cards: bool,
    },

    /// Discover an agent through the catalog and send it a message
    Send {
        /// Message text to send
        message: String,

        /// Agent name to select (defaults to the first catalog entry)
        #[arg(short, long)]
        agent: Option<String>,

        /// Base URL of the catalog host
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// Request timeout in seconds
        #[arg(long, default_value_t = 30)]
        timeout_seconds: u64,
    },
}

// ============================================================================
// Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> std::process::ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            std::process::ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, host, port } => commands::serve::run(&config, host, port).await,
        Commands::Catalog {
            base_url,
            json,
            cards,
        } => commands::catalog::run(&base_url, json, cards).await,
        Commands::Send {
            message,
            agent,
            base_url,
            timeout_seconds,
        } => commands::send::run(&base_url, agent.as_deref(), &message, timeout_seconds).await,
    }
}

// ============================================================================
// Initialization
// ============================================================================

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
