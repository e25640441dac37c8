mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "venues")]
#[command(about = "Delete venues from the command line, following the server's redirect")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Delete a venue after asking for confirmation
    Delete {
        /// Venue id, sent as-is in DELETE /venues/<ID>
        id: String,

        /// Server to send the request to (overrides base_url from config)
        #[arg(long)]
        base_url: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,

        /// Print the redirect target instead of opening it in the browser
        #[arg(long)]
        no_open: bool,
    },
    /// Show or change the configuration
    Config {
        /// Set the server venue paths are sent to
        #[arg(long)]
        base_url: Option<String>,

        /// Set whether redirect targets open in the browser
        #[arg(long)]
        open_browser: Option<bool>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Delete {
            id,
            base_url,
            force,
            no_open,
        } => {
            commands::delete::run(
                id,
                commands::delete::Options {
                    base_url,
                    force,
                    no_open,
                },
            )
            .await
        }
        Commands::Config {
            base_url,
            open_browser,
        } => commands::config::run(base_url, open_browser),
    }
}

/// Log to stderr, filtered by `RUST_LOG` (warnings and errors by default).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
