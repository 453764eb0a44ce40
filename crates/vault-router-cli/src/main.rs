mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use vault_router::config::DEFAULT_CONFIG_FILE;

#[derive(Parser)]
#[command(name = "vault-router")]
#[command(version, about = "Resolve vault routes the way the desktop shell does", long_about = None)]
struct Cli {
    /// Export configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Log routing decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a navigation URL into page data
    Resolve {
        /// URL path, e.g. /open-vault/MyVault/Notes1
        url: String,
    },

    /// List the routing table
    Routes,

    /// Show what the static export will emit
    Export,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Resolve { url } => {
            commands::resolve::execute(&cli.config, &url)?;
        }
        Commands::Routes => {
            commands::routes::execute(&cli.config)?;
        }
        Commands::Export => {
            commands::export::execute(&cli.config)?;
        }
    }

    Ok(())
}
