//! Corso CLI binary.
//!
//! Provides command-line access to the storefront:
//! - Run a local console session (no live gateway required)
//! - Validate configuration before deploying
//! - Print the plan table

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands};

    // Load .env file if present
    let _ = dotenvy::dotenv();

    corso::init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, store } => {
            cli::run(config, store).await?;
        }
        Commands::Check { config } => {
            cli::check(config)?;
        }
        Commands::Plans { config } => {
            cli::plans(config)?;
        }
    }

    Ok(())
}
