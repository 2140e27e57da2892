//! Command-line interface for Corso.

mod console;

use clap::{Parser, Subcommand};
use corso::{
    CorsoConfig, CorsoResult, JsonFileStore, Locale, Plan, PurchaseLedger, Storefront,
    UserRepository,
};
use std::path::PathBuf;
use std::sync::Arc;
use strum::IntoEnumIterator;

/// Conversational storefront with a manual payment-approval workflow.
#[derive(Debug, Parser)]
#[command(name = "corso", version, about)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a local console session against the storefront.
    ///
    /// Input format: `<user_id> <text>` for messages and commands,
    /// `<user_id> cb <token>` for inline-button callbacks.
    Run {
        /// Configuration file (default: layered corso.toml + CORSO_* env)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override the record store path
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Validate configuration and report the serving mode
    Check {
        /// Configuration file (default: layered corso.toml + CORSO_* env)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the plan table
    Plans {
        /// Configuration file (default: layered corso.toml + CORSO_* env)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<PathBuf>) -> CorsoResult<CorsoConfig> {
    match path {
        Some(path) => CorsoConfig::from_file(path),
        None => CorsoConfig::load(),
    }
}

/// Run the console session.
pub async fn run(config: Option<PathBuf>, store: Option<PathBuf>) -> CorsoResult<()> {
    let mut config = load_config(config)?;
    if let Some(store) = store {
        config.store_path = store;
    }
    config.validate()?;
    let config = Arc::new(config);

    let store = Arc::new(JsonFileStore::new(config.store_path.clone()));
    let repository = Arc::new(UserRepository::new(store, config.default_locale));
    let ledger = PurchaseLedger::new(repository.clone());
    let gateway = Arc::new(console::ConsoleGateway);
    let storefront = Arc::new(Storefront::new(config, repository, ledger, gateway));

    console::session(storefront).await
}

/// Validate configuration and describe how the system would serve.
pub fn check(config: Option<PathBuf>) -> CorsoResult<()> {
    let config = load_config(config)?;
    config.validate()?;

    println!("Configuration OK");
    println!("  store: {}", config.store_path.display());
    println!("  default locale: {}", config.default_locale);
    match config.operator_id {
        Some(operator) => println!("  operator: {operator}"),
        None => println!("  operator: none (open-authorization mode)"),
    }
    for plan in Plan::iter() {
        match config.group_links.for_plan(plan) {
            Some(_) => println!("  group link {plan}: configured"),
            None => println!("  group link {plan}: -"),
        }
    }
    Ok(())
}

/// Print the plan table.
pub fn plans(config: Option<PathBuf>) -> CorsoResult<()> {
    let config = load_config(config)?;

    for plan in Plan::PRECEDENCE.into_iter().rev() {
        let offer = config.plans.offer(plan);
        println!(
            "{plan:<6} {promo}{currency} (promo) / {regular}{currency} (regular) - {access}",
            promo = offer.promo,
            regular = offer.regular,
            currency = offer.currency,
            access = offer.access.get(Locale::Ru),
        );
    }
    Ok(())
}
