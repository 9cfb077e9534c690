//! Boutique storefront CLI

use std::process;

use tracing::error;

use crate::cli::Cli;

mod cli;

#[tokio::main]
pub async fn main() {
    // Load configuration from .env, the environment and CLI arguments
    let cli = Cli::load().unwrap_or_else(|error| error.exit());

    if let Err(error) = boutique_app::observability::init(&cli.logging) {
        eprintln!("failed to initialise logging: {error}");
        process::exit(1);
    }

    if let Err(message) = cli.run().await {
        error!(%message, "command failed");
        eprintln!("{message}");
        process::exit(1);
    }
}
