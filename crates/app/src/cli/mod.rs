//! CLI Commands

mod login;
mod products;
mod shop;
mod tables;

use boutique_app::{
    config::{BackendConfig, LoggingConfig},
    context::AppContext,
};
use clap::{Parser, Subcommand};

use login::LoginArgs;
use products::ProductsCommand;
use shop::ShopArgs;

#[derive(Debug, Parser)]
#[command(name = "boutique-app", about = "Boutique storefront CLI", long_about = None)]
pub(crate) struct Cli {
    /// Catalog backend settings.
    #[command(flatten)]
    backend: BackendConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Sign in with a storefront account
    Login(LoginArgs),

    /// Manage the product catalog
    Products(ProductsCommand),

    /// Browse the catalog and fill a cart interactively
    Shop(ShopArgs),
}

impl Cli {
    /// Load configuration from `.env`, the environment and arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments cannot be parsed.
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    pub(crate) async fn run(self) -> Result<(), String> {
        let context = AppContext::from_config(self.backend);

        match self.command {
            Commands::Login(args) => login::run(&context, args).await,
            Commands::Products(command) => products::run(&context, command).await,
            Commands::Shop(args) => shop::run(&context, args).await,
        }
    }
}
