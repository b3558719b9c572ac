use clap::{Parser, Subcommand};

use orderdesk_app::{api::HttpBackend, config::AppConfig};

mod orders;
mod products;
mod schedule;

#[derive(Debug, Parser)]
#[command(name = "orderdesk", about = "Order desk for the production scheduling backend", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the product catalog
    Products,
    /// Manage orders
    Orders(orders::OrdersCommand),
    /// Show the production schedule
    Schedule,
}

impl Cli {
    /// Parse arguments, reading `.env` first when present.
    pub(crate) fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    pub(crate) async fn run(self) -> Result<(), String> {
        let backend = HttpBackend::new(self.config.backend.into());

        match self.command {
            Commands::Products => products::run(&backend).await,
            Commands::Orders(command) => orders::run(&backend, command).await,
            Commands::Schedule => schedule::run(&backend).await,
        }
    }
}
