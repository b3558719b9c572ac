//! Order Desk CLI

use std::process;

use orderdesk_app::observability;

use crate::cli::Cli;

mod cli;

#[tokio::main]
pub async fn main() {
    let cli = Cli::load().unwrap_or_else(|error| error.exit());

    if let Err(error) = observability::init(&cli.config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("{error}");
        }
    }

    if let Err(error) = cli.run().await {
        #[expect(clippy::print_stderr, reason = "user-facing failure message")]
        {
            eprintln!("{error}");
        }

        process::exit(1);
    }
}
