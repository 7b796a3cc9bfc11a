//! `stork-console` entry point

use std::process::ExitCode;

use clap::Parser;

use stork_console_app::cli::Cli;
use stork_console_app::{launch, logging};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    match launch(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
