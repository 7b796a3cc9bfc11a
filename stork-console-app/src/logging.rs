//! Log output setup
//!
//! Logs go to stderr so they never interleave with the prompts on stdout.
//! `log` records from the core crate are forwarded into tracing.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "warn";

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .with(filter)
        .try_init();

    if let Err(e) = installed {
        eprintln!("Logging not initialized: {e}");
    }
}
