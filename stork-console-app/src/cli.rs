//! Command line options

use std::path::PathBuf;

use clap::Parser;

/// Operator console for the Stork bot
#[derive(Debug, Parser)]
#[command(name = "stork-console", version, about)]
pub struct Cli {
    /// Open the interactive editor (default)
    #[arg(short, long)]
    pub setup: bool,

    /// Skip the editor and start the bot
    #[arg(short, long)]
    pub run: bool,

    /// Run the quick setup wizard
    #[arg(short, long)]
    pub quick: bool,

    /// Installation directory holding the bot's files
    #[arg(long, env = "STORK_HOME", default_value = ".")]
    pub dir: PathBuf,

    /// Command line that starts the bot
    #[arg(long, env = "STORK_RUNNER", default_value = "node main.js")]
    pub runner: String,
}

/// What the console does after bootstrap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    Editor,
    QuickSetup,
    DirectRun,
}

impl Cli {
    /// `--run` wins over `--quick`, which wins over `--setup`
    pub fn launch_mode(&self) -> LaunchMode {
        if self.run {
            LaunchMode::DirectRun
        } else if self.quick {
            LaunchMode::QuickSetup
        } else {
            LaunchMode::Editor
        }
    }
}
