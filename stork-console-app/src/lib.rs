//! Stork Console
//!
//! Operator console for the Stork bot: bootstraps the installation
//! directory, then runs the interactive editor, the quick setup wizard or
//! hands off straight to the runner, depending on the launch mode.

pub mod cli;
pub mod console;
pub mod logging;
pub mod quick_setup;
pub mod runner;
pub mod session;

use std::process::{ExitCode, ExitStatus};

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncWrite};

use stork_console_core::{InstallLayout, ServiceContext};

use cli::{Cli, LaunchMode};
use console::{Console, StdConsole};
use quick_setup::QuickSetup;
use runner::RunnerCommand;
use session::{EditorSession, SessionOutcome};

/// Run the console for one invocation and report the process exit code.
pub async fn launch(cli: &Cli) -> anyhow::Result<ExitCode> {
    let layout = InstallLayout::new(&cli.dir);
    let runner = RunnerCommand::parse(&cli.runner).context("Invalid runner command")?;
    let mode = cli.launch_mode();
    log::info!("Launch mode {mode:?} in {}", layout.root().display());

    let mut console = StdConsole::stdio();
    bootstrap(&layout, &mut console).await?;
    let ctx = ServiceContext::from_layout(&layout);

    // The console is dropped with its owner before the runner takes stdio.
    let start_runner = match mode {
        LaunchMode::DirectRun => {
            drop(console);
            true
        }
        LaunchMode::QuickSetup => {
            let mut wizard = QuickSetup::new(console, ctx);
            wizard.run().await.context("Operator console failed")?;
            false
        }
        LaunchMode::Editor => {
            let mut session = EditorSession::new(console, ctx);
            let outcome = session.run().await.context("Operator console failed")?;
            outcome == SessionOutcome::Launch
        }
    };

    if !start_runner {
        return Ok(ExitCode::SUCCESS);
    }

    let status = runner
        .launch(layout.root())
        .await
        .context("Failed to start the bot")?;
    Ok(ExitCode::from(exit_code(status)))
}

/// Create missing backing files and tell the operator about each one.
pub async fn bootstrap<R, W>(layout: &InstallLayout, console: &mut Console<R, W>) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    let created = layout
        .ensure_files()
        .await
        .with_context(|| format!("Failed to prepare {}", layout.root().display()))?;

    for name in created {
        console.notice(&format!("Created {name}")).await?;
    }
    Ok(())
}

/// Runner exit code, or 1 when it has none (killed by a signal)
fn exit_code(status: ExitStatus) -> u8 {
    status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .unwrap_or(1)
}
