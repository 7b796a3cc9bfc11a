//! Hand-off to the bot runner process

use std::path::Path;
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;

use stork_console_core::{CoreError, CoreResult};

/// Runner command line, split into program and arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerCommand {
    program: String,
    args: Vec<String>,
}

impl RunnerCommand {
    /// Split a command line on whitespace.
    pub fn parse(command_line: &str) -> CoreResult<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| CoreError::Runner("Runner command is empty".to_string()))?;

        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Start the runner in `workdir` with the console's stdio and wait for it.
    pub async fn launch(&self, workdir: &Path) -> CoreResult<ExitStatus> {
        log::info!(
            "Launching runner: {} {:?} in {}",
            self.program,
            self.args,
            workdir.display()
        );

        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(workdir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| CoreError::Runner(format!("Failed to start {}: {e}", self.program)))?;

        log::info!("Runner exited with {status}");
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_whitespace() {
        let cmd = RunnerCommand::parse("  node   main.js --verbose ").unwrap();
        assert_eq!(cmd.program(), "node");
        assert_eq!(cmd.args(), ["main.js", "--verbose"]);
    }

    #[test]
    fn parse_rejects_blank_command() {
        for input in ["", "   ", "\t"] {
            assert!(matches!(
                RunnerCommand::parse(input),
                Err(CoreError::Runner(_))
            ));
        }
    }

    #[tokio::test]
    async fn missing_program_is_a_runner_error() {
        let tmp = tempfile::tempdir().unwrap();
        let cmd = RunnerCommand::parse("stork-console-no-such-runner-binary").unwrap();

        let err = cmd.launch(tmp.path()).await.unwrap_err();
        assert!(matches!(err, CoreError::Runner(_)));
        assert!(!err.is_expected());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn exit_status_is_passed_through() {
        let tmp = tempfile::tempdir().unwrap();

        let ok = RunnerCommand::parse("true").unwrap();
        assert!(ok.launch(tmp.path()).await.unwrap().success());

        let failing = RunnerCommand::parse("false").unwrap();
        assert_eq!(failing.launch(tmp.path()).await.unwrap().code(), Some(1));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn runs_in_the_installation_directory() {
        let tmp = tempfile::tempdir().unwrap();

        let cmd = RunnerCommand::parse("touch started.flag").unwrap();
        assert!(cmd.launch(tmp.path()).await.unwrap().success());
        assert!(tmp.path().join("started.flag").exists());
    }
}
