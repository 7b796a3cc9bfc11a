//! Line-oriented operator channel
//!
//! Exactly one `Console` exists per interactive run. It is moved into the
//! editor session (or quick setup) and dropped before the runner starts.

use std::fmt::Display;
use std::io;

use crossterm::style::Stylize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

use stork_console_core::CoreError;

/// Console over the process's stdin/stdout
pub type StdConsole = Console<BufReader<Stdin>, Stdout>;

pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl StdConsole {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print `question` and wait for one line.
    ///
    /// Returns `None` once the input is closed.
    pub async fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        self.writer.write_all(question.as_bytes()).await?;
        self.writer.flush().await?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            log::debug!("Input closed at prompt {question:?}");
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Plain line
    pub async fn say(&mut self, text: impl Display) -> io::Result<()> {
        self.writer.write_all(format!("{text}\n").as_bytes()).await?;
        self.writer.flush().await
    }

    pub async fn blank(&mut self) -> io::Result<()> {
        self.say("").await
    }

    pub async fn title(&mut self, text: &str) -> io::Result<()> {
        self.say(text.blue().bold()).await
    }

    pub async fn success(&mut self, text: &str) -> io::Result<()> {
        self.say(format!("✓ {text}").green()).await
    }

    pub async fn notice(&mut self, text: &str) -> io::Result<()> {
        self.say(text.yellow()).await
    }

    pub async fn hint(&mut self, text: &str) -> io::Result<()> {
        self.say(text.dark_grey()).await
    }

    pub async fn failure(&mut self, text: &str) -> io::Result<()> {
        self.say(format!("✗ {text}").red()).await
    }

    /// Report a per-operation error and log it at the matching level
    pub async fn report(&mut self, context: &str, err: &CoreError) -> io::Result<()> {
        if err.is_expected() {
            log::warn!("{context}: {err}");
        } else {
            log::error!("{context}: {err}");
        }
        self.failure(&format!("{context}: {err}")).await
    }

    /// Give the channel back (used by tests to inspect output)
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
