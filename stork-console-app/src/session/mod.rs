//! Interactive editor session
//!
//! A sequential menu state machine:
//!
//! ```text
//!            ┌──────────── Back ─────────────┐
//!            ▼                               │
//!        MainMenu ──1──▶ AccountsMenu ───────┤
//!         │  │  └──2──▶ ProxiesMenu ─────────┤
//!         │  └─────3──▶ SettingsForm ────────┘
//!         ├─────4──▶ Launch   (hand-off to the runner, never returns)
//!         └─────5──▶ Exit
//! ```
//!
//! Every prompt blocks until the operator answers one line. Closing the
//! input at any prompt ends the session as `Exit`.

mod accounts;
mod proxies;
mod records;
mod settings;

use std::io;

use tokio::io::{AsyncBufRead, AsyncWrite};

use stork_console_core::ServiceContext;

use crate::console::Console;

pub(crate) use settings::fill_settings;

/// Menu state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Main,
    Accounts,
    Proxies,
    Settings,
    Exit,
    Launch,
}

/// How the session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Operator left the console (or closed the input)
    Exit,
    /// Operator asked to start the bot
    Launch,
}

/// Result of one prompt sequence inside a menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Continue,
    Closed,
}

const MAIN_MENU: [&str; 5] = [
    "1. Manage accounts",
    "2. Manage proxies",
    "3. Settings",
    "4. Run bot",
    "5. Exit",
];

/// Editor session owning the operator channel
pub struct EditorSession<R, W> {
    console: Console<R, W>,
    ctx: ServiceContext,
}

impl<R, W> EditorSession<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(console: Console<R, W>, ctx: ServiceContext) -> Self {
        Self { console, ctx }
    }

    /// Drive the menus until the operator exits or launches the bot.
    ///
    /// Only channel failures are returned as errors; store errors are
    /// reported inline and the session continues.
    pub async fn run(&mut self) -> io::Result<SessionOutcome> {
        self.console.title("Stork Console setup").await?;

        let mut state = MenuState::Main;
        let outcome = loop {
            log::debug!("Session state: {state:?}");
            state = match state {
                MenuState::Main => self.main_menu().await?,
                MenuState::Accounts => self.accounts_menu().await?,
                MenuState::Proxies => self.proxies_menu().await?,
                MenuState::Settings => self.settings_form().await?,
                MenuState::Exit => {
                    self.console.success("Exiting").await?;
                    break SessionOutcome::Exit;
                }
                MenuState::Launch => {
                    self.console.success("Starting the bot...").await?;
                    break SessionOutcome::Launch;
                }
            };
        };

        log::info!("Editor session finished: {outcome:?}");
        Ok(outcome)
    }

    /// Release the channel
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    async fn main_menu(&mut self) -> io::Result<MenuState> {
        self.console.blank().await?;
        for line in MAIN_MENU {
            self.console.say(line).await?;
        }

        let Some(choice) = self.console.prompt("Choose an action (1-5): ").await? else {
            return Ok(MenuState::Exit);
        };

        let next = match choice.trim() {
            "1" => MenuState::Accounts,
            "2" => MenuState::Proxies,
            "3" => MenuState::Settings,
            "4" => MenuState::Launch,
            "5" => MenuState::Exit,
            _ => {
                self.console
                    .failure("Invalid choice. Please choose 1-5")
                    .await?;
                MenuState::Main
            }
        };
        Ok(next)
    }
}
