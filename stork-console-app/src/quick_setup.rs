//! Quick setup wizard
//!
//! A linear walk through settings, accounts and proxies for first-time
//! installs. Edited settings start from the defaults rather than the stored
//! values; every accepted account or proxy is persisted immediately.

use std::io;

use tokio::io::{AsyncBufRead, AsyncWrite};

use stork_console_core::services::{RecordService, SettingsField, AFFIRMATIVE_TOKEN};
use stork_console_core::types::{ConfigRecord, ProxyEntryPolicy, ProxyKind};
use stork_console_core::{RecordCodec, ServiceContext};

use crate::console::Console;
use crate::session::{fill_settings, Step};

/// Answer that ends an "add another?" loop
const NEGATIVE_TOKEN: &str = "no";

/// Store sizes when the wizard finished
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuickSetupSummary {
    pub accounts: usize,
    pub proxies: usize,
}

pub struct QuickSetup<R, W> {
    console: Console<R, W>,
    ctx: ServiceContext,
}

impl<R, W> QuickSetup<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(console: Console<R, W>, ctx: ServiceContext) -> Self {
        Self { console, ctx }
    }

    /// Run all three steps.
    ///
    /// Closing the input stops the wizard after the last completed action;
    /// store errors are reported and the wizard moves on.
    pub async fn run(&mut self) -> io::Result<QuickSetupSummary> {
        self.console.title("Stork Console quick setup").await?;

        let mut summary = QuickSetupSummary::default();
        let completed = self.settings_step().await? == Step::Continue
            && self.accounts_step(&mut summary).await? == Step::Continue
            && self.proxies_step(&mut summary).await? == Step::Continue;

        if completed {
            self.console.blank().await?;
            self.console.title("Setup complete").await?;
            self.console
                .say(format!("Accounts: {}", summary.accounts))
                .await?;
            self.console
                .say(format!("Proxies: {}", summary.proxies))
                .await?;
            self.console
                .hint("Start the bot with: stork-console --run")
                .await?;
        } else {
            log::info!("Input closed during quick setup");
        }

        log::info!("Quick setup finished: {summary:?}");
        Ok(summary)
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    async fn settings_step(&mut self) -> io::Result<Step> {
        self.console.blank().await?;
        self.console.notice("Step 1/3: settings").await?;

        let config_service = self.ctx.config_service();
        let mut config = match config_service.load().await {
            Ok(stored) => stored,
            Err(e) => {
                self.console.report("Failed to load settings", &e).await?;
                ConfigRecord::default()
            }
        };
        config.reset_known_fields();
        if fill_settings(&mut self.console, &mut config, &SettingsField::RUNTIME).await?
            == Step::Closed
        {
            return Ok(Step::Closed);
        }

        match config_service.save(&config).await {
            Ok(()) => self.console.success("Configuration saved").await?,
            Err(e) => self.console.report("Configuration not saved", &e).await?,
        }
        Ok(Step::Continue)
    }

    async fn accounts_step(&mut self, summary: &mut QuickSetupSummary) -> io::Result<Step> {
        self.console.blank().await?;
        self.console.notice("Step 2/3: accounts").await?;

        let mut accounts = match self.ctx.open_accounts().await {
            Ok(accounts) => accounts,
            Err(e) => {
                self.console.report("Failed to load accounts", &e).await?;
                return Ok(Step::Continue);
            }
        };

        if self.offer_clear(&mut accounts, "accounts").await? == Step::Closed {
            return Ok(Step::Closed);
        }
        summary.accounts = accounts.len();

        loop {
            let Some(answer) = self
                .console
                .prompt(&format!("Add an account? ({AFFIRMATIVE_TOKEN}/no) [yes]: "))
                .await?
            else {
                return Ok(Step::Closed);
            };
            if declines(&answer) {
                return Ok(Step::Continue);
            }

            let Some(username) = self.console.prompt("Enter email: ").await? else {
                return Ok(Step::Closed);
            };
            if username.trim().is_empty() {
                self.console.failure("Email cannot be empty").await?;
                continue;
            }
            let Some(password) = self.console.prompt("Enter password: ").await? else {
                return Ok(Step::Closed);
            };

            match accounts.add_account(&username, &password).await {
                Ok(_) => self.console.success("Account added").await?,
                Err(e) => self.console.report("Account not added", &e).await?,
            }
            summary.accounts = accounts.len();
        }
    }

    async fn proxies_step(&mut self, summary: &mut QuickSetupSummary) -> io::Result<Step> {
        self.console.blank().await?;
        self.console.notice("Step 3/3: proxies").await?;

        let mut proxies = match self.ctx.open_proxies().await {
            Ok(proxies) => proxies,
            Err(e) => {
                self.console.report("Failed to load proxies", &e).await?;
                return Ok(Step::Continue);
            }
        };

        if self.offer_clear(&mut proxies, "proxies").await? == Step::Closed {
            return Ok(Step::Closed);
        }
        summary.proxies = proxies.len();

        loop {
            let Some(answer) = self
                .console
                .prompt(&format!("Add a proxy? ({AFFIRMATIVE_TOKEN}/no) [yes]: "))
                .await?
            else {
                return Ok(Step::Closed);
            };
            if declines(&answer) {
                return Ok(Step::Continue);
            }

            let Some(kind) = self.choose_kind().await? else {
                return Ok(Step::Closed);
            };
            let Some(raw) = self
                .console
                .prompt(&format!(
                    "Enter {} proxy (format: {}): ",
                    kind.label(),
                    kind.format_hint()
                ))
                .await?
            else {
                return Ok(Step::Closed);
            };

            match proxies
                .add_proxy(&raw, kind, ProxyEntryPolicy::AutoPrefix)
                .await
            {
                Ok(proxy) => {
                    let stored = proxy.to_string();
                    if !raw.contains("://") {
                        self.console
                            .notice(&format!("Added {} prefix", kind.default_prefix()))
                            .await?;
                    }
                    self.console
                        .success(&format!("Proxy added: {stored}"))
                        .await?;
                }
                Err(e) => self.console.report("Proxy not added", &e).await?,
            }
            summary.proxies = proxies.len();
        }
    }

    /// Returns `None` once the input is closed
    async fn choose_kind(&mut self) -> io::Result<Option<ProxyKind>> {
        loop {
            self.console
                .say(format!("1. {}", ProxyKind::Http.label()))
                .await?;
            self.console
                .say(format!("2. {}", ProxyKind::Socks.label()))
                .await?;

            let Some(choice) = self.console.prompt("Choose a type (1/2): ").await? else {
                return Ok(None);
            };
            match choice.trim() {
                "1" => return Ok(Some(ProxyKind::Http)),
                "2" => return Ok(Some(ProxyKind::Socks)),
                _ => {
                    self.console
                        .failure("Invalid choice. Please choose 1 or 2")
                        .await?;
                }
            }
        }
    }

    async fn offer_clear<T>(&mut self, store: &mut RecordService<T>, plural: &str) -> io::Result<Step>
    where
        T: RecordCodec + 'static,
    {
        if store.is_empty() {
            return Ok(Step::Continue);
        }

        self.console
            .say(format!("Found {} existing {plural}", store.len()))
            .await?;
        let Some(answer) = self
            .console
            .prompt(&format!(
                "Clear existing {plural}? ({AFFIRMATIVE_TOKEN}/no) [no]: "
            ))
            .await?
        else {
            return Ok(Step::Closed);
        };

        match store.clear_if_confirmed(&answer).await {
            Ok(Some(_)) => {
                self.console
                    .success(&format!("All {plural} removed"))
                    .await?;
            }
            Ok(None) => {
                self.console
                    .hint(&format!("Keeping existing {plural}"))
                    .await?;
            }
            Err(e) => {
                self.console
                    .report(&format!("Failed to clear {plural}"), &e)
                    .await?;
            }
        }
        Ok(Step::Continue)
    }
}

fn declines(answer: &str) -> bool {
    answer.trim().to_lowercase() == NEGATIVE_TOKEN
}
