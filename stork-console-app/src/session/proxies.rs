use std::io;

use tokio::io::{AsyncBufRead, AsyncWrite};

use stork_console_core::types::{ProxyEntryPolicy, ProxyKind};
use stork_console_core::ProxyService;

use super::records::{self, PROXY};
use super::{EditorSession, MenuState, Step};

const PROXIES_MENU: [&str; 6] = [
    "1. Add HTTP/HTTPS proxy",
    "2. Add SOCKS proxy",
    "3. List proxies",
    "4. Remove proxy",
    "5. Clear all proxies",
    "6. Back to main menu",
];

impl<R, W> EditorSession<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub(super) async fn proxies_menu(&mut self) -> io::Result<MenuState> {
        let mut proxies = match self.ctx.open_proxies().await {
            Ok(proxies) => proxies,
            Err(e) => {
                self.console.report("Failed to load proxies", &e).await?;
                return Ok(MenuState::Main);
            }
        };

        self.console.blank().await?;
        self.console
            .notice(&format!(
                "Proxy management. Proxies found: {}",
                proxies.len()
            ))
            .await?;

        loop {
            self.console.blank().await?;
            for line in PROXIES_MENU {
                self.console.say(line).await?;
            }

            let Some(choice) = self.console.prompt("Choose an action (1-6): ").await? else {
                return Ok(MenuState::Exit);
            };

            let step = match choice.trim() {
                "1" => self.add_proxy(&mut proxies, ProxyKind::Http).await?,
                "2" => self.add_proxy(&mut proxies, ProxyKind::Socks).await?,
                "3" => {
                    records::list(&mut self.console, &proxies, &PROXY).await?;
                    Step::Continue
                }
                "4" => records::remove(&mut self.console, &mut proxies, &PROXY).await?,
                "5" => records::clear(&mut self.console, &mut proxies, &PROXY).await?,
                "6" => return Ok(MenuState::Main),
                _ => {
                    self.console
                        .failure("Invalid choice. Please choose 1-6")
                        .await?;
                    Step::Continue
                }
            };

            if step == Step::Closed {
                return Ok(MenuState::Exit);
            }
        }
    }

    /// Strict entry: the scheme must already match the selected kind
    async fn add_proxy(&mut self, proxies: &mut ProxyService, kind: ProxyKind) -> io::Result<Step> {
        let question = format!(
            "Enter {} proxy (format: {}): ",
            kind.label(),
            kind.format_hint()
        );
        let Some(raw) = self.console.prompt(&question).await? else {
            return Ok(Step::Closed);
        };

        match proxies
            .add_proxy(&raw, kind, ProxyEntryPolicy::Strict)
            .await
        {
            Ok(_) => {
                self.console
                    .success(&format!("{} proxy added", kind.label()))
                    .await?;
            }
            Err(e) => self.console.report("Proxy not added", &e).await?,
        }
        Ok(Step::Continue)
    }
}
