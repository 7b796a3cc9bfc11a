use std::io;

use tokio::io::{AsyncBufRead, AsyncWrite};

use stork_console_core::AccountService;

use super::records::{self, ACCOUNT};
use super::{EditorSession, MenuState, Step};

const ACCOUNTS_MENU: [&str; 5] = [
    "1. Add account",
    "2. List accounts",
    "3. Remove account",
    "4. Clear all accounts",
    "5. Back to main menu",
];

impl<R, W> EditorSession<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub(super) async fn accounts_menu(&mut self) -> io::Result<MenuState> {
        let mut accounts = match self.ctx.open_accounts().await {
            Ok(accounts) => accounts,
            Err(e) => {
                self.console.report("Failed to load accounts", &e).await?;
                return Ok(MenuState::Main);
            }
        };

        self.console.blank().await?;
        self.console
            .notice(&format!(
                "Account management. Accounts found: {}",
                accounts.len()
            ))
            .await?;

        loop {
            self.console.blank().await?;
            for line in ACCOUNTS_MENU {
                self.console.say(line).await?;
            }

            let Some(choice) = self.console.prompt("Choose an action (1-5): ").await? else {
                return Ok(MenuState::Exit);
            };

            let step = match choice.trim() {
                "1" => self.add_account(&mut accounts).await?,
                "2" => {
                    records::list(&mut self.console, &accounts, &ACCOUNT).await?;
                    Step::Continue
                }
                "3" => records::remove(&mut self.console, &mut accounts, &ACCOUNT).await?,
                "4" => records::clear(&mut self.console, &mut accounts, &ACCOUNT).await?,
                "5" => return Ok(MenuState::Main),
                _ => {
                    self.console
                        .failure("Invalid choice. Please choose 1-5")
                        .await?;
                    Step::Continue
                }
            };

            if step == Step::Closed {
                return Ok(MenuState::Exit);
            }
        }
    }

    async fn add_account(&mut self, accounts: &mut AccountService) -> io::Result<Step> {
        let Some(username) = self.console.prompt("Enter email: ").await? else {
            return Ok(Step::Closed);
        };
        let Some(password) = self.console.prompt("Enter password: ").await? else {
            return Ok(Step::Closed);
        };

        match accounts.add_account(&username, &password).await {
            Ok(_) => self.console.success("Account added").await?,
            Err(e) => self.console.report("Account not added", &e).await?,
        }
        Ok(Step::Continue)
    }
}
