//! Account store service

use crate::error::CoreResult;
use crate::services::RecordService;
use crate::types::AccountRecord;

/// Open account store
pub type AccountService = RecordService<AccountRecord>;

impl RecordService<AccountRecord> {
    /// Validate operator input and append the account
    pub async fn add_account(&mut self, username: &str, password: &str) -> CoreResult<&AccountRecord> {
        let account = AccountRecord::new(username, password)?;
        let account = self.add(account).await?;
        log::info!("Account added: {}", account.username);
        Ok(account)
    }
}
