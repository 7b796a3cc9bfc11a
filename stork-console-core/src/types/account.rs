//! 账户记录类型定义

use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::traits::RecordCodec;

/// Field separator inside `accounts.txt`
pub const ACCOUNT_SEPARATOR: char = '|';

/// One authentication identity.
///
/// `Debug` redacts the password so records can be logged safely.
#[derive(Clone, PartialEq, Eq)]
pub struct AccountRecord {
    /// Login name (usually an email)
    pub username: String,
    /// Plain password, handed to the runner as-is
    pub password: String,
}

impl AccountRecord {
    /// Build a record from operator input.
    ///
    /// Both fields must be non-blank. The username may not contain the
    /// separator, otherwise the line could not be read back.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> CoreResult<Self> {
        let username = username.into();
        let password = password.into();

        if username.trim().is_empty() {
            return Err(CoreError::Validation("Username cannot be empty".to_string()));
        }
        if username.contains(ACCOUNT_SEPARATOR) {
            return Err(CoreError::Validation(format!(
                "Username cannot contain '{ACCOUNT_SEPARATOR}'"
            )));
        }
        if password.trim().is_empty() {
            return Err(CoreError::Validation("Password cannot be empty".to_string()));
        }

        Ok(Self { username, password })
    }
}

impl fmt::Debug for AccountRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountRecord")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl RecordCodec for AccountRecord {
    fn parse_line(line: &str) -> Result<Self, String> {
        let (username, password) = line
            .split_once(ACCOUNT_SEPARATOR)
            .ok_or_else(|| format!("missing '{ACCOUNT_SEPARATOR}' separator"))?;
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    fn format_line(&self) -> String {
        format!("{}{ACCOUNT_SEPARATOR}{}", self.username, self.password)
    }

    fn display_label(&self) -> &str {
        &self.username
    }
}
