//! Installation layout and first-run bootstrap

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::{CoreError, CoreResult};
use crate::storage::{JsonConfigRepository, LineFileRepository};
use crate::types::{AccountRecord, ProxyRecord};

pub const ACCOUNTS_FILE: &str = "accounts.txt";
pub const PROXIES_FILE: &str = "proxies.txt";
pub const CONFIG_FILE: &str = "config.json";
/// Owned by the runner; only created here, never read
pub const TOKENS_FILE: &str = "tokens.json";

/// Initial contents of a backing file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seed {
    EmptyText,
    EmptyObject,
}

impl Seed {
    fn contents(self) -> &'static str {
        match self {
            Self::EmptyText => "",
            Self::EmptyObject => "{}",
        }
    }
}

const REQUIRED_FILES: [(&str, Seed); 4] = [
    (CONFIG_FILE, Seed::EmptyObject),
    (ACCOUNTS_FILE, Seed::EmptyText),
    (PROXIES_FILE, Seed::EmptyText),
    (TOKENS_FILE, Seed::EmptyObject),
];

/// Paths of the backing files inside one installation directory
#[derive(Debug, Clone)]
pub struct InstallLayout {
    root: PathBuf,
}

impl InstallLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn accounts_path(&self) -> PathBuf {
        self.root.join(ACCOUNTS_FILE)
    }

    pub fn proxies_path(&self) -> PathBuf {
        self.root.join(PROXIES_FILE)
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn tokens_path(&self) -> PathBuf {
        self.root.join(TOKENS_FILE)
    }

    pub fn account_repository(&self) -> LineFileRepository<AccountRecord> {
        LineFileRepository::new(self.accounts_path())
    }

    pub fn proxy_repository(&self) -> LineFileRepository<ProxyRecord> {
        LineFileRepository::new(self.proxies_path())
    }

    pub fn config_repository(&self) -> JsonConfigRepository {
        JsonConfigRepository::new(self.config_path())
    }

    /// Create the directory and any missing backing file.
    ///
    /// Existing files are left untouched. Returns the names of the files
    /// that were created, in creation order.
    pub async fn ensure_files(&self) -> CoreResult<Vec<&'static str>> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| CoreError::storage(&format!("create {}", self.root.display()), &e))?;

        let mut created = Vec::new();
        for (name, seed) in REQUIRED_FILES {
            let path = self.root.join(name);
            let exists = fs::try_exists(&path)
                .await
                .map_err(|e| CoreError::storage(&format!("stat {}", path.display()), &e))?;
            if exists {
                continue;
            }

            fs::write(&path, seed.contents())
                .await
                .map_err(|e| CoreError::storage(&format!("create {}", path.display()), &e))?;
            log::info!("Created {}", path.display());
            created.push(name);
        }

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fresh_directory_gets_all_four_files() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = InstallLayout::new(tmp.path().join("install"));

        let created = layout.ensure_files().await.unwrap();

        assert_eq!(
            created,
            vec![CONFIG_FILE, ACCOUNTS_FILE, PROXIES_FILE, TOKENS_FILE]
        );
        assert_eq!(std::fs::read_to_string(layout.accounts_path()).unwrap(), "");
        assert_eq!(std::fs::read_to_string(layout.proxies_path()).unwrap(), "");
        assert_eq!(std::fs::read_to_string(layout.config_path()).unwrap(), "{}");
        assert_eq!(std::fs::read_to_string(layout.tokens_path()).unwrap(), "{}");
    }

    #[tokio::test]
    async fn existing_files_are_not_touched() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = InstallLayout::new(tmp.path());
        std::fs::write(layout.accounts_path(), "alice|secret").unwrap();
        std::fs::write(layout.tokens_path(), r#"{"alice":"tok"}"#).unwrap();

        let created = layout.ensure_files().await.unwrap();

        assert_eq!(created, vec![CONFIG_FILE, PROXIES_FILE]);
        assert_eq!(
            std::fs::read_to_string(layout.accounts_path()).unwrap(),
            "alice|secret"
        );
        assert_eq!(
            std::fs::read_to_string(layout.tokens_path()).unwrap(),
            r#"{"alice":"tok"}"#
        );
    }

    #[tokio::test]
    async fn second_run_creates_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = InstallLayout::new(tmp.path());
        layout.ensure_files().await.unwrap();
        assert!(layout.ensure_files().await.unwrap().is_empty());
    }
}
