//! 行式文本仓库
//!
//! 每行一条记录，加载时去除 `\r` 并跳过空行；
//! 实现 `RecordRepository` trait

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::write_atomic;
use crate::error::{CoreError, CoreResult};
use crate::traits::{RecordCodec, RecordRepository};

/// Record store backed by a flat text file
pub struct LineFileRepository<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> LineFileRepository<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse file contents, dropping blank and malformed lines.
fn parse_lines<T: RecordCodec>(content: &str) -> Vec<T> {
    content
        .split('\n')
        .map(|line| line.replace('\r', ""))
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(idx, line)| match T::parse_line(&line) {
            Ok(record) => Some(record),
            Err(reason) => {
                let err = CoreError::Parse {
                    line: idx + 1,
                    reason,
                };
                log::warn!("Skipping stored record: {err}");
                None
            }
        })
        .collect()
}

/// Join records into file contents (no trailing newline).
fn format_lines<T: RecordCodec>(records: &[T]) -> String {
    records
        .iter()
        .map(T::format_line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[async_trait]
impl<T: RecordCodec + 'static> RecordRepository<T> for LineFileRepository<T> {
    async fn load(&self) -> CoreResult<Vec<T>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(CoreError::storage(
                    &format!("read {}", self.path.display()),
                    &e,
                ))
            }
        };

        let records = parse_lines(&content);
        log::debug!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    async fn persist(&self, records: &[T]) -> CoreResult<()> {
        write_atomic(&self.path, format_lines(records).as_bytes()).await?;
        log::debug!("Persisted {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AccountRecord, ProxyRecord};

    fn account(name: &str, password: &str) -> AccountRecord {
        AccountRecord::new(name, password).unwrap()
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let repo = LineFileRepository::<AccountRecord>::new(tmp.path().join("accounts.txt"));
        assert!(repo.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn round_trip_preserves_order_and_duplicates() {
        let tmp = tempfile::tempdir().unwrap();
        let repo = LineFileRepository::<AccountRecord>::new(tmp.path().join("accounts.txt"));
        let records = vec![
            account("alice@example.com", "secret1"),
            account("bob@example.com", "p|w"),
            account("alice@example.com", "other"),
        ];

        repo.persist(&records).await.unwrap();
        let loaded = repo.load().await.unwrap();

        assert_eq!(loaded, records);
        assert_eq!(
            std::fs::read_to_string(repo.path()).unwrap(),
            "alice@example.com|secret1\nbob@example.com|p|w\nalice@example.com|other"
        );
    }

    #[tokio::test]
    async fn persist_then_load_then_persist_is_stable() {
        let tmp = tempfile::tempdir().unwrap();
        let repo = LineFileRepository::<AccountRecord>::new(tmp.path().join("accounts.txt"));
        repo.persist(&[account("a", "1"), account("b", "2")])
            .await
            .unwrap();
        let first = std::fs::read_to_string(repo.path()).unwrap();

        let loaded = repo.load().await.unwrap();
        repo.persist(&loaded).await.unwrap();

        assert_eq!(std::fs::read_to_string(repo.path()).unwrap(), first);
    }

    #[tokio::test]
    async fn empty_sequence_writes_empty_file() {
        let tmp = tempfile::tempdir().unwrap();
        let repo = LineFileRepository::<ProxyRecord>::new(tmp.path().join("proxies.txt"));
        repo.persist(&[]).await.unwrap();
        assert_eq!(std::fs::read_to_string(repo.path()).unwrap(), "");
    }

    #[test]
    fn parse_strips_carriage_returns_and_blank_lines() {
        let proxies: Vec<ProxyRecord> =
            parse_lines("http://1.1.1.1:80\r\n\r\n   \nsocks5://2.2.2.2:1080\r\n");
        let values: Vec<_> = proxies.iter().map(ProxyRecord::as_str).collect();
        assert_eq!(values, vec!["http://1.1.1.1:80", "socks5://2.2.2.2:1080"]);
    }

    #[test]
    fn parse_drops_account_lines_without_separator() {
        let accounts: Vec<AccountRecord> = parse_lines("alice|one\nbroken\nbob|two");
        let names: Vec<_> = accounts.iter().map(|a| a.username.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob"]);
    }
}
