//! 配置仓库
//!
//! 使用 JSON 文件存储 `ConfigRecord`，文件缺失或无法解析时回退到默认值

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::write_atomic;
use crate::error::{CoreError, CoreResult};
use crate::traits::ConfigRepository;
use crate::types::ConfigRecord;

/// 基于 JSON 文件的配置仓库
pub struct JsonConfigRepository {
    path: PathBuf,
}

impl JsonConfigRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ConfigRepository for JsonConfigRepository {
    async fn load(&self) -> CoreResult<ConfigRecord> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("{} not found, using defaults", self.path.display());
                return Ok(ConfigRecord::default());
            }
            Err(e) => {
                return Err(CoreError::storage(
                    &format!("read {}", self.path.display()),
                    &e,
                ))
            }
        };

        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!(
                    "{} is not a valid config ({e}), using defaults",
                    self.path.display()
                );
                Ok(ConfigRecord::default())
            }
        }
    }

    async fn save(&self, config: &ConfigRecord) -> CoreResult<()> {
        let content = serde_json::to_string_pretty(config)
            .map_err(|e| CoreError::Serialization(e.to_string()))?;
        write_atomic(&self.path, content.as_bytes()).await?;
        log::info!("Config saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;

    #[tokio::test]
    async fn missing_file_loads_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let repo = JsonConfigRepository::new(tmp.path().join("config.json"));
        assert_eq!(repo.load().await.unwrap(), ConfigRecord::default());
    }

    #[tokio::test]
    async fn garbage_loads_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let repo = JsonConfigRepository::new(&path);
        assert_eq!(repo.load().await.unwrap(), ConfigRecord::default());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let repo = JsonConfigRepository::new(tmp.path().join("config.json"));

        let mut config = ConfigRecord::default();
        config.concurrency.max_workers = NonZeroU32::new(4).unwrap();
        config.identity_provider.region = "us-east-1".to_string();
        repo.save(&config).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), config);
    }

    #[tokio::test]
    async fn save_keeps_keys_it_does_not_edit() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"proxy":{"rotate":true},"threads":{"maxWorkers":3,"pinned":[1,2]}}"#,
        )
        .unwrap();
        let repo = JsonConfigRepository::new(&path);

        let mut config = repo.load().await.unwrap();
        config.concurrency.max_workers = NonZeroU32::new(8).unwrap();
        repo.save(&config).await.unwrap();

        let saved: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved["proxy"]["rotate"], true);
        assert_eq!(saved["threads"]["pinned"], serde_json::json!([1, 2]));
        assert_eq!(saved["threads"]["maxWorkers"], 8);
    }

    #[tokio::test]
    async fn saved_file_uses_two_space_indent() {
        let tmp = tempfile::tempdir().unwrap();
        let repo = JsonConfigRepository::new(tmp.path().join("config.json"));
        repo.save(&ConfigRecord::default()).await.unwrap();

        let content = std::fs::read_to_string(repo.path()).unwrap();
        assert!(content.starts_with("{\n  \"cognito\": {\n    \"region\""));
    }
}
