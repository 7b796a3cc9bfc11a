//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::traits::{ConfigRepository, RecordCodec, RecordRepository};
use crate::types::{ConfigRecord, ProxyRecord};

// ===== MockRecordRepository =====

pub struct MockRecordRepository<T> {
    records: RwLock<Vec<T>>,
    persist_count: RwLock<usize>,
    /// 如果 Some，persist 时返回此错误（用于测试回滚路径）
    persist_error: RwLock<Option<String>>,
}

impl<T: RecordCodec> MockRecordRepository<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
            persist_count: RwLock::new(0),
            persist_error: RwLock::new(None),
        }
    }

    pub async fn set_persist_error(&self, err: Option<String>) {
        *self.persist_error.write().await = err;
    }

    pub async fn stored(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    pub async fn persist_count(&self) -> usize {
        *self.persist_count.read().await
    }
}

#[async_trait]
impl<T: RecordCodec + 'static> RecordRepository<T> for MockRecordRepository<T> {
    async fn load(&self) -> CoreResult<Vec<T>> {
        Ok(self.records.read().await.clone())
    }

    async fn persist(&self, records: &[T]) -> CoreResult<()> {
        if let Some(ref msg) = *self.persist_error.read().await {
            return Err(CoreError::Storage(msg.clone()));
        }
        *self.records.write().await = records.to_vec();
        *self.persist_count.write().await += 1;
        Ok(())
    }
}

// ===== MockConfigRepository =====

pub struct MockConfigRepository {
    config: RwLock<Option<ConfigRecord>>,
    save_count: RwLock<usize>,
}

impl MockConfigRepository {
    pub fn new() -> Self {
        Self {
            config: RwLock::new(None),
            save_count: RwLock::new(0),
        }
    }

    pub async fn save_count(&self) -> usize {
        *self.save_count.read().await
    }
}

#[async_trait]
impl ConfigRepository for MockConfigRepository {
    async fn load(&self) -> CoreResult<ConfigRecord> {
        Ok(self.config.read().await.clone().unwrap_or_default())
    }

    async fn save(&self, config: &ConfigRecord) -> CoreResult<()> {
        *self.config.write().await = Some(config.clone());
        *self.save_count.write().await += 1;
        Ok(())
    }
}

// ===== Factories =====

/// Proxy record without entry validation
pub fn proxy(value: &str) -> ProxyRecord {
    match ProxyRecord::parse_line(value) {
        Ok(record) => record,
        Err(reason) => unreachable!("proxy lines always parse: {reason}"),
    }
}
