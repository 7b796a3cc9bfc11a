//! Config persistence abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::ConfigRecord;

/// Storage for the single `ConfigRecord` of an installation
#[async_trait]
pub trait ConfigRepository: Send + Sync {
    /// Load the stored record, or the defaults when it is absent or unreadable
    async fn load(&self) -> CoreResult<ConfigRecord>;

    /// Overwrite the stored record in full
    async fn save(&self, config: &ConfigRecord) -> CoreResult<()>;
}
