//! 运行配置类型定义
//!
//! JSON 键名与 runner 读取的格式保持一致：`cognito` / `stork` / `threads`。

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{CoreError, CoreResult};

const DEFAULT_REGION: &str = "ap-northeast-1";
const DEFAULT_CLIENT_ID: &str = "5msns4n49hmg3dftp2tp1t2iuh";
const DEFAULT_USER_POOL_ID: &str = "ap-northeast-1_M22I44OpC";

const DEFAULT_INTERVAL_SECONDS: NonZeroU32 = match NonZeroU32::new(60) {
    Some(n) => n,
    None => NonZeroU32::MIN,
};
const DEFAULT_MAX_WORKERS: NonZeroU32 = match NonZeroU32::new(10) {
    Some(n) => n,
    None => NonZeroU32::MIN,
};

/// Settings consumed by the runner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigRecord {
    /// Identity provider parameters
    #[serde(rename = "cognito")]
    pub identity_provider: IdentityProviderConfig,
    /// Validation polling
    #[serde(rename = "stork")]
    pub poll: PollConfig,
    /// Worker pool size
    #[serde(rename = "threads")]
    pub concurrency: ConcurrencyConfig,
    /// Keys the console does not edit, written back unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConfigRecord {
    /// Put the edited values back to their defaults, keeping unknown keys
    pub fn reset_known_fields(&mut self) {
        let defaults = Self::default();
        self.identity_provider.region = defaults.identity_provider.region;
        self.identity_provider.client_id = defaults.identity_provider.client_id;
        self.identity_provider.user_pool_id = defaults.identity_provider.user_pool_id;
        self.poll.interval_seconds = defaults.poll.interval_seconds;
        self.concurrency.max_workers = defaults.concurrency.max_workers;
    }
}

/// 身份提供方参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IdentityProviderConfig {
    pub region: String,
    pub client_id: String,
    pub user_pool_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for IdentityProviderConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            user_pool_id: DEFAULT_USER_POOL_ID.to_string(),
            extra: Map::new(),
        }
    }
}

/// 轮询间隔
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PollConfig {
    pub interval_seconds: NonZeroU32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_seconds: DEFAULT_INTERVAL_SECONDS,
            extra: Map::new(),
        }
    }
}

/// 并发数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConcurrencyConfig {
    pub max_workers: NonZeroU32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for ConcurrencyConfig {
    fn default() -> Self {
        Self {
            max_workers: DEFAULT_MAX_WORKERS,
            extra: Map::new(),
        }
    }
}

/// Parse operator input as a positive integer.
pub fn parse_positive(input: &str) -> CoreResult<NonZeroU32> {
    input
        .trim()
        .parse::<NonZeroU32>()
        .map_err(|_| CoreError::Validation(format!("{:?} is not a positive integer", input.trim())))
}
