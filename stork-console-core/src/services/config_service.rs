//! Config record service and settings form fields

use std::sync::Arc;

use crate::error::CoreResult;
use crate::traits::ConfigRepository;
use crate::types::{parse_positive, ConfigRecord};

/// Editable settings, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    IntervalSeconds,
    MaxWorkers,
    Region,
    ClientId,
    UserPoolId,
}

impl SettingsField {
    /// Full settings form
    pub const ALL: [Self; 5] = [
        Self::IntervalSeconds,
        Self::MaxWorkers,
        Self::Region,
        Self::ClientId,
        Self::UserPoolId,
    ];

    /// Fields asked by the quick setup wizard
    pub const RUNTIME: [Self; 2] = [Self::IntervalSeconds, Self::MaxWorkers];

    pub fn label(self) -> &'static str {
        match self {
            Self::IntervalSeconds => "Interval between validations, in seconds",
            Self::MaxWorkers => "Maximum number of workers",
            Self::Region => "Region",
            Self::ClientId => "Client ID",
            Self::UserPoolId => "User Pool ID",
        }
    }

    pub fn is_identity_provider(self) -> bool {
        matches!(self, Self::Region | Self::ClientId | Self::UserPoolId)
    }

    /// Current value, shown as the prompt default
    pub fn current(self, config: &ConfigRecord) -> String {
        match self {
            Self::IntervalSeconds => config.poll.interval_seconds.to_string(),
            Self::MaxWorkers => config.concurrency.max_workers.to_string(),
            Self::Region => config.identity_provider.region.clone(),
            Self::ClientId => config.identity_provider.client_id.clone(),
            Self::UserPoolId => config.identity_provider.user_pool_id.clone(),
        }
    }

    /// Merge one operator response into `config`.
    ///
    /// Blank input keeps the current value (`Ok(false)`). Numeric fields must
    /// be positive integers; on error `config` is left unchanged. String
    /// fields take the response verbatim.
    pub fn apply(self, config: &mut ConfigRecord, input: &str) -> CoreResult<bool> {
        if input.trim().is_empty() {
            return Ok(false);
        }

        match self {
            Self::IntervalSeconds => config.poll.interval_seconds = parse_positive(input)?,
            Self::MaxWorkers => config.concurrency.max_workers = parse_positive(input)?,
            Self::Region => config.identity_provider.region = input.to_string(),
            Self::ClientId => config.identity_provider.client_id = input.to_string(),
            Self::UserPoolId => config.identity_provider.user_pool_id = input.to_string(),
        }
        Ok(true)
    }
}

/// Loads and saves the installation's `ConfigRecord`
pub struct ConfigService {
    repository: Arc<dyn ConfigRepository>,
}

impl ConfigService {
    #[must_use]
    pub fn new(repository: Arc<dyn ConfigRepository>) -> Self {
        Self { repository }
    }

    /// Stored record, or the defaults
    pub async fn load(&self) -> CoreResult<ConfigRecord> {
        self.repository.load().await
    }

    pub async fn save(&self, config: &ConfigRecord) -> CoreResult<()> {
        self.repository.save(config).await
    }
}
