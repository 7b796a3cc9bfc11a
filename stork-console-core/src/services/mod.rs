//! 业务逻辑服务层

mod account_service;
mod config_service;
mod proxy_service;
mod record_service;

pub use account_service::AccountService;
pub use config_service::{ConfigService, SettingsField};
pub use proxy_service::ProxyService;
pub use record_service::{
    is_affirmative, parse_display_index, remove_at, RecordService, AFFIRMATIVE_TOKEN,
};

use std::sync::Arc;

use crate::bootstrap::InstallLayout;
use crate::error::CoreResult;
use crate::traits::{ConfigRepository, RecordRepository};
use crate::types::{AccountRecord, ProxyRecord};

/// 服务上下文 - 持有所有存储依赖
///
/// 前端创建此上下文并注入存储实现；编辑会话按需打开各个 store。
#[derive(Clone)]
pub struct ServiceContext {
    /// 账户存储
    pub account_repository: Arc<dyn RecordRepository<AccountRecord>>,
    /// 代理存储
    pub proxy_repository: Arc<dyn RecordRepository<ProxyRecord>>,
    /// 配置存储
    pub config_repository: Arc<dyn ConfigRepository>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        account_repository: Arc<dyn RecordRepository<AccountRecord>>,
        proxy_repository: Arc<dyn RecordRepository<ProxyRecord>>,
        config_repository: Arc<dyn ConfigRepository>,
    ) -> Self {
        Self {
            account_repository,
            proxy_repository,
            config_repository,
        }
    }

    /// File-backed stores of one installation
    #[must_use]
    pub fn from_layout(layout: &InstallLayout) -> Self {
        Self::new(
            Arc::new(layout.account_repository()),
            Arc::new(layout.proxy_repository()),
            Arc::new(layout.config_repository()),
        )
    }

    /// Load the account store
    pub async fn open_accounts(&self) -> CoreResult<AccountService> {
        AccountService::open(Arc::clone(&self.account_repository)).await
    }

    /// Load the proxy store
    pub async fn open_proxies(&self) -> CoreResult<ProxyService> {
        ProxyService::open(Arc::clone(&self.proxy_repository)).await
    }

    pub fn config_service(&self) -> ConfigService {
        ConfigService::new(Arc::clone(&self.config_repository))
    }
}
