//! 类型定义模块

mod account;
mod config;
mod proxy;

pub use account::AccountRecord;
pub use config::{
    parse_positive, ConcurrencyConfig, ConfigRecord, IdentityProviderConfig, PollConfig,
};
pub use proxy::{ProxyEntryPolicy, ProxyKind, ProxyRecord};
