//! Stork Console Core Library
//!
//! Provides the persistence and validation logic behind the operator console:
//! - Account store (`username|password` lines)
//! - Proxy store (proxy URIs with scheme validation)
//! - Config record (JSON settings consumed by the runner)
//! - Installation bootstrap
//!
//! Storage is abstracted through traits so the editor session can be driven
//! against in-memory repositories in tests and flat files in production.

pub mod bootstrap;
pub mod error;
pub mod services;
pub mod storage;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use bootstrap::InstallLayout;
pub use error::{CoreError, CoreResult};
pub use services::{AccountService, ConfigService, ProxyService, ServiceContext};
pub use traits::{ConfigRepository, RecordCodec, RecordRepository};
