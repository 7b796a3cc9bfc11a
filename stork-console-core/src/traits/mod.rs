//! Storage layer abstraction trait definition

mod config_repository;
mod record_repository;

pub use config_repository::ConfigRepository;
pub use record_repository::{RecordCodec, RecordRepository};
