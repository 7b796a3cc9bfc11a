//! Line-oriented record persistence abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;

/// Conversion between a record and one line of its backing file
pub trait RecordCodec: Sized + Clone + Send + Sync {
    /// Parse a single non-blank line.
    ///
    /// Returns the reason on failure; the store attaches the line number.
    fn parse_line(line: &str) -> Result<Self, String>;

    /// Serialize the record to a single line (no trailing newline)
    fn format_line(&self) -> String;

    /// Text shown in numbered list views
    fn display_label(&self) -> &str;
}

/// Ordered, duplicate-tolerant record store
///
/// Platform implementation:
/// - Files: `LineFileRepository` (one record per line, full rewrite)
/// - Tests: `MockRecordRepository` (in memory)
#[async_trait]
pub trait RecordRepository<T: RecordCodec>: Send + Sync {
    /// Load every record in stored order.
    ///
    /// A missing backing file yields an empty sequence.
    async fn load(&self) -> CoreResult<Vec<T>>;

    /// Replace the stored sequence with `records`
    ///
    /// # Arguments
    /// * `records` - The complete new contents of the store
    async fn persist(&self, records: &[T]) -> CoreResult<()>;
}
