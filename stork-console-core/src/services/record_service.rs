//! Generic record store service
//!
//! Holds the in-memory sequence of one open store. Every mutation is written
//! through to the repository before it returns; if the write fails the
//! in-memory sequence is restored so memory and file never disagree.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::traits::{RecordCodec, RecordRepository};

/// Answer that confirms a destructive action (compared trimmed and lowercased)
pub const AFFIRMATIVE_TOKEN: &str = "yes";

/// Whether `answer` confirms a destructive action.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().to_lowercase() == AFFIRMATIVE_TOKEN
}

/// Parse a 1-based display index typed by the operator.
pub fn parse_display_index(input: &str) -> CoreResult<usize> {
    input
        .trim()
        .parse::<usize>()
        .map_err(|_| CoreError::InvalidIndex(input.trim().to_string()))
}

/// Remove the entry at a 1-based `display_index`.
///
/// Out-of-range indices leave `records` untouched.
pub fn remove_at<T>(records: &mut Vec<T>, display_index: usize) -> CoreResult<T> {
    if display_index == 0 || display_index > records.len() {
        return Err(CoreError::IndexOutOfRange {
            index: display_index,
            len: records.len(),
        });
    }
    Ok(records.remove(display_index - 1))
}

/// One open record store
pub struct RecordService<T: RecordCodec + 'static> {
    repository: Arc<dyn RecordRepository<T>>,
    records: Vec<T>,
}

impl<T: RecordCodec + 'static> RecordService<T> {
    /// Load the store from its repository
    pub async fn open(repository: Arc<dyn RecordRepository<T>>) -> CoreResult<Self> {
        let records = repository.load().await?;
        Ok(Self {
            repository,
            records,
        })
    }

    // ===== Queries =====

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Numbered list lines (`1. label`)
    pub fn numbered_labels(&self) -> Vec<String> {
        self.records
            .iter()
            .enumerate()
            .map(|(idx, record)| format!("{}. {}", idx + 1, record.display_label()))
            .collect()
    }

    // ===== Mutations =====

    /// Append a record and persist
    pub async fn add(&mut self, record: T) -> CoreResult<&T> {
        self.records.push(record);
        if let Err(e) = self.repository.persist(&self.records).await {
            self.records.pop();
            return Err(e);
        }
        Ok(&self.records[self.records.len() - 1])
    }

    /// Remove the record at a 1-based index and persist
    pub async fn remove(&mut self, display_index: usize) -> CoreResult<T> {
        let removed = remove_at(&mut self.records, display_index)?;
        if let Err(e) = self.repository.persist(&self.records).await {
            self.records.insert(display_index - 1, removed);
            return Err(e);
        }
        Ok(removed)
    }

    /// Remove by operator-typed index text
    pub async fn remove_by_input(&mut self, input: &str) -> CoreResult<T> {
        let display_index = parse_display_index(input)?;
        self.remove(display_index).await
    }

    /// Empty the store and persist; returns how many records were dropped
    pub async fn clear(&mut self) -> CoreResult<usize> {
        let previous = std::mem::take(&mut self.records);
        if let Err(e) = self.repository.persist(&self.records).await {
            self.records = previous;
            return Err(e);
        }
        Ok(previous.len())
    }

    /// Clear only when `answer` is the affirmative token.
    ///
    /// Returns `None` (and does nothing) for any other answer.
    pub async fn clear_if_confirmed(&mut self, answer: &str) -> CoreResult<Option<usize>> {
        if !is_affirmative(answer) {
            log::debug!("Clear not confirmed ({answer:?})");
            return Ok(None);
        }
        self.clear().await.map(Some)
    }
}
