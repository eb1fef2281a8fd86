//! In-Memory Metrics Store
//!
//! Implements MetricsStore as a fixed-capacity ring buffer behind a single
//! mutex.

use crate::domain::entities::{MetricsRecord, RawSample};
use crate::domain::errors::MetricsError;
use crate::domain::ports::{MetricsStore, RecentHistory, MAX_HISTORY};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::collections::VecDeque;

/// Ring-buffer-backed metrics store.
///
/// Records are kept in insertion order. Once `capacity` is reached every
/// append evicts the oldest record, so eviction is O(1) amortized.
pub struct InMemoryMetricsStore {
    history: Mutex<VecDeque<MetricsRecord>>,
    capacity: usize,
}

impl InMemoryMetricsStore {
    /// Create a store retaining the default `MAX_HISTORY` records.
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY)
    }

    /// Create a store retaining at most `capacity` records (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            history: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Copy of every retained record, oldest first.
    pub fn snapshot(&self) -> Vec<MetricsRecord> {
        self.history.lock().iter().cloned().collect()
    }
}

impl Default for InMemoryMetricsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsStore for InMemoryMetricsStore {
    fn ingest(&self, sample: RawSample) -> Result<MetricsRecord, MetricsError> {
        // Scoring happens outside the lock; only the append/evict is guarded.
        let record = MetricsRecord::from_sample(sample, Utc::now())?;

        let mut history = self.history.lock();
        history.push_back(record.clone());
        while history.len() > self.capacity {
            history.pop_front();
        }

        Ok(record)
    }

    fn latest(&self) -> Option<MetricsRecord> {
        self.history.lock().back().cloned()
    }

    fn records_since(&self, cutoff: DateTime<Utc>) -> Vec<MetricsRecord> {
        self.history
            .lock()
            .iter()
            .filter(|r| r.timestamp >= cutoff)
            .cloned()
            .collect()
    }

    fn recent(&self, limit: usize) -> RecentHistory {
        let history = self.history.lock();
        let skip = history.len().saturating_sub(limit);
        RecentHistory {
            retained: history.len(),
            records: history.iter().skip(skip).cloned().collect(),
        }
    }

    fn len(&self) -> usize {
        self.history.lock().len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
