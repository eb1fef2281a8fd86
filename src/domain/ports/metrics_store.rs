//! Metrics Store Port
//!
//! Defines the interface for retaining scored measurements.

use crate::domain::entities::{MetricsRecord, RawSample};
use crate::domain::errors::MetricsError;
use chrono::{DateTime, Utc};

/// Default number of records a store retains.
pub const MAX_HISTORY: usize = 1000;

/// The most recent slice of history, read atomically with the retained count.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentHistory {
    /// Records currently retained by the store
    pub retained: usize,
    /// Most recent records, oldest first
    pub records: Vec<MetricsRecord>,
}

/// Bounded, insertion-ordered store of scored measurements.
///
/// This is an outbound port. Implementations must guard ingestion and every
/// read with the same lock, so readers never observe a half-applied append
/// or eviction.
pub trait MetricsStore: Send + Sync {
    /// Score a raw sample, append it, and evict the oldest records beyond
    /// capacity. Returns the stored record.
    fn ingest(&self, sample: RawSample) -> Result<MetricsRecord, MetricsError>;

    /// The most recently ingested record.
    fn latest(&self) -> Option<MetricsRecord>;

    /// Records with `timestamp >= cutoff`, in insertion order.
    fn records_since(&self, cutoff: DateTime<Utc>) -> Vec<MetricsRecord>;

    /// The last `min(len, limit)` records together with the retained count.
    fn recent(&self, limit: usize) -> RecentHistory;

    /// Number of records currently retained.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of records retained.
    fn capacity(&self) -> usize;
}
