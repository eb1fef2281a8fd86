//! Metrics Service - Main application use case
//!
//! Orchestrates the engine: ingesting samples, answering window and summary
//! queries, and driving the simulator. This is the primary interface for the
//! inbound adapters.

use crate::domain::entities::{MetricsRecord, MetricsSummary, RawSample};
use crate::domain::errors::MetricsError;
use crate::domain::ports::MetricsStore;
use crate::domain::services::{
    AggregationService, SampleSimulator, DEFAULT_SUMMARY_WINDOW, MAX_SIMULATED_SAMPLES,
};
use crate::domain::value_objects::TimeWindow;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::sync::Arc;

/// Metrics service - main application use case.
///
/// The store is passed in explicitly; there is no process-wide instance.
pub struct MetricsService {
    store: Arc<dyn MetricsStore>,
    summary_window: usize,
    default_window: TimeWindow,
}

impl MetricsService {
    /// Create a new metrics service.
    pub fn new(
        store: Arc<dyn MetricsStore>,
        summary_window: usize,
        default_window: TimeWindow,
    ) -> Self {
        Self {
            store,
            summary_window: summary_window.max(1),
            default_window,
        }
    }

    /// Create a service with the default summary and averaging windows.
    pub fn with_defaults(store: Arc<dyn MetricsStore>) -> Self {
        Self::new(store, DEFAULT_SUMMARY_WINDOW, TimeWindow::default())
    }

    /// Ingest one raw sample.
    pub fn add_metrics(&self, sample: RawSample) -> Result<MetricsRecord, MetricsError> {
        let record = self.store.ingest(sample).map_err(|e| {
            tracing::warn!("rejected sample: {}", e);
            e
        })?;

        tracing::info!(
            snr = %record.signal_to_noise_ratio,
            quality = record.quality_score,
            "ingested sample"
        );
        Ok(record)
    }

    /// The most recently ingested record.
    pub fn latest(&self) -> Option<MetricsRecord> {
        self.store.latest()
    }

    /// Summary over the most recent `summary_window` records.
    pub fn summary(&self) -> Result<MetricsSummary, MetricsError> {
        let recent = self.store.recent(self.summary_window);
        let summary = AggregationService::summarize(&recent);

        if summary.is_err() {
            tracing::debug!("summary requested on empty store");
        }
        summary
    }

    /// Average over the trailing `window`, ending now.
    pub fn average_metrics(&self, window: TimeWindow) -> Option<MetricsRecord> {
        self.average_metrics_at(window, Utc::now())
    }

    /// Average over the trailing `window`, ending at `now`.
    pub fn average_metrics_at(
        &self,
        window: TimeWindow,
        now: DateTime<Utc>,
    ) -> Option<MetricsRecord> {
        let records = self.store.records_since(window.cutoff(now));
        let average = AggregationService::windowed_average(&records, window, now);

        tracing::debug!(
            window = %window,
            matched = records.len(),
            "computed windowed average"
        );
        average
    }

    /// Generate and ingest `num_samples` synthetic samples.
    pub fn simulate(
        &self,
        num_samples: usize,
        base_frequency: f64,
    ) -> Result<Vec<MetricsRecord>, MetricsError> {
        self.simulate_with(&mut rand::thread_rng(), num_samples, base_frequency)
    }

    /// Generate and ingest synthetic samples using the given RNG.
    ///
    /// Batches above `MAX_SIMULATED_SAMPLES` are rejected before anything is
    /// generated.
    pub fn simulate_with<R: Rng>(
        &self,
        rng: &mut R,
        num_samples: usize,
        base_frequency: f64,
    ) -> Result<Vec<MetricsRecord>, MetricsError> {
        if num_samples > MAX_SIMULATED_SAMPLES {
            tracing::warn!(num_samples, "rejected oversized simulation batch");
            return Err(MetricsError::TooManySamples {
                requested: num_samples,
                max: MAX_SIMULATED_SAMPLES,
            });
        }

        let samples = SampleSimulator::generate(rng, num_samples, base_frequency, Utc::now());
        let records = samples
            .into_iter()
            .map(|sample| self.store.ingest(sample))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(
            samples = records.len(),
            base_frequency,
            "ingested simulated samples"
        );
        Ok(records)
    }

    /// Window used when a caller does not specify one.
    pub fn default_window(&self) -> TimeWindow {
        self.default_window
    }

    /// Number of records currently retained.
    pub fn retained(&self) -> usize {
        self.store.len()
    }

    /// Maximum number of records retained.
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }
}
