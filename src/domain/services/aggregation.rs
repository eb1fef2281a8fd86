//! Aggregation Service
//!
//! Pure reductions over retained history: trailing-window averages and the
//! recent-history summary.

use crate::domain::entities::{MetricsRecord, MetricsSummary};
use crate::domain::errors::MetricsError;
use crate::domain::ports::RecentHistory;
use crate::domain::value_objects::{Decibels, TimeWindow};
use chrono::{DateTime, Utc};

/// Default number of most recent records the summary is computed over.
pub const DEFAULT_SUMMARY_WINDOW: usize = 100;

pub struct AggregationService;

impl AggregationService {
    /// Average every field of the records inside `window`, ending at `now`.
    ///
    /// Returns `None` when no record falls inside the window. The averaged
    /// record is stamped with `now`, not with the mean of the input
    /// timestamps, and carries the mean of the stored derived fields rather
    /// than re-scoring the averaged raw values.
    pub fn windowed_average(
        records: &[MetricsRecord],
        window: TimeWindow,
        now: DateTime<Utc>,
    ) -> Option<MetricsRecord> {
        let cutoff = window.cutoff(now);
        let in_window: Vec<&MetricsRecord> =
            records.iter().filter(|r| r.timestamp >= cutoff).collect();

        Self::average(&in_window, now)
    }

    /// Field-wise arithmetic mean of `records`, stamped with `timestamp`.
    pub fn average(records: &[&MetricsRecord], timestamp: DateTime<Utc>) -> Option<MetricsRecord> {
        if records.is_empty() {
            return None;
        }

        let avg = |field: fn(&MetricsRecord) -> f64| mean(records.iter().map(|r| field(r)));

        Some(MetricsRecord {
            timestamp,
            signal_strength: avg(|r| r.signal_strength),
            noise_level: avg(|r| r.noise_level),
            signal_to_noise_ratio: Decibels::new(avg(|r| r.signal_to_noise_ratio.as_f64())),
            frequency: avg(|r| r.frequency),
            amplitude: avg(|r| r.amplitude),
            phase: avg(|r| r.phase),
            distortion: avg(|r| r.distortion),
            latency: avg(|r| r.latency),
            throughput: avg(|r| r.throughput),
            error_rate: avg(|r| r.error_rate),
            quality_score: avg(|r| r.quality_score),
        })
    }

    /// Summarize the recent slice of history.
    ///
    /// `history.records` is expected to hold the most recent records in
    /// insertion order, already truncated to the summary window.
    pub fn summarize(history: &RecentHistory) -> Result<MetricsSummary, MetricsError> {
        let latest = history.records.last().ok_or(MetricsError::NoData)?;
        let scores = || history.records.iter().map(|r| r.quality_score);

        Ok(MetricsSummary {
            total_measurements: history.retained,
            recent_measurements: history.records.len(),
            current_quality_score: latest.quality_score,
            average_quality_score: mean(scores()),
            min_quality_score: scores().fold(f64::INFINITY, f64::min),
            max_quality_score: scores().fold(f64::NEG_INFINITY, f64::max),
            average_snr: Decibels::new(mean(
                history
                    .records
                    .iter()
                    .map(|r| r.signal_to_noise_ratio.as_f64()),
            )),
            average_latency: mean(history.records.iter().map(|r| r.latency)),
            average_throughput: mean(history.records.iter().map(|r| r.throughput)),
            average_error_rate: mean(history.records.iter().map(|r| r.error_rate)),
            last_updated: latest.timestamp,
        })
    }
}

/// Arithmetic mean; NaN for an empty iterator.
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    sum / count as f64
}
