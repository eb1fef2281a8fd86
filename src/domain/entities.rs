//! Domain Entities - Core business objects
//!
//! These entities represent one channel measurement as it flows through the
//! engine: the raw sample a caller submits, the scored record the store
//! retains, and the summary computed over recent history.

use crate::domain::errors::MetricsError;
use crate::domain::services::ScoringEngine;
use crate::domain::value_objects::Decibels;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A raw measurement sample, before any derived fields are computed.
///
/// `timestamp` is optional; ingestion stamps the sample with the current time
/// when it is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    pub timestamp: Option<DateTime<Utc>>,
    pub signal_strength: f64,
    pub noise_level: f64,
    /// Carrier frequency in Hz
    pub frequency: f64,
    pub amplitude: f64,
    /// Phase in radians
    pub phase: f64,
    /// Distortion level, conventionally in [0, 1]
    pub distortion: f64,
    /// Latency in seconds
    pub latency: f64,
    pub throughput: f64,
    /// Error rate, conventionally in [0, 1]
    pub error_rate: f64,
}

impl RawSample {
    /// Reject samples carrying NaN or infinite raw values.
    ///
    /// Range is never checked: out-of-domain but finite values are accepted.
    pub fn validate(&self) -> Result<(), MetricsError> {
        let fields = [
            ("signal_strength", self.signal_strength),
            ("noise_level", self.noise_level),
            ("frequency", self.frequency),
            ("amplitude", self.amplitude),
            ("phase", self.phase),
            ("distortion", self.distortion),
            ("latency", self.latency),
            ("throughput", self.throughput),
            ("error_rate", self.error_rate),
        ];

        match fields.iter().find(|(_, value)| !value.is_finite()) {
            Some((field, _)) => Err(MetricsError::InvalidSample { field: *field }),
            None => Ok(()),
        }
    }
}

/// One scored measurement retained by the metrics store.
///
/// `signal_to_noise_ratio` and `quality_score` are derived once, when the
/// record is built from a raw sample, and never recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub timestamp: DateTime<Utc>,
    pub signal_strength: f64,
    pub noise_level: f64,
    pub signal_to_noise_ratio: Decibels,
    pub frequency: f64,
    pub amplitude: f64,
    pub phase: f64,
    pub distortion: f64,
    pub latency: f64,
    pub throughput: f64,
    pub error_rate: f64,
    pub quality_score: f64,
}

impl MetricsRecord {
    /// Build a scored record from a validated raw sample.
    ///
    /// `now` is used when the sample carries no timestamp of its own.
    pub fn from_sample(sample: RawSample, now: DateTime<Utc>) -> Result<Self, MetricsError> {
        sample.validate()?;

        let mut record = Self {
            timestamp: sample.timestamp.unwrap_or(now),
            signal_strength: sample.signal_strength,
            noise_level: sample.noise_level,
            signal_to_noise_ratio: ScoringEngine::compute_snr(
                sample.signal_strength,
                sample.noise_level,
            ),
            frequency: sample.frequency,
            amplitude: sample.amplitude,
            phase: sample.phase,
            distortion: sample.distortion,
            latency: sample.latency,
            throughput: sample.throughput,
            error_rate: sample.error_rate,
            quality_score: 0.0,
        };
        record.quality_score = ScoringEngine::compute_quality_score(&record);

        Ok(record)
    }
}

/// Aggregate view over the most recent slice of retained history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    /// Records currently retained (never more than the store capacity)
    pub total_measurements: usize,
    /// Records inside the recent window the statistics are computed over
    pub recent_measurements: usize,
    pub current_quality_score: f64,
    pub average_quality_score: f64,
    pub min_quality_score: f64,
    pub max_quality_score: f64,
    pub average_snr: Decibels,
    pub average_latency: f64,
    pub average_throughput: f64,
    pub average_error_rate: f64,
    pub last_updated: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_sample() -> RawSample {
        RawSample {
            timestamp: None,
            signal_strength: 1.5,
            noise_level: 0.1,
            frequency: 1000.0,
            amplitude: 1.2,
            phase: 0.5,
            distortion: 0.02,
            latency: 0.05,
            throughput: 1.8,
            error_rate: 0.01,
        }
    }

    // ===== RawSample::validate Tests =====

    #[test]
    fn test_validate_accepts_finite_sample() {
        assert!(reference_sample().validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_out_of_range_values() {
        let sample = RawSample {
            distortion: 3.0,
            error_rate: -1.0,
            signal_strength: -2.0,
            ..reference_sample()
        };
        assert!(sample.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nan() {
        let sample = RawSample {
            latency: f64::NAN,
            ..reference_sample()
        };
        assert_eq!(
            sample.validate(),
            Err(MetricsError::InvalidSample { field: "latency" })
        );
    }

    #[test]
    fn test_validate_rejects_infinity() {
        let sample = RawSample {
            throughput: f64::INFINITY,
            ..reference_sample()
        };
        assert_eq!(
            sample.validate(),
            Err(MetricsError::InvalidSample { field: "throughput" })
        );
    }

    // ===== MetricsRecord::from_sample Tests =====

    #[test]
    fn test_from_sample_uses_now_when_timestamp_missing() {
        let now = Utc::now();
        let record = MetricsRecord::from_sample(reference_sample(), now).unwrap();
        assert_eq!(record.timestamp, now);
    }

    #[test]
    fn test_from_sample_keeps_supplied_timestamp() {
        let now = Utc::now();
        let earlier = now - chrono::Duration::seconds(30);
        let sample = RawSample {
            timestamp: Some(earlier),
            ..reference_sample()
        };
        let record = MetricsRecord::from_sample(sample, now).unwrap();
        assert_eq!(record.timestamp, earlier);
    }

    #[test]
    fn test_from_sample_derives_snr_and_score() {
        let record = MetricsRecord::from_sample(reference_sample(), Utc::now()).unwrap();
        assert!((record.signal_to_noise_ratio.as_f64() - 23.5218).abs() < 1e-3);
        assert!((record.quality_score - 85.825).abs() <= 0.005 + 1e-9);
    }

    #[test]
    fn test_from_sample_copies_raw_fields() {
        let record = MetricsRecord::from_sample(reference_sample(), Utc::now()).unwrap();
        assert_eq!(record.signal_strength, 1.5);
        assert_eq!(record.noise_level, 0.1);
        assert_eq!(record.frequency, 1000.0);
        assert_eq!(record.amplitude, 1.2);
        assert_eq!(record.phase, 0.5);
        assert_eq!(record.distortion, 0.02);
        assert_eq!(record.latency, 0.05);
        assert_eq!(record.throughput, 1.8);
        assert_eq!(record.error_rate, 0.01);
    }

    #[test]
    fn test_from_sample_rejects_invalid() {
        let sample = RawSample {
            noise_level: f64::NAN,
            ..reference_sample()
        };
        assert!(matches!(
            MetricsRecord::from_sample(sample, Utc::now()),
            Err(MetricsError::InvalidSample { field: "noise_level" })
        ));
    }

    #[test]
    fn test_record_serializes_infinite_snr_as_tag() {
        let sample = RawSample {
            noise_level: 0.0,
            ..reference_sample()
        };
        let record = MetricsRecord::from_sample(sample, Utc::now()).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["signal_to_noise_ratio"], "inf");
    }
}
