//! Scoring Engine
//!
//! Pure domain logic for deriving signal quality from a measurement.
//! This service has NO external dependencies - it's pure Rust.

use crate::domain::entities::MetricsRecord;
use crate::domain::value_objects::{round_to, Decibels};

/// Weight of the SNR sub-score.
pub const SNR_WEIGHT: f64 = 0.30;
/// Weight of the distortion sub-score.
pub const DISTORTION_WEIGHT: f64 = 0.20;
/// Weight of the latency sub-score.
pub const LATENCY_WEIGHT: f64 = 0.15;
/// Weight of the error-rate sub-score.
pub const ERROR_RATE_WEIGHT: f64 = 0.15;
/// Weight of the throughput sub-score.
pub const THROUGHPUT_WEIGHT: f64 = 0.10;
/// Weight of the amplitude sub-score.
pub const AMPLITUDE_WEIGHT: f64 = 0.10;

/// All sub-score weights, in summation order.
pub const WEIGHTS: [f64; 6] = [
    SNR_WEIGHT,
    DISTORTION_WEIGHT,
    LATENCY_WEIGHT,
    ERROR_RATE_WEIGHT,
    THROUGHPUT_WEIGHT,
    AMPLITUDE_WEIGHT,
];

/// Ceiling of every sub-score.
const MAX_SUB_SCORE: f64 = 100.0;

/// Per-component scores, each on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityBreakdown {
    pub snr: f64,
    pub distortion: f64,
    pub latency: f64,
    pub error_rate: f64,
    pub throughput: f64,
    pub amplitude: f64,
}

impl QualityBreakdown {
    /// Weighted sum of the sub-scores, unrounded.
    ///
    /// No clamp is applied to the total.
    pub fn weighted_total(&self) -> f64 {
        self.snr * SNR_WEIGHT
            + self.distortion * DISTORTION_WEIGHT
            + self.latency * LATENCY_WEIGHT
            + self.error_rate * ERROR_RATE_WEIGHT
            + self.throughput * THROUGHPUT_WEIGHT
            + self.amplitude * AMPLITUDE_WEIGHT
    }
}

/// Scoring engine for channel measurements.
///
/// The composite quality score combines:
/// 1. SNR, mapping -20 dB..20 dB onto 0..100 (30%)
/// 2. Distortion, lower is better (20%)
/// 3. Latency, lower is better (15%)
/// 4. Error rate, lower is better (15%)
/// 5. Throughput, higher is better (10%)
/// 6. Amplitude magnitude, higher is better up to 2.0 (10%)
///
/// Higher scores are better.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Signal-to-noise ratio in decibels.
    ///
    /// A zero noise level yields positive infinity. The sign of
    /// `signal_strength` is not checked: zero gives negative infinity and a
    /// negative ratio gives NaN.
    pub fn compute_snr(signal_strength: f64, noise_level: f64) -> Decibels {
        if noise_level == 0.0 {
            return Decibels::INFINITY;
        }
        Decibels::new(20.0 * (signal_strength / noise_level).log10())
    }

    /// Composite quality score on a 0-100 scale, rounded to 2 decimals.
    pub fn compute_quality_score(record: &MetricsRecord) -> f64 {
        round_to(Self::breakdown(record).weighted_total(), 2)
    }

    /// Individual sub-scores for a record.
    pub fn breakdown(record: &MetricsRecord) -> QualityBreakdown {
        QualityBreakdown {
            snr: ((record.signal_to_noise_ratio.as_f64() + 20.0) * 2.5)
                .max(0.0)
                .min(MAX_SUB_SCORE),
            distortion: (MAX_SUB_SCORE - record.distortion * 100.0).max(0.0),
            latency: (MAX_SUB_SCORE - record.latency * 10.0).max(0.0),
            error_rate: (MAX_SUB_SCORE - record.error_rate * 1000.0).max(0.0),
            throughput: (record.throughput * 10.0).min(MAX_SUB_SCORE),
            amplitude: (record.amplitude.abs() * 50.0).min(MAX_SUB_SCORE),
        }
    }
}
