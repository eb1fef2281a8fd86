//! Sample Simulator
//!
//! Generates synthetic raw samples for demos and load testing. The samples
//! are ordinary `RawSample`s and go through the normal ingestion path.

use crate::domain::entities::RawSample;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use std::f64::consts::PI;
use std::ops::RangeInclusive;

/// Largest batch a single simulation may generate. Matches the default
/// history capacity; anything beyond it would be evicted immediately.
pub const MAX_SIMULATED_SAMPLES: usize = 1000;

/// Spacing between consecutive simulated timestamps.
pub const SAMPLE_SPACING_SECS: i64 = 10;

/// Half-width of the frequency band around the base frequency.
const FREQUENCY_SPREAD: f64 = 50.0;

const SIGNAL_STRENGTH: RangeInclusive<f64> = 0.5..=2.0;
const NOISE_LEVEL: RangeInclusive<f64> = 0.01..=0.2;
const AMPLITUDE: RangeInclusive<f64> = 0.1..=2.0;
const DISTORTION: RangeInclusive<f64> = 0.0..=0.1;
const LATENCY: RangeInclusive<f64> = 0.001..=0.1;
const THROUGHPUT: RangeInclusive<f64> = 0.5..=2.0;
const ERROR_RATE: RangeInclusive<f64> = 0.0..=0.05;

pub struct SampleSimulator;

impl SampleSimulator {
    /// Generate `num_samples` samples around `base_frequency`.
    ///
    /// Sample `i` is stamped `10 * i` seconds before `now`, so index 0 is the
    /// newest and the batch spreads backwards in time.
    pub fn generate<R: Rng>(
        rng: &mut R,
        num_samples: usize,
        base_frequency: f64,
        now: DateTime<Utc>,
    ) -> Vec<RawSample> {
        (0..num_samples)
            .map(|i| Self::sample(&mut *rng, base_frequency, Self::timestamp_for(i, now)))
            .collect()
    }

    fn sample<R: Rng>(
        rng: &mut R,
        base_frequency: f64,
        timestamp: DateTime<Utc>,
    ) -> RawSample {
        RawSample {
            timestamp: Some(timestamp),
            signal_strength: rng.gen_range(SIGNAL_STRENGTH),
            noise_level: rng.gen_range(NOISE_LEVEL),
            frequency: base_frequency
                + rng.gen_range(-FREQUENCY_SPREAD..=FREQUENCY_SPREAD),
            amplitude: rng.gen_range(AMPLITUDE),
            phase: rng.gen_range(0.0..=2.0 * PI),
            distortion: rng.gen_range(DISTORTION),
            latency: rng.gen_range(LATENCY),
            throughput: rng.gen_range(THROUGHPUT),
            error_rate: rng.gen_range(ERROR_RATE),
        }
    }

    fn timestamp_for(index: usize, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::seconds(SAMPLE_SPACING_SECS * index as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_generate_count() {
        let samples = SampleSimulator::generate(&mut seeded(), 5, 1000.0, Utc::now());
        assert_eq!(samples.len(), 5);
    }

    #[test]
    fn test_generate_zero_samples() {
        assert!(SampleSimulator::generate(&mut seeded(), 0, 1000.0, Utc::now()).is_empty());
    }

    #[test]
    fn test_generate_timestamps_spaced_backwards() {
        let now = Utc::now();
        let samples = SampleSimulator::generate(&mut seeded(), 5, 1000.0, now);

        for (i, sample) in samples.iter().enumerate() {
            let expected = now - Duration::seconds(10 * i as i64);
            assert_eq!(sample.timestamp, Some(expected));
        }
        for pair in samples.windows(2) {
            assert!(pair[0].timestamp > pair[1].timestamp);
        }
    }

    #[test]
    fn test_generate_fields_within_ranges() {
        let samples = SampleSimulator::generate(&mut seeded(), 200, 2400.0, Utc::now());

        for s in &samples {
            assert!(SIGNAL_STRENGTH.contains(&s.signal_strength));
            assert!(NOISE_LEVEL.contains(&s.noise_level));
            assert!((2350.0..=2450.0).contains(&s.frequency));
            assert!(AMPLITUDE.contains(&s.amplitude));
            assert!((0.0..=2.0 * PI).contains(&s.phase));
            assert!(DISTORTION.contains(&s.distortion));
            assert!(LATENCY.contains(&s.latency));
            assert!(THROUGHPUT.contains(&s.throughput));
            assert!(ERROR_RATE.contains(&s.error_rate));
        }
    }

    #[test]
    fn test_generate_is_reproducible_with_seed() {
        let now = Utc::now();
        let a = SampleSimulator::generate(&mut seeded(), 10, 1000.0, now);
        let b = SampleSimulator::generate(&mut seeded(), 10, 1000.0, now);
        assert_eq!(a, b);
    }

    #[test]
    fn test_generated_samples_are_valid() {
        let samples = SampleSimulator::generate(&mut seeded(), 50, 1000.0, Utc::now());
        assert!(samples.iter().all(|s| s.validate().is_ok()));
    }
}
