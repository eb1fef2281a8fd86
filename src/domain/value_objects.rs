//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A signal-to-noise ratio in decibels.
///
/// The ratio is infinite when the noise level is zero, and negative infinity
/// when the signal strength is zero. JSON has no representation for either,
/// so non-finite values are written as the tagged strings `"inf"`, `"-inf"`
/// and `"nan"` instead of silently becoming `null`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Decibels(f64);

impl Decibels {
    pub const INFINITY: Self = Self(f64::INFINITY);

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Round to `places` decimal places. Non-finite values pass through.
    pub fn rounded(&self, places: u32) -> Self {
        Self(round_to(self.0, places))
    }
}

impl From<f64> for Decibels {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Decibels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match special_tag(self.0) {
            Some(tag) => write!(f, "{} dB", tag),
            None => write!(f, "{:.2} dB", self.0),
        }
    }
}

fn special_tag(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("nan")
    } else if value == f64::INFINITY {
        Some("inf")
    } else if value == f64::NEG_INFINITY {
        Some("-inf")
    } else {
        None
    }
}

impl Serialize for Decibels {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match special_tag(self.0) {
            Some(tag) => serializer.serialize_str(tag),
            None => serializer.serialize_f64(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for Decibels {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Number(f64),
            Tagged(String),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Number(v) => Ok(Self(v)),
            Wire::Tagged(tag) => match tag.as_str() {
                "inf" | "+inf" | "infinity" => Ok(Self(f64::INFINITY)),
                "-inf" | "-infinity" => Ok(Self(f64::NEG_INFINITY)),
                "nan" => Ok(Self(f64::NAN)),
                other => Err(serde::de::Error::custom(format!(
                    "invalid decibel value: {}",
                    other
                ))),
            },
        }
    }
}

/// A trailing time interval in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    minutes: u32,
}

impl TimeWindow {
    pub fn minutes(minutes: u32) -> Self {
        Self { minutes }
    }

    pub fn as_minutes(&self) -> u32 {
        self.minutes
    }

    pub fn duration(&self) -> Duration {
        Duration::minutes(i64::from(self.minutes))
    }

    /// Earliest timestamp still inside the window ending at `now`.
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - self.duration()
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::minutes(5)
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.minutes)
    }
}

/// Round to `places` decimal places.
///
/// Rounds the exact binary value, so `83.735` (stored just below the tie)
/// becomes `83.73`. Scaling by a power of ten first would round it up.
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", places as usize, value)
        .parse()
        .unwrap_or(value)
}
