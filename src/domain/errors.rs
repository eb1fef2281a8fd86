//! Domain Errors
//!
//! Failure conditions raised by the metrics engine itself.

/// Errors returned by ingestion and aggregation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetricsError {
    /// The store (or the requested window) holds no records.
    #[error("no metrics data available")]
    NoData,
    /// A raw field was NaN or infinite.
    #[error("invalid sample: {field} must be a finite number")]
    InvalidSample { field: &'static str },
    /// A simulation batch larger than the supported maximum.
    #[error("num_samples must be at most {max}, got {requested}")]
    TooManySamples { requested: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(MetricsError::NoData.to_string(), "no metrics data available");
        assert_eq!(
            MetricsError::InvalidSample { field: "phase" }.to_string(),
            "invalid sample: phase must be a finite number"
        );
        assert_eq!(
            MetricsError::TooManySamples {
                requested: 5000,
                max: 1000
            }
            .to_string(),
            "num_samples must be at most 1000, got 5000"
        );
    }
}
