mod aggregation;
mod scoring;
mod simulator;

pub use aggregation::{AggregationService, DEFAULT_SUMMARY_WINDOW};
pub use scoring::{QualityBreakdown, ScoringEngine, WEIGHTS};
pub use simulator::{SampleSimulator, MAX_SIMULATED_SAMPLES, SAMPLE_SPACING_SECS};
