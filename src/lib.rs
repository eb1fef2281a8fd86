//! signal-metrics Library
//!
//! This module exposes the metrics engine components for use in integration
//! tests and as a library.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use adapters::outbound::InMemoryMetricsStore;
pub use application::MetricsService;
pub use config::{load_config, Config};
pub use domain::entities::{MetricsRecord, MetricsSummary, RawSample};
pub use domain::errors::MetricsError;
pub use domain::ports::MetricsStore;
pub use domain::services::{AggregationService, SampleSimulator, ScoringEngine};
pub use domain::value_objects::{Decibels, TimeWindow};
