//! Domain Layer
//!
//! Entities, value objects, pure services and ports of the metrics engine.
//! Nothing in here performs I/O or logging.

pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{MetricsRecord, MetricsSummary, RawSample};
pub use errors::MetricsError;
pub use value_objects::{Decibels, TimeWindow};
