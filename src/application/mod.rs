//! Application Layer
//!
//! Use cases built on the domain, and the named-operation dispatcher that
//! inbound adapters call into.

mod metrics_service;
pub mod operations;

pub use metrics_service::MetricsService;
pub use operations::{
    dispatch, list_operations, DispatchError, Operation, OperationCall, OperationResult,
};
