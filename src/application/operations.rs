//! Operation Dispatcher
//!
//! Maps named operations with JSON argument maps onto `MetricsService`
//! calls. Arguments are parsed into typed structs with documented defaults
//! before anything reaches the engine.

use crate::application::MetricsService;
use crate::domain::entities::{MetricsRecord, MetricsSummary, RawSample};
use crate::domain::errors::MetricsError;
use crate::domain::services::MAX_SIMULATED_SAMPLES;
use crate::domain::value_objects::{round_to, Decibels, TimeWindow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

/// A named operation request as it arrives at the boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct OperationCall {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

/// Arguments for `add_metrics`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddMetricsArgs {
    pub signal_strength: f64,
    pub noise_level: f64,
    pub frequency: f64,
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    #[serde(default)]
    pub phase: f64,
    #[serde(default)]
    pub distortion: f64,
    #[serde(default)]
    pub latency: f64,
    #[serde(default)]
    pub throughput: f64,
    #[serde(default)]
    pub error_rate: f64,
    /// When the sample was taken; ingestion time when absent
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

fn default_amplitude() -> f64 {
    1.0
}

impl From<AddMetricsArgs> for RawSample {
    fn from(args: AddMetricsArgs) -> Self {
        RawSample {
            timestamp: args.timestamp,
            signal_strength: args.signal_strength,
            noise_level: args.noise_level,
            frequency: args.frequency,
            amplitude: args.amplitude,
            phase: args.phase,
            distortion: args.distortion,
            latency: args.latency,
            throughput: args.throughput,
            error_rate: args.error_rate,
        }
    }
}

/// Arguments for `get_average_metrics`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AverageArgs {
    /// Falls back to the service's default window when absent
    #[serde(default)]
    pub time_window_minutes: Option<u32>,
}

/// Arguments for `simulate_data`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimulateArgs {
    /// At most `MAX_SIMULATED_SAMPLES`
    #[serde(
        default = "default_num_samples",
        deserialize_with = "bounded_num_samples"
    )]
    pub num_samples: usize,
    #[serde(default = "default_base_frequency")]
    pub base_frequency: f64,
}

fn default_num_samples() -> usize {
    10
}

fn bounded_num_samples<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    let num_samples = usize::deserialize(deserializer)?;
    if num_samples > MAX_SIMULATED_SAMPLES {
        return Err(serde::de::Error::custom(format!(
            "num_samples must be at most {}, got {}",
            MAX_SIMULATED_SAMPLES, num_samples
        )));
    }
    Ok(num_samples)
}
fn default_base_frequency() -> f64 {
    1000.0
}

impl Default for SimulateArgs {
    fn default() -> Self {
        Self {
            num_samples: default_num_samples(),
            base_frequency: default_base_frequency(),
        }
    }
}

/// A parsed, typed operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    AddMetrics(AddMetricsArgs),
    GetSummary,
    GetAverageMetrics(AverageArgs),
    SimulateData(SimulateArgs),
    GetLatestMetrics,
}

impl Operation {
    /// Parse an operation by name.
    ///
    /// Both the current names and the legacy `*_signfx_*` tool names are
    /// accepted. A `null` argument map is treated as empty.
    pub fn parse(name: &str, arguments: Value) -> Result<Self, DispatchError> {
        let arguments = if arguments.is_null() {
            json!({})
        } else {
            arguments
        };

        match name {
            "add_metrics" | "add_signfx_metrics" => {
                Ok(Self::AddMetrics(parse_args("add_metrics", arguments)?))
            }
            "get_summary" | "get_signfx_summary" => Ok(Self::GetSummary),
            "get_average_metrics" => Ok(Self::GetAverageMetrics(parse_args(
                "get_average_metrics",
                arguments,
            )?)),
            "simulate_data" | "simulate_signfx_data" => {
                Ok(Self::SimulateData(parse_args("simulate_data", arguments)?))
            }
            "get_latest_metrics" => Ok(Self::GetLatestMetrics),
            other => Err(DispatchError::UnknownOperation(other.to_string())),
        }
    }

    /// Canonical operation name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddMetrics(_) => "add_metrics",
            Self::GetSummary => "get_summary",
            Self::GetAverageMetrics(_) => "get_average_metrics",
            Self::SimulateData(_) => "simulate_data",
            Self::GetLatestMetrics => "get_latest_metrics",
        }
    }
}

fn parse_args<T: serde::de::DeserializeOwned>(
    operation: &'static str,
    arguments: Value,
) -> Result<T, DispatchError> {
    serde_json::from_value(arguments)
        .map_err(|source| DispatchError::InvalidArguments { operation, source })
}

/// Errors raised while dispatching an operation.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
    #[error("invalid arguments for {operation}: {source}")]
    InvalidArguments {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Engine(#[from] MetricsError),
}

/// Outcome of a successfully dispatched operation.
///
/// `NoData` is an expected outcome, not a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationResult {
    MetricsAdded(MetricsRecord),
    Summary(MetricsSummary),
    Average {
        window: TimeWindow,
        record: MetricsRecord,
    },
    Simulated(Vec<MetricsRecord>),
    Latest(MetricsRecord),
    NoData {
        message: &'static str,
    },
}

impl OperationResult {
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData { .. })
    }

    /// Structured JSON body for this result.
    pub fn to_json(&self) -> Value {
        match self {
            Self::MetricsAdded(record) => json!({
                "status": "success",
                "message": "Metrics added successfully",
                "metrics": RecordView::ingested(record),
            }),
            Self::Summary(summary) => json!({
                "status": "success",
                "summary": summary,
            }),
            Self::Average { window, record } => json!({
                "status": "success",
                "time_window_minutes": window.as_minutes(),
                "average_metrics": RecordView::averaged(record),
            }),
            Self::Simulated(records) => json!({
                "status": "success",
                "message": format!("Generated {} simulated samples", records.len()),
                "samples": records
                    .iter()
                    .enumerate()
                    .map(|(i, r)| SimulatedSampleView::new(i + 1, r))
                    .collect::<Vec<_>>(),
            }),
            Self::Latest(record) => json!({
                "status": "success",
                "metrics": RecordView::ingested(record),
            }),
            Self::NoData { message } => json!({
                "status": "no_data",
                "message": message,
            }),
        }
    }
}

const NO_DATA: &str = "No metrics data available";
const NO_DATA_IN_WINDOW: &str = "No metrics data available for the specified time window";

/// Run a parsed operation against the service.
pub fn dispatch(
    service: &MetricsService,
    operation: Operation,
) -> Result<OperationResult, DispatchError> {
    tracing::debug!(operation = operation.name(), "dispatching operation");

    let result = match operation {
        Operation::AddMetrics(args) => {
            OperationResult::MetricsAdded(service.add_metrics(args.into())?)
        }
        Operation::GetSummary => match service.summary() {
            Ok(summary) => OperationResult::Summary(summary),
            Err(MetricsError::NoData) => OperationResult::NoData { message: NO_DATA },
            Err(e) => return Err(e.into()),
        },
        Operation::GetAverageMetrics(args) => {
            let window = args
                .time_window_minutes
                .map(TimeWindow::minutes)
                .unwrap_or_else(|| service.default_window());
            match service.average_metrics(window) {
                Some(record) => OperationResult::Average { window, record },
                None => OperationResult::NoData {
                    message: NO_DATA_IN_WINDOW,
                },
            }
        }
        Operation::SimulateData(args) => {
            OperationResult::Simulated(service.simulate(args.num_samples, args.base_frequency)?)
        }
        Operation::GetLatestMetrics => match service.latest() {
            Some(record) => OperationResult::Latest(record),
            None => OperationResult::NoData { message: NO_DATA },
        },
    };

    Ok(result)
}

/// Parse and run a named operation in one step.
pub fn call(service: &MetricsService, call: OperationCall) -> Result<OperationResult, DispatchError> {
    let operation = Operation::parse(&call.name, call.arguments)?;
    dispatch(service, operation)
}

/// Wire view of a record, rounded for display.
#[derive(Debug, Clone, Serialize)]
pub struct RecordView {
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

impl RecordView {
    /// A freshly ingested record: raw fields as given, SNR to 2 places.
    pub fn ingested(record: &MetricsRecord) -> Self {
        Self {
            timestamp: record.timestamp,
            signal_strength: record.signal_strength,
            noise_level: record.noise_level,
            signal_to_noise_ratio: record.signal_to_noise_ratio.rounded(2),
            frequency: record.frequency,
            amplitude: record.amplitude,
            phase: record.phase,
            distortion: record.distortion,
            latency: record.latency,
            throughput: record.throughput,
            error_rate: record.error_rate,
            quality_score: record.quality_score,
        }
    }

    /// An averaged record: raw fields to 4 places, SNR and frequency to 2.
    pub fn averaged(record: &MetricsRecord) -> Self {
        Self {
            timestamp: record.timestamp,
            signal_strength: round_to(record.signal_strength, 4),
            noise_level: round_to(record.noise_level, 4),
            signal_to_noise_ratio: record.signal_to_noise_ratio.rounded(2),
            frequency: round_to(record.frequency, 2),
            amplitude: round_to(record.amplitude, 4),
            phase: round_to(record.phase, 4),
            distortion: round_to(record.distortion, 4),
            latency: round_to(record.latency, 4),
            throughput: round_to(record.throughput, 4),
            error_rate: round_to(record.error_rate, 4),
            quality_score: record.quality_score,
        }
    }
}

/// Key fields of one simulated sample.
#[derive(Debug, Clone, Serialize)]
pub struct SimulatedSampleView {
    /// 1-based position in the batch
    pub sample: usize,
    pub timestamp: DateTime<Utc>,
    pub signal_strength: f64,
    pub noise_level: f64,
    pub signal_to_noise_ratio: Decibels,
    pub frequency: f64,
    pub amplitude: f64,
    pub quality_score: f64,
}

impl SimulatedSampleView {
    pub fn new(sample: usize, record: &MetricsRecord) -> Self {
        Self {
            sample,
            timestamp: record.timestamp,
            signal_strength: round_to(record.signal_strength, 4),
            noise_level: round_to(record.noise_level, 4),
            signal_to_noise_ratio: record.signal_to_noise_ratio.rounded(2),
            frequency: round_to(record.frequency, 2),
            amplitude: round_to(record.amplitude, 4),
            quality_score: round_to(record.quality_score, 2),
        }
    }
}

/// Description of one operation, for discovery.
#[derive(Debug, Clone, Serialize)]
pub struct OperationDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

/// Every operation the dispatcher accepts.
pub fn list_operations() -> Vec<OperationDescriptor> {
    vec![
        OperationDescriptor {
            name: "add_metrics",
            description: "Add a new signal metrics data point",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "signal_strength": {"type": "number", "description": "Signal strength value"},
                    "noise_level": {"type": "number", "description": "Noise level value"},
                    "frequency": {"type": "number", "description": "Frequency in Hz"},
                    "amplitude": {"type": "number", "description": "Amplitude value", "default": 1.0},
                    "phase": {"type": "number", "description": "Phase in radians", "default": 0.0},
                    "distortion": {"type": "number", "description": "Distortion level (0-1)", "default": 0.0},
                    "latency": {"type": "number", "description": "Latency in seconds", "default": 0.0},
                    "throughput": {"type": "number", "description": "Throughput value", "default": 0.0},
                    "error_rate": {"type": "number", "description": "Error rate (0-1)", "default": 0.0},
                    "timestamp": {"type": "string", "format": "date-time", "description": "Sample time (defaults to now)"}
                },
                "required": ["signal_strength", "noise_level", "frequency"]
            }),
        },
        OperationDescriptor {
            name: "get_summary",
            description: "Get a summary of the most recent metrics",
            input_schema: json!({"type": "object", "properties": {}}),
        },
        OperationDescriptor {
            name: "get_average_metrics",
            description: "Get average metrics over a trailing time window",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "time_window_minutes": {"type": "integer", "minimum": 0, "description": "Time window for averaging in minutes", "default": 5}
                }
            }),
        },
        OperationDescriptor {
            name: "simulate_data",
            description: "Generate and ingest simulated metrics for testing",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "num_samples": {"type": "integer", "minimum": 0, "maximum": MAX_SIMULATED_SAMPLES, "description": "Number of samples to generate", "default": 10},
                    "base_frequency": {"type": "number", "description": "Base frequency for simulation", "default": 1000.0}
                }
            }),
        },
        OperationDescriptor {
            name: "get_latest_metrics",
            description: "Get the most recently ingested metrics data point",
            input_schema: json!({"type": "object", "properties": {}}),
        },
    ]
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::adapters::outbound::InMemoryMetricsStore;
    use std::sync::Arc;

    // ===== Test Helpers =====

    fn create_service() -> MetricsService {
        MetricsService::with_defaults(Arc::new(InMemoryMetricsStore::new()))
    }

    fn reference_args() -> Value {
        json!({
            "signal_strength": 1.5,
            "noise_level": 0.1,
            "frequency": 1000.0,
            "amplitude": 1.2,
            "phase": 0.5,
            "distortion": 0.02,
            "latency": 0.05,
            "throughput": 1.8,
            "error_rate": 0.01
        })
    }

    // ===== Operation::parse Tests =====

    #[test]
    fn test_parse_add_metrics_full() {
        let op = Operation::parse("add_metrics", reference_args()).unwrap();
        match op {
            Operation::AddMetrics(args) => {
                assert_eq!(args.signal_strength, 1.5);
                assert_eq!(args.amplitude, 1.2);
                assert_eq!(args.error_rate, 0.01);
                assert!(args.timestamp.is_none());
            }
            other => panic!("unexpected operation: {:?}", other),
        }
    }

    #[test]
    fn test_parse_add_metrics_defaults() {
        let op = Operation::parse(
            "add_metrics",
            json!({"signal_strength": 1.0, "noise_level": 0.1, "frequency": 900}),
        )
        .unwrap();

        let Operation::AddMetrics(args) = op else {
            panic!("expected add_metrics");
        };
        assert_eq!(args.amplitude, 1.0);
        assert_eq!(args.phase, 0.0);
        assert_eq!(args.distortion, 0.0);
        assert_eq!(args.latency, 0.0);
        assert_eq!(args.throughput, 0.0);
        assert_eq!(args.error_rate, 0.0);
        assert_eq!(args.frequency, 900.0);
    }

    #[test]
    fn test_parse_add_metrics_missing_required() {
        let result = Operation::parse("add_metrics", json!({"signal_strength": 1.0}));
        assert!(matches!(
            result,
            Err(DispatchError::InvalidArguments {
                operation: "add_metrics",
                ..
            })
        ));
    }

    #[test]
    fn test_parse_add_metrics_non_numeric() {
        let mut args = reference_args();
        args["latency"] = json!("fast");
        let result = Operation::parse("add_metrics", args);
        assert!(matches!(result, Err(DispatchError::InvalidArguments { .. })));
    }

    #[test]
    fn test_parse_legacy_names() {
        let tests = vec![
            ("add_signfx_metrics", "add_metrics", reference_args()),
            ("get_signfx_summary", "get_summary", Value::Null),
            ("simulate_signfx_data", "simulate_data", Value::Null),
        ];

        for (legacy, canonical, args) in tests {
            let op = Operation::parse(legacy, args).unwrap();
            assert_eq!(op.name(), canonical, "Failed for name: {}", legacy);
        }
    }

    #[test]
    fn test_parse_unknown_operation() {
        let result = Operation::parse("rerank_documents", Value::Null);
        assert!(matches!(result, Err(DispatchError::UnknownOperation(name)) if name == "rerank_documents"));
    }

    #[test]
    fn test_parse_average_defaults_to_none() {
        let op = Operation::parse("get_average_metrics", Value::Null).unwrap();
        assert_eq!(op, Operation::GetAverageMetrics(AverageArgs::default()));
    }

    #[test]
    fn test_parse_average_rejects_negative_window() {
        let result = Operation::parse("get_average_metrics", json!({"time_window_minutes": -5}));
        assert!(matches!(result, Err(DispatchError::InvalidArguments { .. })));
    }

    #[test]
    fn test_parse_simulate_defaults() {
        let op = Operation::parse("simulate_data", json!({})).unwrap();
        assert_eq!(op, Operation::SimulateData(SimulateArgs::default()));
    }

    #[test]
    fn test_parse_simulate_rejects_oversized_batch() {
        let result = Operation::parse("simulate_data", json!({"num_samples": u64::MAX}));
        match result {
            Err(DispatchError::InvalidArguments { operation, source }) => {
                assert_eq!(operation, "simulate_data");
                assert!(source.to_string().contains("at most 1000"));
            }
            other => panic!("expected InvalidArguments, got {:?}", other),
        }

        let result = Operation::parse("simulate_data", json!({"num_samples": 1001}));
        assert!(matches!(result, Err(DispatchError::InvalidArguments { .. })));
    }

    #[test]
    fn test_parse_simulate_accepts_maximum_batch() {
        let op = Operation::parse("simulate_data", json!({"num_samples": MAX_SIMULATED_SAMPLES}))
            .unwrap();
        assert_eq!(
            op,
            Operation::SimulateData(SimulateArgs {
                num_samples: MAX_SIMULATED_SAMPLES,
                base_frequency: 1000.0
            })
        );
    }

    #[test]
    fn test_list_operations_caps_num_samples() {
        let simulate = list_operations()
            .into_iter()
            .find(|op| op.name == "simulate_data")
            .unwrap();
        assert_eq!(
            simulate.input_schema["properties"]["num_samples"]["maximum"],
            MAX_SIMULATED_SAMPLES
        );
    }

    #[test]
    fn test_parse_summary_ignores_extra_arguments() {
        let op = Operation::parse("get_summary", json!({"time_window_minutes": 5})).unwrap();
        assert_eq!(op, Operation::GetSummary);
    }

    // ===== dispatch Tests =====

    #[test]
    fn test_dispatch_add_metrics_json() {
        let service = create_service();
        let op = Operation::parse("add_metrics", reference_args()).unwrap();
        let json = dispatch(&service, op).unwrap().to_json();

        assert_eq!(json["status"], "success");
        assert_eq!(json["metrics"]["signal_to_noise_ratio"], 23.52);
        assert_eq!(json["metrics"]["quality_score"], 85.83);
        assert_eq!(json["metrics"]["amplitude"], 1.2);
    }

    #[test]
    fn test_dispatch_add_metrics_zero_noise_tagged_infinity() {
        let service = create_service();
        let mut args = reference_args();
        args["noise_level"] = json!(0.0);
        let op = Operation::parse("add_metrics", args).unwrap();
        let json = dispatch(&service, op).unwrap().to_json();

        assert_eq!(json["metrics"]["signal_to_noise_ratio"], "inf");
    }

    #[test]
    fn test_dispatch_summary_no_data() {
        let service = create_service();
        let result = dispatch(&service, Operation::GetSummary).unwrap();

        assert!(result.is_no_data());
        assert_eq!(result.to_json()["status"], "no_data");
    }

    #[test]
    fn test_dispatch_summary_after_ingest() {
        let service = create_service();
        call(
            &service,
            OperationCall {
                name: "add_metrics".to_string(),
                arguments: reference_args(),
            },
        )
        .unwrap();

        let json = dispatch(&service, Operation::GetSummary).unwrap().to_json();
        assert_eq!(json["summary"]["total_measurements"], 1);
        assert_eq!(json["summary"]["current_quality_score"], 85.83);
    }

    #[test]
    fn test_dispatch_average_no_data() {
        let service = create_service();
        let result = dispatch(
            &service,
            Operation::GetAverageMetrics(AverageArgs {
                time_window_minutes: Some(10),
            }),
        )
        .unwrap();

        assert_eq!(
            result,
            OperationResult::NoData {
                message: NO_DATA_IN_WINDOW
            }
        );
    }

    #[test]
    fn test_dispatch_average_uses_default_window() {
        let service = create_service();
        let op = Operation::parse("add_metrics", reference_args()).unwrap();
        dispatch(&service, op).unwrap();

        let result =
            dispatch(&service, Operation::GetAverageMetrics(AverageArgs::default())).unwrap();
        let json = result.to_json();
        assert_eq!(json["time_window_minutes"], 5);
        assert_eq!(json["average_metrics"]["signal_strength"], 1.5);
    }

    #[test]
    fn test_dispatch_simulate() {
        let service = create_service();
        let op = Operation::parse("simulate_data", json!({"num_samples": 5, "base_frequency": 1000.0}))
            .unwrap();
        let json = dispatch(&service, op).unwrap().to_json();

        assert_eq!(json["message"], "Generated 5 simulated samples");
        let samples = json["samples"].as_array().unwrap();
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0]["sample"], 1);
        assert_eq!(samples[4]["sample"], 5);
        assert_eq!(service.retained(), 5);
    }

    #[test]
    fn test_dispatch_invalid_sample_propagates() {
        let service = create_service();
        let op = Operation::AddMetrics(AddMetricsArgs {
            signal_strength: f64::NAN,
            noise_level: 0.1,
            frequency: 1000.0,
            amplitude: 1.0,
            phase: 0.0,
            distortion: 0.0,
            latency: 0.0,
            throughput: 0.0,
            error_rate: 0.0,
            timestamp: None,
        });

        let result = dispatch(&service, op);
        assert!(matches!(
            result,
            Err(DispatchError::Engine(MetricsError::InvalidSample { .. }))
        ));
    }

    #[test]
    fn test_dispatch_latest() {
        let service = create_service();
        assert!(dispatch(&service, Operation::GetLatestMetrics)
            .unwrap()
            .is_no_data());

        service.simulate(3, 1000.0).unwrap();
        let result = dispatch(&service, Operation::GetLatestMetrics).unwrap();
        assert!(matches!(result, OperationResult::Latest(_)));
    }

    // ===== View Tests =====

    #[test]
    fn test_averaged_view_rounding() {
        let record = MetricsRecord {
            timestamp: Utc::now(),
            signal_strength: 1.234567,
            noise_level: 0.098761,
            signal_to_noise_ratio: Decibels::new(21.98765),
            frequency: 1003.14159,
            amplitude: 1.111111,
            phase: 3.141592,
            distortion: 0.055555,
            latency: 0.012345,
            throughput: 1.666666,
            error_rate: 0.024999,
            quality_score: 88.123456,
        };

        let view = RecordView::averaged(&record);
        assert_eq!(view.signal_strength, 1.2346);
        assert_eq!(view.noise_level, 0.0988);
        assert_eq!(view.signal_to_noise_ratio.as_f64(), 21.99);
        assert_eq!(view.frequency, 1003.14);
        assert_eq!(view.phase, 3.1416);
        assert_eq!(view.quality_score, 88.123456);
    }

    // ===== list_operations Tests =====

    #[test]
    fn test_list_operations_names_parse() {
        let ops = list_operations();
        assert_eq!(ops.len(), 5);

        for op in &ops {
            let parsed = Operation::parse(op.name, Value::Null);
            // add_metrics needs arguments; everything else parses empty
            if op.name == "add_metrics" {
                assert!(parsed.is_err());
            } else {
                assert_eq!(parsed.unwrap().name(), op.name);
            }
        }
    }

    #[test]
    fn test_dispatch_error_messages() {
        let err = DispatchError::UnknownOperation("nope".to_string());
        assert_eq!(err.to_string(), "unknown operation: nope");

        let err: DispatchError = MetricsError::NoData.into();
        assert_eq!(err.to_string(), "no metrics data available");
    }
}
