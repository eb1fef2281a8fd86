//! Metrics API Server
//!
//! HTTP front end for the operation dispatcher. Exposes a generic
//! named-operation endpoint plus REST shortcuts for each operation.

use crate::application::operations::{self, AverageArgs};
use crate::application::{
    dispatch, list_operations, DispatchError, MetricsService, Operation, OperationCall,
    OperationResult,
};
use crate::domain::errors::MetricsError;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Health response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub retained_records: usize,
    pub capacity: usize,
}

/// API Server state.
#[derive(Clone)]
pub struct ApiState {
    pub service: Arc<MetricsService>,
}

impl ApiState {
    pub fn new(service: Arc<MetricsService>) -> Self {
        Self { service }
    }
}

/// API Server for the metrics engine.
pub struct ApiServer {
    listen_addr: String,
    state: ApiState,
}

impl ApiServer {
    pub fn new(listen_addr: String, service: Arc<MetricsService>) -> Self {
        Self {
            listen_addr,
            state: ApiState::new(service),
        }
    }

    /// Get shared state for use by other components.
    pub fn state(&self) -> ApiState {
        self.state.clone()
    }

    /// Build the router over the given state.
    pub fn router(state: ApiState) -> Router {
        Router::new()
            // Health endpoint
            .route("/health", get(health_handler))
            // Named operations
            .route("/api/v1/operations", get(list_operations_handler))
            .route("/api/v1/operations/call", post(call_operation_handler))
            // REST shortcuts
            .route("/api/v1/metrics", post(add_metrics_handler))
            .route("/api/v1/metrics/latest", get(latest_handler))
            .route("/api/v1/metrics/summary", get(summary_handler))
            .route("/api/v1/metrics/average", get(average_handler))
            .route("/api/v1/metrics/simulate", post(simulate_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Run the API server until `shutdown` completes.
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub async fn run<F>(&self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(&self.listen_addr).await?;
        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` completes.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = Self::router(self.state.clone());
        tracing::info!("metrics API listening on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}

fn error_status(err: &DispatchError) -> StatusCode {
    match err {
        DispatchError::UnknownOperation(_) => StatusCode::NOT_FOUND,
        DispatchError::InvalidArguments { .. }
        | DispatchError::Engine(MetricsError::TooManySamples { .. }) => StatusCode::BAD_REQUEST,
        DispatchError::Engine(MetricsError::InvalidSample { .. }) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        DispatchError::Engine(MetricsError::NoData) => StatusCode::NOT_FOUND,
    }
}

/// Turn a dispatch outcome into an HTTP response.
///
/// No-data results are reported with `no_data_status`: 200 on the generic
/// operation endpoint, 404 on the REST shortcuts.
fn respond(
    result: Result<OperationResult, DispatchError>,
    success_status: StatusCode,
    no_data_status: StatusCode,
) -> (StatusCode, Json<Value>) {
    match result {
        Ok(result) if result.is_no_data() => {
            tracing::debug!("operation returned no data");
            (no_data_status, Json(result.to_json()))
        }
        Ok(result) => (success_status, Json(result.to_json())),
        Err(err) => {
            tracing::warn!("operation failed: {}", err);
            (
                error_status(&err),
                Json(serde_json::json!({
                    "status": "error",
                    "error": err.to_string()
                })),
            )
        }
    }
}

fn parse_and_dispatch(
    service: &MetricsService,
    name: &str,
    arguments: Value,
) -> Result<OperationResult, DispatchError> {
    let operation = Operation::parse(name, arguments)?;
    dispatch(service, operation)
}

// Handler functions

async fn health_handler(State(state): State<ApiState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        retained_records: state.service.retained(),
        capacity: state.service.capacity(),
    };
    Json(response)
}

async fn list_operations_handler() -> impl IntoResponse {
    Json(list_operations())
}

async fn call_operation_handler(
    State(state): State<ApiState>,
    Json(call): Json<OperationCall>,
) -> impl IntoResponse {
    tracing::debug!("operation call: {}", call.name);
    respond(
        operations::call(&state.service, call),
        StatusCode::OK,
        StatusCode::OK,
    )
}

async fn add_metrics_handler(
    State(state): State<ApiState>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    respond(
        parse_and_dispatch(&state.service, "add_metrics", body),
        StatusCode::CREATED,
        StatusCode::NOT_FOUND,
    )
}

async fn latest_handler(State(state): State<ApiState>) -> impl IntoResponse {
    respond(
        dispatch(&state.service, Operation::GetLatestMetrics),
        StatusCode::OK,
        StatusCode::NOT_FOUND,
    )
}

async fn summary_handler(State(state): State<ApiState>) -> impl IntoResponse {
    respond(
        dispatch(&state.service, Operation::GetSummary),
        StatusCode::OK,
        StatusCode::NOT_FOUND,
    )
}

async fn average_handler(
    State(state): State<ApiState>,
    Query(args): Query<AverageArgs>,
) -> impl IntoResponse {
    respond(
        dispatch(&state.service, Operation::GetAverageMetrics(args)),
        StatusCode::OK,
        StatusCode::NOT_FOUND,
    )
}

async fn simulate_handler(
    State(state): State<ApiState>,
    body: Option<Json<Value>>,
) -> impl IntoResponse {
    let arguments = body.map(|Json(v)| v).unwrap_or(Value::Null);
    respond(
        parse_and_dispatch(&state.service, "simulate_data", arguments),
        StatusCode::OK,
        StatusCode::NOT_FOUND,
    )
}
