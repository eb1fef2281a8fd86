//! signal-metrics - Signal Quality Metrics Engine with Hexagonal Architecture
//!
//! This is the composition root that wires together all the components.

use signal_metrics::adapters::inbound::ApiServer;
use signal_metrics::adapters::outbound::InMemoryMetricsStore;
use signal_metrics::application::MetricsService;
use signal_metrics::config::load_config;
use signal_metrics::infrastructure::shutdown_signal;
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    tracing::info!(
        "starting signal-metrics listen={} capacity={} summary_window={}",
        cfg.listen_addr,
        cfg.history_capacity,
        cfg.summary_window
    );

    // ===== COMPOSITION ROOT =====

    // 1. Outbound adapter: bounded in-memory history
    let store = Arc::new(InMemoryMetricsStore::with_capacity(cfg.history_capacity));

    // 2. Application service
    let service = Arc::new(MetricsService::new(
        store,
        cfg.summary_window,
        cfg.default_window(),
    ));

    // 3. Inbound adapter
    let server = ApiServer::new(cfg.listen_addr, service);

    server.run(shutdown_signal()).await?;

    tracing::info!("signal-metrics stopped");
    Ok(())
}
