mod in_memory_metrics_store;

pub use in_memory_metrics_store::InMemoryMetricsStore;
