//! Prometheus counters

use std::net::SocketAddr;

/// Counter metric types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterMetric {
    /// Strategy records written to the store
    StrategiesSaved,
    /// Connect attempts refused by the graph or the enforced policy
    ConnectionsRejected,
    /// Failed logins and rejected session tokens
    AuthFailures,
    /// Requests refused because the record belongs to another owner
    AccessDenied,
}

impl CounterMetric {
    pub fn name(&self) -> &'static str {
        match self {
            CounterMetric::StrategiesSaved => "stratgraph_strategies_saved_total",
            CounterMetric::ConnectionsRejected => "stratgraph_connections_rejected_total",
            CounterMetric::AuthFailures => "stratgraph_auth_failures_total",
            CounterMetric::AccessDenied => "stratgraph_access_denied_total",
        }
    }
}

/// Increment a counter by one. No-op until a recorder is installed.
pub fn increment(metric: CounterMetric) {
    metrics::counter!(metric.name()).increment(1);
}

/// Install the Prometheus exporter with an HTTP scrape listener.
///
/// Must be called from within a tokio runtime.
pub fn install_exporter(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics exporter: {}", e))?;
    tracing::info!(%addr, "Metrics exporter listening");
    Ok(())
}
