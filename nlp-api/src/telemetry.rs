//! Call counters for the text endpoints.
//!
//! Handlers report through the [`Telemetry`] trait so the counting backend can
//! be swapped out (or removed) without touching the analyzers.

use std::sync::OnceLock;

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Tokenize,
    Stem,
    Analyze,
}

impl Operation {
    pub fn metric_name(&self) -> &'static str {
        match self {
            Operation::Tokenize => "nlp_tokenize_calls_total",
            Operation::Stem => "nlp_stem_calls_total",
            Operation::Analyze => "nlp_analyze_calls_total",
        }
    }
}

pub trait Telemetry: Send + Sync {
    fn record(&self, operation: Operation);

    /// Exposition text for `/metrics`, if this backend has one.
    fn render(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTelemetry;

impl Telemetry for NoopTelemetry {
    fn record(&self, _operation: Operation) {}
}

/// Counters backed by the process-wide Prometheus recorder.
#[derive(Clone)]
pub struct PrometheusTelemetry {
    handle: PrometheusHandle,
}

impl PrometheusTelemetry {
    /// Installs the recorder on first use. Returns `None` when another
    /// recorder already owns the process.
    pub fn global() -> Option<Self> {
        init_metrics_recorder().map(|handle| Self { handle })
    }
}

impl Telemetry for PrometheusTelemetry {
    fn record(&self, operation: Operation) {
        counter!(operation.metric_name()).increment(1);
    }

    fn render(&self) -> Option<String> {
        Some(self.handle.render())
    }
}

fn init_metrics_recorder() -> Option<PrometheusHandle> {
    static HANDLE: OnceLock<Option<PrometheusHandle>> = OnceLock::new();
    HANDLE
        .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => Some(handle),
            Err(err) => {
                warn!(error = %err, "failed to install metrics recorder");
                None
            }
        })
        .clone()
}
