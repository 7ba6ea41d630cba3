// # Telemetry Capability
//
// The release checker reports failures to a telemetry sink instead of
// returning them. The sink is injected so tests can count emissions and so
// embedders can forward to whatever collector they run.

use crate::error::Error;

/// Sink for failure reports
pub trait Telemetry: Send + Sync {
    /// Record a failure, with a short context string naming the operation
    fn track_failure(&self, context: &str, error: &Error);
}

/// Default sink that forwards failures to `tracing`
pub struct TracingTelemetry;

impl Telemetry for TracingTelemetry {
    fn track_failure(&self, context: &str, error: &Error) {
        tracing::warn!("{} failed: {}", context, error);
    }
}
