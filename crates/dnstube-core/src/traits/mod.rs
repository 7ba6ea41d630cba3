//! Capability traits for the DnsTube utilities
//!
//! The original utilities reached for framework-global networking and
//! telemetry facilities; here those are explicit parameters so callers
//! and tests decide what stands behind them.
//!
//! - [`FetchText`]: Issue an HTTP GET and return the response body
//! - [`Telemetry`]: Sink for failure reports

pub mod http;
pub mod telemetry;

pub use http::FetchText;
pub use telemetry::{Telemetry, TracingTelemetry};
