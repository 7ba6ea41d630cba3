// # dnstube-core
//
// Core library for the DnsTube utility crates.
//
// ## Architecture Overview
//
// This library provides the shared pieces the leaf crates build on:
// - **Error**: One error taxonomy for all utilities (transport, malformed
//   response, unavailable network)
// - **IpVersion**: Which address family an operation targets
// - **ip::is_valid_ip**: Pure syntax validator for IPv4/IPv6 candidate strings
// - **FetchText**: HTTP GET capability trait, implemented for `reqwest::Client`
//   and substitutable with test doubles
// - **Telemetry**: Failure-report sink trait, with a `tracing`-backed default
//
// ## Design Principles
//
// 1. **Leaf utilities only**: No orchestration, no polling, no shared state —
//    every operation is a single self-contained call
// 2. **Capabilities are parameters**: HTTP clients and telemetry sinks are
//    passed in explicitly so callers and tests control them
// 3. **Errors never escape**: Each utility recovers failures locally and
//    communicates them through its return value

pub mod error;
pub mod ip;
pub mod traits;

// Re-export core types for convenience
pub use error::{Error, Result};
pub use ip::{IpVersion, is_valid_ip};
pub use traits::{FetchText, Telemetry, TracingTelemetry};
