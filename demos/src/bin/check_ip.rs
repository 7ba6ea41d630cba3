//! Minimal usage example for the DnsTube utilities
//!
//! Resolves the host's public IPv4 (and IPv6 best-effort), its private IPv4,
//! and the latest published release, printing whatever could be determined.

use std::time::Duration;

use anyhow::Result;
use dnstube_core::{IpVersion, TracingTelemetry};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    match dnstube_ip_http::public_ip(IpVersion::V4, &client).await {
        Ok(address) => info!("public IPv4: {}", address),
        Err(error) => warn!("public IPv4 lookup failed: {}", error),
    }

    // Hosts without IPv6 connectivity will simply fail here; that is fine.
    match dnstube_ip_http::public_ip(IpVersion::V6, &client).await {
        Ok(address) => info!("public IPv6: {}", address),
        Err(error) => warn!("public IPv6 lookup failed: {}", error),
    }

    match dnstube_ip_local::private_ipv4().await? {
        Some(address) => info!("private IPv4: {}", address),
        None => info!("private IPv4: none (network unavailable or no IPv4 bound)"),
    }

    match dnstube_release::latest_release(&TracingTelemetry).await {
        Some(release) => info!(
            "latest release: {} ({} assets)",
            release.tag_name,
            release.assets.len()
        ),
        None => info!("latest release: unknown"),
    }

    Ok(())
}
