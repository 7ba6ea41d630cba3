// # Release Checker
//
// Fetches the latest release descriptor from the GitHub releases API so the
// caller can notify about available updates.
//
// ## Failure Contract
//
// Any failure (transport, non-2xx, malformed JSON) is reported once to the
// injected `Telemetry` sink and turned into `None`. There is no retry; the
// caller polls again on its own cadence.
//
// ## Client Lifetime
//
// `latest_release` builds a client scoped to the single call, with the
// `Accept` and `User-Agent` headers the GitHub API requires (requests
// without a user agent are rejected outright). For tests and embedders with
// their own client, `latest_release_with` takes the HTTP capability as a
// parameter.

use std::time::Duration;

use chrono::{DateTime, Utc};
use dnstube_core::{Error, FetchText, Result, Telemetry};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

/// Fixed endpoint for the project's latest release metadata
const LATEST_RELEASE_URL: &str = "https://api.github.com/repos/drittich/DnsTube/releases/latest";

/// Non-empty user agent; the GitHub API rejects requests without one
const USER_AGENT: &str = "request";

/// HTTP timeout for the release check
const RELEASE_CHECK_TIMEOUT: Duration = Duration::from_secs(30);

/// Downloadable artifact attached to a release
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseAsset {
    /// File name of the artifact
    pub name: String,
    /// Direct download URL
    pub browser_download_url: String,
    /// Artifact size in bytes
    #[serde(default)]
    pub size: u64,
}

/// Latest-release descriptor, the subset of the GitHub release schema the
/// update notification consumes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    /// Version tag, e.g. "v1.2.3"
    pub tag_name: String,
    /// Human-readable release title
    #[serde(default)]
    pub name: Option<String>,
    /// Link to the release page
    #[serde(default)]
    pub html_url: Option<String>,
    /// Whether the release is marked as a prerelease
    #[serde(default)]
    pub prerelease: bool,
    /// Publish timestamp
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    /// Release notes body
    #[serde(default)]
    pub body: Option<String>,
    /// Attached artifacts
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

/// Fetch the latest release with a short-lived client scoped to this call.
///
/// Returns `None` on any failure, after reporting it to `telemetry` once.
pub async fn latest_release(telemetry: &dyn Telemetry) -> Option<Release> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let client = match reqwest::Client::builder()
        .timeout(RELEASE_CHECK_TIMEOUT)
        .default_headers(headers)
        .user_agent(USER_AGENT)
        .build()
    {
        Ok(client) => client,
        Err(error) => {
            telemetry.track_failure(
                "release check",
                &Error::transport(format!("failed to build HTTP client: {}", error)),
            );
            return None;
        }
    };

    latest_release_with(&client, telemetry).await
}

/// Fetch the latest release through an injected HTTP capability.
pub async fn latest_release_with(
    client: &dyn FetchText,
    telemetry: &dyn Telemetry,
) -> Option<Release> {
    match fetch_latest(client).await {
        Ok(release) => {
            tracing::debug!("latest release is {}", release.tag_name);
            Some(release)
        }
        Err(error) => {
            telemetry.track_failure("release check", &error);
            None
        }
    }
}

async fn fetch_latest(client: &dyn FetchText) -> Result<Release> {
    let body = client.get_text(LATEST_RELEASE_URL).await?;
    let release = serde_json::from_str(&body)?;
    Ok(release)
}
