//! Contract test: release checker failure reporting
//!
//! Constraints verified:
//! - Malformed JSON yields no release and exactly one telemetry emission
//! - Transport failures yield no release and exactly one telemetry emission
//! - A well-formed response yields the parsed descriptor and no emission
//! - No retry: exactly one fetch per call

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dnstube_core::{Error, FetchText, Result, Telemetry};
use dnstube_release::latest_release_with;

/// A FetchText double returning one canned response, counting calls
struct CannedFetcher {
    response: Mutex<Option<Result<String>>>,
    call_count: AtomicUsize,
}

impl CannedFetcher {
    fn new(response: Result<String>) -> Self {
        Self {
            response: Mutex::new(Some(response)),
            call_count: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl FetchText for CannedFetcher {
    async fn get_text(&self, _url: &str) -> Result<String> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.response
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(Error::transport("canned response already consumed")))
    }
}

/// A Telemetry double that counts emissions and records messages
#[derive(Default)]
struct RecordingTelemetry {
    failures: Mutex<Vec<String>>,
}

impl RecordingTelemetry {
    fn failure_count(&self) -> usize {
        self.failures.lock().unwrap().len()
    }
}

impl Telemetry for RecordingTelemetry {
    fn track_failure(&self, context: &str, error: &Error) {
        self.failures
            .lock()
            .unwrap()
            .push(format!("{}: {}", context, error));
    }
}

#[tokio::test]
async fn malformed_json_reports_telemetry_exactly_once() {
    let fetcher = CannedFetcher::new(Ok("<html>not json</html>".to_string()));
    let telemetry = RecordingTelemetry::default();

    let release = latest_release_with(&fetcher, &telemetry).await;

    assert!(release.is_none());
    assert_eq!(telemetry.failure_count(), 1);
    assert_eq!(fetcher.call_count.load(Ordering::SeqCst), 1, "no retry allowed");
}

#[tokio::test]
async fn transport_failure_reports_telemetry_exactly_once() {
    let fetcher = CannedFetcher::new(Err(Error::transport("HTTP error: 403 Forbidden")));
    let telemetry = RecordingTelemetry::default();

    let release = latest_release_with(&fetcher, &telemetry).await;

    assert!(release.is_none());
    assert_eq!(telemetry.failure_count(), 1);
    let recorded = telemetry.failures.lock().unwrap();
    assert!(recorded[0].contains("403"), "got: {}", recorded[0]);
}

#[tokio::test]
async fn valid_response_yields_release_and_no_telemetry() {
    let body = r#"{
        "tag_name": "v1.8.0",
        "prerelease": false,
        "assets": [
            {"name": "DnsTube.zip", "browser_download_url": "https://example.invalid/DnsTube.zip", "size": 42}
        ]
    }"#;
    let fetcher = CannedFetcher::new(Ok(body.to_string()));
    let telemetry = RecordingTelemetry::default();

    let release = latest_release_with(&fetcher, &telemetry).await.unwrap();

    assert_eq!(release.tag_name, "v1.8.0");
    assert_eq!(release.assets[0].size, 42);
    assert_eq!(telemetry.failure_count(), 0);
}
