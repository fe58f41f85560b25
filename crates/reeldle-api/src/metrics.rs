//! Prometheus metrics for the API server.

use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Instant;

/// Initialize the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> PrometheusHandle {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "reeldle_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "reeldle_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "reeldle_http_requests_in_flight";

    // Cache metrics
    pub const CACHE_HITS_TOTAL: &str = "reeldle_cache_hits_total";
    pub const CACHE_MISSES_TOTAL: &str = "reeldle_cache_misses_total";

    // Game metrics
    pub const DAILY_SELECTIONS_TOTAL: &str = "reeldle_daily_selections_total";
    pub const GUESSES_TOTAL: &str = "reeldle_guesses_total";
    pub const POOL_REBUILDS_TOTAL: &str = "reeldle_pool_rebuilds_total";
}

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", sanitize_path(path)),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record a cache hit for a memoization tier (pool/media/movie/guess).
pub fn record_cache_hit(tier: &str) {
    let labels = [("tier", tier.to_string())];
    counter!(names::CACHE_HITS_TOTAL, &labels).increment(1);
}

/// Record a cache miss for a memoization tier.
pub fn record_cache_miss(tier: &str) {
    let labels = [("tier", tier.to_string())];
    counter!(names::CACHE_MISSES_TOTAL, &labels).increment(1);
}

/// Record a freshly resolved daily selection.
pub fn record_daily_selection() {
    counter!(names::DAILY_SELECTIONS_TOTAL).increment(1);
}

/// Record a computed guess diff.
pub fn record_guess(win: bool) {
    let labels = [("win", win.to_string())];
    counter!(names::GUESSES_TOTAL, &labels).increment(1);
}

/// Record a candidate pool rebuild.
pub fn record_pool_rebuild() {
    counter!(names::POOL_REBUILDS_TOTAL).increment(1);
}

/// Sanitize path for metrics labels (collapse dates and ids).
fn sanitize_path(path: &str) -> String {
    let path = regex_lite::Regex::new(r"/\d{4}-\d{2}-\d{2}(/|$)")
        .unwrap()
        .replace_all(path, "/:date$1");
    let path = regex_lite::Regex::new(r"/\d+(/|$)")
        .unwrap()
        .replace_all(&path, "/:id$1");
    path.to_string()
}

/// Metrics middleware for HTTP requests.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);

    let response = next.run(request).await;

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);

    let status = response.status().as_u16();
    let duration = start.elapsed().as_secs_f64();

    record_http_request(&method, &path, status, duration);

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_path() {
        assert_eq!(
            sanitize_path("/api/v1/media/movie/2024-01-05"),
            "/api/v1/media/movie/:date"
        );
        assert_eq!(
            sanitize_path("/api/v1/guess/movie/2024-01-05/603"),
            "/api/v1/guess/movie/:date/:id"
        );
        assert_eq!(sanitize_path("/health"), "/health");
    }
}
