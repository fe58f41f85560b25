//! API middleware.

use std::time::Instant;

use axum::body::Body;
use axum::http::{HeaderValue, Request, Response};
use axum::middleware::Next;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, Span};
use uuid::Uuid;

/// Create CORS layer.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    use axum::http::{header, Method};

    let allowed_headers = [header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN];
    let allowed_methods = [Method::GET, Method::OPTIONS];

    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_methods(Any)
            .allow_headers(Any)
            .allow_origin(Any)
            .max_age(std::time::Duration::from_secs(600))
    } else {
        let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_methods(allowed_methods)
            .allow_headers(allowed_headers)
            .allow_origin(origins)
            .max_age(std::time::Duration::from_secs(600))
    }
}

/// Request ID middleware.
pub async fn request_id(mut request: Request<Body>, next: Next) -> Response<Body> {
    // Generate or extract request ID
    let request_id = request
        .headers()
        .get("X-Request-ID")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    // Add to request extensions
    request.extensions_mut().insert(request_id.clone());

    // Record in span
    Span::current().record("request_id", &request_id);

    let mut response = next.run(request).await;

    if let Ok(header_value) = request_id.parse() {
        response.headers_mut().insert("X-Request-ID", header_value);
    }

    response
}

/// Request logging middleware.
pub async fn request_logging(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    info!(
        method = %method,
        path = %uri.path(),
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "request"
    );

    response
}
