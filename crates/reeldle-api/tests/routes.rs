//! Router validation tests.
//!
//! These exercise the request-validation paths that must reject before any
//! collaborator is touched, so no Redis or TMDB is needed.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use reeldle_api::{create_router, ApiConfig, AppState};

async fn test_router() -> Router {
    // Collaborator clients are constructed lazily; nothing connects until a
    // request survives validation.
    std::env::set_var("TMDB_API_KEY", "test-key");

    let state = AppState::new(ApiConfig::default())
        .await
        .expect("Failed to build state");
    create_router(state, None)
}

async fn get(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    (status, body)
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, body) = get(test_router().await, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_unsupported_media_type_rejected() {
    let (status, body) = get(test_router().await, "/api/v1/media/tv/2024-01-05").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("media type"));
}

#[tokio::test]
async fn test_malformed_date_rejected() {
    let (status, body) = get(test_router().await, "/api/v1/media/movie/20240105").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("YYYY-MM-DD"));
}

#[tokio::test]
async fn test_future_date_refused() {
    let (status, body) = get(test_router().await, "/api/v1/media/movie/2999-01-01").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].as_str().unwrap().contains("future"));
}

#[tokio::test]
async fn test_non_numeric_guess_id_rejected() {
    let (status, body) = get(
        test_router().await,
        "/api/v1/guess/movie/2024-01-05/the-matrix",
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("movie id"));
}

#[tokio::test]
async fn test_guess_validates_media_type_first() {
    let (status, _) = get(test_router().await, "/api/v1/guess/show/2024-01-05/603").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (status, _) = get(test_router().await, "/api/v1/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
