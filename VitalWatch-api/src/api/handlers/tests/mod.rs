// Handler tests exercising the assembled router with in-memory services

mod vitals_test;

use axum::body::Body;
use axum::http::Request;

// Initialize tracing once for all tests
static INIT: std::sync::Once = std::sync::Once::new();

pub(crate) fn initialize() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("info")
            .with_test_writer()
            .try_init();
    });
}

// Helper function to get body bytes from a response
pub(crate) async fn get_body_bytes(response: axum::response::Response) -> Vec<u8> {
    let body = response.into_body();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    bytes.to_vec()
}

// Helper function to build a JSON request
pub(crate) fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

// Helper function to build an empty-bodied request
pub(crate) fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
