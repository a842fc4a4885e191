//! Common test utilities shared across integration tests

use tinyroute::http::{Request, Response, StatusCode};
use tinyroute::Reply;

/// Build a request with an empty body
pub fn request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .expect("Failed to build request")
}

/// Handler that answers 200 with a fixed body
#[allow(dead_code)]
pub fn text(body: &'static str) -> impl Fn(Request<String>) -> Response<String> + Send + Sync {
    move |_| Response::new(body.to_string())
}

/// Resolve a reply, panicking if the handler failed
pub async fn resolve(reply: Reply<String>) -> Response<String> {
    reply.await.expect("Handler returned an error")
}

/// Assert that a reply is a 200 with the expected body
#[allow(dead_code)]
pub async fn assert_ok(reply: Reply<String>, expected_body: &str) {
    let response = resolve(reply).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.body(), expected_body);
}

/// Assert that a reply is the router's 404 fallback for the given method and path
#[allow(dead_code)]
pub async fn assert_not_found(reply: Reply<String>, method: &str, path: &str) {
    assert!(!reply.is_pending(), "404 fallback should be ready");
    let response = resolve(reply).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.body(), &format!("Cannot {} {}", method, path));
}
