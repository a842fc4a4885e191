//! Route Matching Tests
//!
//! These tests verify the route matching system including:
//! - Exact path matching
//! - Root path handling
//! - Multiple routes selection
//! - Non-existent paths and wrong methods (404 fallback)
//! - Case sensitivity
//! - Edge cases (empty paths, trailing slashes, similar paths, query strings)
//! - Registration order as match priority

mod common;

use common::{assert_not_found, assert_ok, request, text};
use tinyroute::Router;

fn route_test_router() -> Router<String> {
    let mut router: Router<String> = Router::new();
    router
        .get("/", text("root"))
        .and_then(|r| r.get("/user", text("user")))
        .and_then(|r| r.get("/users", text("users")))
        .and_then(|r| r.get("/about", text("about")))
        .and_then(|r| r.get("/health", text("ok")))
        .and_then(|r| r.get("/api/v1", text("api-v1")))
        .and_then(|r| r.post("/contact", text("contact-post")))
        .and_then(|r| r.put("/contact", text("contact-put")))
        .and_then(|r| r.patch("/contact", text("contact-patch")))
        .and_then(|r| r.delete("/contact", text("contact-delete")))
        .expect("Failed to register routes");
    router
}

#[tokio::test]
async fn test_exact_path_match_root() {
    let router = route_test_router();
    assert_ok(router.dispatch(request("GET", "/")), "root").await;
}

#[tokio::test]
async fn test_health_route() {
    let router = route_test_router();
    assert_ok(router.dispatch(request("GET", "/health")), "ok").await;
}

#[tokio::test]
async fn test_exact_path_match_nested() {
    let router = route_test_router();
    assert_ok(router.dispatch(request("GET", "/api/v1")), "api-v1").await;
}

#[tokio::test]
async fn test_similar_paths_user_vs_users() {
    let router = route_test_router();
    assert_ok(router.dispatch(request("GET", "/user")), "user").await;
    assert_ok(router.dispatch(request("GET", "/users")), "users").await;
}

#[tokio::test]
async fn test_each_verb_routes_to_its_handler() {
    let router = route_test_router();

    let test_cases = vec![
        ("POST", "contact-post"),
        ("PUT", "contact-put"),
        ("PATCH", "contact-patch"),
        ("DELETE", "contact-delete"),
    ];

    for (method, expected_body) in test_cases {
        assert_ok(router.dispatch(request(method, "/contact")), expected_body).await;
    }

    assert_not_found(router.dispatch(request("GET", "/contact")), "GET", "/contact").await;
}

#[tokio::test]
async fn test_non_existent_path() {
    let router = route_test_router();
    assert_not_found(
        router.dispatch(request("GET", "/nonexistent")),
        "GET",
        "/nonexistent",
    )
    .await;
}

#[tokio::test]
async fn test_wrong_method() {
    let router = route_test_router();
    assert_not_found(router.dispatch(request("POST", "/health")), "POST", "/health").await;
}

#[tokio::test]
async fn test_case_sensitivity() {
    let router = route_test_router();

    // Route is "/health", so "/Health" should not match
    assert_not_found(router.dispatch(request("GET", "/Health")), "GET", "/Health").await;
}

#[tokio::test]
async fn test_trailing_slash_mismatch() {
    let router = route_test_router();

    // Route is "/about", so "/about/" should not match
    assert_not_found(router.dispatch(request("GET", "/about/")), "GET", "/about/").await;
}

#[tokio::test]
async fn test_path_with_query_string() {
    let router = route_test_router();

    // Only the path takes part in matching
    assert_ok(router.dispatch(request("GET", "/about?foo=bar")), "about").await;
    assert_ok(
        router.dispatch(request("GET", "http://example.com/about?foo=bar")),
        "about",
    )
    .await;
}

#[tokio::test]
async fn test_not_found_echoes_path_without_query() {
    let router = route_test_router();
    assert_not_found(
        router.dispatch(request("GET", "/missing?page=2")),
        "GET",
        "/missing",
    )
    .await;
}

#[tokio::test]
async fn test_lowercase_request_method_is_normalized() {
    let router = route_test_router();
    assert_ok(router.dispatch(request("get", "/about")), "about").await;
    assert_not_found(router.dispatch(request("post", "/about")), "POST", "/about").await;
}

#[tokio::test]
async fn test_lowercase_registration_method_is_normalized() {
    let mut router: Router<String> = Router::new();
    router
        .custom("options", "/about", text("options"))
        .expect("Failed to register route");

    assert_ok(router.dispatch(request("OPTIONS", "/about")), "options").await;
}

#[tokio::test]
async fn test_multiple_routes_load_all() {
    let router = route_test_router();

    let test_cases = vec![
        ("/", "root"),
        ("/user", "user"),
        ("/users", "users"),
        ("/about", "about"),
        ("/api/v1", "api-v1"),
    ];

    for (path, expected_body) in test_cases {
        assert_ok(router.dispatch(request("GET", path)), expected_body).await;
    }
}

#[tokio::test]
async fn test_partial_path_no_match() {
    let router = route_test_router();

    // "/api" should not match "/api/v1"
    assert_not_found(router.dispatch(request("GET", "/api")), "GET", "/api").await;
}

#[tokio::test]
async fn test_extended_path_no_match() {
    let router = route_test_router();

    // "/api/v1/users" should not match "/api/v1"
    assert_not_found(
        router.dispatch(request("GET", "/api/v1/users")),
        "GET",
        "/api/v1/users",
    )
    .await;
}

#[tokio::test]
async fn test_empty_router_returns_not_found() {
    let router: Router<String> = Router::new();

    let test_cases = vec![
        ("GET", "/"),
        ("POST", "/users"),
        ("DELETE", "/items/7"),
        ("PURGE", "/cache"),
    ];

    for (method, path) in test_cases {
        assert_not_found(router.dispatch(request(method, path)), method, path).await;
    }
}

#[tokio::test]
async fn test_first_registered_route_wins() {
    let mut router: Router<String> = Router::new();
    router
        .get("/items/{id}", text("by-id"))
        .and_then(|r| r.get("/items/new", text("new-form")))
        .and_then(|r| r.get("/items/new", text("shadowed")))
        .expect("Failed to register routes");

    assert_eq!(router.len(), 3);
    assert_ok(router.dispatch(request("GET", "/items/new")), "by-id").await;
}

#[tokio::test]
async fn test_duplicate_literal_route_keeps_first() {
    let mut router: Router<String> = Router::new();
    router
        .get("/health", text("first"))
        .and_then(|r| r.get("/health", text("second")))
        .expect("Failed to register routes");

    assert_ok(router.dispatch(request("GET", "/health")), "first").await;
}

#[tokio::test]
async fn test_repeated_dispatch_is_idempotent() {
    let router = route_test_router();

    for _ in 0..3 {
        assert_ok(router.dispatch(request("GET", "/about")), "about").await;
        assert_not_found(router.dispatch(request("GET", "/About")), "GET", "/About").await;
    }
}

#[tokio::test]
async fn test_renamed_placeholder_is_shadowed() {
    let mut router: Router<String> = Router::new();
    router
        .get("/users/{id}", text("by-id"))
        .and_then(|r| r.get("/users/{name}", text("by-name")))
        .expect("Failed to register routes");

    let patterns: Vec<_> = router.routes().collect();
    assert!(patterns[1].same_shape(patterns[0]));

    assert_ok(router.dispatch(request("GET", "/users/ada")), "by-id").await;
}
