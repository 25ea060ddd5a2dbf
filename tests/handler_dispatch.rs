mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_invalid_json_body(pool: SqlitePool) {
    let server = TestServer::new(common::test_app(pool)).unwrap();

    let response = server.post("/").text("{not json").await;

    response.assert_status_bad_request();
    response.assert_text("Invalid JSON");
}

#[sqlx::test]
async fn test_unknown_type(pool: SqlitePool) {
    let server = TestServer::new(common::test_app(pool)).unwrap();

    for body in [
        json!({ "type": "delete_everything" }),
        json!({ "type": 42 }),
        json!({ "targetId": "c1" }),
    ] {
        let response = server.post("/").json(&body).await;
        response.assert_status_bad_request();
        response.assert_text("Unknown type");
    }
}

#[sqlx::test]
async fn test_unsupported_method(pool: SqlitePool) {
    let server = TestServer::new(common::test_app(pool)).unwrap();

    let response = server.put("/").json(&json!({ "type": "vote" })).await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    response.assert_text("Method not allowed");
}

#[sqlx::test]
async fn test_options_probe_is_ok(pool: SqlitePool) {
    let server = TestServer::new(common::test_app(pool)).unwrap();

    let response = server.method(axum::http::Method::OPTIONS, "/").await;

    response.assert_status_ok();
}

#[sqlx::test]
async fn test_cors_header_on_every_response(pool: SqlitePool) {
    let server = TestServer::new(common::test_app(pool)).unwrap();

    let get = server.get("/").await;
    assert_eq!(get.header("access-control-allow-origin"), "*");

    let post = server.post("/").json(&json!({ "type": "vote" })).await;
    assert_eq!(post.header("access-control-allow-origin"), "*");

    let options = server.method(axum::http::Method::OPTIONS, "/").await;
    assert_eq!(options.header("access-control-allow-origin"), "*");
}

#[sqlx::test]
async fn test_cors_preflight_allows_post(pool: SqlitePool) {
    let server = TestServer::new(common::test_app(pool)).unwrap();

    use axum::http::{HeaderName, HeaderValue};

    let response = server
        .method(axum::http::Method::OPTIONS, "/")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("https://example.com"),
        )
        .add_header(
            HeaderName::from_static("access-control-request-method"),
            HeaderValue::from_static("POST"),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("access-control-allow-origin"), "*");
    let methods = response.header("access-control-allow-methods");
    assert!(methods.to_str().unwrap().contains("POST"));
}
