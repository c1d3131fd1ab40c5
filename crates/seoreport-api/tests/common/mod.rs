//! Common test utilities for the form server integration tests.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, StatusCode, header};
use seoreport_api::Server;
use seoreport_core::AppConfig;
use tower::ServiceExt;

/// Router over the default configuration.
pub fn test_app() -> Router {
    Server::new(AppConfig::default())
        .expect("default config is valid")
        .router()
}

/// URL-encodes `fields` as an `application/x-www-form-urlencoded` body.
pub fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Sends a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Posts `fields` as a form.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(encode_form(fields)))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collects a response body as UTF-8.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Asserts the status and returns the body.
pub async fn expect_body(response: Response<Body>, status: StatusCode) -> String {
    assert_eq!(response.status(), status);
    body_string(response).await
}

/// The Acme / July form, as a browser would post it.
pub fn acme_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("rows", "5"),
        ("project_name", "Acme"),
        ("month", "July"),
        ("kw_0", "Sofas"),
        ("cr_0", "2"),
        ("pr_0", "3"),
        ("kw_1", ""),
        ("cr_1", "5"),
        ("pr_1", "5"),
        ("organic_traffic", "1.8K"),
        ("prev_bounce", "55.20"),
        ("curr_bounce", "50.10"),
        ("next_month_plan", "Improve speed\r\n\r\nAdd backlinks"),
        ("submitted_by", "Pat"),
    ]
}
