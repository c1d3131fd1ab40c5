//! Fresh form, adding rows, and generating the preview.

use axum::http::StatusCode;

use crate::common::{acme_fields, expect_body, get, post_form, test_app};

#[tokio::test]
async fn test_index_shows_fresh_form() {
    let html = expect_body(get(test_app(), "/").await, StatusCode::OK).await;

    assert!(html.contains("<title>Monthly SEO Report Generator</title>"));
    assert!(html.contains("name=\"rows\" value=\"5\""));
    assert!(html.contains("Keyword 5"));
    assert!(!html.contains("Keyword 6"));
    assert!(html.contains("Selected Period: 01 July 2025 to 31 July 2025 (31 days)"));
    assert!(!html.contains("Final Report Preview"));
}

#[tokio::test]
async fn test_add_row_keeps_values() {
    let fields = [
        ("rows", "5"),
        ("project_name", "Acme"),
        ("kw_0", "Sofas"),
        ("month", "April"),
    ];
    let html = expect_body(post_form(test_app(), "/rows", &fields).await, StatusCode::OK).await;

    assert!(html.contains("name=\"rows\" value=\"6\""));
    assert!(html.contains("Keyword 6"));
    assert!(html.contains("name=\"kw_5\""));
    assert!(html.contains("name=\"project_name\" value=\"Acme\""));
    assert!(html.contains("name=\"kw_0\" value=\"Sofas\""));
    assert!(html.contains("<option selected>April</option>"));
    assert!(html.contains("(30 days)"));
}

#[tokio::test]
async fn test_add_row_twice() {
    let html = expect_body(
        post_form(test_app(), "/rows", &[("rows", "6")]).await,
        StatusCode::OK,
    )
    .await;
    assert!(html.contains("name=\"rows\" value=\"7\""));
    assert!(html.contains("name=\"kw_6\""));
}

#[tokio::test]
async fn test_row_count_never_drops_below_initial() {
    let html = expect_body(
        post_form(test_app(), "/rows", &[("rows", "1")]).await,
        StatusCode::OK,
    )
    .await;
    assert!(html.contains("name=\"rows\" value=\"6\""));
}

#[tokio::test]
async fn test_generate_shows_preview() {
    let html = expect_body(
        post_form(test_app(), "/report", &acme_fields()).await,
        StatusCode::OK,
    )
    .await;

    assert!(html.contains("Final Report Preview"));
    assert!(html.contains("<iframe"));
    assert!(html.contains("srcdoc=\"&lt;!DOCTYPE html&gt;"));
    assert!(html.contains("&lt;b&gt;Decrease&lt;/b&gt; from 55.2% to 50.1%"));
    assert!(html.contains("formaction=\"/report/download\""));
    assert!(html.contains("name=\"project_name\" value=\"Acme\""));
}

#[tokio::test]
async fn test_generate_with_empty_form() {
    let html = expect_body(
        post_form(test_app(), "/report", &[]).await,
        StatusCode::OK,
    )
    .await;
    assert!(html.contains("Final Report Preview"));
}

#[tokio::test]
async fn test_unknown_month_is_rejected() {
    let fields = [("project_name", "Acme"), ("month", "Smarch")];
    let html = expect_body(
        post_form(test_app(), "/report", &fields).await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert!(html.contains("Unknown month: Smarch"));
    assert!(html.contains("href=\"/\""));
}

#[tokio::test]
async fn test_health() {
    let body = expect_body(get(test_app(), "/health").await, StatusCode::OK).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_oversized_row_count_is_capped() {
    let huge = usize::MAX.to_string();
    let fields = [("rows", huge.as_str()), ("project_name", "Acme")];

    let html = expect_body(
        post_form(test_app(), "/report", &fields).await,
        StatusCode::OK,
    )
    .await;
    assert!(html.contains("name=\"rows\" value=\"8\""));
    assert!(!html.contains("name=\"kw_8\""));

    let response = post_form(test_app(), "/report/download", &fields).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = expect_body(
        post_form(test_app(), "/rows", &[("rows", "50000000")]).await,
        StatusCode::OK,
    )
    .await;
    assert!(html.contains("name=\"rows\" value=\"8\""));
}
