//! The downloadable report.

use axum::http::{StatusCode, header};

use crate::common::{acme_fields, body_string, post_form, test_app};

#[tokio::test]
async fn test_download_acme_july() {
    let response = post_form(test_app(), "/report/download", &acme_fields()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"Acme_SEO_Report_July_2025.html\""
    );

    let html = body_string(response).await;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("from <b>01 July 2025</b> to <b>31 July 2025</b>"));
    assert!(html.contains("<td>Sofas</td>"));
    assert!(!html.contains("<td>5</td>"));
    assert!(html.contains("<b>Bounce Rate:</b> <b>Decrease</b> from 55.2% to 50.1%"));
    assert!(html.contains("<li>Improve speed</li><li>Add backlinks</li>"));
    assert!(html.contains("August Month Planning for Improvement:"));
    assert!(html.contains("<b>Pat</b>"));
}

#[tokio::test]
async fn test_download_escapes_user_text() {
    let fields = [
        ("project_name", "A&B"),
        ("kw_0", "<script>alert(1)</script>"),
        ("cr_0", "1"),
    ];
    let response = post_form(test_app(), "/report/download", &fields).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"A&B_SEO_Report_July_2025.html\""
    );

    let html = body_string(response).await;
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[tokio::test]
async fn test_download_unknown_month() {
    let response = post_form(test_app(), "/report/download", &[("month", "Nope")]).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().get(header::CONTENT_DISPOSITION).is_none());
}

#[tokio::test]
async fn test_download_non_ascii_project_name() {
    let response = post_form(test_app(), "/report/download", &[("project_name", "Café")]).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"Caf__SEO_Report_July_2025.html\"; \
         filename*=UTF-8''Caf%C3%A9_SEO_Report_July_2025.html"
    );
}
