//! HTTP routes.
//!
//! | Method | Path               | Action                                  |
//! |--------|--------------------|-----------------------------------------|
//! | GET    | `/`                | fresh form                              |
//! | POST   | `/rows`            | add one keyword row, keep all values    |
//! | POST   | `/report`          | generate and show the preview           |
//! | POST   | `/report/download` | generate and return the HTML attachment |
//! | GET    | `/health`          | liveness probe                          |

use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use seoreport_core::FormValues;
use seoreport_core::output::MIME_TYPE;
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::Result;
use crate::state::AppState;
use crate::views;

/// Raw form post, in field order.
type Posted = Form<Vec<(String, String)>>;

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/rows", post(add_row))
        .route("/report", post(generate))
        .route("/report/download", post(download))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.new_session();
    Html(views::form_page(&state, &session, None).into_string())
}

async fn add_row(State(state): State<AppState>, Form(fields): Posted) -> Html<String> {
    let mut session = state.resume_session(FormValues::from_iter(fields));
    session.add_row();
    tracing::debug!(rows = session.row_count(), "added keyword row");
    Html(views::form_page(&state, &session, None).into_string())
}

async fn generate(State(state): State<AppState>, Form(fields): Posted) -> Result<Html<String>> {
    let mut session = state.resume_session(FormValues::from_iter(fields));
    let report = session.generate(state.default_month(), state.year())?;
    tracing::info!(file_name = report.file_name(), state = %session.state(), "report generated");
    Ok(Html(
        views::form_page(&state, &session, Some(&report)).into_string(),
    ))
}

async fn download(State(state): State<AppState>, Form(fields): Posted) -> Result<Response> {
    let mut session = state.resume_session(FormValues::from_iter(fields));
    let report = session.generate(state.default_month(), state.year())?;
    tracing::info!(file_name = report.file_name(), "report downloaded");

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(MIME_TYPE));
    // content_disposition() emits visible ASCII only.
    let disposition = HeaderValue::from_str(&report.content_disposition())
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));
    headers.insert(CONTENT_DISPOSITION, disposition);

    Ok((headers, report.into_html()).into_response())
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}
