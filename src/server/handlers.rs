use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::server::AppState;

const INDEX_HTML: &str = include_str!("../../static/index.html");
const APP_JS: &str = include_str!("../../static/app.js");

#[derive(Debug, Serialize, Deserialize)]
pub struct HelloResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TimeResponse {
    pub timestamp: String,
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn app_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        APP_JS,
    )
}

pub async fn hello(State(state): State<AppState>) -> Json<HelloResponse> {
    Json(HelloResponse {
        message: state.greeting.to_string(),
    })
}

/// Current UTC time, e.g. `2026-10-18T09:30:00.123456+00:00`.
pub async fn time() -> Json<TimeResponse> {
    Json(TimeResponse {
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false),
    })
}
