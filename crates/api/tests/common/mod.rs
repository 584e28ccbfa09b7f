use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use mdnote_api::config::ServerConfig;
use mdnote_api::router::build_app_router;
use mdnote_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(database_path: String) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_path,
        request_timeout_secs: 30,
    }
}

/// Build the full application router over a fresh temporary database.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (request ID, timeout, tracing, panic
/// recovery) that production uses. The returned `TempDir` must stay alive
/// for as long as the router is used.
pub fn build_test_app() -> (TempDir, Router) {
    let dir = TempDir::new().expect("create temp dir");
    let db_path = dir.path().join("articles.redb");
    let db = mdnote_db::open_database(&db_path).expect("open database");

    let config = test_config(db_path.display().to_string());
    let state = AppState {
        db: Arc::new(db),
        config: Arc::new(config.clone()),
    };
    (dir, build_app_router(state, &config))
}

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response<axum::body::Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("build request"),
    )
    .await
    .expect("request failed")
}

/// Send a GET request with extra headers.
pub async fn get_with_headers(
    app: Router,
    uri: &str,
    headers: &[(&str, &str)],
) -> Response<axum::body::Body> {
    let mut builder = Request::builder().uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    app.oneshot(builder.body(Body::empty()).expect("build request"))
        .await
        .expect("request failed")
}

/// Send a urlencoded form POST to the app.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response<axum::body::Body> {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{k}={}", urlencode(v)))
        .collect::<Vec<_>>()
        .join("&");
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("build request"),
    )
    .await
    .expect("request failed")
}

/// Collect a response body into a String.
pub async fn body_string(response: Response<axum::body::Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body is UTF-8")
}

/// Minimal percent-encoding for form values in tests.
fn urlencode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
