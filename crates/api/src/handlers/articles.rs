//! Handlers for creating, reading, and editing articles.
//!
//! These are the only handlers that touch the store and the caching
//! contracts: public caching for article reads, revision-based validators
//! for the edit form, and See Other redirects after successful writes.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;

use mdnote_core::{title, ArticleId};
use mdnote_db::repositories::ArticleRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::run_store;
use crate::render;
use crate::state::AppState;
use crate::views;

/// Maximum accepted request body for the creation form, in bytes.
pub const MAX_POST_BYTES: usize = 30_000;

/// Form fields shared by the creation and edit endpoints. The password is
/// optional on creation; an absent field reads as the empty string.
#[derive(Debug, serde::Deserialize)]
pub struct ArticleForm {
    pub newbody: String,
    #[serde(default)]
    pub newpassword: String,
}

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

fn parse_id(raw: &str) -> Result<ArticleId, AppError> {
    raw.parse().map_err(|_| AppError::InvalidId(raw.to_string()))
}

/// The revision counter rendered as an entity tag.
fn validator(revision: u64) -> String {
    format!("\"{revision}\"")
}

/// Whether the client's cached copy is still current.
///
/// An explicit `Cache-Control: max-age=0` forces a full response; otherwise
/// the `If-None-Match` value (weak prefix stripped) is compared against the
/// current revision's validator.
fn is_cached(request_headers: &HeaderMap, revision: u64) -> bool {
    let forces_fresh = request_headers
        .get_all(header::CACHE_CONTROL)
        .iter()
        .any(|v| v.to_str().is_ok_and(|s| s == "max-age=0"));
    if forces_fresh {
        return false;
    }
    request_headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim_start_matches("W/"))
        == Some(validator(revision).as_str())
}

/* --------------------------------------------------------------------------
Create
-------------------------------------------------------------------------- */

/// GET /new
///
/// Blank creation form.
pub async fn new_form() -> Html<String> {
    Html(views::form(None).into_string())
}

/// POST /new
///
/// Create an article and redirect to its canonical path. The request body
/// is capped at [`MAX_POST_BYTES`] before the form is parsed (see the route
/// layer in `routes::articles`).
pub async fn create(
    State(state): State<AppState>,
    Form(input): Form<ArticleForm>,
) -> AppResult<Redirect> {
    let db = Arc::clone(&state.db);
    let id = run_store(move || ArticleRepo::create(&db, &input.newbody, &input.newpassword)).await?;

    tracing::info!(article_id = id, "Article created");
    Ok(Redirect::to(&format!("/a/{id}")))
}

/* --------------------------------------------------------------------------
Read
-------------------------------------------------------------------------- */

/// GET /a/{id}
///
/// Render an article. Publicly cacheable for one hour.
pub async fn show(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&raw_id)?;
    let db = Arc::clone(&state.db);
    let article = run_store(move || ArticleRepo::get(&db, id)).await?;

    let page_title = title::derive_title(&article.body, article.id);
    let body_html = render::render(&article.body);

    Ok((
        [(header::CACHE_CONTROL, "public, max-age=3600".to_string())],
        Html(views::article(&page_title, &body_html, &article).into_string()),
    ))
}

/* --------------------------------------------------------------------------
Edit
-------------------------------------------------------------------------- */

/// GET /edit/{id}
///
/// Edit form, pre-filled with the current body. Cacheable but must
/// revalidate: the revision counter is surfaced as the entity tag, and a
/// matching `If-None-Match` short-circuits with 304 instead of re-rendering.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    request_headers: HeaderMap,
) -> AppResult<Response> {
    let id = parse_id(&raw_id)?;
    let db = Arc::clone(&state.db);
    let article = run_store(move || ArticleRepo::get(&db, id)).await?;

    let cache_headers = [
        (header::CACHE_CONTROL, "public, no-cache".to_string()),
        (header::ETAG, validator(article.revision)),
    ];

    if is_cached(&request_headers, article.revision) {
        return Ok((StatusCode::NOT_MODIFIED, cache_headers).into_response());
    }

    Ok((cache_headers, Html(views::form(Some(&article)).into_string())).into_response())
}

/// POST /edit/{id}
///
/// Replace the body after password verification, then redirect to the
/// canonical path with the new revision as a cache-busting query parameter.
pub async fn edit(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Form(input): Form<ArticleForm>,
) -> AppResult<Redirect> {
    let id = parse_id(&raw_id)?;
    let db = Arc::clone(&state.db);
    let revision =
        run_store(move || ArticleRepo::update(&db, id, &input.newpassword, &input.newbody)).await?;

    tracing::info!(article_id = id, revision, "Article edited");
    Ok(Redirect::to(&format!("/a/{id}?rev={revision}")))
}
