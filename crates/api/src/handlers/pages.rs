//! Handlers for the index page and path canonicalization redirects.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, Redirect};

use mdnote_db::repositories::ArticleRepo;

use crate::error::AppResult;
use crate::handlers::run_store;
use crate::state::AppState;
use crate::views;

/// GET /
///
/// Index page with the current article count.
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let db = Arc::clone(&state.db);
    let count = run_store(move || ArticleRepo::count(&db)).await?;
    Ok(Html(views::index(count).into_string()))
}

/// Permanent redirect to the index, used to canonicalize `/index.html` and
/// bare `/a/` / `/edit/` paths.
pub async fn redirect_home() -> Redirect {
    Redirect::permanent("/")
}
