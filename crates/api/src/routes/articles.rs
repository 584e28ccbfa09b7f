//! Routes for article creation, reading, and editing.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::handlers::{articles, pages};
use crate::state::AppState;

/// Article routes.
///
/// ```text
/// GET  /new        new_form
/// POST /new        create        (body capped at MAX_POST_BYTES)
/// GET  /a/{id}     show
/// GET  /a/         redirect_home
/// GET  /edit/{id}  edit_form
/// POST /edit/{id}  edit
/// GET  /edit/      redirect_home
/// ```
pub fn router() -> Router<AppState> {
    // The size ceiling applies before form parsing, creation path only.
    let create = Router::new()
        .route("/new", get(articles::new_form).post(articles::create))
        .layer(DefaultBodyLimit::max(articles::MAX_POST_BYTES));

    Router::new()
        .merge(create)
        .route("/a/{id}", get(articles::show))
        .route("/a/", get(pages::redirect_home))
        .route("/edit/{id}", get(articles::edit_form).post(articles::edit))
        .route("/edit/", get(pages::redirect_home))
}
