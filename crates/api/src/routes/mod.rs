//! Route definitions.

pub mod articles;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// All application routes, merged.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .merge(articles::router())
}
