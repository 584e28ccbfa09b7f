//! Routes for the index page and static assets.

use axum::http::{header, HeaderValue};
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeFile;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::handlers::pages;
use crate::state::AppState;

/// Index, canonicalization, and static asset routes.
///
/// ```text
/// GET /            index
/// GET /index.html  redirect_home (301)
/// GET /main.css    stylesheet, cached for a week
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/index.html", get(pages::redirect_home))
        .route_service(
            "/main.css",
            tower::ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::overriding(
                    header::CACHE_CONTROL,
                    HeaderValue::from_static("public, max-age=604800"),
                ))
                .service(ServeFile::new("static/main.css")),
        )
}
