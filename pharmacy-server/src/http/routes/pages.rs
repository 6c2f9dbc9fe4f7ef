//! Landing page and its script, embedded at compile time
//!
//! Neither route touches the database.

use axum::{
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

pub const INDEX_HTML: &str = include_str!("../../../assets/index.html");
pub const SCRIPTS_JS: &str = include_str!("../../../assets/scripts.js");

/// GET /
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /static/scripts.js
async fn scripts() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        SCRIPTS_JS,
    )
}

/// Page routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/static/scripts.js", get(scripts))
}
