//! Root endpoint

use axum::{routing::get, Router};

/// GET /
async fn root() -> &'static str {
    "Hello World!"
}

/// Root routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(root))
}
