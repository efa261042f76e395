//! HTTP surface for Orglens: one `POST /classify` route behind a static
//! token, delegating to the classification pipeline.

use axum::routing::post;
use axum::Router;
use orglens_classify::Pipeline;

pub mod error;
pub mod handlers;

/// Process-wide state, constructed once at startup and passed explicitly
/// into the request path. Everything here is read-only per request.
#[derive(Clone)]
pub struct AppState {
    /// Secret the `Authorization` header is compared against.
    pub secret: String,
    pub pipeline: Pipeline,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/classify", post(handlers::classify))
        .with_state(state)
}
