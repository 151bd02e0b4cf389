use axum::routing::post;
use axum::Router;

use crate::handlers::message;
use crate::state::AppState;

/// Routes mounted at `/api/v1/messages`.
///
/// ```text
/// POST /   -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(message::create))
}
