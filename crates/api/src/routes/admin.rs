//! Admin pages (session required).

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// ```text
/// GET  /admin                         page
/// POST /admin/projects                save
/// POST /admin/projects/{id}/delete    delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin", get(admin::page))
        .route("/admin/projects", post(admin::save))
        .route("/admin/projects/{id}/delete", post(admin::delete))
}
