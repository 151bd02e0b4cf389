//! Public pages.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::site;
use crate::state::AppState;

/// ```text
/// GET  /                     landing
/// GET  /sections/portfolio   portfolio_fragment
/// POST /contact              submit_contact
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(site::landing))
        .route("/sections/portfolio", get(site::portfolio_fragment))
        .route("/contact", post(site::submit_contact))
}
