//! Route definitions for sign-in.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/api/v1/auth`.
///
/// ```text
/// POST /login    -> login
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(auth::login))
}

/// Sign-in pages at the site root.
///
/// ```text
/// GET  /auth          -> login_page
/// POST /auth          -> login_form
/// POST /auth/logout   -> logout
/// ```
pub fn pages() -> Router<AppState> {
    Router::new()
        .route("/auth", get(auth::login_page).post(auth::login_form))
        .route("/auth/logout", post(auth::logout))
}
