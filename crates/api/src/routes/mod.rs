pub mod admin;
pub mod auth;
pub mod health;
pub mod message;
pub mod project;
pub mod site;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth
///     /login                       login (POST)
///
/// /projects                        list (GET), create (POST, admin)
///     /{id}                        update (PUT, admin), delete (DELETE, admin)
///
/// /messages                        create (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/projects", project::router())
        .nest("/messages", message::router())
}
