//! Sign-in for the single admin operator.
//!
//! Browsers use the `/auth` form and receive the session as a cookie; API
//! clients call `POST /api/v1/auth/login` and send the token back as a
//! bearer header.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use folio_core::error::CoreError;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::auth::ADMIN_ROLE;
use crate::controllers::Notice;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::{clear_session_cookie, has_admin_session, session_cookie};
use crate::state::AppState;
use crate::views;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Credentials posted by the login form or the JSON login endpoint.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

// ---------------------------------------------------------------------------
// Shared check
// ---------------------------------------------------------------------------

/// Verify credentials and issue a session token.
async fn authenticate(state: &AppState, input: &LoginRequest) -> AppResult<AuthResponse> {
    let admin = &state.config.admin;

    // Always run the hash check so unknown usernames cost the same.
    let password_ok = verify_password(&input.password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;

    if input.username != admin.username || !password_ok {
        tracing::warn!(username = %input.username, "Failed admin sign-in");
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    let jwt = &state.config.jwt;
    let access_token = generate_access_token(&admin.username, ADMIN_ROLE, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(username = %admin.username, "Admin signed in");
    Ok(AuthResponse {
        access_token,
        expires_in: jwt.expires_in_secs(),
    })
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    authenticate(&state, &input).await.map(Json)
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// GET /auth
pub async fn login_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if has_admin_session(&headers, &state.config.jwt) {
        return Redirect::to("/admin").into_response();
    }
    Html(views::login::render("", None)).into_response()
}

/// POST /auth
pub async fn login_form(State(state): State<AppState>, Form(input): Form<LoginRequest>) -> Response {
    match authenticate(&state, &input).await {
        Ok(auth) => (
            [(SET_COOKIE, session_cookie(&auth.access_token, auth.expires_in))],
            Redirect::to("/admin"),
        )
            .into_response(),
        Err(AppError::Core(CoreError::Unauthorized(message))) => (
            StatusCode::UNAUTHORIZED,
            Html(views::login::render(
                &input.username,
                Some(&Notice::error(message)),
            )),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Sign-in failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(views::login::render(
                    &input.username,
                    Some(&Notice::error("Sign in failed. Please try again later.")),
                )),
            )
                .into_response()
        }
    }
}

/// POST /auth/logout
pub async fn logout() -> Response {
    ([(SET_COOKIE, clear_session_cookie())], Redirect::to("/")).into_response()
}
