//! Session extractors for Axum handlers.
//!
//! A session token is accepted from either the `Authorization: Bearer`
//! header (API clients) or the session cookie (browsers). The header wins
//! when both are present.

use axum::extract::FromRequestParts;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::response::Redirect;
use folio_core::error::CoreError;

use crate::auth::jwt::{validate_token, JwtConfig};
use crate::auth::{ADMIN_ROLE, SESSION_COOKIE};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated operator, extracted from a valid admin session token.
///
/// ```ignore
/// async fn my_handler(admin: AdminSession) -> AppResult<Json<()>> {
///     tracing::info!(username = %admin.username, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub username: String,
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Missing session token".into()))
        })?;

        let claims = validate_token(&token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        if claims.role != ADMIN_ROLE {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Admin role required".into(),
            )));
        }

        Ok(AdminSession {
            username: claims.sub,
        })
    }
}

/// Same check as [`AdminSession`], for pages: an unauthenticated browser is
/// sent to the sign-in form instead of receiving a JSON error.
#[derive(Debug, Clone)]
pub struct AdminPage(pub AdminSession);

impl FromRequestParts<AppState> for AdminPage {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        AdminSession::from_request_parts(parts, state)
            .await
            .map(AdminPage)
            .map_err(|_| Redirect::to("/auth"))
    }
}

/// Pull the session token out of the request headers.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|t| !t.is_empty())
}

/// `true` when the request carries a valid admin session. Used by public
/// pages to pick the header links; it never rejects.
pub fn has_admin_session(headers: &HeaderMap, config: &JwtConfig) -> bool {
    session_token(headers)
        .and_then(|token| validate_token(&token, config).ok())
        .is_some_and(|claims| claims.role == ADMIN_ROLE)
}

/// `Set-Cookie` value establishing a browser session.
pub fn session_cookie(token: &str, max_age_secs: i64) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}")
}

/// `Set-Cookie` value clearing the browser session.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
