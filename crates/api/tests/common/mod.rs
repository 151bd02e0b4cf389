#![allow(dead_code)]

use std::sync::{Arc, LazyLock};

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use folio_api::auth::jwt::{generate_access_token, JwtConfig};
use folio_api::auth::password::hash_password;
use folio_api::config::{AdminCredentials, ServerConfig, StoreConfig};
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_db::store::{MemoryStore, SharedStore};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "correct-horse-battery";

/// Hashing is slow in debug builds; do it once per test binary.
static ADMIN_PASSWORD_HASH: LazyLock<String> =
    LazyLock::new(|| hash_password(ADMIN_PASSWORD).expect("hashing should succeed"));

/// Build a test `ServerConfig` with safe defaults and the in-memory store.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/../../static").to_string(),
        store: StoreConfig::Memory,
        admin: AdminCredentials {
            username: ADMIN_USERNAME.to_string(),
            password_hash: ADMIN_PASSWORD_HASH.clone(),
        },
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Full router over the given store, with the production middleware stack.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    let config = test_config();
    let shared: SharedStore = store;
    let state = AppState {
        store: shared,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A valid admin session token for [`test_config`].
pub fn admin_token() -> String {
    generate_access_token(ADMIN_USERNAME, "admin", &test_config().jwt)
        .expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

/// GET with the session cookie a signed-in browser would send.
pub async fn get_signed_in(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(COOKIE, format!("folio_session={}", admin_token()))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// POST an `application/x-www-form-urlencoded` body, optionally signed in.
pub async fn post_form(
    app: Router,
    uri: &str,
    fields: &[(&str, &str)],
    signed_in: bool,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if signed_in {
        builder = builder.header(COOKIE, format!("folio_session={}", admin_token()));
    }
    let request = builder.body(Body::from(form_body(fields))).unwrap();
    send(app, request).await
}

/// Send a JSON request, with a bearer token when given.
pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, Some(body), None).await
}

// ---------------------------------------------------------------------------
// Bodies
// ---------------------------------------------------------------------------

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes()
        .to_vec()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).expect("body should be UTF-8")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).expect("body should be JSON")
}

/// URL-encode form fields.
pub fn form_body(fields: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(fields).expect("form fields should encode")
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert projects oldest first and forget the calls it took.
pub async fn seed_projects(store: &MemoryStore, titles: &[&str]) {
    use folio_core::project::ProjectFormData;
    use folio_db::repositories::ProjectRepo;

    for title in titles {
        let draft = ProjectFormData {
            title: title.to_string(),
            description: format!("{title} description"),
            category: "Branding".to_string(),
            ..Default::default()
        };
        ProjectRepo::save(store, &draft, false)
            .await
            .expect("seeding should succeed");
    }
    store.clear_calls();
}

/// Id of the stored project with this title.
pub fn id_of(store: &MemoryStore, title: &str) -> String {
    store
        .rows("projects")
        .into_iter()
        .find(|row| row["title"] == title)
        .and_then(|row| row["id"].as_str().map(str::to_string))
        .expect("project should exist")
}
