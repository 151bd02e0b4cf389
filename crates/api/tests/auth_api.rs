//! Sign-in over JSON and through the browser form.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Method, Request, StatusCode};
use common::{body_json, body_text, get_signed_in, post_form, post_json, send, send_json, ADMIN_PASSWORD};
use folio_db::store::MemoryStore;
use serde_json::json;

fn app() -> axum::Router {
    common::build_test_app(Arc::new(MemoryStore::new()))
}

#[tokio::test]
async fn json_login_returns_usable_token() {
    let body = json!({"username": "admin", "password": ADMIN_PASSWORD});
    let response = post_json(app(), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["expires_in"], 15 * 60);
    let token = json["access_token"].as_str().unwrap().to_string();

    let response = send_json(
        app(),
        Method::DELETE,
        "/api/v1/projects/missing",
        None,
        Some(&token),
    )
    .await;
    // Authenticated: the store, not the gate, answers.
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn json_login_rejects_bad_credentials() {
    for (username, password) in [("admin", "wrong"), ("someone", ADMIN_PASSWORD)] {
        let body = json!({"username": username, "password": password});
        let response = post_json(app(), "/api/v1/auth/login", body).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"], "Invalid username or password");
    }
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let response = send_json(
        app(),
        Method::DELETE,
        "/api/v1/projects/any",
        None,
        Some("not-a-jwt"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn form_login_sets_cookie_and_redirects() {
    let response = post_form(
        app(),
        "/auth",
        &[("username", "admin"), ("password", ADMIN_PASSWORD)],
        false,
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/admin");
    let cookie = response.headers()[SET_COOKIE].to_str().unwrap().to_string();
    assert!(cookie.starts_with("folio_session="));
    assert!(cookie.contains("HttpOnly"));

    // The cookie opens the admin page.
    let token = cookie
        .trim_start_matches("folio_session=")
        .split(';')
        .next()
        .unwrap()
        .to_string();
    let request = Request::builder()
        .uri("/admin")
        .header(COOKIE, format!("folio_session={token}"))
        .body(Body::empty())
        .unwrap();
    assert_eq!(send(app(), request).await.status(), StatusCode::OK);
}

#[tokio::test]
async fn form_login_failure_rerenders_with_notice() {
    let response = post_form(
        app(),
        "/auth",
        &[("username", "admin"), ("password", "nope")],
        false,
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(SET_COOKIE).is_none());
    let html = body_text(response).await;
    assert!(html.contains("Invalid username or password"));
    assert!(html.contains(r#"value="admin""#));
}

#[tokio::test]
async fn signed_in_visit_to_login_redirects() {
    let response = get_signed_in(app(), "/auth").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/admin");
}

#[tokio::test]
async fn logout_clears_cookie() {
    let response = post_form(app(), "/auth/logout", &[], true).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/");
    assert!(response.headers()[SET_COOKIE]
        .to_str()
        .unwrap()
        .contains("Max-Age=0"));
}
