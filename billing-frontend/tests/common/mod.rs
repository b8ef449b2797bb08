#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use billing_frontend::config::{BackendSettings, BillingSettings, SessionSettings};
use billing_frontend::services::supabase::SupabaseClient;
use billing_frontend::startup::build_router;
use billing_frontend::AppState;
use secrecy::Secret;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;
use wiremock::matchers::{header as header_matcher, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_ANON_KEY: &str = "test-anon-key";
pub const TEST_TOKEN: &str = "test-access-token";
pub const TEST_USER_ID: &str = "8d0fd2b3-9ca7-4d9e-a95f-9e13a4a1b0c1";
pub const COOKIE_NAME: &str = "sb-access-token";

pub fn backend_settings(server: &MockServer) -> BackendSettings {
    BackendSettings {
        url: server.uri(),
        anon_key: Secret::new(TEST_ANON_KEY.to_string()),
    }
}

pub fn client(server: &MockServer) -> SupabaseClient {
    SupabaseClient::new(backend_settings(server))
}

pub fn app(server: &MockServer) -> Router {
    let state = AppState::new(
        Arc::new(client(server)),
        SessionSettings::default(),
        BillingSettings::default(),
    );
    build_router(state)
}

pub async fn mount_user(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header_matcher("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": TEST_USER_ID,
            "aud": "authenticated",
            "email": "ada@example.com"
        })))
        .mount(server)
        .await;
}

pub async fn mount_profiles(server: &MockServer, rows: Value) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows))
        .mount(server)
        .await;
}

pub async fn mount_memberships(server: &MockServer, rows: Value) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/team_memberships"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows))
        .mount(server)
        .await;
}

pub fn profile_row(subscribed: Option<bool>) -> Value {
    json!({
        "id": TEST_USER_ID,
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "stripe_is_subscribed": subscribed
    })
}

pub fn billing_request(token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri("/billing");
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, format!("{}={}", COOKIE_NAME, token));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
