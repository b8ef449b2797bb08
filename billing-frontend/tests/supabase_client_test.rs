mod common;

use billing_frontend::models::RequestContext;
use billing_frontend::services::backend::{BackendClient, BackendError};
use common::*;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn session(server: &MockServer) -> billing_frontend::models::Session {
    mount_user(server).await;
    client(server)
        .get_session(&RequestContext::with_access_token(TEST_TOKEN))
        .await
        .unwrap()
        .expect("session")
}

#[tokio::test]
async fn anonymous_context_makes_no_request() {
    let server = MockServer::start().await;

    let session = client(&server)
        .get_session(&RequestContext::anonymous())
        .await
        .unwrap();

    assert!(session.is_none());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn session_lookup_sends_apikey_and_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("apikey", TEST_ANON_KEY))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "user-42",
            "email": "grace@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = client(&server)
        .get_session(&RequestContext::with_access_token("abc"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(session.user_id, "user-42");
    assert_eq!(session.email.as_deref(), Some("grace@example.com"));
    assert_eq!(session.access_token(), "abc");
}

#[tokio::test]
async fn forbidden_token_is_no_session() {
    let server = MockServer::start().await;
    Mock::given(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let session = client(&server)
        .get_session(&RequestContext::with_access_token("abc"))
        .await
        .unwrap();

    assert!(session.is_none());
}

#[tokio::test]
async fn auth_outage_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let result = client(&server)
        .get_session(&RequestContext::with_access_token("abc"))
        .await;

    match result {
        Err(BackendError::Status { status, body }) => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(body, "upstream down");
        }
        other => panic!("expected status error, got {:?}", other.map(|s| s.is_some())),
    }
}

#[tokio::test]
async fn profile_read_is_scoped_to_user() {
    let server = MockServer::start().await;
    let session = session(&server).await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .and(query_param("select", "id,name,email,stripe_is_subscribed"))
        .and(query_param("id", format!("eq.{}", TEST_USER_ID).as_str()))
        .and(header("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([profile_row(Some(true))])))
        .expect(1)
        .mount(&server)
        .await;

    let profile = client(&server).get_profile(&session).await.unwrap().unwrap();

    assert_eq!(profile.name.as_deref(), Some("Ada Lovelace"));
    assert!(profile.is_subscribed());
}

#[tokio::test]
async fn empty_profile_result_is_none() {
    let server = MockServer::start().await;
    let session = session(&server).await;
    mount_profiles(&server, json!([])).await;

    let profile = client(&server).get_profile(&session).await.unwrap();

    assert!(profile.is_none());
}

#[tokio::test]
async fn several_profile_rows_are_rejected() {
    let server = MockServer::start().await;
    let session = session(&server).await;
    mount_profiles(
        &server,
        json!([profile_row(Some(true)), profile_row(Some(false))]),
    )
    .await;

    let result = client(&server).get_profile(&session).await;

    assert!(matches!(result, Err(BackendError::UnexpectedRows(2))));
}

#[tokio::test]
async fn memberships_rely_on_bearer_scoping_and_decode_embedded_teams() {
    let server = MockServer::start().await;
    let session = session(&server).await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/team_memberships"))
        .and(query_param("select", "id,teams(name,id)"))
        .and(query_param_is_missing("user_id"))
        .and(header("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "m1", "teams": { "name": "Acme", "id": "t1" } },
            { "id": "m2", "teams": null }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let memberships = client(&server).get_memberships(&session).await.unwrap();

    assert_eq!(memberships.len(), 2);
    assert_eq!(memberships[0].team.as_ref().unwrap().name, "Acme");
    assert!(memberships[1].team.is_none());
}

#[tokio::test]
async fn malformed_rows_are_a_decode_error() {
    let server = MockServer::start().await;
    let session = session(&server).await;
    Mock::given(path("/rest/v1/team_memberships"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let result = client(&server).get_memberships(&session).await;

    assert!(matches!(result, Err(BackendError::Decode(_))));
}
