//! The local OAuth callback server.

use std::{sync::Arc, time::Duration};

use jamendo::{
    Jamendo,
    cli::wait_for_token,
    server::{bind, start_api_server},
    types::OAuthState,
};
use serde_json::{Value, json};
use tokio::sync::Mutex;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REDIRECT: &str = "http://127.0.0.1/callback";

async fn setup(api: &MockServer) -> (String, Arc<Mutex<Option<OAuthState>>>) {
    let jamendo = Jamendo::builder()
        .client_id("83039c0d")
        .client_secret("s3cr3t")
        .base_url(format!("{}/v3.0", api.uri()))
        .build()
        .unwrap();

    let state = Arc::new(Mutex::new(Some(OAuthState {
        state: "expected-state".to_string(),
        redirect_uri: REDIRECT.to_string(),
        token: None,
    })));

    let listener = bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server_state = Arc::clone(&state);
    tokio::spawn(async move {
        let _ = start_api_server(listener, jamendo, server_state).await;
    });

    (format!("http://{addr}"), state)
}

async fn mount_grant(api: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v3.0/oauth/grant"))
        .and(body_string_contains("code=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "access-1",
            "refresh_token": "refresh-1",
            "expires_in": 3600,
            "scope": "music"
        })))
        .mount(api)
        .await;
}

#[tokio::test]
async fn test_health() {
    let api = MockServer::start().await;
    let (base, _) = setup(&api).await;

    let body: Value = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "jamendo");
    assert_eq!(body["authorization_pending"], true);
}

#[tokio::test]
async fn test_health_after_login() {
    let api = MockServer::start().await;
    mount_grant(&api).await;
    let (base, _) = setup(&api).await;

    reqwest::get(format!("{base}/callback?code=abc&state=expected-state"))
        .await
        .unwrap();

    let body: Value = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["authorization_pending"], false);
}

#[tokio::test]
async fn test_callback_stores_token() {
    let api = MockServer::start().await;
    mount_grant(&api).await;
    let (base, state) = setup(&api).await;

    let html = reqwest::get(format!("{base}/callback?code=abc&state=expected-state"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("Authentication successful"));

    let token = wait_for_token(state, Duration::from_secs(2)).await.unwrap();
    assert_eq!(token.access_token, "access-1");
}

#[tokio::test]
async fn test_state_stays_unlocked_during_exchange() {
    let api = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3.0/oauth/grant"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": "slow-1", "refresh_token": "r" }))
                .set_delay(Duration::from_millis(500)),
        )
        .expect(1)
        .mount(&api)
        .await;
    let (base, state) = setup(&api).await;

    let request = tokio::spawn(reqwest::get(format!(
        "{base}/callback?code=abc&state=expected-state"
    )));
    tokio::time::sleep(Duration::from_millis(150)).await;

    // The grant is still in flight, yet the waiter can read the state.
    let guard = tokio::time::timeout(Duration::from_millis(100), state.lock())
        .await
        .expect("state locked during token exchange");
    assert!(guard.as_ref().unwrap().token.is_none());
    drop(guard);

    let html = request.await.unwrap().unwrap().text().await.unwrap();
    assert!(html.contains("Authentication successful"));
    let token = wait_for_token(state, Duration::from_secs(2)).await.unwrap();
    assert_eq!(token.access_token, "slow-1");
}

#[tokio::test]
async fn test_callback_rejects_wrong_state() {
    let api = MockServer::start().await;
    mount_grant(&api).await;
    let (base, state) = setup(&api).await;

    let html = reqwest::get(format!("{base}/callback?code=abc&state=forged"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("State mismatch"));
    assert!(state.lock().await.as_ref().unwrap().token.is_none());
}

#[tokio::test]
async fn test_callback_without_code() {
    let api = MockServer::start().await;
    let (base, _) = setup(&api).await;

    let html = reqwest::get(format!("{base}/callback?error=access_denied"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("Authorization denied"));

    let html = reqwest::get(format!("{base}/callback?state=expected-state"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("Missing authorization code"));
}

#[tokio::test]
async fn test_wait_for_token_times_out() {
    let state = Arc::new(Mutex::new(None));
    let token = wait_for_token(state, Duration::from_millis(50)).await;
    assert!(token.is_none());
}
