//! End-to-end behaviour of the bearer/refresh/retry path against a mock
//! server.

mod support;

use std::time::Duration;

use futures::future::join_all;
use jobmatch_common::StorageKey;
use jobmatch_infra::{ApiError, RequestOptions};
use serde_json::{json, Value};
use support::{envelope, refresh_success, TestApi};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, Request, ResponseTemplate};

async fn get_profile(api: &TestApi) -> Result<Value, ApiError> {
    api.client.get("/users/u1", RequestOptions::default()).await
}

#[tokio::test]
async fn every_request_carries_the_stored_access_token() {
    let api = TestApi::with_tokens("access-1", "refresh-1").await;

    Mock::given(method("GET"))
        .and(path("/api/users/u1"))
        .and(header("Authorization", "Bearer access-1"))
        .respond_with(envelope(json!({"id": "u1"})))
        .expect(2)
        .mount(&api.server)
        .await;

    get_profile(&api).await.unwrap();
    get_profile(&api).await.unwrap();
}

#[tokio::test]
async fn concurrent_401s_share_one_refresh_and_all_succeed() {
    let api = TestApi::with_tokens("expired", "valid-refresh").await;

    Mock::given(method("GET"))
        .and(path("/api/users/u1"))
        .and(header("Authorization", "Bearer expired"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Token expired"})))
        .expect(5)
        .mount(&api.server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .and(body_json(json!({"refresh_token": "valid-refresh"})))
        .respond_with(refresh_success("fresh", "rotated").set_delay(Duration::from_millis(300)))
        .expect(1)
        .mount(&api.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/users/u1"))
        .and(header("Authorization", "Bearer fresh"))
        .respond_with(envelope(json!({"id": "u1"})))
        .expect(5)
        .mount(&api.server)
        .await;

    let results = join_all((0..5).map(|_| get_profile(&api))).await;

    for result in results {
        assert_eq!(result.unwrap()["data"]["id"], "u1");
    }
    assert_eq!(api.client.refreshes_started(), 1);
    assert_eq!(api.store.get(StorageKey::AccessToken).as_deref(), Some("fresh"));
    assert_eq!(api.store.get(StorageKey::RefreshToken).as_deref(), Some("rotated"));
}

#[tokio::test]
async fn new_pair_is_stored_before_any_retry_is_sent() {
    let api = TestApi::with_tokens("expired", "valid-refresh").await;

    Mock::given(method("GET"))
        .and(path("/api/users/u1"))
        .and(header("Authorization", "Bearer expired"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&api.server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(refresh_success("fresh", "rotated").set_delay(Duration::from_millis(100)))
        .expect(1)
        .mount(&api.server)
        .await;

    let store = api.store.clone();
    Mock::given(method("GET"))
        .and(path("/api/users/u1"))
        .and(header("Authorization", "Bearer fresh"))
        .respond_with(move |_: &Request| {
            let access = store.get(StorageKey::AccessToken);
            let refresh = store.get(StorageKey::RefreshToken);
            if access.as_deref() == Some("fresh") && refresh.as_deref() == Some("rotated") {
                envelope(json!({"stored_before_retry": true}))
            } else {
                ResponseTemplate::new(409)
                    .set_body_json(json!({"error": "retry raced the token write"}))
            }
        })
        .expect(3)
        .mount(&api.server)
        .await;

    let results = join_all((0..3).map(|_| get_profile(&api))).await;
    for result in results {
        assert_eq!(result.unwrap()["data"]["stored_before_retry"], true);
    }
}

#[tokio::test]
async fn refresh_call_bypasses_bearer_and_retry_logic() {
    let api = TestApi::with_tokens("expired", "valid-refresh").await;

    Mock::given(method("GET"))
        .and(path("/api/users/u1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&api.server)
        .await;

    // A 401 from the refresh endpoint must not start another refresh
    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&api.server)
        .await;

    let err = get_profile(&api).await.unwrap_err();
    assert!(err.is_unauthorized());

    let requests = api.server.received_requests().await.unwrap();
    let refresh = requests.iter().find(|r| r.url.path() == "/api/auth/refresh").unwrap();
    assert!(refresh.headers.get("authorization").is_none());
}

#[tokio::test]
async fn invalid_refresh_token_wipes_credentials_and_returns_401() {
    let store = jobmatch_common::MemoryCredentialStore::with_tokens("expired", "revoked");
    store.insert(StorageKey::UserProfile, r#"{"id":"u1"}"#);
    let api = TestApi::start_with(store).await;

    Mock::given(method("GET"))
        .and(path("/api/users/u1"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Session expired"})),
        )
        .expect(1)
        .mount(&api.server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"success": false, "error": "Invalid refresh token"})),
        )
        .expect(1)
        .mount(&api.server)
        .await;

    let err = get_profile(&api).await.unwrap_err();

    assert_eq!(err, ApiError::Unauthorized { message: "Session expired".into() });
    assert_eq!(err.status(), Some(401));
    assert!(api.credentials_wiped());
}

#[tokio::test]
async fn failed_refresh_is_delivered_to_every_waiter() {
    let store = jobmatch_common::MemoryCredentialStore::with_tokens("expired", "revoked");
    store.insert(StorageKey::UserProfile, r#"{"id":"u1"}"#);
    let api = TestApi::start_with(store).await;

    Mock::given(method("GET"))
        .and(path("/api/users/u1"))
        .respond_with(ResponseTemplate::new(401))
        .expect(4)
        .mount(&api.server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": false, "message": "Refresh token expired"}))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&api.server)
        .await;

    let results = join_all((0..4).map(|_| get_profile(&api))).await;

    assert!(results.iter().all(|r| matches!(r, Err(e) if e.is_unauthorized())));
    assert_eq!(api.client.refreshes_started(), 1);
    assert!(api.credentials_wiped());
}

#[tokio::test]
async fn non_401_failures_are_never_retried() {
    let api = TestApi::with_tokens("access", "refresh").await;

    Mock::given(method("GET"))
        .and(path("/api/users/u1"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "Upstream unavailable"})),
        )
        .expect(1)
        .mount(&api.server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(refresh_success("x", "y"))
        .expect(0)
        .mount(&api.server)
        .await;

    let err = get_profile(&api).await.unwrap_err();
    assert_eq!(err, ApiError::Status { status: 500, message: "Upstream unavailable".into() });
    assert_eq!(api.store.get(StorageKey::AccessToken).as_deref(), Some("access"));
}

#[tokio::test]
async fn transport_failures_are_reported_without_status() {
    let api = TestApi::with_tokens("access", "refresh").await;
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = jobmatch_infra::ApiClient::new(
        jobmatch_infra::ApiClientConfig {
            base_url: format!("http://{addr}/api"),
            ..Default::default()
        },
        api.session(),
    )
    .unwrap();

    let err = client.get::<Value>("/users/u1", RequestOptions::default()).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
    assert_eq!(err.status(), None);
    assert!(!err.message().is_empty());
    assert_eq!(api.store.get(StorageKey::AccessToken).as_deref(), Some("access"));
}

#[tokio::test]
async fn a_later_expiry_starts_a_new_refresh_cycle() {
    let api = TestApi::with_tokens("expired-1", "refresh-1").await;

    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(envelope(json!({"jobs": []})))
        .mount(&api.server)
        .await;

    for (expired, refresh, fresh, rotated) in [
        ("expired-1", "refresh-1", "fresh-1", "refresh-2"),
        ("fresh-1", "refresh-2", "fresh-2", "refresh-3"),
    ] {
        Mock::given(method("GET"))
            .and(path("/api/jobs"))
            .and(header("Authorization", format!("Bearer {expired}").as_str()))
            .respond_with(ResponseTemplate::new(401))
            .up_to_n_times(1)
            .with_priority(1)
            .mount(&api.server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/auth/refresh"))
            .and(body_json(json!({"refresh_token": refresh})))
            .respond_with(refresh_success(fresh, rotated))
            .expect(1)
            .mount(&api.server)
            .await;

        api.client.get::<Value>("/jobs", RequestOptions::default()).await.unwrap();
        assert_eq!(api.store.get(StorageKey::AccessToken).as_deref(), Some(fresh));
    }

    assert_eq!(api.client.refreshes_started(), 2);
    assert_eq!(api.store.get(StorageKey::RefreshToken).as_deref(), Some("refresh-3"));
}
