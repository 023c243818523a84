//! Integration tests for the HTTP surface.
//!
//! Each test drives the full router, layers included, over in-memory
//! adapters and mock clients. No network is involved.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use secrecy::SecretString;
use serde_json::{json, Value};
use tower::ServiceExt;

use xrpl_user_service::adapters::http::{build_router, ApiKeyGuard, AppState, RouterOptions};
use xrpl_user_service::adapters::{
    InMemoryQueueClient, InMemoryUserRepository, MockLedgerClient, MockSigningClient,
};
use xrpl_user_service::domain::signin::AUTH_QUEUE_NAME;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    users: InMemoryUserRepository,
    queue: InMemoryQueueClient,
    ledger: MockLedgerClient,
    signer: MockSigningClient,
}

impl TestApp {
    fn new() -> Self {
        Self::with_options(RouterOptions::default())
    }

    fn with_options(options: RouterOptions) -> Self {
        Self::with_ledger(options, |ledger| ledger)
    }

    fn with_ledger(
        options: RouterOptions,
        configure: impl FnOnce(MockLedgerClient) -> MockLedgerClient,
    ) -> Self {
        let users = InMemoryUserRepository::new();
        let queue = InMemoryQueueClient::new();
        let ledger = configure(
            MockLedgerClient::new().with_account("sEdSender", "rSender", 50_000_000),
        );
        let signer = MockSigningClient::new();

        let state = AppState::new(
            Arc::new(users.clone()),
            Arc::new(queue.clone()),
            Arc::new(ledger.clone()),
            Arc::new(signer.clone()),
        );

        Self {
            router: build_router(state, options),
            users,
            queue,
            ledger,
            signer,
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(json_request("POST", uri, body)).await
    }

    async fn create_user(&self, name: &str, email: &str, age: i32) -> Value {
        let (status, body) = self
            .post_json("/api/v1/users/", json!({"name": name, "email": email, "age": age}))
            .await;
        assert_eq!(status, StatusCode::OK, "create failed: {body}");
        body["data"].clone()
    }
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn signed_callback(txid: &str, user_token: &str) -> Value {
    json!({
        "payloadResponse": {
            "payload_uuidv4": "0f1e2d3c-0000-4000-8000-000000000001",
            "signed": true,
            "txid": txid
        },
        "userToken": {"user_token": user_token}
    })
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn create_then_look_up_user() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/v1/users/",
            json!({"name": "Ann", "email": "ann@example.com", "age": 50}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Operation completed successfully");
    assert_eq!(body["error"], Value::Null);
    let user = &body["data"];
    assert_eq!(user["name"], "Ann");
    assert_eq!(user["email"], "ann@example.com");
    assert_eq!(user["age"], 50);
    let id = user["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());

    let (status, body) = app.get(&format!("/api/v1/users/id/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id.as_str());

    let (status, body) = app.get("/api/v1/users/email/ann@example.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id.as_str());

    let (status, body) = app.get("/api/v1/users/age/50").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = app.get("/api/v1/users/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_email_is_400_and_names_the_email() {
    let app = TestApp::new();
    app.create_user("Ann", "ann@example.com", 30).await;

    let (status, body) = app
        .post_json(
            "/api/v1/users/",
            json!({"name": "Other", "email": "ann@example.com", "age": 40}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"]["code"], "DUPLICATE");
    assert!(body["message"].as_str().unwrap().contains("ann@example.com"));
    assert_eq!(app.users.len().await, 1);
}

#[tokio::test]
async fn out_of_range_ages_are_rejected() {
    let app = TestApp::new();

    for age in [0, 99, -5] {
        let (status, body) = app
            .post_json(
                "/api/v1/users/",
                json!({"name": "Ann", "email": format!("ann{age}@example.com"), "age": age}),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "age {age} should fail");
        assert_eq!(body["error"]["code"], "VALIDATION_FAILED");
        assert!(body["error"]["fields"]["age"].is_string());
    }
    assert!(app.users.is_empty().await);
}

#[tokio::test]
async fn markup_is_stripped_from_names() {
    let app = TestApp::new();
    let user = app
        .create_user("<script>alert(1)</script>Bob", "bob@example.com", 20)
        .await;
    let name = user["name"].as_str().unwrap();
    assert!(!name.contains('<'));
    assert!(!name.contains("script"));
}

#[tokio::test]
async fn malformed_body_is_400_in_envelope() {
    let app = TestApp::new();
    let request = Request::post("/api/v1/users/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"]["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn unknown_and_unparseable_ids_are_404() {
    let app = TestApp::new();

    let (status, body) = app
        .get("/api/v1/users/id/7d3f1a52-8c1e-4c6b-9a0e-2f4b5c6d7e8f")
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (status, _) = app.get("/api/v1/users/id/not-a-uuid").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get("/api/v1/users/email/nobody@example.com").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_age_is_400() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/v1/users/age/forty").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn update_then_delete_user() {
    let app = TestApp::new();
    let user = app.create_user("Ann", "ann@example.com", 30).await;
    let id = user["id"].as_str().unwrap();

    let (status, body) = app
        .send(json_request(
            "PATCH",
            &format!("/api/v1/users/id/{id}"),
            json!({"age": 110}),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["age"], 110);
    assert_eq!(body["data"]["name"], "Ann");

    let (status, _) = app
        .send(
            Request::delete(format!("/api/v1/users/id/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.get(&format!("/api/v1/users/id/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = app.get("/api/v1/users/").await;
    assert!(body["data"].as_array().unwrap().is_empty());

    // the email is free again once the holder is deleted
    app.create_user("Ann Again", "ann@example.com", 31).await;
}

#[tokio::test]
async fn store_outage_is_500_with_generic_message() {
    let app = TestApp::new();
    app.users.set_unavailable(true);

    let (status, body) = app.get("/api/v1/users/").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(body["message"], "An unexpected error occurred.");
    assert!(!body.to_string().contains("switched off"));
}

// =============================================================================
// Sign-in
// =============================================================================

#[tokio::test]
async fn authenticate_returns_payload_and_status_is_readable() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/v1/xumm/auth/").await;
    assert_eq!(status, StatusCode::OK);
    let uuid = body["data"]["uuid"].as_str().unwrap().to_string();
    assert!(body["data"]["next"].is_string());
    assert!(body["data"]["refs"]["qr_png"].is_string());

    app.signer.resolve(&uuid, true, Some("TXID123"));

    let (status, body) = app.get(&format!("/api/v1/xumm/payload/{uuid}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["signed"], true);
    assert_eq!(body["data"]["txid"], "TXID123");
}

#[tokio::test]
async fn signer_outage_is_500() {
    let app = TestApp::new();
    app.signer.set_unavailable(true);

    let (status, body) = app.get("/api/v1/xumm/auth/").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn signed_webhook_publishes_one_event() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json("/api/v1/xumm/webhook", signed_callback("rWalletTx", "tok-1"))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["detail"], "User authenticated successfully");
    assert_eq!(body["data"]["wallet_address"], "rWalletTx");

    let messages = app.queue.messages(AUTH_QUEUE_NAME).await;
    assert_eq!(messages.len(), 1);
    let event: Value = serde_json::from_str(&messages[0]).unwrap();
    assert_eq!(
        event,
        json!({
            "user_wallet_address": "rWalletTx",
            "user_token": "tok-1",
            "status": "authenticated"
        })
    );
}

#[tokio::test]
async fn unsigned_webhook_publishes_nothing() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/v1/xumm/webhook",
            json!({"payloadResponse": {"signed": false}}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["detail"], "User did not complete sign-in successfully");
    assert!(body["data"].get("wallet_address").is_none());
    assert!(app.queue.messages(AUTH_QUEUE_NAME).await.is_empty());
}

#[tokio::test]
async fn webhook_failures_are_500() {
    let app = TestApp::new();

    let request = Request::post("/api/v1/xumm/webhook")
        .body(Body::from("garbage"))
        .unwrap();
    let (status, body) = app.send(request).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");

    app.queue.set_unavailable(true);
    let (status, _) = app
        .post_json("/api/v1/xumm/webhook", signed_callback("rWalletTx", "tok-1"))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// Ledger
// =============================================================================

#[tokio::test]
async fn account_without_seed_is_a_new_faucet_wallet() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/v1/xrpl/account/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["classic_address"].as_str().unwrap().starts_with('r'));
    assert!(body["data"]["seed"].is_string());
}

#[tokio::test]
async fn account_with_seed_header_is_derived() {
    let app = TestApp::new();
    let request = Request::get("/api/v1/xrpl/account/")
        .header("X-Wallet-Seed", "sEdSender")
        .body(Body::empty())
        .unwrap();

    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["classic_address"], "rSender");
    assert!(body["data"].get("seed").is_none());
}

#[tokio::test]
async fn account_info_and_payment() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/v1/xrpl/account/rSender/info").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["balance_drops"], "50000000");

    let (status, body) = app
        .post_json(
            "/api/v1/xrpl/payment",
            json!({"seed": "sEdSender", "amount": 5, "destination": "rReceiver"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["result"], "tesSUCCESS");
    assert_eq!(app.ledger.balance("rReceiver"), Some(5_000_000));

    let (status, _) = app.get("/api/v1/xrpl/account/rNobody/info").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn payment_amount_is_validated() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/v1/xrpl/payment",
            json!({"seed": "sEdSender", "amount": 0, "destination": "rReceiver"}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_FAILED");
    assert_eq!(app.ledger.balance("rSender"), Some(50_000_000));
}

#[tokio::test]
async fn unvalidated_payment_is_500_carrying_the_hash() {
    let app = TestApp::with_ledger(RouterOptions::default(), |ledger| {
        ledger.leave_payments_unvalidated()
    });

    let (status, body) = app
        .post_json(
            "/api/v1/xrpl/payment",
            json!({"seed": "sEdSender", "amount": 5, "destination": "rReceiver"}),
        )
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
    let hash = body["error"]["fields"]["hash"].as_str().unwrap();
    assert!(hash.starts_with("MOCKPENDING"));
}

#[tokio::test]
async fn request_past_its_timeout_still_gets_an_envelope() {
    let options = RouterOptions {
        request_timeout: Duration::from_millis(50),
        ..RouterOptions::default()
    };
    let app = TestApp::with_ledger(options, |ledger| {
        ledger.with_payment_latency(Duration::from_secs(2))
    });

    let (status, body) = app
        .post_json(
            "/api/v1/xrpl/payment",
            json!({"seed": "sEdSender", "amount": 5, "destination": "rReceiver"}),
        )
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
    assert_eq!(app.ledger.balance("rReceiver"), None);
}

// =============================================================================
// Probes, request ids, guard
// =============================================================================

#[tokio::test]
async fn health_and_readiness() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"status": "Healthy", "message": "Service is up and running."})
    );

    let (status, body) = app.get("/api/v1/readiness").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Ready");

    app.queue.set_unavailable(true);
    let (status, body) = app.get("/api/v1/readiness").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "Not Ready");
    assert_eq!(body["checks"]["database"], "ok");
    assert_eq!(body["checks"]["queue"], "unavailable");
}

#[tokio::test]
async fn request_id_is_echoed_or_assigned() {
    let app = TestApp::new();

    let response = app
        .router
        .clone()
        .oneshot(
            Request::get("/api/v1/health")
                .header("x-request-id", "caller-chosen-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "caller-chosen-id");

    let response = app
        .router
        .clone()
        .oneshot(Request::get("/api/v1/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let assigned = response.headers()["x-request-id"].to_str().unwrap();
    assert_eq!(assigned.len(), 36);
}

#[tokio::test]
async fn api_key_guard_covers_api_routes_only() {
    let app = TestApp::with_options(RouterOptions {
        api_key: ApiKeyGuard::required(SecretString::new("service-key".to_string())),
        ..Default::default()
    });

    let (status, body) = app.get("/api/v1/users/").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Could not validate credentials");

    let (status, _) = app
        .send(
            Request::get("/api/v1/users/")
                .header("X-API-Key", "wrong")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .send(
            Request::get("/api/v1/users/")
                .header("X-API-Key", "service-key")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.get("/api/v1/xumm/auth/").await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.get("/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .post_json("/api/v1/xumm/webhook", json!({"payloadResponse": {"signed": false}}))
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_is_404_envelope() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/v1/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
}
