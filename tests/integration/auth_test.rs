//! Integration tests for the register/login flow and bearer token checks.

use chrono::{Duration, Utc};
use http::StatusCode;

use hotels_entity::user::UserRole;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_register_then_login_issues_token_for_that_user() {
    let app = TestApp::new();

    let registered = app.register("alice", "secret1", "ADMIN").await;
    assert_eq!(registered.status, StatusCode::OK);
    assert_eq!(registered.text, "User registered with role: ADMIN");

    let login = app.login("alice", "secret1").await;
    assert_eq!(login.status, StatusCode::OK);
    assert_eq!(login.text.split('.').count(), 3);

    let claims = app
        .state
        .auth
        .tokens()
        .parse_and_verify(&login.text, Utc::now())
        .unwrap();
    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.role, UserRole::Admin);
}

#[tokio::test]
async fn test_role_must_match_exactly() {
    let app = TestApp::new();
    for role in ["admin", "user", " USER "] {
        let response = app.register("carol", "secret1", role).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "role {role:?}");
    }

    let registered = app.register("carol", "secret1", "USER").await;
    assert_eq!(registered.status, StatusCode::OK);
    assert_eq!(registered.text, "User registered with role: USER");
}

#[tokio::test]
async fn test_register_rejects_invalid_role() {
    let app = TestApp::new();
    let response = app.register("alice", "secret1", "ROOT").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    // Nothing was stored.
    let login = app.login("alice", "secret1").await;
    assert_eq!(login.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_rejects_short_fields() {
    let app = TestApp::new();
    assert_eq!(
        app.register("al", "secret1", "USER").await.status,
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        app.register("alice", "123", "USER").await.status,
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({ "username": "alice" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let app = TestApp::new();
    assert_eq!(
        app.register("alice", "secret1", "ADMIN").await.status,
        StatusCode::OK
    );

    let duplicate = app.register("alice", "secret2", "USER").await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);
    assert_eq!(duplicate.body["error"], "CONFLICT");

    // The first registration is untouched.
    assert_eq!(app.login("alice", "secret1").await.status, StatusCode::OK);
    assert_eq!(
        app.login("alice", "secret2").await.status,
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
async fn test_wrong_password_and_unknown_user_are_indistinguishable() {
    let app = TestApp::new();
    app.register("alice", "secret1", "ADMIN").await;

    let wrong = app.login("alice", "wrongpass").await;
    let unknown = app.login("bob", "x").await;

    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.body, unknown.body);
    assert_eq!(wrong.body["message"], "Invalid username or password");
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/hotels", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Authentication required");
}

#[tokio::test]
async fn test_tampered_token_rejected() {
    let app = TestApp::new();
    let alice = app.token_for("alice", "secret1", "USER").await;
    let mallory = app.token_for("mallory", "secret1", "ADMIN").await;

    let alice_parts: Vec<&str> = alice.split('.').collect();
    let mallory_parts: Vec<&str> = mallory.split('.').collect();
    let forged = format!("{}.{}.{}", alice_parts[0], mallory_parts[1], alice_parts[2]);

    let response = app.request("GET", "/api/hotels", None, Some(&forged)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = TestApp::new();
    app.register("alice", "secret1", "ADMIN").await;

    let issued_at = Utc::now() - app.state.auth.tokens().ttl() - Duration::minutes(1);
    let stale = app
        .state
        .auth
        .tokens()
        .issue("alice", UserRole::Admin, issued_at)
        .unwrap();

    let response = app
        .request("GET", "/api/hotels", None, Some(&stale.token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_token_for_unknown_subject_rejected() {
    let app = TestApp::new();
    let ghost = app
        .state
        .auth
        .tokens()
        .issue("ghost", UserRole::Admin, Utc::now())
        .unwrap();

    let response = app
        .request("GET", "/api/hotels", None, Some(&ghost.token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let app = TestApp::new();
    let response = app
        .request("GET", "/api/hotels", None, Some("definitely-not-a-jwt"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_succeeds_with_stale_bearer_header() {
    let app = TestApp::new();
    app.register("alice", "secret1", "ADMIN").await;

    let issued_at = Utc::now() - app.state.auth.tokens().ttl() - Duration::minutes(1);
    let stale = app
        .state
        .auth
        .tokens()
        .issue("alice", UserRole::Admin, issued_at)
        .unwrap();

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "username": "alice", "password": "secret1" })),
            Some(&stale.token),
        )
        .await;
    assert_eq!(login.status, StatusCode::OK, "{}", login.text);
    assert!(app.state.auth.tokens().is_valid(&login.text, "alice", Utc::now()));

    let register = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "bob",
                "password": "secret1",
                "role": "USER",
            })),
            Some("garbage"),
        )
        .await;
    assert_eq!(register.status, StatusCode::OK, "{}", register.text);
}

#[tokio::test]
async fn test_health_ignores_bad_bearer_header() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/health", None, Some("garbage")).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}
