//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use hotels_api::{AppState, build_app};
use hotels_core::config::{AppConfig, StoreProvider};
use hotels_database::Stores;

pub const TEST_SECRET: &str = "integration-test-secret-with-32-plus-bytes";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application state, for reaching the stores and token service directly
    pub state: AppState,
}

/// A fully buffered response.
pub struct TestResponse {
    pub status: StatusCode,
    /// Raw body text (login and register answer with plain text).
    pub text: String,
    /// Body parsed as JSON, `Value::Null` if it is not JSON.
    pub body: Value,
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.database.provider = StoreProvider::Memory;
    config.auth.jwt_secret = TEST_SECRET.to_string();
    config.auth.password_hash_memory_kib = 1024;
    config.auth.password_hash_iterations = 1;
    config
}

impl TestApp {
    /// Create a new test application over empty in-memory stores
    pub fn new() -> Self {
        let config = test_config();
        config.validate().expect("test config is valid");

        let state = AppState::new(config, Stores::in_memory()).expect("Failed to build state");
        let router = build_app(state.clone());
        Self { router, state }
    }

    /// Send a request and buffer the response.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        self.send(request).await
    }

    /// Send a prepared request and buffer the response.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let text = String::from_utf8_lossy(&bytes).into_owned();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, text, body }
    }

    /// Register a user through the API.
    pub async fn register(&self, username: &str, password: &str, role: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": username,
                "password": password,
                "role": role,
            })),
            None,
        )
        .await
    }

    /// Log in through the API.
    pub async fn login(&self, username: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": username,
                "password": password,
            })),
            None,
        )
        .await
    }

    /// Register, log in, and return the bearer token.
    pub async fn token_for(&self, username: &str, password: &str, role: &str) -> String {
        let registered = self.register(username, password, role).await;
        assert_eq!(registered.status, StatusCode::OK, "{}", registered.text);
        let login = self.login(username, password).await;
        assert_eq!(login.status, StatusCode::OK, "{}", login.text);
        login.text
    }

    /// Create a hotel and return its id.
    pub async fn create_hotel(&self, token: &str, name: &str, category: i32, city: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/hotels",
                Some(hotel_json(name, category, city)),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.text);
        response.body["id"].as_i64().expect("hotel id")
    }
}

pub fn address_json(city: &str) -> Value {
    serde_json::json!({
        "street": "1 Main Street",
        "city": city,
        "country": "Portugal",
        "zipCode": "1000-001",
    })
}

pub fn hotel_json(name: &str, category: i32, city: &str) -> Value {
    serde_json::json!({
        "name": name,
        "category": category,
        "address": address_json(city),
    })
}
