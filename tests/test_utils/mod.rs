//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};

use mockup_server::api::AppState;
use mockup_server::api::app;
use mockup_server::core::{AppConfig, ProviderConfig};

/// Configuration with both providers pointed at `api_url`. Port 9 is
/// used as the default upstream so any unexpected outbound call fails
/// instead of hitting a real API.
pub fn test_config(api_url: &str) -> AppConfig {
    AppConfig {
        host: String::from("127.0.0.1"),
        port: String::from("0"),
        default_provider: String::from("xai"),
        xai: ProviderConfig {
            api_key: String::from("test-api-key"),
            api_url: api_url.to_string(),
            model: String::from("grok-beta"),
        },
        zai: ProviderConfig {
            api_key: String::from("test-api-key"),
            api_url: api_url.to_string(),
            model: String::from("glm-4-plus"),
        },
    }
}

/// Creates a test application router with the given config and a
/// fresh in-memory history store.
pub fn test_app_with_config(config: AppConfig) -> Router {
    let app_state = AppState::new(config);
    app(Arc::new(RwLock::new(app_state)))
}

/// Creates a test application router whose upstream calls would fail
/// fast. Suitable for tests that never reach a provider.
pub fn test_app() -> Router {
    test_app_with_config(test_config("http://127.0.0.1:9"))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body was not valid UTF-8")
}
