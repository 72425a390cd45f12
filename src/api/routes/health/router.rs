//! Router for the health check API

use std::sync::{Arc, RwLock};

use axum::{Json, Router, extract::State, routing::get};

use super::public;
use crate::api::state::AppState;
use crate::providers::supported_providers;

type SharedState = Arc<RwLock<AppState>>;

/// Health check, always succeeds
async fn health(State(state): State<SharedState>) -> Json<public::HealthResponse> {
    let provider = state
        .read()
        .expect("Unable to read shared state")
        .config
        .default_provider
        .clone();

    Json(public::HealthResponse {
        status: "ok".to_string(),
        provider,
        supported_providers: supported_providers()
            .iter()
            .map(|name| name.to_string())
            .collect(),
    })
}

/// Create the health router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(health))
}
