//! Router for the provider discovery API

use std::sync::{Arc, RwLock};

use axum::{Json, Router, extract::State, routing::get};

use super::public;
use crate::api::state::AppState;
use crate::providers::supported_providers;

type SharedState = Arc<RwLock<AppState>>;

/// List the supported providers and the configured default
async fn list_providers(State(state): State<SharedState>) -> Json<public::ProvidersResponse> {
    let current = state
        .read()
        .expect("Unable to read shared state")
        .config
        .default_provider
        .clone();

    Json(public::ProvidersResponse {
        success: true,
        providers: supported_providers()
            .iter()
            .map(|name| name.to_string())
            .collect(),
        current,
    })
}

/// Create the providers router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(list_providers))
}
