//! Router for mockup generation and per-session history

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use chrono::Utc;
use uuid::Uuid;

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::history::HistoryEntry;
use crate::providers::{ProviderError, create_provider};

type SharedState = Arc<RwLock<AppState>>;

/// Generate an HTML mockup from a natural-language description,
/// replaying any prior exchanges for the session as context
async fn generate_mockup(
    State(state): State<SharedState>,
    Json(payload): Json<public::GenerateRequest>,
) -> Result<Json<public::GenerateResponse>, ApiError> {
    let description = payload.description.clone().unwrap_or_default();
    if description.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Description is required and must be a non-empty string".to_string(),
        ));
    }

    let (provider_type, config) = {
        let shared_state = state.read().expect("Unable to read shared state");
        let provider_type = payload
            .provider
            .clone()
            .unwrap_or_else(|| shared_state.config.default_provider.clone());
        (provider_type, shared_state.config.clone())
    };

    // An unknown provider key is a client error, distinct from a
    // downstream generation failure
    let provider = create_provider(&provider_type, &config).map_err(|err| match err {
        ProviderError::Unsupported { .. } => ApiError::BadRequest(err.to_string()),
        other => ApiError::Internal(other.into()),
    })?;

    let session_id = payload
        .session_id
        .clone()
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string());

    // Snapshot the history before the upstream call. The lock is
    // never held across the await, so concurrent generations for the
    // same session race on read-then-append; each entry carries its
    // own timestamp.
    let history = {
        let shared_state = state.read().expect("Unable to read shared state");
        shared_state.history.turns(&session_id)
    };

    tracing::info!("Generating mockup using {} provider", provider.name());

    let html = provider
        .generate_mockup(&description, &history)
        .await
        .map_err(|err| ApiError::Internal(err.into()))?;

    // History is only appended on success, a failed generation leaves
    // the session unchanged
    let history_count = {
        let mut shared_state = state.write().expect("Unable to write shared state");
        shared_state.history.append(
            &session_id,
            HistoryEntry {
                description: description.clone(),
                html: html.clone(),
                timestamp: Utc::now(),
                provider: provider.name().to_string(),
            },
        )
    };

    Ok(Json(public::GenerateResponse {
        success: true,
        html,
        session_id,
        provider: provider.name().to_string(),
        history_count,
    }))
}

/// Get the full mockup history for a session
async fn session_history(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> Result<Json<public::HistoryResponse>, ApiError> {
    let shared_state = state.read().expect("Unable to read shared state");
    let history = shared_state
        .history
        .get(&session_id)
        .ok_or_else(|| ApiError::NotFound("Session not found".to_string()))?;

    Ok(Json(public::HistoryResponse {
        success: true,
        history: history.to_vec(),
    }))
}

/// Create the mockups router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/generate", post(generate_mockup))
        .route("/history/{session_id}", get(session_history))
}
