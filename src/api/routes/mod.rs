//! API routes module

pub mod health;
pub mod mockups;
pub mod providers;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Health check
        .nest("/health", health::router())
        // Provider discovery
        .nest("/providers", providers::router())
        // Mockup generation and session history
        .merge(mockups::router())
}
