//! Public types for the mockup API
use serde::{Deserialize, Serialize};

use crate::history::HistoryEntry;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    // Optional so a missing field is reported as a 400 like a blank
    // one, instead of a deserialization rejection
    pub description: Option<String>,
    pub provider: Option<String>,
    pub session_id: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub html: String,
    pub session_id: String,
    pub provider: String,
    pub history_count: usize,
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub history: Vec<HistoryEntry>,
}
