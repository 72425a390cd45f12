//! Public types for the provider discovery API
use serde::Serialize;

#[derive(Serialize)]
pub struct ProvidersResponse {
    pub success: bool,
    pub providers: Vec<String>,
    pub current: String,
}
