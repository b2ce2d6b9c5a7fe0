// src/message.rs
use serde::{Deserialize, Serialize};

/// City used whenever the caller leaves the city field blank.
pub const DEFAULT_CITY: &str = "Managua";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub city: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub reply: String,
}

/// Trimmed city, falling back to [`DEFAULT_CITY`] when blank.
pub fn city_or_default(city: &str) -> String {
    let trimmed = city.trim();
    if trimmed.is_empty() {
        DEFAULT_CITY.to_string()
    } else {
        trimmed.to_string()
    }
}
