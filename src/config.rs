// src/config.rs
use std::env;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_CHAT_ENDPOINT: &str = "http://localhost:3000/chatbot";

/// Runtime configuration, read once from the environment (`.env` included).
///
/// Missing API keys do not abort startup; the affected feature degrades to
/// its local fallback instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub openai_api_key: Option<String>,
    pub chat_model: String,
    pub openweather_api_key: Option<String>,
    /// Endpoint the terminal front-end talks to.
    pub chat_endpoint: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_or("BIND_ADDR", DEFAULT_BIND_ADDR),
            openai_api_key: non_empty_env("OPENAI_API_KEY"),
            chat_model: env_or("OPENAI_CHAT_MODEL", DEFAULT_CHAT_MODEL),
            openweather_api_key: non_empty_env("OPENWEATHER_API_KEY"),
            chat_endpoint: env_or("CHAT_ENDPOINT", DEFAULT_CHAT_ENDPOINT),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    non_empty_env(key).unwrap_or_else(|| default.to_string())
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
