// src/error.rs
use thiserror::Error;

/// Failures of one widget-side chat send.
///
/// Both kinds collapse to the same user-facing fallback text in the widget;
/// the distinction only matters for logging.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network unreachable or the endpoint answered with a non-2xx status.
    #[error("chat request failed: {0}")]
    Transport(String),
    /// The endpoint answered 2xx but the body was not the expected JSON.
    #[error("chat response body was not valid JSON: {0}")]
    ResponseFormat(String),
}

/// Failures of the AI advice path. All of them are logged and answered
/// with locally generated tips instead.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("advice model request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("advice model returned no completion")]
    EmptyCompletion,
}

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("weather lookup failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("weather service answered with status {0}")]
    Status(reqwest::StatusCode),
}
