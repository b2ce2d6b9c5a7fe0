// src/widget/transport.rs
use async_trait::async_trait;

use crate::error::TransportError;
use crate::message::{ChatRequest, ChatResponse};

/// One outbound chat request/response cycle.
///
/// Implementors encapsulate the wire format and the HTTP client; the widget
/// controller stays decoupled from both.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, TransportError>;
}

/// Production transport: JSON POST to the chat endpoint.
///
/// No request timeout is configured; the caller waits on whatever the
/// underlying client does by default.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|err| TransportError::Transport(err.to_string()))?;

        response
            .json::<ChatResponse>()
            .await
            .map_err(|err| TransportError::ResponseFormat(err.to_string()))
    }
}
