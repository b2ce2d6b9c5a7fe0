use axum::{Json, extract::State};
use tracing::debug;

use crate::message::{ChatRequest, ChatResponse, city_or_default};
use crate::state::SharedState;

/// Reply for an empty question. The widget rejects empty input before
/// sending, so this path only covers other callers.
pub const EMPTY_QUESTION_HINT: &str =
    "Pregunta algo específico sobre riego, luz o estrés por calor/frío.";

pub async fn chatbot_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let message = payload.message.trim();
    if message.is_empty() {
        return Json(ChatResponse { reply: EMPTY_QUESTION_HINT.to_string() });
    }

    let city = city_or_default(&payload.city);
    debug!(%city, "chat question received");
    let reply = state.advisor.advise(&city, message).await;
    Json(ChatResponse { reply })
}
