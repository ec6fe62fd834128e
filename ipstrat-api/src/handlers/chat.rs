use crate::error::{ApiError, ApiResult};
use crate::models::{ChatRequest, ChatResponse};
use crate::state::AppState;
use actix_web::{post, web, HttpResponse};
use tracing::info;

const CHAT_UNAVAILABLE: &str = "AI system not available. Please check API key configuration.";

#[post("/chat")]
pub async fn chat(
    state: web::Data<AppState>,
    req: web::Json<ChatRequest>,
) -> ApiResult<HttpResponse> {
    let strategist = state
        .strategist
        .as_ref()
        .ok_or(ApiError::Unavailable(CHAT_UNAVAILABLE))?;

    let message = req.message.trim();
    if message.is_empty() {
        return Err(ApiError::MissingMessage);
    }

    let waited = state.rate_limiter.acquire().await;
    info!(message_chars = message.len(), waited_ms = waited.as_millis() as u64, "Chat request");

    let response = strategist
        .direct()
        .chat(message)
        .await
        .map_err(ApiError::from_chat_failure)?;

    Ok(HttpResponse::Ok().json(ChatResponse {
        success: true,
        response,
        model_used: strategist.model_name().to_string(),
    }))
}
