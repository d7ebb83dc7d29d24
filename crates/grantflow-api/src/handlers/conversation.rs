//! Conversation handlers.

use axum::extract::State;
use axum::Json;

use grantflow_entity::conversation::ConversationSummary;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/conversations
pub async fn list_conversations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<ConversationSummary>>>, ApiError> {
    let conversations = state.conversation_service.list_conversations(&auth).await?;
    Ok(Json(ApiResponse::ok(conversations)))
}
