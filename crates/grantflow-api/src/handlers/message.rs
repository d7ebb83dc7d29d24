//! Message handlers.

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use grantflow_core::error::AppError;
use grantflow_core::types::DocumentId;
use grantflow_entity::message::Message;

use crate::dto::request::SendMessageRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/messages
pub async fn send_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<SendMessageRequest>,
) -> Result<Json<ApiResponse<Message>>, ApiError> {
    if req.application_id.is_nil() {
        return Err(AppError::validation("Application id must be present").into());
    }

    let attachments: Vec<DocumentId> = req.attachments.into_iter().map(Into::into).collect();
    let message = state
        .message_service
        .send(
            &auth,
            req.application_id.into(),
            req.receiver_id.into(),
            req.content,
            attachments,
        )
        .await?;
    Ok(Json(ApiResponse::ok(message)))
}

/// PUT /api/messages/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Message>>, ApiError> {
    let message = state.message_service.mark_read(id.into()).await?;
    Ok(Json(ApiResponse::ok(message)))
}
