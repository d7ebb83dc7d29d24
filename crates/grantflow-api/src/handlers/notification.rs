//! Notification handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use uuid::Uuid;

use grantflow_core::error::AppError;
use grantflow_core::types::pagination::PageResponse;
use grantflow_entity::notification::Notification;

use crate::dto::request::CreateNotificationRequest;
use crate::dto::response::{ApiResponse, CountResponse, MarkedResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Notification>>>, ApiError> {
    let page = state
        .notification_dispatcher
        .list_for_user(&auth, params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// POST /api/notifications
pub async fn create_notification(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<CreateNotificationRequest>,
) -> Result<Json<ApiResponse<Notification>>, ApiError> {
    if req.user_id.is_nil() {
        return Err(AppError::validation("Recipient must be present").into());
    }

    let notification = state
        .notification_dispatcher
        .notify(req.user_id.into(), req.kind, req.title, req.body, req.payload)
        .await?;
    Ok(Json(ApiResponse::ok(notification)))
}

/// GET /api/notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<CountResponse>>, ApiError> {
    let count = state.notification_dispatcher.unread_count(&auth).await?;
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}

/// PUT /api/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Notification>>, ApiError> {
    let notification = state.notification_dispatcher.mark_read(id.into()).await?;
    Ok(Json(ApiResponse::ok(notification)))
}

/// PUT /api/notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MarkedResponse>>, ApiError> {
    let marked = state.notification_dispatcher.mark_all_read(&auth).await?;
    Ok(Json(ApiResponse::ok(MarkedResponse { marked })))
}
