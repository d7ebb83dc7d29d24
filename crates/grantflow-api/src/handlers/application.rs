//! Application lifecycle handlers.

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use grantflow_entity::application::Application;

use crate::dto::request::{CreateApplicationRequest, UpdateStatusRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/applications
pub async fn create_application(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateApplicationRequest>,
) -> Result<Json<ApiResponse<Application>>, ApiError> {
    let application = state
        .lifecycle_service
        .create_application(&auth, req.program_id.into(), req.answers)
        .await?;
    Ok(Json(ApiResponse::ok(application)))
}

/// GET /api/applications
pub async fn list_applications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Application>>>, ApiError> {
    let applications = state.lifecycle_service.list_applications(&auth).await?;
    Ok(Json(ApiResponse::ok(applications)))
}

/// GET /api/applications/{id}
pub async fn get_application(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Application>>, ApiError> {
    let application = state.lifecycle_service.get_application(id.into()).await?;
    Ok(Json(ApiResponse::ok(application)))
}

/// PUT /api/applications/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<ApiResponse<Application>>, ApiError> {
    let application = state
        .lifecycle_service
        .transition(&auth, id.into(), req.status, req.answers)
        .await?;
    Ok(Json(ApiResponse::ok(application)))
}
