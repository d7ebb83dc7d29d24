//! `AuthUser` extractor — resolves the caller identity forwarded by the
//! platform gateway and injects a request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use grantflow_core::error::AppError;
use grantflow_core::types::UserId;
use grantflow_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the authenticated user id, set by the gateway after
/// token validation.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing x-user-id header"))?;

        let user_id: Uuid = header
            .parse()
            .map_err(|_| AppError::unauthorized("Invalid x-user-id header"))?;

        if user_id.is_nil() {
            return Err(AppError::unauthorized("Invalid x-user-id header").into());
        }

        Ok(AuthUser(RequestContext::new(UserId::from(user_id))))
    }
}
