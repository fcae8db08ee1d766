//! Axum route handlers for the Resume API.

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::state::AppState;

pub const DELETE_SUCCESS_MESSAGE: &str = "Resume deleted successfully";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRequest {
    pub user_description: String,
}

/// POST /api/v1/resume/generate
///
/// Returns the service's result map unchanged.
pub async fn handle_generate(
    State(state): State<AppState>,
    principal: AuthenticatedUser,
    body: Result<Json<ResumeRequest>, JsonRejection>,
) -> Result<Json<Map<String, Value>>, AppError> {
    let Json(request) = body.map_err(|e| AppError::Validation(e.body_text()))?;
    if request.user_description.trim().is_empty() {
        return Err(AppError::Validation(
            "userDescription cannot be empty".to_string(),
        ));
    }

    let result = state
        .resume_service
        .generate_resume_response(&principal.email, &request.user_description)
        .await?;

    Ok(Json(result))
}

/// GET /api/v1/resume/list
///
/// A principal without a user record gets a bare 401 so the response does not
/// reveal whether the account exists.
pub async fn handle_list(
    State(state): State<AppState>,
    principal: AuthenticatedUser,
) -> Result<Response, AppError> {
    let Some(user) = state.users.find_by_email(&principal.email).await? else {
        return Ok(StatusCode::UNAUTHORIZED.into_response());
    };

    let resumes = state.resumes.find_by_user(&user).await?;
    info!("Listed {} resumes for user {}", resumes.len(), user.id);
    Ok(Json(resumes).into_response())
}

/// DELETE /api/v1/resume/:id
///
/// Ownership is enforced by the service.
pub async fn handle_delete(
    State(state): State<AppState>,
    principal: AuthenticatedUser,
    id: Result<Path<i64>, PathRejection>,
) -> Result<&'static str, AppError> {
    let Path(id) = id.map_err(|e| AppError::Validation(e.body_text()))?;

    state
        .resume_service
        .delete_resume(id, &principal.email)
        .await?;

    Ok(DELETE_SUCCESS_MESSAGE)
}
