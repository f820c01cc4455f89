//! User HTTP handlers.
//!
//! - GET /api/v1/users/{id} - Get a user's wallet state

use crate::{app::AppState, error::AppError, models::user::UserResponse};
use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

/// Get a specific user by ID.
///
/// # Response
///
/// - **Success (200 OK)**: Returns the user with current balance
/// - **Error (404)**: User not found
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .store
        .find_user_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(user.into()))
}
