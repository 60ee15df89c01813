//! User handler implementations

use axum::{extract::State, http::StatusCode};
use validator::Validate;

use crate::{
    constants::error_messages,
    error::{AppError, AppResult},
    handlers::extract::{Json, Path, Query},
    models::UserId,
    state::AppState,
};

use super::{
    request::{ListUsersQuery, UserDetailsRequestModel},
    response::{OperationStatusModel, RequestOperationName, RequestOperationStatus, UserRest},
};

/// List users (paginated)
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<Vec<UserRest>>> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = state.config().users.page_size(query.limit);

    let users = state.users().list_users(page, limit).await?;

    Ok(Json(users.into_iter().map(UserRest::from).collect()))
}

/// Get a specific user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> AppResult<Json<UserRest>> {
    let user = state.users().get_user_by_user_id(&id).await?;

    Ok(Json(user.into()))
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserDetailsRequestModel>,
) -> AppResult<(StatusCode, Json<UserRest>)> {
    // Validate request
    payload.validate()?;

    let created = state.users().create_user(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Update user profile
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(payload): Json<UserDetailsRequestModel>,
) -> AppResult<Json<UserRest>> {
    // Validate request
    payload.validate()?;

    let updated = state.users().update_user(&id, payload.into()).await?;

    Ok(Json(updated.into()))
}

/// Delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> AppResult<Json<OperationStatusModel>> {
    state
        .users()
        .delete_user(&id)
        .await
        .map_err(|err| match err {
            AppError::NotFound(_) | AppError::ServiceUnavailable(_) => err,
            other => {
                tracing::error!(user_id = %id, error = %other, "Failed to delete user");
                AppError::ServiceUnavailable(error_messages::COULD_NOT_DELETE_RECORD.to_string())
            }
        })?;

    Ok(Json(OperationStatusModel::new(
        RequestOperationName::Delete,
        RequestOperationStatus::Success,
    )))
}
