//! User API routes
//!
//! Each handler performs exactly one store operation. Lookups by an
//! identifier that is malformed or unknown answer 404 with an empty body.
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use roster_core::{NewUser, User, UserChanges, UserId};

/// POST /api/users - Create a user
pub async fn create_user(
    State(app_state): State<AppState>,
    Json(body): Json<NewUser>,
) -> Result<(StatusCode, Json<User>)> {
    let user = app_state.users.create(body).await?;
    tracing::debug!(user_id = %user.id, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users - List all users
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = app_state.users.list_all().await?;
    Ok(Json(users))
}

/// GET /api/users/:id - Get a user
pub async fn get_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let id = parse_id(&id)?;

    let user = app_state
        .users
        .find_by_id(&id)
        .await?
        .ok_or(ServerError::NotFound)?;

    Ok(Json(user))
}

/// PUT /api/users/:id - Replace the supplied fields of a user
pub async fn update_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    Json(body): Json<UserChanges>,
) -> Result<Json<User>> {
    let id = parse_id(&id)?;

    let user = app_state
        .users
        .update_by_id(&id, body)
        .await?
        .ok_or(ServerError::NotFound)?;

    Ok(Json(user))
}

/// DELETE /api/users/:id - Delete a user, returning its prior contents
pub async fn delete_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let id = parse_id(&id)?;

    let user = app_state
        .users
        .delete_by_id(&id)
        .await?
        .ok_or(ServerError::NotFound)?;
    tracing::debug!(user_id = %user.id, "User deleted");

    Ok(Json(user))
}

fn parse_id(raw: &str) -> Result<UserId> {
    UserId::parse(raw).ok_or(ServerError::NotFound)
}
