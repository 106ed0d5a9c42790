use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    error::Result,
    handlers::payload::Payload,
    models::user::UserInput,
    state::AppState,
};

/// Get all users handler
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = state.users.get_all_users().await?;
    Ok((StatusCode::OK, Json(users)))
}

/// Get user by ID handler; an unknown ID answers `{}`
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let response = match state.users.get_user_by_id(&id).await? {
        Some(user) => Json(user).into_response(),
        None => Json(json!({})).into_response(),
    };
    Ok(response)
}

/// Users joined with the name of their business
pub async fn get_users_with_business(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = state.users.get_users_with_business().await?;
    Ok((StatusCode::OK, Json(users)))
}

/// Create user handler
pub async fn create_user(
    State(state): State<AppState>,
    Payload(mut user): Payload<UserInput>,
) -> Result<impl IntoResponse> {
    state.auth.protect_password(&mut user)?;

    let id = state
        .users
        .create_user(&user)
        .await
        .map_err(|e| e.during("creating user"))?;

    tracing::info!(user_id = id, "user created");
    Ok(Json(json!({ "success": true, "UserID": id })))
}

/// Update user handler
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(mut user): Payload<UserInput>,
) -> Result<impl IntoResponse> {
    state.auth.protect_password(&mut user)?;

    let changes = state
        .users
        .update_user(&id, &user)
        .await
        .map_err(|e| e.during("updating user"))?;

    Ok(Json(json!({ "success": true, "changes": changes })))
}

/// Delete user handler
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let changes = state
        .users
        .delete_user(&id)
        .await
        .map_err(|e| e.during("deleting user"))?;

    Ok(Json(json!({ "success": true, "changes": changes })))
}

/// Delete every user and reset the userID counter
pub async fn delete_all_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let changes = state
        .users
        .delete_all_users()
        .await
        .map_err(|e| e.during("deleting users"))?;

    Ok(Json(json!({
        "success": true,
        "changes": changes,
        "message": "All users deleted and userID counter reset.",
    })))
}
