use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

use crate::{db, error::Result, state::AppState};

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Result<impl IntoResponse> {
    db::health_check(&state.pool).await?;
    Ok(Json(json!({ "status": "ok" })))
}
