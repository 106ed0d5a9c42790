use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    error::Result,
    handlers::payload::Payload,
    models::log::LogInput,
    state::AppState,
};

pub async fn get_all_logs(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let logs = state.logs.get_all_logs().await?;
    Ok((StatusCode::OK, Json(logs)))
}

pub async fn get_log_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let response = match state.logs.get_log_by_id(&id).await? {
        Some(log) => Json(log).into_response(),
        None => Json(json!({})).into_response(),
    };
    Ok(response)
}

/// Logs joined with business and user names
pub async fn get_logs_with_details(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let logs = state.logs.get_logs_with_details().await?;
    Ok((StatusCode::OK, Json(logs)))
}

pub async fn create_log(
    State(state): State<AppState>,
    Payload(log): Payload<LogInput>,
) -> Result<impl IntoResponse> {
    let id = state
        .logs
        .create_log(&log)
        .await
        .map_err(|e| e.during("creating log"))?;

    Ok(Json(json!({ "success": true, "LogID": id })))
}

pub async fn update_log(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(log): Payload<LogInput>,
) -> Result<impl IntoResponse> {
    let changes = state
        .logs
        .update_log(&id, &log)
        .await
        .map_err(|e| e.during("updating log"))?;

    Ok(Json(json!({ "success": true, "changes": changes })))
}

pub async fn delete_log(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let changes = state
        .logs
        .delete_log(&id)
        .await
        .map_err(|e| e.during("deleting log"))?;

    Ok(Json(json!({ "success": true, "changes": changes })))
}

pub async fn delete_all_logs(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let changes = state
        .logs
        .delete_all_logs()
        .await
        .map_err(|e| e.during("deleting logs"))?;

    Ok(Json(json!({
        "success": true,
        "changes": changes,
        "message": "All logs deleted and logID counter reset.",
    })))
}
