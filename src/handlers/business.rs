use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    error::Result,
    handlers::payload::Payload,
    models::business::BusinessInput,
    state::AppState,
};

pub async fn get_all_businesses(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let businesses = state.businesses.get_all_businesses().await?;
    Ok((StatusCode::OK, Json(businesses)))
}

pub async fn get_business_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let response = match state.businesses.get_business_by_id(&id).await? {
        Some(business) => Json(business).into_response(),
        None => Json(json!({})).into_response(),
    };
    Ok(response)
}

pub async fn create_business(
    State(state): State<AppState>,
    Payload(business): Payload<BusinessInput>,
) -> Result<impl IntoResponse> {
    let id = state
        .businesses
        .create_business(&business)
        .await
        .map_err(|e| e.during("creating business"))?;

    tracing::info!(business_id = id, "business created");
    Ok(Json(json!({ "success": true, "BusinessID": id })))
}

pub async fn update_business(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(business): Payload<BusinessInput>,
) -> Result<impl IntoResponse> {
    let changes = state
        .businesses
        .update_business(&id, &business)
        .await
        .map_err(|e| e.during("updating business"))?;

    Ok(Json(json!({ "success": true, "changes": changes })))
}

pub async fn delete_business(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let changes = state
        .businesses
        .delete_business(&id)
        .await
        .map_err(|e| e.during("deleting business"))?;

    Ok(Json(json!({ "success": true, "changes": changes })))
}

pub async fn delete_all_businesses(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let changes = state
        .businesses
        .delete_all_businesses()
        .await
        .map_err(|e| e.during("deleting businesses"))?;

    Ok(Json(json!({
        "success": true,
        "changes": changes,
        "message": "All businesses deleted and businessID counter reset.",
    })))
}
