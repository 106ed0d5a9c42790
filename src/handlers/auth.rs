use axum::{
    extract::{Json, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::json;

use crate::{
    error::Result,
    handlers::payload::Payload,
    models::{LoginRequest, Session},
    state::AppState,
};

/// Successful login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    #[serde(flatten)]
    pub session: Session,
}

/// Status of the caller's session
#[derive(Debug, Serialize)]
pub struct SessionStatus {
    #[serde(rename = "loggedIn")]
    pub logged_in: bool,
    #[serde(flatten)]
    pub session: Option<Session>,
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
}

/// Handler for username/password login
pub async fn login(
    State(state): State<AppState>,
    Payload(request): Payload<LoginRequest>,
) -> Result<impl IntoResponse> {
    let (token, session) = state
        .auth
        .login(&state.users, &request.username, &request.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            success: true,
            token,
            session,
        }),
    ))
}

/// Handler the front end polls to decide which UI to show
pub async fn session_status(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let session = match bearer_token(&headers) {
        Some(token) => state.auth.get_session(token).await,
        None => None,
    };

    Json(SessionStatus {
        logged_in: session.is_some(),
        session,
    })
}

pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = bearer_token(&headers) {
        state.auth.logout(token).await;
    }

    Json(json!({ "success": true }))
}
