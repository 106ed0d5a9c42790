use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    services::fixture_service::{self, Fixture, FixtureSize},
    state::AppState,
};

/// Start a fixture import and acknowledge before it finishes
fn accept_import(state: AppState, fixture: Fixture, size: FixtureSize) -> impl IntoResponse {
    let name = fixture.describe(size);
    fixture_service::spawn_import(state, fixture, size);

    (
        StatusCode::ACCEPTED,
        Json(json!({ "success": true, "message": format!("{name} is being added.") })),
    )
}

pub async fn add_dummy_user_data(State(state): State<AppState>) -> impl IntoResponse {
    accept_import(state, Fixture::Users, FixtureSize::Full)
}

pub async fn add_dummy_business_data(State(state): State<AppState>) -> impl IntoResponse {
    accept_import(state, Fixture::Businesses, FixtureSize::Full)
}

pub async fn add_dummy_logs_data(State(state): State<AppState>) -> impl IntoResponse {
    accept_import(state, Fixture::Logs, FixtureSize::Full)
}

pub async fn add_small_dummy_user_data(State(state): State<AppState>) -> impl IntoResponse {
    accept_import(state, Fixture::Users, FixtureSize::Small)
}

pub async fn add_small_dummy_business_data(State(state): State<AppState>) -> impl IntoResponse {
    accept_import(state, Fixture::Businesses, FixtureSize::Small)
}

pub async fn add_small_dummy_logs_data(State(state): State<AppState>) -> impl IntoResponse {
    accept_import(state, Fixture::Logs, FixtureSize::Small)
}
