use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{auth, business, fixtures, health, log, user},
    state::AppState,
};

/// Build the HTTP surface. Path casing is part of the contract with the
/// front end and differs between verbs on purpose (`/logs` vs `/Logs`).
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // Users
        .route(
            "/Users",
            get(user::get_all_users)
                .post(user::create_user)
                .delete(user::delete_all_users),
        )
        .route(
            "/Users/{id}",
            get(user::get_user_by_id)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route("/UsersWithBusiness", get(user::get_users_with_business))
        // Businesses
        .route(
            "/Businesses",
            get(business::get_all_businesses)
                .post(business::create_business)
                .delete(business::delete_all_businesses),
        )
        .route(
            "/Businesses/{id}",
            get(business::get_business_by_id)
                .put(business::update_business)
                .delete(business::delete_business),
        )
        // Logs
        .route("/Logs", get(log::get_all_logs))
        .route("/Logs/{id}", delete(log::delete_log))
        .route("/logs", post(log::create_log).delete(log::delete_all_logs))
        .route("/logs/{id}", get(log::get_log_by_id).put(log::update_log))
        .route("/LogsWithDetails", get(log::get_logs_with_details))
        // Fixtures
        .route("/addDummyUserData", post(fixtures::add_dummy_user_data))
        .route("/addDummyBusinessData", post(fixtures::add_dummy_business_data))
        .route("/addDummyLogsData", post(fixtures::add_dummy_logs_data))
        .route("/addSmallDummyUserData", post(fixtures::add_small_dummy_user_data))
        .route(
            "/addSmallDummyBusinessData",
            post(fixtures::add_small_dummy_business_data),
        )
        .route("/addSmallDummyLogsData", post(fixtures::add_small_dummy_logs_data))
        // Session check
        .route("/login", post(auth::login))
        .route("/session", get(auth::session_status))
        .route("/logout", post(auth::logout))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
