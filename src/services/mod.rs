pub mod auth_service;
pub mod fixture_service;

pub use auth_service::AuthService;
pub use fixture_service::{Fixture, FixtureError, FixtureSize};
