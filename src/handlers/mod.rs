pub mod auth;
pub mod business;
pub mod fixtures;
pub mod health;
pub mod log;
pub mod payload;
pub mod user;
