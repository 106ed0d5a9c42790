pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;


pub use config::Config;
pub use routes::create_router;
pub use state::AppState;
