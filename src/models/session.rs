use serde::{Deserialize, Serialize};

/// Credentials posted to `/login`
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// A logged-in user, kept in memory for the lifetime of the process
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub username: Option<String>,
    pub role: Option<String>,
}
