use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::FieldValue;

/// Row of the `Logs` table: one recorded contact between a user and a business
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Log {
    #[serde(rename = "logID")]
    #[sqlx(rename = "logID")]
    pub log_id: i64,
    #[serde(rename = "businessID")]
    #[sqlx(rename = "businessID")]
    pub business_id: Option<FieldValue>,
    #[serde(rename = "userID")]
    #[sqlx(rename = "userID")]
    pub user_id: Option<FieldValue>,
    pub log_date: Option<String>,
    pub log_type: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogInput {
    #[serde(rename = "businessID")]
    pub business_id: Option<FieldValue>,
    #[serde(rename = "userID")]
    pub user_id: Option<FieldValue>,
    pub log_date: Option<FieldValue>,
    pub log_type: Option<FieldValue>,
    pub notes: Option<FieldValue>,
}

/// A log left-joined to its business and user. Missing references leave the
/// joined fields null.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct LogWithDetails {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub log: Log,
    pub business_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
}
