use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::FieldValue;

/// Row of the `Users` table, serialized with the column names as JSON keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "userID")]
    #[sqlx(rename = "userID")]
    pub user_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postcode: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub created_at: Option<String>,
    pub department_name: Option<String>,
    #[serde(rename = "businessID")]
    #[sqlx(rename = "businessID")]
    pub business_id: Option<FieldValue>,
}

/// Mutable fields of a user, as sent to `POST /Users` and `PUT /Users/{id}`.
/// Absent fields are stored as NULL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub first_name: Option<FieldValue>,
    pub last_name: Option<FieldValue>,
    pub email: Option<FieldValue>,
    pub phone: Option<FieldValue>,
    pub address: Option<FieldValue>,
    pub city: Option<FieldValue>,
    pub state: Option<FieldValue>,
    pub country: Option<FieldValue>,
    pub postcode: Option<FieldValue>,
    pub username: Option<FieldValue>,
    pub password: Option<FieldValue>,
    pub role: Option<FieldValue>,
    pub department_name: Option<FieldValue>,
    #[serde(rename = "businessID")]
    pub business_id: Option<FieldValue>,
}

/// A user left-joined to its business; `businessName` is null when the
/// reference is unset or dangling.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct UserWithBusiness {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub user: User,
    #[serde(rename = "businessName")]
    #[sqlx(rename = "businessName")]
    pub business_name: Option<String>,
}
