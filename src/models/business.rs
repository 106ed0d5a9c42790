use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::FieldValue;

/// Row of the `Businesses` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Business {
    #[serde(rename = "businessID")]
    #[sqlx(rename = "businessID")]
    pub business_id: i64,
    pub business_name: Option<String>,
    pub contact_type: Option<String>,
    pub contact_date: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
    #[serde(rename = "userID")]
    #[sqlx(rename = "userID")]
    pub user_id: Option<FieldValue>,
}

/// Mutable fields of a business
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInput {
    pub business_name: Option<FieldValue>,
    pub contact_type: Option<FieldValue>,
    pub contact_date: Option<FieldValue>,
    pub notes: Option<FieldValue>,
    #[serde(rename = "userID")]
    pub user_id: Option<FieldValue>,
}
