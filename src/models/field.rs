use serde::{Deserialize, Serialize};
use sqlx::{
    Database, Decode, Encode, Sqlite, Type, TypeInfo, ValueRef,
    encode::IsNull,
    error::BoxDynError,
    sqlite::{SqliteTypeInfo, SqliteValueRef},
};
use std::fmt;

/// A client-supplied column value, stored as sent.
///
/// Payload fields are not checked against the column they land in: the value
/// is bound with its own JSON type and the column's affinity decides what is
/// kept, so `"businessID": "1"` stores the integer 1 and `"phone": 5551234`
/// stores the text `"5551234"`. Arrays and objects are stored as JSON text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Real(f64),
    Text(String),
    Bool(bool),
    Json(serde_json::Value),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(value) => write!(f, "{value}"),
            FieldValue::Real(value) => write!(f, "{value}"),
            FieldValue::Text(value) => f.write_str(value),
            FieldValue::Bool(value) => write!(f, "{value}"),
            FieldValue::Json(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl Type<Sqlite> for FieldValue {
    fn type_info() -> SqliteTypeInfo {
        <str as Type<Sqlite>>::type_info()
    }

    // Any storage class can come back from a column with INTEGER affinity.
    fn compatible(_ty: &SqliteTypeInfo) -> bool {
        true
    }
}

impl<'q> Encode<'q, Sqlite> for FieldValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        match self {
            FieldValue::Integer(value) => <i64 as Encode<'q, Sqlite>>::encode_by_ref(value, buf),
            FieldValue::Real(value) => <f64 as Encode<'q, Sqlite>>::encode_by_ref(value, buf),
            FieldValue::Text(value) => <String as Encode<'q, Sqlite>>::encode_by_ref(value, buf),
            FieldValue::Bool(value) => <bool as Encode<'q, Sqlite>>::encode_by_ref(value, buf),
            FieldValue::Json(value) => {
                <String as Encode<'q, Sqlite>>::encode(value.to_string(), buf)
            }
        }
    }
}

impl<'r> Decode<'r, Sqlite> for FieldValue {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        let storage_class = value.type_info().name().to_owned();

        match storage_class.as_str() {
            "INTEGER" => Ok(FieldValue::Integer(<i64 as Decode<Sqlite>>::decode(value)?)),
            "REAL" => Ok(FieldValue::Real(<f64 as Decode<Sqlite>>::decode(value)?)),
            _ => Ok(FieldValue::Text(<String as Decode<Sqlite>>::decode(value)?)),
        }
    }
}
