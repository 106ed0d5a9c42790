/// Provides constants and utilities for working with
/// the "Logs" database table.
pub struct LogTable;

impl LogTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "Logs";

    /// The column name for the autoincrement primary key of a log entry.
    pub const COLUMN_ID: &'static str = "logID";

    /// The column name for the business the contact was with.
    pub const COLUMN_BUSINESS_ID: &'static str = "businessID";

    /// The column name for the user who recorded the contact.
    pub const COLUMN_USER_ID: &'static str = "userID";

    pub const COLUMN_LOG_DATE: &'static str = "logDate";
    pub const COLUMN_LOG_TYPE: &'static str = "logType";
    pub const COLUMN_NOTES: &'static str = "notes";

    /// The column name for the ISO-8601 creation timestamp set by the server.
    pub const COLUMN_CREATED_AT: &'static str = "createdAt";

    /// SQL statement for creating the logs table with the defined schema.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS \"{}\" (
                \"{}\" INTEGER PRIMARY KEY AUTOINCREMENT,
                \"{}\" INTEGER,
                \"{}\" INTEGER,
                \"{}\" TEXT,
                \"{}\" TEXT,
                \"{}\" TEXT,
                \"{}\" TEXT,
                FOREIGN KEY (\"{}\") REFERENCES \"Businesses\"(\"businessID\"),
                FOREIGN KEY (\"{}\") REFERENCES \"Users\"(\"userID\")
            )",
            Self::TABLE_NAME,
            Self::COLUMN_ID,
            Self::COLUMN_BUSINESS_ID,
            Self::COLUMN_USER_ID,
            Self::COLUMN_LOG_DATE,
            Self::COLUMN_LOG_TYPE,
            Self::COLUMN_NOTES,
            Self::COLUMN_CREATED_AT,
            Self::COLUMN_BUSINESS_ID,
            Self::COLUMN_USER_ID
        )
    }
}
