/// Provides constants and utilities for working with
/// the "Businesses" database table.
pub struct BusinessTable;

impl BusinessTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "Businesses";

    /// The column name for the autoincrement primary key of a business.
    pub const COLUMN_ID: &'static str = "businessID";

    /// The column name for the display name joined into user and log views.
    pub const COLUMN_BUSINESS_NAME: &'static str = "businessName";

    pub const COLUMN_CONTACT_TYPE: &'static str = "contactType";
    pub const COLUMN_CONTACT_DATE: &'static str = "contactDate";
    pub const COLUMN_NOTES: &'static str = "notes";

    /// The column name for the ISO-8601 creation timestamp set by the server.
    pub const COLUMN_CREATED_AT: &'static str = "createdAt";

    /// The column name for the optional back-reference to a user.
    pub const COLUMN_USER_ID: &'static str = "userID";

    /// SQL statement for creating the businesses table with the defined schema.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS \"{}\" (
                \"{}\" INTEGER PRIMARY KEY AUTOINCREMENT,
                \"{}\" TEXT,
                \"{}\" TEXT,
                \"{}\" TEXT,
                \"{}\" TEXT,
                \"{}\" TEXT,
                \"{}\" INTEGER,
                FOREIGN KEY (\"{}\") REFERENCES \"Users\"(\"userID\")
            )",
            Self::TABLE_NAME,
            Self::COLUMN_ID,
            Self::COLUMN_BUSINESS_NAME,
            Self::COLUMN_CONTACT_TYPE,
            Self::COLUMN_CONTACT_DATE,
            Self::COLUMN_NOTES,
            Self::COLUMN_CREATED_AT,
            Self::COLUMN_USER_ID,
            Self::COLUMN_USER_ID
        )
    }
}
