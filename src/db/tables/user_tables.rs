/// Provides constants and utilities for working with
/// the "Users" database table.
pub struct UserTable;

impl UserTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "Users";

    /// The column name for the autoincrement primary key of a user.
    pub const COLUMN_ID: &'static str = "userID";

    pub const COLUMN_FIRST_NAME: &'static str = "firstName";
    pub const COLUMN_LAST_NAME: &'static str = "lastName";
    pub const COLUMN_EMAIL: &'static str = "email";
    pub const COLUMN_PHONE: &'static str = "phone";
    pub const COLUMN_ADDRESS: &'static str = "address";
    pub const COLUMN_CITY: &'static str = "city";
    pub const COLUMN_STATE: &'static str = "state";
    pub const COLUMN_COUNTRY: &'static str = "country";
    pub const COLUMN_POSTCODE: &'static str = "postcode";

    /// The column name for the login name checked by `/login`.
    pub const COLUMN_USERNAME: &'static str = "username";

    /// The column name for the password, cleartext or an argon2 PHC string.
    pub const COLUMN_PASSWORD: &'static str = "password";

    /// The column name for the free-text role ("Admin", "User", ...).
    pub const COLUMN_ROLE: &'static str = "role";

    /// The column name for the ISO-8601 creation timestamp set by the server.
    pub const COLUMN_CREATED_AT: &'static str = "createdAt";

    pub const COLUMN_DEPARTMENT_NAME: &'static str = "departmentName";

    /// The column name for the (unenforced) reference to a business.
    pub const COLUMN_BUSINESS_ID: &'static str = "businessID";

    /// SQL statement for creating the users table with the defined schema.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS \"{}\" (
                \"{}\" INTEGER PRIMARY KEY AUTOINCREMENT,
                \"{}\" TEXT,
                \"{}\" TEXT,
                \"{}\" TEXT,
                \"{}\" TEXT,
                \"{}\" TEXT,
                \"{}\" TEXT,
                \"{}\" TEXT,
                \"{}\" TEXT,
                \"{}\" TEXT,
                \"{}\" TEXT,
                \"{}\" TEXT,
                \"{}\" TEXT,
                \"{}\" TEXT,
                \"{}\" TEXT,
                \"{}\" INTEGER,
                FOREIGN KEY (\"{}\") REFERENCES \"Businesses\"(\"businessID\")
            )",
            Self::TABLE_NAME,
            Self::COLUMN_ID,
            Self::COLUMN_FIRST_NAME,
            Self::COLUMN_LAST_NAME,
            Self::COLUMN_EMAIL,
            Self::COLUMN_PHONE,
            Self::COLUMN_ADDRESS,
            Self::COLUMN_CITY,
            Self::COLUMN_STATE,
            Self::COLUMN_COUNTRY,
            Self::COLUMN_POSTCODE,
            Self::COLUMN_USERNAME,
            Self::COLUMN_PASSWORD,
            Self::COLUMN_ROLE,
            Self::COLUMN_CREATED_AT,
            Self::COLUMN_DEPARTMENT_NAME,
            Self::COLUMN_BUSINESS_ID,
            Self::COLUMN_BUSINESS_ID
        )
    }
}
