pub mod business_tables;
pub mod log_tables;
pub mod user_tables;

pub use business_tables::BusinessTable;
pub use log_tables::LogTable;
pub use user_tables::UserTable;
