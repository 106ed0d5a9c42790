pub mod business;
pub mod field;
pub mod log;
pub mod session;
pub mod user;

pub use business::{Business, BusinessInput};
pub use field::FieldValue;
pub use log::{Log, LogInput, LogWithDetails};
pub use session::{LoginRequest, Session};
pub use user::{User, UserInput, UserWithBusiness};
