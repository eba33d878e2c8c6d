pub mod clients;
pub mod errors;
pub mod observability;
pub mod types;

pub use errors::{AppError, AppResult, ErrorCode};
pub use types::*;
