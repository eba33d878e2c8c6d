pub mod comment_service;
pub mod follow_service;
pub mod media_service;
pub mod post_service;
pub mod profile_service;
pub mod user_service;

use chrono::{NaiveDateTime, Utc};

use folio_shared::errors::{AppError, AppResult};

/// Blank text counts as missing for NOT NULL text columns.
pub(crate) fn require(field: &'static str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    Ok(())
}

pub(crate) fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
