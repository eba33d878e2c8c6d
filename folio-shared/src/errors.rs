use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use serde::{Deserialize, Serialize};

/// Store error codes following the pattern E{area}{sequence}
///
/// Ranges:
/// - E0xxx: Shared/infrastructure errors
/// - E1xxx: Schema constraint errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Shared (E0xxx)
    InternalError,
    ValidationError,
    NotFound,

    // Constraints (E1xxx)
    UniquenessViolation,
    ReferentialIntegrityViolation,
    RequiredFieldMissing,
}

impl ErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InternalError => "E0001",
            Self::ValidationError => "E0002",
            Self::NotFound => "E0003",

            Self::UniquenessViolation => "E1001",
            Self::ReferentialIntegrityViolation => "E1002",
            Self::RequiredFieldMissing => "E1003",
        }
    }

    fn from_constraint(kind: &DatabaseErrorKind) -> Option<Self> {
        match kind {
            DatabaseErrorKind::UniqueViolation => Some(Self::UniquenessViolation),
            DatabaseErrorKind::ForeignKeyViolation => Some(Self::ReferentialIntegrityViolation),
            DatabaseErrorKind::NotNullViolation => Some(Self::RequiredFieldMissing),
            _ => None,
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            Self::InternalError => "internal error",
            Self::ValidationError => "validation failed",
            Self::NotFound => "resource not found",
            Self::UniquenessViolation => "a row with the same unique key already exists",
            Self::ReferentialIntegrityViolation => "referenced row does not exist",
            Self::RequiredFieldMissing => "a required field is missing",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Known {
        code: ErrorCode,
        message: String,
        details: Option<serde_json::Value>,
    },

    #[error("internal error")]
    Internal(#[from] anyhow::Error),

    #[error("database error: {0}")]
    Database(DieselError),

    #[error("validation error: {0}")]
    Validation(String),
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Known {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(code: ErrorCode, message: impl Into<String>, details: serde_json::Value) -> Self {
        Self::Known {
            code,
            message: message.into(),
            details: Some(details),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    pub fn required(field: &'static str) -> Self {
        Self::with_details(
            ErrorCode::RequiredFieldMissing,
            format!("{field} is required"),
            serde_json::json!({ "field": field }),
        )
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Known { code, .. } => *code,
            AppError::Internal(_) => ErrorCode::InternalError,
            AppError::Database(DieselError::NotFound) => ErrorCode::NotFound,
            AppError::Database(_) => ErrorCode::InternalError,
            AppError::Validation(_) => ErrorCode::ValidationError,
        }
    }

    pub fn details(&self) -> Option<&serde_json::Value> {
        match self {
            AppError::Known { details, .. } => details.as_ref(),
            _ => None,
        }
    }
}

/// Constraint failures reported by the database are surfaced as their own
/// error codes; everything else stays a raw database error.
impl From<DieselError> for AppError {
    fn from(err: DieselError) -> Self {
        let DieselError::DatabaseError(kind, info) = &err else {
            return Self::Database(err);
        };
        let Some(code) = ErrorCode::from_constraint(kind) else {
            return Self::Database(err);
        };

        metrics::counter!("folio_constraint_violations_total", "code" => code.code()).increment(1);
        tracing::debug!(code = code.code(), constraint = info.message(), "constraint violation");

        let mut details = serde_json::json!({ "constraint": info.message() });
        if let Some(table) = info.table_name() {
            details["table"] = serde_json::Value::from(table);
        }
        if let Some(column) = info.column_name() {
            details["column"] = serde_json::Value::from(column);
        }

        Self::with_details(code, code.describe(), details)
    }
}

impl From<PoolError> for AppError {
    fn from(err: PoolError) -> Self {
        tracing::error!(error = %err, "failed to check out database connection");
        Self::internal(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errs: validator::ValidationErrors) -> Self {
        Self::Validation(errs.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn db_error(kind: DatabaseErrorKind, message: &str) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(message.to_string()))
    }

    #[test]
    fn unique_violation_maps_to_uniqueness_code() {
        let err = AppError::from(db_error(
            DatabaseErrorKind::UniqueViolation,
            "UNIQUE constraint failed: user.user_name",
        ));
        assert_eq!(err.code(), ErrorCode::UniquenessViolation);
        assert_eq!(
            err.details().and_then(|d| d["constraint"].as_str()),
            Some("UNIQUE constraint failed: user.user_name")
        );
    }

    #[test]
    fn foreign_key_violation_maps_to_referential_integrity() {
        let err = AppError::from(db_error(
            DatabaseErrorKind::ForeignKeyViolation,
            "FOREIGN KEY constraint failed",
        ));
        assert_eq!(err.code(), ErrorCode::ReferentialIntegrityViolation);
    }

    #[test]
    fn not_null_violation_maps_to_required_field() {
        let err = AppError::from(db_error(
            DatabaseErrorKind::NotNullViolation,
            "NOT NULL constraint failed: comment.comment_text",
        ));
        assert_eq!(err.code(), ErrorCode::RequiredFieldMissing);
    }

    #[test]
    fn other_database_errors_stay_raw() {
        let err = AppError::from(db_error(DatabaseErrorKind::Unknown, "disk I/O error"));
        assert!(matches!(err, AppError::Database(_)));
        assert_eq!(err.code(), ErrorCode::InternalError);

        let err = AppError::from(DieselError::NotFound);
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[test]
    fn required_names_the_field() {
        let err = AppError::required("user_name");
        assert_eq!(err.code(), ErrorCode::RequiredFieldMissing);
        assert_eq!(err.to_string(), "user_name is required");
        assert_eq!(err.details().and_then(|d| d["field"].as_str()), Some("user_name"));
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(ErrorCode::UniquenessViolation.code(), "E1001");
        assert_eq!(ErrorCode::ReferentialIntegrityViolation.code(), "E1002");
        assert_eq!(ErrorCode::RequiredFieldMissing.code(), "E1003");
    }
}
