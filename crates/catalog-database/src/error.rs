//! Classification of sqlx errors into application errors.

use sqlx::error::ErrorKind as DbErrorKind;

use catalog_core::error::{AppError, ErrorKind};

/// Map a sqlx error raised while running `operation`.
///
/// Constraint violations become client-facing kinds; everything else is
/// a database fault.
pub fn map_db_error(operation: &str, err: sqlx::Error) -> AppError {
    let kind = match &err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            DbErrorKind::UniqueViolation => ErrorKind::Conflict,
            DbErrorKind::ForeignKeyViolation
            | DbErrorKind::CheckViolation
            | DbErrorKind::NotNullViolation => ErrorKind::Validation,
            _ => ErrorKind::Database,
        },
        _ => ErrorKind::Database,
    };
    AppError::with_source(kind, format!("Failed to {operation}: {err}"), err)
}
