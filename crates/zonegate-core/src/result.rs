//! Convenience result type alias for zonegate.

use crate::error::AppError;

/// A specialized `Result` type for zonegate operations.
pub type AppResult<T> = Result<T, AppError>;
