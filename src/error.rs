//! Error types for the holocron persistence layer.
//!
//! Store-level failures (unique violations, foreign-key violations, missing
//! required columns) are not caught or translated here; they surface to the
//! caller as the wrapped [`sea_orm::DbErr`] unmodified.

use thiserror::Error;

/// Main error type for the holocron persistence layer.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    EnvError(#[from] std::env::VarError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
