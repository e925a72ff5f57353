use sea_orm::DbErr;

use super::{application::ApplicationError, Error};

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient faults)
    Retry,
    /// Failed permanently (bad request or bug)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => {
                match db_err {
                    // Connection acquisition errors - transient, should retry
                    DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                    // Connection errors - transient, should retry
                    DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                    // All other database errors are permanent failures:
                    // - Query errors (constraint violations, syntax errors, etc.)
                    // - Type conversion errors
                    // - Schema/migration errors
                    // - Record not found/inserted/updated
                    _ => ErrorRetryStrategy::Fail,
                }
            }

            // Lost a sequence reservation race, a fresh transaction will read the new value
            Self::ApplicationError(ApplicationError::NumberConflict { .. }) => {
                ErrorRetryStrategy::Retry
            }

            // Remaining workflow errors are decisions about the request, not faults
            Self::ApplicationError(_) => ErrorRetryStrategy::Fail,

            // Session errors - transient, could be Redis connection issues
            Self::SessionError(_) => ErrorRetryStrategy::Retry,
            Self::SessionRedisError(_) => ErrorRetryStrategy::Retry,

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            // Auth errors - permanent failures (missing or unknown user)
            Self::AuthError(_) => ErrorRetryStrategy::Fail,

            // Storage errors - disk full or permissions, retrying won't help
            Self::StorageError(_) => ErrorRetryStrategy::Fail,

            // Parse errors - permanent failures (bad data format)
            Self::ParseError(_) => ErrorRetryStrategy::Fail,

            // InternalError - permanent failures (bug in the server's code)
            Self::InternalError(_) => ErrorRetryStrategy::Fail,

            Self::IoError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
