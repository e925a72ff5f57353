//! Retry logic with exponential backoff for service operations.
//!
//! This module provides the `RetryContext` for executing operations with automatic retry
//! logic and exponential backoff. It integrates with the error system to determine which errors
//! are retryable: dropped database connections and lost application number reservations.

use std::time::Duration;

use dioxus_logger::tracing;
use rand::Rng;

use crate::server::error::{retry::ErrorRetryStrategy, Error};

/// Context for executing operations with automatic retry logic.
///
/// Provides exponential backoff retry behavior with configurable max attempts and initial
/// backoff duration. The generic state type `T` persists between attempts, use `()` for
/// operations that have nothing to carry over.
///
/// # Retry Behavior
///
/// - **Max attempts**: 5 (default)
/// - **Backoff strategy**: Exponential starting at 50ms (50ms, 100ms, 200ms, ...) plus up to
///   half the backoff in random jitter, so submissions that lost the same race spread out
/// - **Retry conditions**: Only errors with `ErrorRetryStrategy::Retry` are retried
/// - **Permanent failures**: Errors with `ErrorRetryStrategy::Fail` return immediately
///
/// # Example
///
/// ```ignore
/// let mut ctx: RetryContext<()> = RetryContext::new();
/// let db = db.clone();
///
/// ctx.execute_with_retry("get application ID 12", |_| {
///     let db = db.clone();
///
///     Box::pin(async move {
///         let application = ApplicationRepository::new(&db).get_by_id(12).await?;
///
///         Ok(application)
///     })
/// }).await?;
/// ```
pub struct RetryContext<T> {
    /// State carried between attempts
    state: T,
    /// Max attempts before failure
    max_attempts: u32,
    /// Initial backoff between attempts
    initial_backoff: Duration,
}

impl<T> RetryContext<T>
where
    T: Default,
{
    const DEFAULT_MAX_ATTEMPTS: u32 = 5;
    const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_millis(50);

    /// Creates a new retry context with default settings.
    ///
    /// # Returns
    /// - `RetryContext<T>` - New context with default state and retry configuration
    pub fn new() -> Self {
        Self {
            state: T::default(),
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_backoff: Self::DEFAULT_INITIAL_BACKOFF,
        }
    }

    /// Overrides the number of attempts made before the last error is returned.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Execute a method with automatic retry logic.
    ///
    /// # Arguments
    /// - `description` - Description of the operation for logging (e.g., "submit application")
    /// - `operation` - Async function that performs the operation, receiving the carried state
    ///
    /// # Returns
    /// - `Ok(R)` - Operation succeeded
    /// - `Err(Error)` - Permanent error, or a retryable error after max attempts
    pub async fn execute_with_retry<R, F>(
        &mut self,
        description: &str,
        operation: F,
    ) -> Result<R, Error>
    where
        F: for<'a> Fn(
            &'a mut T,
        ) -> std::pin::Pin<
            Box<dyn std::future::Future<Output = Result<R, Error>> + Send + 'a>,
        >,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            let result = operation(&mut self.state).await;

            match result {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        tracing::debug!("Permanent error for {}: {}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {:?}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff = self.backoff(attempt_count);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {}",
                            description,
                            attempt_count,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }

    fn backoff(&self, attempt_count: u32) -> Duration {
        let base = self.initial_backoff * 2_u32.pow(attempt_count - 1);
        let jitter_ms = rand::rng().random_range(0..=(base.as_millis() as u64 / 2));

        base + Duration::from_millis(jitter_ms)
    }
}

impl<T: Default> Default for RetryContext<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicU32, Ordering},
        Arc,
    };

    use sea_orm::DbErr;

    use super::RetryContext;
    use crate::server::error::{application::ApplicationError, Error};

    /// Expect a lost number reservation to be retried until it succeeds
    #[tokio::test]
    async fn retries_number_conflict() {
        let attempts = Arc::new(AtomicU32::new(0));
        let mut ctx: RetryContext<()> = RetryContext::new();

        let result = ctx
            .execute_with_retry("conflicting operation", |_| {
                let attempts = attempts.clone();

                Box::pin(async move {
                    if attempts.fetch_add(1, Ordering::SeqCst) < 2 {
                        return Err(ApplicationError::NumberConflict {
                            period: "202403".to_string(),
                        }
                        .into());
                    }

                    Ok(7)
                })
            })
            .await;

        assert!(matches!(result, Ok(7)));
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    /// Expect permanent errors to be returned after a single attempt
    #[tokio::test]
    async fn does_not_retry_permanent_error() {
        let attempts = Arc::new(AtomicU32::new(0));
        let mut ctx: RetryContext<()> = RetryContext::new();

        let result: Result<(), Error> = ctx
            .execute_with_retry("failing operation", |_| {
                let attempts = attempts.clone();

                Box::pin(async move {
                    attempts.fetch_add(1, Ordering::SeqCst);

                    Err(DbErr::Custom("syntax error".to_string()).into())
                })
            })
            .await;

        assert!(matches!(result, Err(Error::DbErr(_))));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    /// Expect the last error once max attempts are used up
    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let attempts = Arc::new(AtomicU32::new(0));
        let mut ctx: RetryContext<()> = RetryContext::new().with_max_attempts(2);

        let result: Result<(), Error> = ctx
            .execute_with_retry("always conflicting operation", |_| {
                let attempts = attempts.clone();

                Box::pin(async move {
                    attempts.fetch_add(1, Ordering::SeqCst);

                    Err(ApplicationError::NumberConflict {
                        period: "202403".to_string(),
                    }
                    .into())
                })
            })
            .await;

        assert!(matches!(
            result,
            Err(Error::ApplicationError(ApplicationError::NumberConflict { .. }))
        ));
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }
}
