use std::future::Future;

use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// The caller's cancellation signal fired before the operation completed.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Operation cancelled")]
pub struct Cancelled;

/// Drive `operation` to completion unless `cancel` fires first.
///
/// A token that is already cancelled aborts before the operation is polled.
/// Dropping the in-flight future releases whatever it holds (pooled
/// connections, pending queries).
pub async fn run_until_cancelled<F, T, E>(cancel: &CancellationToken, operation: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: From<Cancelled>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(E::from(Cancelled)),
        result = operation => result,
    }
}
