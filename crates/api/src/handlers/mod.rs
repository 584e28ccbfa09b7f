//! HTTP handlers.

pub mod articles;
pub mod pages;

use crate::error::AppError;

/// Run a blocking store operation on the blocking thread pool.
///
/// redb transactions do synchronous file I/O (commits fsync), so store calls
/// must not run directly on the async runtime threads.
pub(crate) async fn run_store<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, mdnote_db::StoreError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|err| AppError::Internal(format!("store task panicked: {err}")))?
        .map_err(AppError::from)
}
