//! JSON API (`/api/v1/...`).

pub mod entries;
pub mod teams;

use teambynumbers_core::error::{Result, TbnError};

use crate::error::ApiError;

/// Run store work off the async executor; file writes are synchronous.
pub(crate) async fn run_blocking<T, F>(f: F) -> std::result::Result<T, ApiError>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError(TbnError::Internal(format!("task join error: {e}"))))?
        .map_err(ApiError::from)
}
