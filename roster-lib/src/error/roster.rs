//! Crate-level error type

use super::ApiError;

/// Top-level error returned by member sources and the loader.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The members request failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The load was cancelled because the view was disposed.
    #[error("Load cancelled")]
    Cancelled,
}

impl Error {
    /// Returns `true` if this error came from cancelling the load.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
