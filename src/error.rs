use std::io;

use thiserror::Error;

/// Library-wide error type for copy-assets operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),
}
