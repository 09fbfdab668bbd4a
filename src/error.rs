//! Error types for rundist.

use thiserror::Error;

/// Errors that can occur outside the pure calculation path.
///
/// Malformed time strings are not errors: the parser returns `None` and the
/// distance falls back to zero.
#[derive(Error, Debug)]
pub enum RunDistError {
    /// Configuration could not be resolved, read, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The session store database failed.
    #[error("Database error: {0}")]
    Database(String),

    /// Filesystem I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A history entry or other item does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A command argument was rejected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl RunDistError {
    /// Exit code the binary uses for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) => 2,
            Self::InvalidArgument(_) => 64,
            Self::Config(_) => 78,
            Self::Database(_) | Self::Io(_) | Self::Json(_) => 1,
        }
    }
}
