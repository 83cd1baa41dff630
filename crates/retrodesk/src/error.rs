//! Error types for Retrodesk
//!
//! Everything a user can trigger from the desktop surfaces as a plain
//! message string (see [`crate::vfs::VfsError`]); this crate-level error
//! covers the rest: I/O on the stats store and unexpected internal failures.

use thiserror::Error;

/// Result type alias using Retrodesk's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Retrodesk error types.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error from the stats store.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Virtual filesystem error.
    ///
    /// Normally rendered as terminal output rather than propagated; this
    /// variant exists for callers that use VFS operations with `?`.
    #[error(transparent)]
    Vfs(#[from] crate::vfs::VfsError),

    /// Internal error for unexpected failures.
    #[error("internal error: {0}")]
    Internal(String),
}
