use std::io;
use std::path::PathBuf;

use mfs_codec::CodecError;

/// Errors from record store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The source directory is unusable, or the store configuration is invalid.
    #[error("invalid source {}: {reason}", .dir.display())]
    Configuration { dir: PathBuf, reason: String },

    /// A record file could not be parsed by the configured codec.
    #[error("malformed data in source {}: {}\n{message}", .dir.display(), .file.display())]
    MalformedData {
        dir: PathBuf,
        file: PathBuf,
        message: String,
    },

    /// A key or discriminator cannot be used as a file name.
    #[error("invalid name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    /// Two entries map to the same file name and collisions are rejected.
    #[error("file name collision: {file}")]
    Collision { file: String },

    /// Non-syntax codec failure, propagated unchanged.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// I/O error from the underlying filesystem, propagated unchanged.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The blocking task running a store operation failed to complete.
    #[error("store task failed: {0}")]
    Task(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
