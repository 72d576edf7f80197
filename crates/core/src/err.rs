//! Error types and utilities.

#[derive(thiserror::Error, Debug)]
/// Represents an error that can occur while generating a log.
pub enum Error {
    /// An I/O error occurred.
    #[error("i/o error {0}")]
    Io(#[from] std::io::Error),

    /// The start timestamp could not be parsed.
    #[error("invalid start time {input:?}, expected YYYY-MM-DD HH:MM:SS")]
    StartTime {
        input: String,
        source: time::error::Parse,
    },
}

/// A specialized [Result] type for this crate's operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
