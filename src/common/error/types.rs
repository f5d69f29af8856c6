//! Error types shared by the parser, the session and the I/O boundaries.
use thiserror::Error;

/// Main error type for tablescope operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input contained no header line
    #[error("Empty input: no header line found")]
    EmptyInput,

    /// Source file does not carry a `.csv` or `.txt` extension
    #[error("Unsupported file extension: {0:?} (select a .csv or .txt file)")]
    UnsupportedExtension(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for tablescope operations.
pub type Result<T> = std::result::Result<T, Error>;
