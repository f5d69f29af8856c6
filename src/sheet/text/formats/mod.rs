//! Format-specific implementations for delimited text.

pub mod delimited;

// Re-export common types and functions
pub use delimited::{read_delimited, write_delimited};
