//! Global error handling for projdump
//!
//! This module provides a centralized error type that can represent errors
//! from all modules in the project.

use std::io;
use thiserror::Error;

/// Global error type for projdump operations
#[derive(Error, Debug)]
pub enum DumpError {
    /// Configuration errors (invalid root, unusable output path)
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Specialized Result type for projdump operations
pub type Result<T> = std::result::Result<T, DumpError>;

// Allow converting DumpError to io::Error for test helpers that return io::Result
impl From<DumpError> for io::Error {
    fn from(err: DumpError) -> Self {
        io::Error::new(io::ErrorKind::Other, err.to_string())
    }
}

/// Creates a DumpError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::DumpError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}
