//! Error types that can be emitted from this library
//!

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent wrapper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent wrapper for [`std::string::FromUtf8Error`]
    #[error(transparent)]
    UTF8Error(#[from] std::string::FromUtf8Error),

    /// Transparent wrapper for [`std::string::FromUtf16Error`]
    #[error(transparent)]
    UTF16Error(#[from] std::string::FromUtf16Error),

    /// A `\uXXXX` escape ended before four hex digits were read
    #[error("malformed \\u escape sequence on line {line}")]
    MalformedEscape {
        /// Line the truncated escape started on, 1-based
        line: usize,
    },
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
