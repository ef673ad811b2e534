//! Error types for JSON serialization and deserialization.
//!
//! All fallible crate-root functions return [`Result`], whose error type
//! wraps whatever the JSON engine reported. The engine's diagnostics are kept
//! intact: a parse failure still carries its line and column, and an element
//! that fails to decode inside an array reports the element's own position.
//!
//! There is no recovery and no fallback value. A malformed input fails the
//! whole top-level call; no partial container is returned.
//!
//! ## Examples
//!
//! ```rust
//! use serde_persistent::{from_str, Seq};
//!
//! let result: Result<Seq<i32>, _> = from_str("{\"not\": \"an array\"}");
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     // Engine diagnostics (position, expected token kind) pass through.
//!     eprintln!("parse error: {}", err);
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors from this crate's serialize/deserialize
/// entry points.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the JSON engine: a wrong token kind where an array was
    /// expected, or an element that failed to encode or decode. Propagated
    /// verbatim, including position information.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// IO error while reading from or writing to a stream.
    #[error("IO error: {0}")]
    Io(String),

    /// Generic message.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_persistent::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_errors_keep_engine_diagnostics() {
        let engine_err = serde_json::from_str::<i32>("[").unwrap_err();
        let message = Error::from(engine_err).to_string();
        assert!(message.contains("line"), "missing position in: {message}");
    }

    #[test]
    fn test_io_and_custom_constructors() {
        assert_eq!(Error::io("broken pipe").to_string(), "IO error: broken pipe");
        assert_eq!(Error::custom(42).to_string(), "42");
    }
}
