//! Error types for the Xiphos library.
//!
//! All recoverable errors are represented by the [`XiphosError`] enum.
//! Internal-consistency violations (a transition or fail lookup naming a
//! state that does not exist) are bugs in the automaton compiler, not bad
//! input, and panic instead of surfacing here.
//!
//! # Examples
//!
//! ```
//! use xiphos::error::{Result, XiphosError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(XiphosError::keyword("empty keywords cannot be matched"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Xiphos operations.
///
/// It uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for the common cases.
#[derive(Error, Debug)]
pub enum XiphosError {
    /// A keyword was rejected during automaton construction.
    #[error("Keyword error: {0}")]
    Keyword(String),

    /// The automaton grew past an internal capacity limit.
    #[error("Capacity error: {0}")]
    Capacity(String),

    /// I/O errors (keyword files, scanned files, stdin)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with XiphosError.
pub type Result<T> = std::result::Result<T, XiphosError>;

impl XiphosError {
    /// Create a new keyword error.
    pub fn keyword<S: Into<String>>(msg: S) -> Self {
        XiphosError::Keyword(msg.into())
    }

    /// Create a new capacity error.
    pub fn capacity<S: Into<String>>(msg: S) -> Self {
        XiphosError::Capacity(msg.into())
    }
}
