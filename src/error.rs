//! Error types for JSON parsing.
//!
//! Parsing never panics on bad input: every malformed document is classified
//! into exactly one [`Error`] variant, and the first failure encountered is
//! authoritative (no recovery, no partial values).
//!
//! ## Error Categories
//!
//! - **Nothing there**: [`Error::ExpectValue`] for empty or whitespace-only input
//! - **Garbage token**: [`Error::InvalidValue`] for malformed literals and numbers
//! - **Trailing content**: [`Error::RootNotSingular`] when input remains after one root value
//! - **Numeric overflow**: [`Error::NumberTooBig`] when a number rounds to infinity
//! - **String errors**: [`Error::MissingQuotationMark`], [`Error::InvalidStringEscape`],
//!   [`Error::InvalidStringChar`]
//! - **Container grammar**: [`Error::MissingKey`], [`Error::MissingColon`],
//!   [`Error::MissingCommaOrBracket`], [`Error::MissingCommaOrBrace`]
//! - **Resource limits**: [`Error::DepthLimitExceeded`] for adversarial nesting
//!
//! All parsing errors carry the line and column at which they were detected.
//!
//! ## Examples
//!
//! ```rust
//! use jsonval::{parse, Error};
//!
//! let result = parse("[1, 2,,]");
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     eprintln!("Parse error: {}", err);
//!     // Error messages include line and column numbers
//! }
//! ```

use thiserror::Error;

/// Represents all possible errors that can occur while parsing JSON text.
///
/// Each variant includes the line and column (both 1-based) at which the
/// error was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// IO error while reading input
    #[error("IO error: {0}")]
    Io(String),

    /// The input contained no value (empty or whitespace only)
    #[error("expected a value at line {line}, column {col}")]
    ExpectValue { line: usize, col: usize },

    /// A token that is neither a literal, a number, a string, nor a container
    #[error("invalid value at line {line}, column {col}")]
    InvalidValue { line: usize, col: usize },

    /// A complete root value was followed by further non-whitespace input
    #[error("unexpected trailing characters after value at line {line}, column {col}")]
    RootNotSingular { line: usize, col: usize },

    /// A grammatically valid number overflowed the f64 range
    #[error("number out of range at line {line}, column {col}")]
    NumberTooBig { line: usize, col: usize },

    /// End of input inside a string, before the closing quote
    #[error("unterminated string at line {line}, column {col}")]
    MissingQuotationMark { line: usize, col: usize },

    /// A backslash escape that is not part of the JSON escape set, or a
    /// malformed `\uXXXX` sequence (including lone surrogates)
    #[error("invalid string escape at line {line}, column {col}")]
    InvalidStringEscape { line: usize, col: usize },

    /// An unescaped control character (below U+0020) inside a string
    #[error("invalid character in string at line {line}, column {col}")]
    InvalidStringChar { line: usize, col: usize },

    /// An object member did not start with a string key
    #[error("expected string key at line {line}, column {col}")]
    MissingKey { line: usize, col: usize },

    /// An object key was not followed by `:`
    #[error("expected ':' after object key at line {line}, column {col}")]
    MissingColon { line: usize, col: usize },

    /// An array element was not followed by `,` or `]`
    #[error("expected ',' or ']' in array at line {line}, column {col}")]
    MissingCommaOrBracket { line: usize, col: usize },

    /// An object member was not followed by `,` or `}`
    #[error("expected ',' or '}}' in object at line {line}, column {col}")]
    MissingCommaOrBrace { line: usize, col: usize },

    /// Nesting exceeded the configured depth limit
    #[error("nesting depth limit of {limit} exceeded at line {line}, column {col}")]
    DepthLimitExceeded {
        line: usize,
        col: usize,
        limit: usize,
    },
}

impl Error {
    /// Creates an I/O error for reader failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the line at which the error was detected, if it has a position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonval::parse;
    ///
    /// let err = parse("[1,\n 2,,]").unwrap_err();
    /// assert_eq!(err.line(), Some(2));
    /// ```
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Io(_) => None,
            Error::ExpectValue { line, .. }
            | Error::InvalidValue { line, .. }
            | Error::RootNotSingular { line, .. }
            | Error::NumberTooBig { line, .. }
            | Error::MissingQuotationMark { line, .. }
            | Error::InvalidStringEscape { line, .. }
            | Error::InvalidStringChar { line, .. }
            | Error::MissingKey { line, .. }
            | Error::MissingColon { line, .. }
            | Error::MissingCommaOrBracket { line, .. }
            | Error::MissingCommaOrBrace { line, .. }
            | Error::DepthLimitExceeded { line, .. } => Some(*line),
        }
    }

    /// Returns the column at which the error was detected, if it has a position.
    #[must_use]
    pub fn column(&self) -> Option<usize> {
        match self {
            Error::Io(_) => None,
            Error::ExpectValue { col, .. }
            | Error::InvalidValue { col, .. }
            | Error::RootNotSingular { col, .. }
            | Error::NumberTooBig { col, .. }
            | Error::MissingQuotationMark { col, .. }
            | Error::InvalidStringEscape { col, .. }
            | Error::InvalidStringChar { col, .. }
            | Error::MissingKey { col, .. }
            | Error::MissingColon { col, .. }
            | Error::MissingCommaOrBracket { col, .. }
            | Error::MissingCommaOrBrace { col, .. }
            | Error::DepthLimitExceeded { col, .. } => Some(*col),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
