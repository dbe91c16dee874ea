//! Configuration options for JSON parsing.
//!
//! The parser is strict RFC 8259 and takes no syntax-level knobs; the only
//! tunable is the nesting depth limit, which bounds recursion on
//! adversarial input such as ten thousand opening brackets.
//!
//! ## Examples
//!
//! ```rust
//! use jsonval::{parse_with_options, ParseOptions};
//!
//! let options = ParseOptions::new().with_max_depth(4);
//! assert!(parse_with_options("[[[1]]]", options.clone()).is_ok());
//! assert!(parse_with_options("[[[[[1]]]]]", options).is_err());
//! ```

/// Default nesting depth limit.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for parsing.
///
/// # Examples
///
/// ```rust
/// use jsonval::ParseOptions;
///
/// let options = ParseOptions::new();
/// assert_eq!(options.max_depth, jsonval::DEFAULT_MAX_DEPTH);
///
/// let deep = ParseOptions::new().with_max_depth(1024);
/// assert_eq!(deep.max_depth, 1024);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum container nesting depth before parsing fails with
    /// [`Error::DepthLimitExceeded`](crate::Error::DepthLimitExceeded).
    /// A bare scalar is depth 0; `[1]` nests to depth 1.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Creates the default options (depth limit of [`DEFAULT_MAX_DEPTH`]).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
