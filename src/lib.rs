//! # jsonval
//!
//! A recursive-descent JSON parser that turns a JSON text into an in-memory
//! tagged [`Value`], with precise diagnostic codes for malformed input.
//!
//! ## Key Features
//!
//! - **Strict RFC 8259 grammar**: no comments, no trailing commas, no lenient
//!   recovery; exactly one root value per document
//! - **Precise diagnostics**: every failure is classified into one [`Error`]
//!   variant (garbage token, trailing content, numeric overflow, unterminated
//!   string, ...) with line and column
//! - **Ordered objects**: object members keep their source order via an
//!   [`IndexMap`](indexmap::IndexMap)-backed [`Map`]
//! - **Bounded recursion**: nesting depth is capped (configurable via
//!   [`ParseOptions`]), so adversarial input cannot blow the stack
//! - **No unsafe code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonval::{parse, Value};
//!
//! let value = parse(r#"{"name": "Alice", "scores": [9.5, 8.0]}"#).unwrap();
//!
//! assert_eq!(value.get("name").and_then(Value::as_str), Some("Alice"));
//! let scores = value.get("scores").and_then(Value::as_array).unwrap();
//! assert_eq!(scores[0].as_f64(), Some(9.5));
//! ```
//!
//! ### Error Classification
//!
//! ```rust
//! use jsonval::{parse, Error};
//!
//! assert!(matches!(parse(""), Err(Error::ExpectValue { .. })));
//! assert!(matches!(parse("nul"), Err(Error::InvalidValue { .. })));
//! assert!(matches!(parse("null x"), Err(Error::RootNotSingular { .. })));
//! assert!(matches!(parse("1e309"), Err(Error::NumberTooBig { .. })));
//! assert!(matches!(parse("\"abc"), Err(Error::MissingQuotationMark { .. })));
//! ```
//!
//! ### Building Values with the json! Macro
//!
//! ```rust
//! use jsonval::{json, Value};
//!
//! let data = json!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["rust", "json"]
//! });
//!
//! assert_eq!(data.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```
//!
//! ## Non-Goals
//!
//! Streaming/incremental input, serializing values back to text, schema
//! validation, and arbitrary-precision numbers are out of scope. Numbers are
//! always `f64`; values that overflow it are rejected with
//! [`Error::NumberTooBig`], while underflow to zero parses successfully per
//! IEEE 754.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` implementations for [`Value`], for
//!   moving parsed values in and out of other formats.
//!
//! ## Examples
//!
//! See the `demos/` directory for runnable programs:
//!
//! - **`simple.rs`** - parse a document and walk the result
//! - **`dynamic_values.rs`** - build and inspect values with `json!`
//! - **`error_handling.rs`** - the diagnostic codes in action
//!
//! Run any of them with: `cargo run --example <name>`

pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
mod scratch;
pub mod value;

pub use error::{Error, Result};
pub use map::Map;
pub use options::{ParseOptions, DEFAULT_MAX_DEPTH};
pub use parser::Parser;
pub use value::{Array, Value};

use std::io;

/// Parses a string of JSON text into a [`Value`].
///
/// The input must contain exactly one JSON value, optionally surrounded by
/// whitespace.
///
/// # Examples
///
/// ```rust
/// use jsonval::{parse, Value};
///
/// assert_eq!(parse(" true ").unwrap(), Value::Bool(true));
/// assert_eq!(parse("1.5").unwrap(), Value::Number(1.5));
/// ```
///
/// # Errors
///
/// Returns an [`Error`] classifying the first problem found; no partial
/// value is produced.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(input: &str) -> Result<Value> {
    parse_with_options(input, ParseOptions::default())
}

/// Parses a string of JSON text into a [`Value`] with custom options.
///
/// # Examples
///
/// ```rust
/// use jsonval::{parse_with_options, Error, ParseOptions};
///
/// let options = ParseOptions::new().with_max_depth(2);
/// let err = parse_with_options("[[[1]]]", options).unwrap_err();
/// assert!(matches!(err, Error::DepthLimitExceeded { .. }));
/// ```
///
/// # Errors
///
/// Returns an [`Error`] classifying the first problem found.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(input: &str, options: ParseOptions) -> Result<Value> {
    Parser::with_options(input, options).parse()
}

/// Parses JSON text from bytes into a [`Value`].
///
/// # Examples
///
/// ```rust
/// use jsonval::{from_slice, Value};
///
/// assert_eq!(from_slice(b"null").unwrap(), Value::Null);
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or not valid JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Value> {
    let s = std::str::from_utf8(v).map_err(|e| Error::io(&e.to_string()))?;
    parse(s)
}

/// Parses JSON text from an I/O stream into a [`Value`].
///
/// # Examples
///
/// ```rust
/// use jsonval::{from_reader, Value};
/// use std::io::Cursor;
///
/// let cursor = Cursor::new(b"[1, 2]");
/// let value = from_reader(cursor).unwrap();
/// assert!(value.is_array());
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Value>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    parse(&string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalars() {
        assert_eq!(parse("null").unwrap(), Value::Null);
        assert_eq!(parse("true").unwrap(), Value::Bool(true));
        assert_eq!(parse("false").unwrap(), Value::Bool(false));
        assert_eq!(parse("42").unwrap(), Value::Number(42.0));
        assert_eq!(parse("\"hi\"").unwrap(), Value::from("hi"));
    }

    #[test]
    fn test_parse_document() {
        let value = parse(r#"{"a": [1, {"b": null}], "c": "d"}"#).unwrap();
        let a = value.get("a").and_then(Value::as_array).unwrap();
        assert_eq!(a.len(), 2);
        assert_eq!(a[1].get("b"), Some(&Value::Null));
        assert_eq!(value.get("c").and_then(Value::as_str), Some("d"));
    }

    #[test]
    fn test_from_slice() {
        assert_eq!(from_slice(b"3").unwrap(), Value::Number(3.0));
        assert!(from_slice(&[0xFF, 0xFE]).is_err());
    }

    #[test]
    fn test_from_reader() {
        let value = from_reader(std::io::Cursor::new(b"{\"x\": true}")).unwrap();
        assert_eq!(value.get("x"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_object_order_is_source_order() {
        let value = parse(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }
}
