//! The JSON parser.
//!
//! This module implements a single-pass recursive-descent parser over a
//! string slice. A [`Parser`] owns a cursor (byte position plus line/column
//! for diagnostics) and one [`ScratchBuffer`] reused for every string in the
//! document.
//!
//! ## Overview
//!
//! - **Dispatch**: one lookahead character selects the sub-parser: `n`/`t`/`f`
//!   for literals, `"` for strings, `[`/`{` for containers, end of input for
//!   "nothing there", and everything else is handed to the number parser.
//! - **Numbers**: the grammar is validated with a lookahead index first; the
//!   cursor commits only once the whole token is accepted. A `0` followed by
//!   a digit is a complete number plus a second token, not an error in the
//!   number itself.
//! - **Strings**: decoded bytes accumulate on the scratch buffer between a
//!   mark taken at the opening quote and a pop at the closing quote; every
//!   failure path rolls back to the mark, so the buffer's logical length is
//!   zero again when the top-level parse returns.
//! - **Containers**: arrays and objects recurse into the dispatcher, bounded
//!   by [`ParseOptions::max_depth`].
//!
//! Most users should use [`crate::parse`] rather than driving a `Parser`
//! directly.

use crate::error::{Error, Result};
use crate::scratch::ScratchBuffer;
use crate::value::Array;
use crate::{Map, ParseOptions, Value};

/// A single-use JSON parser over a string slice.
///
/// Each parser owns its scratch buffer; concurrent parses must use separate
/// `Parser` instances (the buffer's stack discipline assumes one parse at a
/// time).
///
/// # Examples
///
/// ```rust
/// use jsonval::Parser;
///
/// let mut parser = Parser::new("[1, 2, 3]");
/// let value = parser.parse().unwrap();
/// assert_eq!(value.as_array().map(Vec::len), Some(3));
/// ```
pub struct Parser<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    scratch: ScratchBuffer,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `input` with default options.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    /// Creates a parser over `input` with the given options.
    #[must_use]
    pub fn with_options(input: &'a str, options: ParseOptions) -> Self {
        Parser {
            input,
            position: 0,
            line: 1,
            column: 1,
            scratch: ScratchBuffer::new(),
            max_depth: options.max_depth,
        }
    }

    /// Parses the input as exactly one JSON value.
    ///
    /// Leading and trailing whitespace is permitted; any other trailing
    /// content is [`Error::RootNotSingular`].
    ///
    /// # Errors
    ///
    /// Returns the first diagnostic encountered; see [`Error`] for the
    /// classification.
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn parse(&mut self) -> Result<Value> {
        self.skip_whitespace();
        let value = match self.parse_value(0) {
            Ok(value) => value,
            Err(err) => {
                debug_assert!(self.scratch.is_empty(), "scratch bytes leaked on failure");
                return Err(err);
            }
        };
        self.skip_whitespace();
        if !self.at_end() {
            return Err(Error::RootNotSingular {
                line: self.line,
                col: self.column,
            });
        }
        debug_assert!(self.scratch.is_empty(), "scratch bytes leaked on success");
        Ok(value)
    }

    // ---------------------------------------------------------------- cursor

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.input[self.position..].chars().next()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Skips runs of the four JSON whitespace characters. Idempotent.
    fn skip_whitespace(&mut self) {
        while matches!(self.peek_char(), Some(' ' | '\t' | '\n' | '\r')) {
            self.next_char();
        }
    }

    // ------------------------------------------------------------ dispatcher

    fn parse_value(&mut self, depth: usize) -> Result<Value> {
        match self.peek_char() {
            None => Err(Error::ExpectValue {
                line: self.line,
                col: self.column,
            }),
            Some('n') => self.parse_literal("null", Value::Null),
            Some('t') => self.parse_literal("true", Value::Bool(true)),
            Some('f') => self.parse_literal("false", Value::Bool(false)),
            Some('"') => self.parse_string().map(Value::String),
            Some('[') => self.parse_array(depth),
            Some('{') => self.parse_object(depth),
            Some(_) => self.parse_number(),
        }
    }

    // -------------------------------------------------------------- literals

    fn parse_literal(&mut self, keyword: &'static str, value: Value) -> Result<Value> {
        let (line, col) = (self.line, self.column);
        for expected in keyword.chars() {
            match self.next_char() {
                Some(ch) if ch == expected => {}
                _ => return Err(Error::InvalidValue { line, col }),
            }
        }
        Ok(value)
    }

    // --------------------------------------------------------------- numbers

    /// Validates `[-] int [frac] [exp]` with a lookahead index, committing
    /// the cursor only after the whole token is accepted.
    fn parse_number(&mut self) -> Result<Value> {
        let (line, col) = (self.line, self.column);
        let bytes = self.input.as_bytes();
        let start = self.position;
        let mut i = start;

        if i < bytes.len() && bytes[i] == b'-' {
            i += 1;
        }
        // int: a single 0, or a 1-9 digit followed by any digits. A 0
        // followed by another digit ends the number at the 0; the extra
        // digits are a second token for the driver to reject.
        match bytes.get(i) {
            Some(b'0') => i += 1,
            Some(b'1'..=b'9') => {
                while matches!(bytes.get(i), Some(b'0'..=b'9')) {
                    i += 1;
                }
            }
            _ => return Err(Error::InvalidValue { line, col }),
        }
        // frac: '.' requires at least one digit
        if bytes.get(i) == Some(&b'.') {
            i += 1;
            if !matches!(bytes.get(i), Some(b'0'..=b'9')) {
                return Err(Error::InvalidValue { line, col });
            }
            while matches!(bytes.get(i), Some(b'0'..=b'9')) {
                i += 1;
            }
        }
        // exp: 'e'/'E', optional sign, at least one digit
        if matches!(bytes.get(i), Some(b'e' | b'E')) {
            i += 1;
            if matches!(bytes.get(i), Some(b'+' | b'-')) {
                i += 1;
            }
            if !matches!(bytes.get(i), Some(b'0'..=b'9')) {
                return Err(Error::InvalidValue { line, col });
            }
            while matches!(bytes.get(i), Some(b'0'..=b'9')) {
                i += 1;
            }
        }

        let number: f64 = self.input[start..i]
            .parse()
            .map_err(|_| Error::InvalidValue { line, col })?;
        // Overflow to infinity is an error; underflow to zero is IEEE 754
        // behavior and passes through.
        if number.is_infinite() {
            return Err(Error::NumberTooBig { line, col });
        }

        // commit the validated span (all ASCII)
        for _ in start..i {
            self.next_char();
        }
        Ok(Value::Number(number))
    }

    // --------------------------------------------------------------- strings

    /// Parses a string token, including both quotes. The scratch buffer is
    /// back at its entry mark when this returns, on success and on failure.
    fn parse_string(&mut self) -> Result<String> {
        self.next_char(); // opening quote, guaranteed by the dispatcher
        let mark = self.scratch.mark();
        match self.scan_string(mark) {
            Ok(s) => Ok(s),
            Err(err) => {
                self.scratch.rollback(mark);
                Err(err)
            }
        }
    }

    fn scan_string(&mut self, mark: usize) -> Result<String> {
        loop {
            let (line, col) = (self.line, self.column);
            match self.next_char() {
                None => {
                    return Err(Error::MissingQuotationMark { line, col });
                }
                Some('"') => {
                    let bytes = self.scratch.pop(mark).to_vec();
                    // the scratch only ever receives whole chars, so this
                    // conversion cannot fail
                    return String::from_utf8(bytes)
                        .map_err(|_| Error::InvalidStringChar { line, col });
                }
                Some('\\') => {
                    let decoded = self.decode_escape(line, col)?;
                    self.scratch.push_char(decoded);
                }
                Some(ch) if (ch as u32) < 0x20 => {
                    return Err(Error::InvalidStringChar { line, col });
                }
                Some(ch) => self.scratch.push_char(ch),
            }
        }
    }

    /// Decodes one escape sequence; the backslash has already been consumed.
    /// `line`/`col` locate the backslash for diagnostics.
    fn decode_escape(&mut self, line: usize, col: usize) -> Result<char> {
        match self.next_char() {
            None => Err(Error::MissingQuotationMark { line, col }),
            Some('"') => Ok('"'),
            Some('\\') => Ok('\\'),
            Some('/') => Ok('/'),
            Some('b') => Ok('\u{0008}'),
            Some('f') => Ok('\u{000C}'),
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some('t') => Ok('\t'),
            Some('u') => self.decode_unicode_escape(line, col),
            Some(_) => Err(Error::InvalidStringEscape { line, col }),
        }
    }

    /// Decodes `XXXX` (and, for high surrogates, the mandatory `\uXXXX` low
    /// half) into a scalar value.
    fn decode_unicode_escape(&mut self, line: usize, col: usize) -> Result<char> {
        let hi = self.parse_hex4(line, col)?;
        let code = if (0xD800..=0xDBFF).contains(&hi) {
            // surrogate pair: the low half must follow immediately
            if self.next_char() != Some('\\') || self.next_char() != Some('u') {
                return Err(Error::InvalidStringEscape { line, col });
            }
            let lo = self.parse_hex4(line, col)?;
            if !(0xDC00..=0xDFFF).contains(&lo) {
                return Err(Error::InvalidStringEscape { line, col });
            }
            0x10000 + ((hi - 0xD800) << 10) + (lo - 0xDC00)
        } else {
            hi
        };
        char::from_u32(code).ok_or(Error::InvalidStringEscape { line, col })
    }

    fn parse_hex4(&mut self, line: usize, col: usize) -> Result<u32> {
        let mut code = 0u32;
        for _ in 0..4 {
            match self.next_char() {
                None => return Err(Error::MissingQuotationMark { line, col }),
                Some(ch) => match ch.to_digit(16) {
                    Some(digit) => code = code * 16 + digit,
                    None => return Err(Error::InvalidStringEscape { line, col }),
                },
            }
        }
        Ok(code)
    }

    // ------------------------------------------------------------ containers

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth >= self.max_depth {
            Err(Error::DepthLimitExceeded {
                line: self.line,
                col: self.column,
                limit: self.max_depth,
            })
        } else {
            Ok(())
        }
    }

    fn parse_array(&mut self, depth: usize) -> Result<Value> {
        self.check_depth(depth)?;
        self.next_char(); // '['
        self.skip_whitespace();
        let mut elements = Array::new();
        if self.peek_char() == Some(']') {
            self.next_char();
            return Ok(Value::Array(elements));
        }
        loop {
            elements.push(self.parse_value(depth + 1)?);
            self.skip_whitespace();
            match self.peek_char() {
                Some(',') => {
                    self.next_char();
                    self.skip_whitespace();
                }
                Some(']') => {
                    self.next_char();
                    return Ok(Value::Array(elements));
                }
                _ => {
                    return Err(Error::MissingCommaOrBracket {
                        line: self.line,
                        col: self.column,
                    });
                }
            }
        }
    }

    fn parse_object(&mut self, depth: usize) -> Result<Value> {
        self.check_depth(depth)?;
        self.next_char(); // '{'
        self.skip_whitespace();
        let mut members = Map::new();
        if self.peek_char() == Some('}') {
            self.next_char();
            return Ok(Value::Object(members));
        }
        loop {
            if self.peek_char() != Some('"') {
                return Err(Error::MissingKey {
                    line: self.line,
                    col: self.column,
                });
            }
            let key = self.parse_string()?;
            self.skip_whitespace();
            if self.peek_char() != Some(':') {
                return Err(Error::MissingColon {
                    line: self.line,
                    col: self.column,
                });
            }
            self.next_char();
            self.skip_whitespace();
            let value = self.parse_value(depth + 1)?;
            // a duplicate key replaces the earlier value in place
            members.insert(key, value);
            self.skip_whitespace();
            match self.peek_char() {
                Some(',') => {
                    self.next_char();
                    self.skip_whitespace();
                }
                Some('}') => {
                    self.next_char();
                    return Ok(Value::Object(members));
                }
                _ => {
                    return Err(Error::MissingCommaOrBrace {
                        line: self.line,
                        col: self.column,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_skip_is_idempotent() {
        let mut parser = Parser::new("  \t\r\n  true");
        parser.skip_whitespace();
        let after_first = parser.position;
        parser.skip_whitespace();
        assert_eq!(parser.position, after_first);
        assert_eq!(parser.peek_char(), Some('t'));
    }

    #[test]
    fn cursor_tracks_lines_and_columns() {
        let mut parser = Parser::new("a\nbc");
        parser.next_char();
        assert_eq!((parser.line, parser.column), (1, 2));
        parser.next_char(); // newline
        assert_eq!((parser.line, parser.column), (2, 1));
        parser.next_char();
        assert_eq!((parser.line, parser.column), (2, 2));
    }

    #[test]
    fn scratch_is_empty_after_success() {
        let mut parser = Parser::new(r#"["a", {"b": "cd"}, "efg"]"#);
        parser.parse().unwrap();
        assert!(parser.scratch.is_empty());
    }

    #[test]
    fn scratch_rolls_back_after_unterminated_string() {
        for input in ["\"", "\"abc", "\"abc\\", "\"abc\\u00", "[\"a\", \"bc"] {
            let mut parser = Parser::new(input);
            assert!(parser.parse().is_err(), "input {input:?} should fail");
            assert!(
                parser.scratch.is_empty(),
                "scratch leaked for input {input:?}"
            );
        }
    }

    #[test]
    fn scratch_rolls_back_after_bad_escape_mid_array() {
        let mut parser = Parser::new(r#"["ok", "partial \q"]"#);
        assert!(matches!(
            parser.parse(),
            Err(Error::InvalidStringEscape { .. })
        ));
        assert!(parser.scratch.is_empty());
    }

    #[test]
    fn repeated_failing_string_parses_do_not_leak() {
        let mut parser = Parser::new("\"abc");
        for _ in 0..3 {
            // parse_value never completes, so the mark rollback is all that
            // keeps the scratch balanced
            let _ = parser.parse_value(0);
            assert!(parser.scratch.is_empty());
            parser.position = 0;
            parser.line = 1;
            parser.column = 1;
        }
    }

    #[test]
    fn number_lookahead_does_not_consume_on_failure() {
        let mut parser = Parser::new("1.e5");
        assert!(parser.parse_number().is_err());
    }

    #[test]
    fn grammar_boundary_commits_only_the_zero() {
        let mut parser = Parser::new("0123");
        assert_eq!(parser.parse_number().unwrap(), Value::Number(0.0));
        assert_eq!(parser.peek_char(), Some('1'));
    }
}
