//! Dynamic value representation for parsed JSON.
//!
//! This module provides the [`Value`] enum which represents any JSON value.
//! Parsing always produces a `Value`; inspect it with the `is_*`/`as_*`
//! accessors or by pattern matching.
//!
//! ## Core Types
//!
//! - [`Value`]: an enum over the JSON variants (null, bool, number, string, array, object)
//! - [`Array`]: alias for `Vec<Value>`
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use jsonval::Value;
//!
//! // From primitives
//! let null = Value::Null;
//! let boolean = Value::from(true);
//! let number = Value::from(42);
//! let text = Value::from("hello");
//!
//! // Using the json! macro
//! use jsonval::json;
//! let obj = json!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! ```
//!
//! ### Type Checking and Extraction
//!
//! ```rust
//! use jsonval::Value;
//!
//! let value = Value::from(42);
//! assert!(value.is_number());
//! assert_eq!(value.as_f64(), Some(42.0));
//! assert_eq!(value.as_str(), None);
//! ```
//!
//! The `as_*` accessors return `None` on a variant mismatch: the tag always
//! matches the live data by construction, and there is no way to read a
//! field whose tag does not match.

use crate::Map;

/// A JSON array: a sequence of values.
pub type Array = Vec<Value>;

/// A dynamically-typed representation of any JSON value as defined by
/// [RFC 8259].
///
/// A `Value` exclusively owns any heap data it carries (string contents,
/// child values); replacing a variant drops the previous contents.
///
/// # Examples
///
/// ```rust
/// use jsonval::{parse, Value};
///
/// let value = parse(r#"{"answer": 42}"#).unwrap();
/// assert_eq!(value.get("answer").and_then(Value::as_f64), Some(42.0));
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Array),
    Object(Map),
}

impl Value {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonval::Value;
    ///
    /// assert_eq!(Value::Bool(true).as_bool(), Some(true));
    /// assert_eq!(Value::from(42).as_bool(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a number, returns it as `f64`. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonval::Value;
    ///
    /// assert_eq!(Value::Number(1.5).as_f64(), Some(1.5));
    /// assert_eq!(Value::Null.as_f64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonval::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an array, returns a mutable reference to it.
    #[inline]
    #[must_use]
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// If the value is an object, returns a mutable reference to it.
    #[inline]
    #[must_use]
    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// If the value is an object, looks up a member by key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonval::{json, Value};
    ///
    /// let v = json!({"a": 1, "b": [true]});
    /// assert_eq!(v.get("a").and_then(Value::as_f64), Some(1.0));
    /// assert!(v.get("missing").is_none());
    /// assert!(Value::Null.get("a").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|obj| obj.get(key))
    }

    /// Replaces the value with `Null`, dropping any previously owned contents.
    pub fn set_null(&mut self) {
        *self = Value::Null;
    }

    /// Replaces the value with a boolean, dropping any previously owned contents.
    pub fn set_bool(&mut self, b: bool) {
        *self = Value::Bool(b);
    }

    /// Replaces the value with a number, dropping any previously owned contents.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonval::Value;
    ///
    /// let mut v = Value::from("old string");
    /// v.set_number(2.5);
    /// assert_eq!(v.as_f64(), Some(2.5));
    /// ```
    pub fn set_number(&mut self, n: f64) {
        *self = Value::Number(n);
    }

    /// Replaces the value with a string, dropping any previously owned contents.
    pub fn set_string(&mut self, s: impl Into<String>) {
        *self = Value::String(s.into());
    }

    /// Takes the value out, leaving `Null` in its place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonval::Value;
    ///
    /// let mut v = Value::from("hello");
    /// let taken = v.take();
    /// assert_eq!(taken.as_str(), Some("hello"));
    /// assert!(v.is_null());
    /// ```
    #[must_use]
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Number(v as f64)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(v as f64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Number(v as f64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Value::Object(v)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{MapAccess, SeqAccess, Visitor};
        use std::fmt;

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid JSON value")
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                serde::Deserialize::deserialize(deserializer)
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(value as f64))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::Number(value as f64))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut arr = Vec::new();
                while let Some(element) = seq.next_element()? {
                    arr.push(element);
                }
                Ok(Value::Array(arr))
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = Map::new();
                while let Some((key, value)) = access.next_entry()? {
                    map.insert(key, value);
                }
                Ok(Value::Object(map))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_tags() {
        assert!(Value::Null.is_null());
        assert!(Value::Bool(false).is_bool());
        assert!(Value::Number(0.0).is_number());
        assert!(Value::from("x").is_string());
        assert!(Value::Array(vec![]).is_array());
        assert!(Value::Object(Map::new()).is_object());

        // a mismatched tag never yields data
        assert_eq!(Value::Null.as_bool(), None);
        assert_eq!(Value::Bool(true).as_f64(), None);
        assert_eq!(Value::Number(1.0).as_str(), None);
        assert!(Value::from("s").as_array().is_none());
        assert!(Value::Array(vec![]).as_object().is_none());
    }

    #[test]
    fn mutators_replace_contents() {
        let mut v = Value::from("owned heap string");
        v.set_number(3.25);
        assert_eq!(v, Value::Number(3.25));

        v.set_string("again");
        assert_eq!(v.as_str(), Some("again"));

        v.set_bool(true);
        assert_eq!(v.as_bool(), Some(true));

        v.set_null();
        assert!(v.is_null());
    }

    #[test]
    fn default_is_null() {
        assert_eq!(Value::default(), Value::Null);
    }
}
