//! Dynamic values checked by validators
//!
//! Validators operate on loosely-typed data. Instead of relying on implicit
//! conversions, every candidate is a [`Value`]: a closed set of variants with
//! an explicit runtime tag ([`ValueKind`]). Adapters inspect the tag before a
//! typed check ever runs, so a wrong-shaped candidate is reported as a type
//! mismatch rather than silently coerced.
//!
//! # Examples
//!
//! ```
//! use valval::{record, Value, ValueKind};
//!
//! let v = Value::from(42);
//! assert_eq!(v.kind(), ValueKind::Integer);
//! assert_eq!(v.as_f64(), Some(42.0));
//!
//! let user = record! { "name" => "alice", "age" => 30 };
//! assert_eq!(user.kind(), ValueKind::Object);
//! ```
//!
//! Equality is exact: the variant has to match as well as the payload.
//!
//! ```
//! use valval::Value;
//!
//! assert_eq!(Value::from(1), Value::from(1));
//! assert_ne!(Value::from(1), Value::from("1"));
//! assert_ne!(Value::from(1), Value::from(1.0));
//! ```

use std::collections::BTreeMap;
use std::fmt;

/// Key-value record with text keys.
///
/// A `BTreeMap` keeps iteration (and therefore rendered diagnostics)
/// deterministic.
pub type Record = BTreeMap<String, Value>;

/// A loosely-typed candidate value.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// Explicit absent marker
    #[default]
    Null,
    /// Boolean
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Floating-point number
    Float(f64),
    /// Text
    Text(String),
    /// Nullable text wrapper: `None` is an absent value, `Some` a present one
    NullableText(Option<String>),
    /// Ordered sequence of values
    Sequence(Vec<Value>),
    /// Key-value record
    Record(Record),
}

/// Runtime tag of a [`Value`], used in type-mismatch reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValueKind {
    /// [`Value::Null`]
    Null,
    /// [`Value::Bool`]
    Bool,
    /// [`Value::Int`]
    Integer,
    /// [`Value::Float`]; also what numeric adapters expect
    Number,
    /// [`Value::Text`]
    String,
    /// [`Value::NullableText`]
    NullableString,
    /// [`Value::Sequence`]
    Array,
    /// [`Value::Record`]
    Object,
}

impl ValueKind {
    /// Human-readable name with its indefinite article, e.g. `"a number"`.
    pub fn described(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "a boolean",
            ValueKind::Integer => "an integer",
            ValueKind::Number => "a number",
            ValueKind::String => "a string",
            ValueKind::NullableString => "a nullable string",
            ValueKind::Array => "an array",
            ValueKind::Object => "an object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.described())
    }
}

impl Value {
    /// Runtime tag of this value.
    ///
    /// # Example
    ///
    /// ```
    /// use valval::{Value, ValueKind};
    ///
    /// assert_eq!(Value::from(1.5).kind(), ValueKind::Number);
    /// assert_eq!(Value::Null.kind(), ValueKind::Null);
    /// ```
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Number,
            Value::Text(_) => ValueKind::String,
            Value::NullableText(_) => ValueKind::NullableString,
            Value::Sequence(_) => ValueKind::Array,
            Value::Record(_) => ValueKind::Object,
        }
    }

    /// `true` for the explicit absent marker.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// `true` for values explicitly marked as having no value: the absent
    /// marker itself and a nullable text that holds nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use valval::Value;
    ///
    /// assert!(Value::Null.is_absent());
    /// assert!(Value::NullableText(None).is_absent());
    /// assert!(!Value::from("").is_absent());
    /// ```
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Null | Value::NullableText(None))
    }

    /// The value as a float, if it is representable as one.
    ///
    /// Integers are widened with `as f64`, so magnitudes beyond 2^53 round
    /// to the nearest representable float. Every other variant yields `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use valval::Value;
    ///
    /// assert_eq!(Value::from(3).as_f64(), Some(3.0));
    /// assert_eq!(Value::from("3").as_f64(), None);
    /// ```
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// The value as text, for [`Value::Text`] only.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The elements of a [`Value::Sequence`].
    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// The entries of a [`Value::Record`].
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(map) => Some(map),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null | Value::NullableText(None) => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) | Value::NullableText(Some(s)) => write!(f, "{:?}", s),
            Value::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Record(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(i: $t) -> Self {
                    Value::Int(i64::from(i))
                }
            }
        )+
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(f64::from(x))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Option<String>> for Value {
    fn from(s: Option<String>) -> Self {
        Value::NullableText(s)
    }
}

impl From<Option<&str>> for Value {
    fn from(s: Option<&str>) -> Self {
        Value::NullableText(s.map(str::to_string))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl From<Record> for Value {
    fn from(map: Record) -> Self {
        Value::Record(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Record(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Build a [`Value::Record`] from `key => value` pairs.
///
/// # Example
///
/// ```
/// use valval::{record, Value};
///
/// let r = record! { "a" => 1, "b" => Value::Null };
/// assert_eq!(r.as_record().map(|m| m.len()), Some(2));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Value::Record($crate::Record::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Record::new();
        $(
            map.insert(::std::string::String::from($key), $crate::Value::from($value));
        )+
        $crate::Value::Record(map)
    }};
}
