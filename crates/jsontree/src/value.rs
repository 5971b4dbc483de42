//! JSON value tree.
//!
//! This module defines the [`Value`] enum produced by the parser, the
//! container aliases backing its composite variants, and the tree operations:
//! keyed lookup, rendering and teardown.
//!
use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};
use core::fmt::{self, Write as _};

use crate::error::LookupError;

/// Payload of [`Value::Object`]: owned keys to owned values, unique keys.
pub type Map = BTreeMap<String, Value>;
/// Payload of [`Value::Array`]: owned values, 0-based.
pub type Array = Vec<Value>;

/// A node of a parsed JSON document.
///
/// Composite variants exclusively own their children, so the tree is a strict
/// tree: dropping (or [`destroy`]ing) a value frees every descendant once.
///
/// # Examples
///
/// ```
/// use jsontree::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("key".to_string(), Value::String("value".into()));
/// let v = Value::Object(map);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
// Serde derives are enabled in tests and behind the optional `serde` feature.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// `null`
    #[default]
    Null,
    /// `true` or `false`
    Boolean(bool),
    /// Any number; integers and fractions share `f64`.
    Number(f64),
    /// String contents as written in the source, without the quotes.
    String(String),
    /// Ordered elements.
    Array(Array),
    /// Keyed members.
    Object(Map),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The boolean payload, if any.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The numeric payload, if any.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string payload, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The elements, if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// The members, if this is an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(m) => Some(m),
            _ => None,
        }
    }

    /// Looks up `key` if this is an object.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Returns the element at `index` if this is an array.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|arr| arr.get(index))
    }

    /// Number of children of a composite, `None` for scalars.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Array(a) => Some(a.len()),
            Self::Object(m) => Some(m.len()),
            Self::Null | Self::Boolean(_) | Self::Number(_) | Self::String(_) => None,
        }
    }

    /// Whether a composite has no children, `None` for scalars.
    #[must_use]
    pub fn is_empty(&self) -> Option<bool> {
        self.len().map(|n| n == 0)
    }

    /// Type name for diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Looks up `key`, distinguishing a missing key from a non-object.
    ///
    /// # Errors
    ///
    /// [`LookupError::NotAnObject`] if `self` is not an object,
    /// [`LookupError::KeyNotFound`] if it has no member named `key`.
    pub fn lookup_key(&self, key: &str) -> Result<&Value, LookupError> {
        match self {
            Self::Object(map) => map
                .get(key)
                .ok_or_else(|| LookupError::KeyNotFound(key.to_string())),
            other => Err(LookupError::NotAnObject(other.type_name())),
        }
    }

    /// Human-readable rendering; see [`render`].
    #[must_use]
    pub fn rendered(&self) -> Rendered<'_> {
        Rendered(self)
    }

    /// Tears the tree down without recursing.
    ///
    /// Children are moved onto a worklist before their parent's storage is
    /// released, so arbitrarily deep trees are freed in constant stack space.
    /// Each key and value is dropped exactly once.
    pub fn destroy(self) {
        let mut pending: Vec<Value> = Vec::new();
        pending.push(self);
        while let Some(value) = pending.pop() {
            match value {
                Self::Array(items) => pending.extend(items),
                // Keys drop here with the map's nodes; values move out first.
                Self::Object(map) => pending.extend(map.into_values()),
                Self::String(_) | Self::Number(_) | Self::Boolean(_) | Self::Null => {}
            }
        }
    }
}

/// Looks up `key` in `root`.
///
/// # Errors
///
/// See [`Value::lookup_key`].
pub fn lookup_key<'a>(root: &'a Value, key: &str) -> Result<&'a Value, LookupError> {
    root.lookup_key(key)
}

/// Frees `value` and all of its descendants. See [`Value::destroy`].
pub fn destroy(value: Value) {
    value.destroy();
}

/// Renders a value for display.
///
/// - strings as their raw text,
/// - booleans as `true`/`false`, null as `NULL`,
/// - numbers with two decimals,
/// - arrays as their elements joined by spaces,
/// - objects as `key: "value"` lines in key order.
///
/// ```
/// use jsontree::{parse, render};
///
/// let v = parse(br#"{"a": [1, true, null], "b": "x"}"#).unwrap();
/// assert_eq!(render(&v), "a: \"1.00 true NULL\"\nb: \"x\"");
/// ```
#[must_use]
pub fn render(value: &Value) -> String {
    value.rendered().to_string()
}

/// [`Display`](fmt::Display) adapter producing the [`render`] format.
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a>(&'a Value);

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::String(s) => f.write_str(s),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Null => f.write_str("NULL"),
            Value::Number(n) => write!(f, "{n:.2}"),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_char(' ')?;
                    }
                    write!(f, "{}", item.rendered())?;
                }
                Ok(())
            }
            Value::Object(map) => {
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_char('\n')?;
                    }
                    write!(f, "{key}: \"{}\"", item.rendered())?;
                }
                Ok(())
            }
        }
    }
}

/// Escapes a string for inclusion in a JSON string literal.
///
/// Quotes, backslashes and control characters are escaped; everything else is
/// written unchanged.
pub(crate) fn write_escaped_string<W: fmt::Write>(src: &str, f: &mut W) -> fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\u{:04X}", c as u32)?,
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_escaped_string(self.0, f)
    }
}

/// Compact JSON text. Strings are written back escaped, so text that came from
/// an escaped literal is escaped a second time.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "\"{}\"", Escaped(s)),
            Value::Array(arr) => {
                f.write_str("[")?;
                let mut first = true;
                for v in arr {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                let mut first = true;
                for (k, v) in map {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "\"{}\":{}", Escaped(k), v)?;
                }
                f.write_str("}")
            }
        }
    }
}
