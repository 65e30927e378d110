//! Value types for tablejson
//!
//! This module defines the host value model bridged to JSON.
//! The Value enum has exactly 6 variants, one per host runtime type.
//!
//! ## Equality Rules
//!
//! - Different types are NEVER equal (no type coercion)
//! - `Integer(1)` != `Float(1.0)`
//! - Float uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`
//! - Tables compare by content, not by identity (see [`Table`])

use crate::table::Table;
use std::fmt;
use std::str::Utf8Error;

/// Host value
///
/// ## The Six Types
///
/// 1. `Nil` - absence of value, JSON `null`
/// 2. `Boolean` - true or false
/// 3. `Integer` - 64-bit signed integer
/// 4. `Float` - 64-bit IEEE-754 floating point
/// 5. `String` - host byte string, expected to hold UTF-8
/// 6. `Table` - shared composite, array- or map-shaped
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absence of value
    #[default]
    Nil,

    /// Boolean true or false
    Boolean(bool),

    /// 64-bit signed integer
    Integer(i64),

    /// 64-bit IEEE-754 floating point
    Float(f64),

    /// Host string
    String(HostString),

    /// Shared table handle
    Table(Table),
}

impl Value {
    /// Returns the host type name (for diagnostics)
    ///
    /// Integers and floats are both reported as `number`, the way scripts
    /// see them.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) | Value::Float(_) => "number",
            Value::String(_) => "string",
            Value::Table(_) => "table",
        }
    }

    /// Check if this value is nil
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as i64
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as a UTF-8 string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => s.as_str(),
            _ => None,
        }
    }

    /// Try to get as a table handle
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(t) => Some(t),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Table(a), Value::Table(b)) => a.content_eq(b),

            // Different types: NEVER equal
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(HostString::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(HostString::from(s))
    }
}

impl From<HostString> for Value {
    fn from(s: HostString) -> Self {
        Value::String(s)
    }
}

impl From<Table> for Value {
    fn from(t: Table) -> Self {
        Value::Table(t)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Nil, Into::into)
    }
}

/// Host string
///
/// Scripting runtimes store strings as arbitrary bytes. The codec only
/// accepts UTF-8 content; everything else is rejected at encode time.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HostString(Vec<u8>);

impl HostString {
    /// Raw bytes of the string
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Borrow as `&str` if the content is valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    /// Borrow as `&str`, reporting where the UTF-8 validation failed
    pub fn to_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(&self.0)
    }

    /// Byte length
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the string is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for HostString {
    fn from(s: &str) -> Self {
        HostString(s.as_bytes().to_vec())
    }
}

impl From<String> for HostString {
    fn from(s: String) -> Self {
        HostString(s.into_bytes())
    }
}

impl From<Vec<u8>> for HostString {
    fn from(bytes: Vec<u8>) -> Self {
        HostString(bytes)
    }
}

impl From<&[u8]> for HostString {
    fn from(bytes: &[u8]) -> Self {
        HostString(bytes.to_vec())
    }
}

impl PartialEq<str> for HostString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for HostString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl fmt::Display for HostString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for HostString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(s) => fmt::Debug::fmt(s, f),
            None => write!(f, "b{:?}", String::from_utf8_lossy(&self.0)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
