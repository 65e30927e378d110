//! Generic host-native values
//!
//! `Native` is what a host embedding hands the general-purpose converter when
//! it already holds decoded data in its own types. Numbers normally arrive
//! pre-classified as `Int` or `Float`; a `Number` is a raw literal token that
//! nobody classified.

use serde_json::Number;

/// Generic host-native value
#[derive(Debug, Clone, PartialEq)]
pub enum Native {
    /// Null / absent
    Null,
    /// Boolean
    Bool(bool),
    /// Pre-classified integer
    Int(i64),
    /// Pre-classified float
    Float(f64),
    /// UTF-8 string
    Str(String),
    /// Unclassified arbitrary-precision number literal
    Number(Number),
    /// Ordered sequence
    List(Vec<Native>),
    /// String-keyed members in source order
    Map(Vec<(String, Native)>),
}

impl From<&str> for Native {
    fn from(s: &str) -> Self {
        Native::Str(s.to_string())
    }
}

impl From<Number> for Native {
    fn from(n: Number) -> Self {
        Native::Number(n)
    }
}
