//! JSON decoding for host values
//!
//! Decoding runs in three steps:
//! 1. `serde_json` parses the text into a generic tree, keeping number
//!   literals as raw tokens (`arbitrary_precision`) and object members in
//!   source order (`preserve_order`)
//! 2. number tokens are classified from their text into `Int` or `Float`,
//!   producing a [`Native`] tree
//! 3. [`lift_native`] converts the native tree into host values
//!
//! `lift_native` is also the general-purpose converter for callers holding
//! native values of their own. It has no numeric typing of its own: an
//! unclassified `Native::Number` token becomes a string holding the literal.

use super::error::DecodeError;
use serde_json::Number;
use tablejson_core::{CodecLimits, HostString, Native, Table, Value};
use tracing::debug;

/// Decode a JSON string to Value with default limits
pub fn decode_json(json: &str) -> Result<Value, DecodeError> {
    decode_json_with(json, &CodecLimits::default())
}

/// Decode a JSON string to Value
pub fn decode_json_with(json: &str, limits: &CodecLimits) -> Result<Value, DecodeError> {
    let tree: serde_json::Value = serde_json::from_str(json).map_err(|e| {
        let err = parse_error(e, limits);
        debug!(error = %err, "rejected JSON input");
        err
    })?;
    let native = to_native(tree)?;
    lift_native(native, limits)
}

/// Map a parser failure onto the decode error kinds
fn parse_error(e: serde_json::Error, limits: &CodecLimits) -> DecodeError {
    let message = e.to_string();
    if message.starts_with("recursion limit exceeded") {
        return DecodeError::DepthExceeded {
            limit: limits.effective_max_depth(),
        };
    }
    DecodeError::SyntaxError {
        message,
        line: e.line(),
        column: e.column(),
    }
}

/// Convert a parsed tree into native values, classifying every number
fn to_native(json: serde_json::Value) -> Result<Native, DecodeError> {
    Ok(match json {
        serde_json::Value::Null => Native::Null,
        serde_json::Value::Bool(b) => Native::Bool(b),
        serde_json::Value::Number(n) => classify_number(&n)?,
        serde_json::Value::String(s) => Native::Str(s),
        serde_json::Value::Array(items) => Native::List(
            items
                .into_iter()
                .map(to_native)
                .collect::<Result<_, _>>()?,
        ),
        serde_json::Value::Object(members) => Native::Map(
            members
                .into_iter()
                .map(|(k, v)| Ok((k, to_native(v)?)))
                .collect::<Result<_, DecodeError>>()?,
        ),
    })
}

/// Classify a number token as integer or float
pub fn classify_number(number: &Number) -> Result<Native, DecodeError> {
    classify_literal(&number.to_string())
}

/// Classify a JSON number literal from its text
///
/// A literal with no fraction and no exponent that fits `i64` is an integer;
/// everything else is a float. `10` and `10.0` therefore differ.
pub fn classify_literal(literal: &str) -> Result<Native, DecodeError> {
    let integral = !literal.bytes().any(|b| matches!(b, b'.' | b'e' | b'E'));
    if integral {
        if let Ok(i) = literal.parse::<i64>() {
            return Ok(Native::Int(i));
        }
        // Out of i64 range: fall back to f64
    }

    match literal.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(Native::Float(f)),
        _ => Err(DecodeError::InvalidNumber(literal.to_string())),
    }
}

/// Convert a native value into a host value
pub fn lift_native(native: Native, limits: &CodecLimits) -> Result<Value, DecodeError> {
    lift(native, 0, limits)
}

fn lift(native: Native, depth: usize, limits: &CodecLimits) -> Result<Value, DecodeError> {
    match native {
        Native::Null => Ok(Value::Nil),
        Native::Bool(b) => Ok(Value::Boolean(b)),
        Native::Int(i) => Ok(Value::Integer(i)),
        Native::Float(f) => Ok(Value::Float(f)),
        Native::Str(s) => Ok(Value::String(HostString::from(s))),
        // No numeric typing here: the token is kept as its literal text
        Native::Number(n) => Ok(Value::String(HostString::from(n.to_string()))),
        Native::List(items) => {
            check_depth(depth, limits)?;
            let table = Table::new();
            for (index, item) in (1i64..).zip(items) {
                table.set(index, lift(item, depth + 1, limits)?);
            }
            Ok(Value::Table(table))
        }
        Native::Map(members) => {
            check_depth(depth, limits)?;
            let table = Table::new();
            for (key, item) in members {
                table.set(key, lift(item, depth + 1, limits)?);
            }
            Ok(Value::Table(table))
        }
    }
}

fn check_depth(depth: usize, limits: &CodecLimits) -> Result<(), DecodeError> {
    let limit = limits.effective_max_depth();
    if depth >= limit {
        debug!(limit, "decoded value nested too deep");
        return Err(DecodeError::DepthExceeded { limit });
    }
    Ok(())
}
