//! Host modules
//!
//! A host module is a named set of functions callable from scripts. Calls
//! take and return host values; a function may return several values.

use crate::error::CallError;
use crate::signature::{DECODE, ENCODE};
use std::fmt::Display;
use tablejson_core::{CodecLimits, Value};
use tablejson_wire::{decode_json_with, encode_json_with};
use tracing::debug;

/// A module scripts can `require`
pub trait HostModule: Send + Sync {
    /// Name scripts require the module by
    fn name(&self) -> &str;

    /// Names of the callable functions
    fn exports(&self) -> Vec<&'static str>;

    /// Call an exported function
    ///
    /// Returns the function's result values, or raises a [`CallError`].
    fn call(&self, function: &str, args: &[Value]) -> Result<Vec<Value>, CallError>;
}

/// The `json` module: `encode(value)` and `decode(text)`
///
/// Both functions return a single value on success and `nil, message` when
/// the codec rejects the input.
#[derive(Debug, Clone, Default)]
pub struct JsonModule {
    limits: CodecLimits,
}

impl JsonModule {
    /// Name the module is registered under
    pub const NAME: &'static str = "json";

    /// Create the module with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the module with explicit limits
    pub fn with_limits(limits: CodecLimits) -> Self {
        JsonModule { limits }
    }

    /// Limits applied to every call
    pub fn limits(&self) -> &CodecLimits {
        &self.limits
    }

    /// `json.encode(value)`
    pub fn encode(&self, args: &[Value]) -> Result<Vec<Value>, CallError> {
        ENCODE.check(args)?;
        Ok(match encode_json_with(&args[0], &self.limits) {
            Ok(json) => vec![Value::from(json)],
            Err(e) => failure(ENCODE.function, e),
        })
    }

    /// `json.decode(text)`
    pub fn decode(&self, args: &[Value]) -> Result<Vec<Value>, CallError> {
        DECODE.check(args)?;
        let text = match DECODE.string_at(args, 1)?.to_str() {
            Ok(text) => text,
            Err(e) => return Ok(failure(DECODE.function, format!("invalid UTF-8 input: {}", e))),
        };
        Ok(match decode_json_with(text, &self.limits) {
            Ok(value) => vec![value],
            Err(e) => failure(DECODE.function, e),
        })
    }
}

impl HostModule for JsonModule {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn exports(&self) -> Vec<&'static str> {
        vec![DECODE.function, ENCODE.function]
    }

    fn call(&self, function: &str, args: &[Value]) -> Result<Vec<Value>, CallError> {
        match function {
            "encode" => self.encode(args),
            "decode" => self.decode(args),
            _ => Err(CallError::NoSuchFunction {
                module: Self::NAME.to_string(),
                function: function.to_string(),
            }),
        }
    }
}

/// Two-valued failure result: `nil, message`
fn failure(function: &str, message: impl Display) -> Vec<Value> {
    let message = message.to_string();
    debug!(function, %message, "json call failed");
    vec![Value::Nil, Value::from(message)]
}
