//! Entry-point signatures
//!
//! Each entry point declares the argument shapes it accepts. Checking happens
//! before the codec runs, so the codec only ever sees a value to encode or a
//! string to decode.

use crate::error::CallError;
use tablejson_core::{HostString, Value};

/// Accepted shape of one argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgShape {
    /// Any value, nil included
    Any,
    /// A string
    String,
}

impl ArgShape {
    /// Name used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            ArgShape::Any => "value",
            ArgShape::String => "string",
        }
    }

    /// Check whether `value` has this shape
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            ArgShape::Any => true,
            ArgShape::String => matches!(value, Value::String(_)),
        }
    }
}

/// Expected arguments of an entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    /// Entry point name, as scripts call it
    pub function: &'static str,
    /// Exact parameter list
    pub params: &'static [ArgShape],
}

/// `encode(value)`
pub const ENCODE: Signature = Signature {
    function: "encode",
    params: &[ArgShape::Any],
};

/// `decode(text)`
pub const DECODE: Signature = Signature {
    function: "decode",
    params: &[ArgShape::String],
};

impl Signature {
    /// Validate a call's arguments
    ///
    /// A wrong argument count is reported against argument #1.
    pub fn check(&self, args: &[Value]) -> Result<(), CallError> {
        if args.len() != self.params.len() {
            return Err(self.bad_argument(
                1,
                format!(
                    "expected {} argument{}, got {}",
                    self.params.len(),
                    if self.params.len() == 1 { "" } else { "s" },
                    args.len()
                ),
            ));
        }

        for (index, (shape, arg)) in self.params.iter().zip(args).enumerate() {
            if !shape.accepts(arg) {
                return Err(self.bad_argument(
                    index + 1,
                    format!("{} expected, got {}", shape.name(), arg.type_name()),
                ));
            }
        }
        Ok(())
    }

    /// Borrow the string argument at `position`, counted from 1
    pub fn string_at<'a>(
        &self,
        args: &'a [Value],
        position: usize,
    ) -> Result<&'a HostString, CallError> {
        match position.checked_sub(1).and_then(|i| args.get(i)) {
            Some(Value::String(s)) => Ok(s),
            other => Err(self.bad_argument(
                position,
                format!(
                    "string expected, got {}",
                    other.map_or("no value", Value::type_name)
                ),
            )),
        }
    }

    fn bad_argument(&self, position: usize, reason: String) -> CallError {
        CallError::BadArgument {
            position,
            function: self.function,
            reason,
        }
    }
}
