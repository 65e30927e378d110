//! # tablejson
//!
//! Translate scripting-runtime values to JSON text and back.
//!
//! Host runtimes have one composite type, the table, serving as both array and
//! map. tablejson decides per table whether it is a JSON array (keys exactly
//! `1..N`) or a JSON object (all string keys), rejects everything else with a
//! precise error, refuses self-referencing tables, and keeps integers and
//! floats apart across a round trip.
//!
//! ## Quick Start
//!
//! ```
//! use tablejson::prelude::*;
//!
//! let list = Value::Table(Table::from_array(["a", "b", "c"]));
//! assert_eq!(encode(&list)?, r#"["a","b","c"]"#);
//!
//! let decoded = decode(r#"{"name": "Tim", "number": 12345}"#)?;
//! let person = decoded.as_table().unwrap();
//! assert_eq!(person.get("number"), Some(Value::Integer(12345)));
//! # Ok::<(), tablejson::Error>(())
//! ```
//!
//! ## Layers
//!
//! - [`tablejson_core`]: value model, tables, limits
//! - [`tablejson_wire`]: the encoder and decoder
//! - [`tablejson_host`]: the script-facing `json` module and argument checks

#![warn(missing_docs)]

mod error;

pub mod prelude;

// Re-export main entry points
pub use error::{Error, Result};

pub use tablejson_core::{CodecLimits, HostString, Key, Native, Table, TableId, Value};
pub use tablejson_host::{
    ArgShape, CallError, HostModule, JsonModule, ModuleLoader, ModuleRegistry, Signature,
};
pub use tablejson_wire::{classify, lift_native, DecodeError, EncodeError, Shape};

/// Encode a value to JSON text with default limits
pub fn encode(value: &Value) -> Result<String> {
    Ok(tablejson_wire::encode_json(value)?)
}

/// Encode a value to JSON text
pub fn encode_with(value: &Value, limits: &CodecLimits) -> Result<String> {
    Ok(tablejson_wire::encode_json_with(value, limits)?)
}

/// Decode JSON text to a value with default limits
pub fn decode(text: &str) -> Result<Value> {
    Ok(tablejson_wire::decode_json(text)?)
}

/// Decode JSON text to a value
pub fn decode_with(text: &str, limits: &CodecLimits) -> Result<Value> {
    Ok(tablejson_wire::decode_json_with(text, limits)?)
}
