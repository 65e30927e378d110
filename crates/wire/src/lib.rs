//! Wire encoding for tablejson
//!
//! This crate translates between host values and JSON text.
//!
//! ## Wire Encoding Rules
//!
//! | Value Type | JSON Encoding |
//! |------------|--------------|
//! | Nil | `null` |
//! | Boolean | `true`/`false` |
//! | Integer | number, no fraction |
//! | Float (finite) | number, always with fraction or exponent |
//! | Float (NaN, ±Inf) | error |
//! | String (UTF-8) | `"..."` |
//! | Table, empty | `[]` |
//! | Table, keys `1..N` | `[...]` |
//! | Table, string keys | `{...}` |
//! | Table, other keys | error |
//!
//! Decoding picks `Integer` or `Float` from each number's literal text, so
//! `10` decodes as an integer and `10.0` as a float.
//!
//! ## Examples
//!
//! ```
//! use tablejson_wire::{encode_json, decode_json};
//! use tablejson_core::{Table, Value};
//!
//! // Encode a value
//! let list = Value::Table(Table::from_array([1, 2, 3]));
//! let json = encode_json(&list).unwrap();
//! assert_eq!(json, "[1,2,3]");
//!
//! // Decode a value
//! let decoded = decode_json("42").unwrap();
//! assert_eq!(decoded, Value::Integer(42));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod json;

// Re-export main types
pub use json::{
    classify, classify_keys, classify_literal, classify_number, decode_json, decode_json_with,
    encode_json, encode_json_with, encode_string, lift_native, DecodeError, EncodeError, Shape,
};
pub use tablejson_core::PARSER_MAX_DEPTH;
