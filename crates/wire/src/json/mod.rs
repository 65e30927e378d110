//! JSON wire encoding for host values
//!
//! This module implements JSON encoding and decoding for the host Value type.
//! Tables are the only composite, so the encoder decides per table whether it
//! is a JSON array or a JSON object:
//!
//! - keys exactly `1..N` encode as an array, in index order
//! - all-string keys encode as an object, keys sorted
//! - anything else is rejected (`sparse array`, `mixed or invalid key types`)

mod decode;
mod encode;
mod error;
mod shape;

pub use decode::{
    classify_literal, classify_number, decode_json, decode_json_with, lift_native,
};
pub use encode::{encode_json, encode_json_with, encode_string};
pub use error::{DecodeError, EncodeError};
pub use shape::{classify, classify_keys, Shape};
