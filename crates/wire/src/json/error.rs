//! Codec error types
//!
//! Every error is a deterministic function of the input: retrying the same
//! call yields the same error. Display strings are what host scripts see as
//! the second return value, so the phrases they match on are fixed:
//!
//! | Error | Required phrase |
//! |-------|-----------------|
//! | `EncodeError::SparseArray` | `sparse array` |
//! | `EncodeError::InvalidKeyType` | `mixed or invalid key types` |

use thiserror::Error;

/// Encode error types
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EncodeError {
    /// Numeric keys that do not form exactly `1..N`
    #[error("cannot encode sparse array")]
    SparseArray,

    /// Boolean or table keys, or string keys mixed with numeric keys
    #[error("cannot encode mixed or invalid key types")]
    InvalidKeyType,

    /// A table reachable from itself
    #[error("cannot encode recursively nested tables")]
    CyclicReference,

    /// String (value or key) that is not valid UTF-8
    #[error("cannot encode string: invalid UTF-8 after byte {valid_up_to}")]
    InvalidString {
        /// Length of the valid UTF-8 prefix
        valid_up_to: usize,
    },

    /// NaN or infinity; JSON has no literal for them
    #[error("cannot encode non-finite number {0}")]
    NonFiniteFloat(f64),

    /// Tables nested deeper than the configured limit
    #[error("cannot encode tables nested deeper than {limit}")]
    DepthExceeded {
        /// Configured maximum depth
        limit: usize,
    },
}

/// Decode error types
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DecodeError {
    /// Malformed JSON, as reported by the parser
    #[error("invalid JSON: {message}")]
    SyntaxError {
        /// Parser diagnostic, including position
        message: String,
        /// 1-based line of the failure
        line: usize,
        /// 1-based column of the failure
        column: usize,
    },

    /// Number literal with no finite 64-bit representation
    #[error("invalid number: {0}")]
    InvalidNumber(String),

    /// Arrays/objects nested deeper than the configured limit
    #[error("cannot decode values nested deeper than {limit}")]
    DepthExceeded {
        /// Effective maximum depth
        limit: usize,
    },
}
