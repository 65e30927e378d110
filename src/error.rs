//! Unified error types for tablejson.
//!
//! This module wraps the encoder, decoder, and call-boundary errors in one
//! type for callers that do not care which layer failed.

use tablejson_host::CallError;
use tablejson_wire::{DecodeError, EncodeError};
use thiserror::Error;

/// All tablejson errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Value could not be encoded
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Text could not be decoded
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Entry point called with bad arguments, or unknown module/function
    #[error(transparent)]
    Call(#[from] CallError),
}

/// Result type for tablejson operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if nesting exceeded the configured depth, on either side.
    pub fn is_depth_exceeded(&self) -> bool {
        matches!(
            self,
            Error::Encode(EncodeError::DepthExceeded { .. })
                | Error::Decode(DecodeError::DepthExceeded { .. })
        )
    }

    /// Check if this is a self-referencing table.
    pub fn is_cycle(&self) -> bool {
        matches!(self, Error::Encode(EncodeError::CyclicReference))
    }

    /// Check if an entry point rejected its arguments.
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Error::Call(e) if e.is_bad_argument())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_pass_through() {
        let err = Error::from(EncodeError::SparseArray);
        assert_eq!(err.to_string(), "cannot encode sparse array");
    }

    #[test]
    fn test_classification_helpers() {
        assert!(Error::from(EncodeError::DepthExceeded { limit: 1 }).is_depth_exceeded());
        assert!(Error::from(DecodeError::DepthExceeded { limit: 1 }).is_depth_exceeded());
        assert!(Error::from(EncodeError::CyclicReference).is_cycle());
        assert!(!Error::from(EncodeError::InvalidKeyType).is_cycle());

        let call = CallError::BadArgument {
            position: 1,
            function: "encode",
            reason: "expected 1 argument, got 0".to_string(),
        };
        assert!(Error::from(call).is_argument_error());
    }
}
