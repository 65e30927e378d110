//! Codec limits
//!
//! Defines resource limits for encoding and decoding.
//! Limits specify constraints only; enforcement is handled by the codec.

use serde::{Deserialize, Serialize};

/// Deepest nesting the JSON parser accepts before failing on its own
pub const PARSER_MAX_DEPTH: usize = 127;

/// Default maximum table nesting depth
pub const DEFAULT_MAX_DEPTH: usize = PARSER_MAX_DEPTH;

/// Codec limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecLimits {
    /// Maximum table nesting depth; the outermost table is depth 1
    pub max_depth: usize,
}

impl Default for CodecLimits {
    fn default() -> Self {
        CodecLimits {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CodecLimits {
    /// Create limits with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the maximum nesting depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Depth limit both codec directions enforce
    ///
    /// Capped at [`PARSER_MAX_DEPTH`] so the encoder never writes text the
    /// decoder would reject for nesting.
    pub fn effective_max_depth(&self) -> usize {
        self.max_depth.min(PARSER_MAX_DEPTH)
    }
}
