//! Call-boundary errors
//!
//! These are raised, not returned: they signal a script calling an entry
//! point wrongly, not bad data.

use thiserror::Error;

/// Host call error
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CallError {
    /// Wrong argument count or argument type
    #[error("bad argument #{position} to {function} ({reason})")]
    BadArgument {
        /// 1-based argument position
        position: usize,
        /// Entry point name
        function: &'static str,
        /// What was expected and what was passed
        reason: String,
    },

    /// Module has no such export
    #[error("attempt to call a nil value (field '{function}' of module '{module}')")]
    NoSuchFunction {
        /// Module name
        module: String,
        /// Requested function
        function: String,
    },

    /// No loader registered under this name
    #[error("module '{0}' not found")]
    ModuleNotFound(String),
}

impl CallError {
    /// Check if this is an argument error
    pub fn is_bad_argument(&self) -> bool {
        matches!(self, CallError::BadArgument { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_argument_message() {
        let err = CallError::BadArgument {
            position: 1,
            function: "decode",
            reason: "string expected, got number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "bad argument #1 to decode (string expected, got number)"
        );
        assert!(err.is_bad_argument());
    }

    #[test]
    fn test_module_not_found_message() {
        let err = CallError::ModuleNotFound("yaml".to_string());
        assert_eq!(err.to_string(), "module 'yaml' not found");
        assert!(!err.is_bad_argument());
    }
}
