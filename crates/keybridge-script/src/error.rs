//! Errors raised to scripts.

use keybridge_core::ConstantError;
use thiserror::Error;

/// Error returned by a script-facing call or by function registration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScriptError {
    /// An argument had the wrong type or was missing.
    #[error("bad argument #{index} (expected {expected}, got {got})")]
    BadArgument {
        index: usize,
        expected: &'static str,
        got: &'static str,
    },

    /// A key or scancode name was not recognised.
    #[error(transparent)]
    Constant(#[from] ConstantError),

    /// More shared upvalues than a function can capture.
    #[error("too many upvalues ({0}, at most {})", crate::compat::MAX_UPVALUES)]
    TooManyUpvalues(usize),

    /// A registration entry had no function on an API level without placeholders.
    #[error("no function given for '{0}'")]
    MissingFunction(String),

    /// The named field exists but holds a placeholder.
    #[error("attempt to call field '{0}' (a boolean value)")]
    NotCallable(String),

    /// The module has no field with this name.
    #[error("attempt to call unknown function '{module}.{name}'")]
    UnknownFunction { module: String, name: String },

    /// An API level string could not be parsed.
    #[error("unsupported API version: {0}")]
    UnsupportedVersion(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_argument_message() {
        let err = ScriptError::BadArgument {
            index: 2,
            expected: "number",
            got: "string",
        };
        assert_eq!(err.to_string(), "bad argument #2 (expected number, got string)");
    }

    #[test]
    fn test_constant_error_is_transparent() {
        let err: ScriptError = ConstantError::InvalidKey("hyper".to_string()).into();
        assert_eq!(err.to_string(), "invalid key constant: hyper");
    }

    #[test]
    fn test_too_many_upvalues_message() {
        assert_eq!(
            ScriptError::TooManyUpvalues(300).to_string(),
            "too many upvalues (300, at most 255)"
        );
    }
}
