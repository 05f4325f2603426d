//! EOS evaluation errors.

use pvt_core::CoreError;
use thiserror::Error;

/// Result type for EOS operations.
pub type EosResult<T> = Result<T, EosError>;

/// Errors that can occur while building or evaluating an EOS.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EosError {
    /// Formula-family tag that names no known formula.
    #[error("Unknown {kind} family: {tag}")]
    UnknownFamily { kind: &'static str, tag: String },

    /// Parameter tuple of the wrong length for its family.
    #[error("{family} expects {expected} parameters, got {got}")]
    ArityMismatch {
        family: &'static str,
        expected: usize,
        got: usize,
    },

    /// Named parameters that do not match the family's ordered names.
    #[error("{family} parameter names mismatch: expected [{expected}], got [{got}]")]
    ParamNameMismatch {
        family: &'static str,
        expected: String,
        got: String,
    },

    /// Quantity the formula family does not define.
    #[error("Not supported: {what}")]
    NotSupported { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Numeric failure (root bracketing, convergence, shapes).
    #[error(transparent)]
    Core(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EosError::UnknownFamily {
            kind: "static",
            tag: "bm4".into(),
        };
        assert!(err.to_string().contains("bm4"));

        let err = EosError::ArityMismatch {
            family: "constq",
            expected: 4,
            got: 3,
        };
        assert_eq!(err.to_string(), "constq expects 4 parameters, got 3");
    }

    #[test]
    fn core_errors_convert() {
        let err: EosError = CoreError::ShapeMismatch { left: 2, right: 3 }.into();
        assert!(matches!(err, EosError::Core(CoreError::ShapeMismatch { .. })));
        assert!(err.to_string().contains("Shape mismatch"));
    }
}
