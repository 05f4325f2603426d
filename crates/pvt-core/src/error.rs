use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error(
        "Root not bracketed in [{lower}, {upper}]: f(lower)={f_lower}, f(upper)={f_upper}"
    )]
    RootNotBracketed {
        lower: f64,
        upper: f64,
        f_lower: f64,
        f_upper: f64,
    },

    #[error("Convergence failed for {what} after {iterations} iterations")]
    ConvergenceFailed {
        what: &'static str,
        iterations: usize,
    },

    #[error("Shape mismatch: {left} elements vs {right} elements")]
    ShapeMismatch { left: usize, right: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CoreError::RootNotBracketed {
            lower: 1.0,
            upper: 2.0,
            f_lower: 3.0,
            f_upper: 4.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("not bracketed"));
        assert!(msg.contains("[1, 2]"));

        let err = CoreError::ShapeMismatch { left: 3, right: 2 };
        assert!(err.to_string().contains("3 elements vs 2"));
    }
}
