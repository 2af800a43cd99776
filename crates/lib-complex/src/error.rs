//! Error types for checked complex arithmetic.
//!
//! The plain operators never fail: they follow IEEE 754 and hand back NaN or
//! infinity. These errors only come out of the `checked_*` and `try_*` entry
//! points.

use thiserror::Error;

/// Errors reported by checked complex operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ComplexError {
    /// Divisor has zero magnitude.
    #[error("Division by zero-magnitude divisor")]
    DivisionByZero,

    /// A component is NaN or infinite.
    #[error("Non-finite component: ({re}, {im})")]
    NonFinite { re: f64, im: f64 },
}

/// Result type for checked complex operations.
pub type ComplexResult<T> = Result<T, ComplexError>;
