//! Error types for result interpretation.

use qsketch_hal::HalError;
use thiserror::Error;

/// Errors that can occur while interpreting executor output.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EvalError {
    /// Statevector length is zero or not a power of two.
    #[error("Malformed statevector: length {0} is not a power of two")]
    MalformedStatevector(usize),

    /// Counts or weights sum to zero.
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// A probability lies outside [0, 1].
    #[error("Invalid probability: {0}")]
    InvalidProbability(f64),

    /// Estimation was asked for on an empty outcome set.
    #[error("No outcomes to estimate from")]
    NoOutcomes,

    /// A key contains characters other than `0` and `1`.
    #[error("Invalid bitstring '{0}'")]
    InvalidBitstring(String),

    /// A numeric argument is outside its domain.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Prefix width does not fit the bitstrings.
    #[error("Invalid width {width} for bitstrings of length {len}")]
    InvalidWidth {
        /// Requested prefix width.
        width: usize,
        /// Bitstring length.
        len: usize,
    },

    /// Executor error, passed through unchanged.
    #[error(transparent)]
    Executor(#[from] HalError),
}

/// Result type for evaluation operations.
pub type EvalResult<T> = Result<T, EvalError>;
