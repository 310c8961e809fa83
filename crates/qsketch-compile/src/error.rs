//! Error types for decomposition and circuit synthesis.

use qsketch_ir::IrError;
use thiserror::Error;

/// Errors raised while compiling multi-controlled operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// Fewer than two controls were supplied to a multi-control decomposition.
    #[error("Multi-controlled gate needs at least 2 controls, got {got}")]
    InsufficientControls {
        /// Number of controls supplied.
        got: usize,
    },

    /// The ancilla bank does not hold exactly `controls - 1` qubits.
    #[error("Ancilla bank for {controls} controls must hold {expected} qubits, got {got}")]
    InvalidAncillaCount {
        /// Number of controls.
        controls: usize,
        /// Required ancilla count.
        expected: usize,
        /// Supplied ancilla count.
        got: usize,
    },

    /// A control pattern does not match the number of controls.
    #[error("Control pattern has {pattern} bits for {controls} controls")]
    PatternLengthMismatch {
        /// Number of controls.
        controls: usize,
        /// Number of pattern bits.
        pattern: usize,
    },

    /// A gate cannot be tracked on computational basis states.
    #[error("Gate '{0}' does not map basis states to basis states")]
    NonClassicalGate(String),

    /// A builder parameter is out of range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Underlying IR error.
    #[error("IR error: {0}")]
    Ir(#[from] IrError),
}

/// Result type for compile operations.
pub type CompileResult<T> = Result<T, CompileError>;
