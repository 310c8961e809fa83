//! Error types for the HAL crate.

use thiserror::Error;

/// Errors that can occur while configuring or calling an executor.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// Executor cannot be reached.
    #[error("Executor not available: {0}")]
    ExecutorUnavailable(String),

    /// Executor refused the circuit.
    #[error("Executor rejected circuit: {0}")]
    ExecutorRejectedCircuit(String),

    /// Invalid number of shots.
    #[error("Invalid shots: {0}")]
    InvalidShots(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No executor registered under this name.
    #[error("Unknown executor: {0}")]
    UnknownExecutor(String),

    /// Profile file could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Recording or circuit (de)serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// File access failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for HAL operations.
pub type HalResult<T> = Result<T, HalError>;
