//! The executor trait.
//!
//! An executor runs a circuit and hands back either shot counts or the final
//! statevector. Calls block until the result is available; there are no job
//! handles, retries or timeouts at this layer.

use qsketch_ir::Circuit;

use crate::config::ExecutorConfig;
use crate::error::{HalError, HalResult};
use crate::result::{Counts, Statevector};

/// Something that can run circuits.
///
/// # Contract
///
/// - `submit` and `submit_statevector` SHOULD call [`Executor::validate`]
///   before doing any work.
/// - `submit` MUST reject zero shots with [`HalError::InvalidShots`].
/// - Counts and statevector indices use least-significant-qubit-first order.
pub trait Executor: Send + Sync {
    /// Get the name of this executor.
    fn name(&self) -> &str;

    /// The configuration this executor was built from.
    fn config(&self) -> &ExecutorConfig;

    /// Run `circuit` for `shots` repetitions and return the outcome counts.
    fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<Counts>;

    /// Run `circuit` once and return its final statevector.
    fn submit_statevector(&self, circuit: &Circuit) -> HalResult<Statevector>;

    /// Check `circuit` against the configured limits.
    fn validate(&self, circuit: &Circuit) -> HalResult<()> {
        if let Some(max) = self.config().max_qubits {
            if circuit.num_qubits() > max as usize {
                return Err(HalError::ExecutorRejectedCircuit(format!(
                    "circuit '{}' uses {} qubits, {} accepts at most {}",
                    circuit.name(),
                    circuit.num_qubits(),
                    self.name(),
                    max
                )));
            }
        }
        Ok(())
    }
}

/// Trait for creating executors from configuration.
pub trait ExecutorFactory: Sized {
    /// Create a new executor instance from configuration.
    fn from_config(config: ExecutorConfig) -> HalResult<Self>;
}

pub(crate) fn check_shots(shots: u32) -> HalResult<()> {
    if shots == 0 {
        return Err(HalError::InvalidShots("shots must be at least 1".into()));
    }
    Ok(())
}
