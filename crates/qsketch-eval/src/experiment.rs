//! Running a circuit and interpreting the result in one step.

use tracing::{debug, instrument};

use qsketch_hal::Executor;
use qsketch_ir::Circuit;

use crate::error::EvalResult;
use crate::probability::ProbabilityTable;

/// Which executor path to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Sample the circuit this many times.
    Shots(u32),
    /// Read the exact final statevector.
    Statevector,
}

/// Submits circuits to one executor and returns filtered probability tables.
///
/// Executor errors reach the caller unchanged as
/// [`EvalError::Executor`](crate::EvalError::Executor).
pub struct Experiment<'a> {
    executor: &'a dyn Executor,
}

impl<'a> Experiment<'a> {
    /// Use `executor` for every run.
    pub fn new(executor: &'a dyn Executor) -> Self {
        Self { executor }
    }

    /// Run `circuit` in `mode`.
    #[instrument(skip(self, circuit), fields(circuit = circuit.name(), executor = self.executor.name()))]
    pub fn run(&self, circuit: &Circuit, mode: Mode) -> EvalResult<ProbabilityTable> {
        let table = match mode {
            Mode::Shots(shots) => {
                let counts = self.executor.submit(circuit, shots)?;
                ProbabilityTable::from_counts(&counts)?
            }
            Mode::Statevector => {
                let statevector = self.executor.submit_statevector(circuit)?;
                ProbabilityTable::from_statevector(&statevector)?
            }
        };
        let filtered = table.filtered();
        debug!("{} of {} outcomes non-zero", filtered.len(), table.len());
        Ok(filtered)
    }

    /// Statevector path.
    pub fn probabilities(&self, circuit: &Circuit) -> EvalResult<ProbabilityTable> {
        self.run(circuit, Mode::Statevector)
    }

    /// Shot path.
    pub fn sample(&self, circuit: &Circuit, shots: u32) -> EvalResult<ProbabilityTable> {
        self.run(circuit, Mode::Shots(shots))
    }
}
