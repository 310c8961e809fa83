//! Executor that serves recorded results.
//!
//! Results are looked up by circuit name. A recording can be built in code
//! or loaded from a JSON file of the form
//!
//! ```json
//! { "counts": { "bell": { "00": 512, "11": 512 } },
//!   "statevectors": { "plus": [[0.7071, 0.0], [0.7071, 0.0]] } }
//! ```

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use qsketch_ir::Circuit;

use crate::config::ExecutorConfig;
use crate::error::{HalError, HalResult};
use crate::executor::{Executor, ExecutorFactory, check_shots};
use crate::result::{Counts, Statevector};

/// Recorded results keyed by circuit name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    /// Shot counts per circuit.
    #[serde(default)]
    pub counts: FxHashMap<String, Counts>,
    /// Statevectors per circuit.
    #[serde(default)]
    pub statevectors: FxHashMap<String, Statevector>,
}

impl Recording {
    /// Load a recording from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> HalResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Replays recorded counts and statevectors.
#[derive(Debug, Clone)]
pub struct ReplayExecutor {
    config: ExecutorConfig,
    recording: Recording,
    online: bool,
}

impl ReplayExecutor {
    /// Create an empty replay executor.
    pub fn new() -> Self {
        Self::with_config(ExecutorConfig::new("replay"))
    }

    fn with_config(config: ExecutorConfig) -> Self {
        Self {
            config,
            recording: Recording::default(),
            online: true,
        }
    }

    /// Serve `counts` for circuits named `circuit`.
    #[must_use]
    pub fn with_counts(mut self, circuit: impl Into<String>, counts: Counts) -> Self {
        self.recording.counts.insert(circuit.into(), counts);
        self
    }

    /// Serve `statevector` for circuits named `circuit`.
    #[must_use]
    pub fn with_statevector(mut self, circuit: impl Into<String>, statevector: Statevector) -> Self {
        self.recording.statevectors.insert(circuit.into(), statevector);
        self
    }

    /// Set the qubit limit.
    #[must_use]
    pub fn with_max_qubits(mut self, max_qubits: u32) -> Self {
        self.config.max_qubits = Some(max_qubits);
        self
    }

    /// Make every submission fail with [`HalError::ExecutorUnavailable`].
    #[must_use]
    pub fn offline(mut self) -> Self {
        self.online = false;
        self
    }

    fn ensure_online(&self) -> HalResult<()> {
        if !self.online {
            return Err(HalError::ExecutorUnavailable(format!(
                "{} is offline",
                self.config.name
            )));
        }
        Ok(())
    }

    fn unknown(&self, circuit: &Circuit, what: &str) -> HalError {
        HalError::ExecutorRejectedCircuit(format!(
            "no recorded {} for circuit '{}'",
            what,
            circuit.name()
        ))
    }
}

impl Default for ReplayExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutorFactory for ReplayExecutor {
    /// Loads the recording at `endpoint`, if one is configured.
    fn from_config(config: ExecutorConfig) -> HalResult<Self> {
        let recording = match &config.endpoint {
            Some(path) => Recording::load(path)?,
            None => Recording::default(),
        };
        Ok(Self {
            recording,
            ..Self::with_config(config)
        })
    }
}

impl Executor for ReplayExecutor {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    #[instrument(skip(self, circuit), fields(circuit = circuit.name()))]
    fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<Counts> {
        check_shots(shots)?;
        self.ensure_online()?;
        self.validate(circuit)?;
        let counts = self
            .recording
            .counts
            .get(circuit.name())
            .ok_or_else(|| self.unknown(circuit, "counts"))?;
        debug!("Replaying {} outcomes ({} shots requested)", counts.len(), shots);
        Ok(counts.clone())
    }

    #[instrument(skip(self, circuit), fields(circuit = circuit.name()))]
    fn submit_statevector(&self, circuit: &Circuit) -> HalResult<Statevector> {
        self.ensure_online()?;
        self.validate(circuit)?;
        let statevector = self
            .recording
            .statevectors
            .get(circuit.name())
            .ok_or_else(|| self.unknown(circuit, "statevector"))?;
        debug!("Replaying statevector of {} amplitudes", statevector.len());
        Ok(statevector.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_counts_by_name() {
        let executor =
            ReplayExecutor::new().with_counts("bell", Counts::from_pairs([("00", 512), ("11", 512)]));
        let circuit = Circuit::with_size("bell", 2);
        let counts = executor.submit(&circuit, 1024).unwrap();
        assert_eq!(counts.total_shots(), 1024);

        let other = Circuit::with_size("ghz", 2);
        assert!(matches!(
            executor.submit(&other, 1024),
            Err(HalError::ExecutorRejectedCircuit(_))
        ));
    }

    #[test]
    fn test_zero_shots() {
        let executor = ReplayExecutor::new();
        let circuit = Circuit::with_size("bell", 2);
        assert!(matches!(executor.submit(&circuit, 0), Err(HalError::InvalidShots(_))));
    }

    #[test]
    fn test_offline() {
        let executor = ReplayExecutor::new()
            .with_statevector("plus", Statevector::from_real([0.5f64.sqrt(), 0.5f64.sqrt()]))
            .offline();
        let circuit = Circuit::with_size("plus", 1);
        assert!(matches!(
            executor.submit_statevector(&circuit),
            Err(HalError::ExecutorUnavailable(_))
        ));
    }

    #[test]
    fn test_validate_qubit_limit() {
        let executor = ReplayExecutor::new()
            .with_counts("big", Counts::from_pairs([("000", 1)]))
            .with_max_qubits(2);
        let circuit = Circuit::with_size("big", 3);
        assert!(matches!(
            executor.submit(&circuit, 1),
            Err(HalError::ExecutorRejectedCircuit(_))
        ));
    }
}
