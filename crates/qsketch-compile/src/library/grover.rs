//! Grover search for one marked basis state.

use tracing::{debug, instrument};

use qsketch_ir::{Circuit, QubitId};

use crate::error::{CompileError, CompileResult};
use crate::multi_control::{ControlPattern, ControlledZ, MultiControlled};

/// Grover search over `num_qubits` search qubits.
///
/// The built circuit has three registers: `q` (search), `anc`
/// (`num_qubits - 1` ancillas) and `tgt` (the phase-kickback qubit). The
/// marked value is read with `q[0]` as its most significant bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroverSearch {
    num_qubits: u32,
    marked: u64,
    iterations: Option<usize>,
}

impl GroverSearch {
    /// Search for `marked` among `2^num_qubits` values.
    pub fn new(num_qubits: u32, marked: u64) -> CompileResult<Self> {
        if !(3..=63).contains(&num_qubits) {
            return Err(CompileError::InvalidParameter(format!(
                "grover search needs 3..=63 qubits, got {num_qubits}"
            )));
        }
        if marked >> num_qubits != 0 {
            return Err(CompileError::InvalidParameter(format!(
                "marked value {marked} does not fit in {num_qubits} qubits"
            )));
        }
        Ok(Self {
            num_qubits,
            marked,
            iterations: None,
        })
    }

    /// Override the number of oracle + diffusion rounds.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Number of search qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// The marked value.
    pub fn marked(&self) -> u64 {
        self.marked
    }

    /// Rounds that will be emitted: the override, or `⌊√(2^n)⌋`.
    pub fn iterations(&self) -> usize {
        self.iterations
            .unwrap_or_else(|| (2f64.powi(self.num_qubits as i32)).sqrt().floor() as usize)
    }

    /// Control pattern selecting the marked value.
    pub fn pattern(&self) -> ControlPattern {
        ControlPattern::from_integer(self.marked, self.num_qubits as usize)
    }

    /// Build the full search circuit.
    #[instrument(skip(self), fields(n = self.num_qubits, marked = self.marked))]
    pub fn build(&self) -> CompileResult<Circuit> {
        let n = self.num_qubits;
        let mut circuit = Circuit::new(format!("grover_{}_{}", n, self.marked));
        let q = circuit.add_qreg("q", n)?;
        let anc = circuit.add_qreg("anc", n - 1)?;
        let tgt = circuit.add_qreg("tgt", 1)?;
        let t = tgt[0];

        circuit.x(t)?;
        for &qubit in q.as_slice() {
            circuit.h(qubit)?;
        }
        circuit.h(t)?;

        let rounds = self.iterations();
        for _ in 0..rounds {
            self.append_oracle(&mut circuit, q.as_slice(), anc.as_slice(), t)?;
            append_diffusion(&mut circuit, q.as_slice(), anc.as_slice())?;
        }

        debug!("Built Grover circuit: {} rounds, {} ops", rounds, circuit.num_ops());
        Ok(circuit)
    }

    /// Flip the phase of the marked value via the kickback qubit.
    pub fn append_oracle(
        &self,
        circuit: &mut Circuit,
        q: &[QubitId],
        anc: &[QubitId],
        target: QubitId,
    ) -> CompileResult<()> {
        MultiControlled::new()
            .with_pattern(self.pattern())
            .apply(circuit, q, anc, target)?;
        Ok(())
    }
}

/// Inversion about the mean over `q`, using `q.len() - 2` of `anc`.
pub fn append_diffusion(circuit: &mut Circuit, q: &[QubitId], anc: &[QubitId]) -> CompileResult<()> {
    let n = q.len();
    if n < 3 || anc.len() < n - 2 {
        return Err(CompileError::InvalidParameter(format!(
            "diffusion over {n} qubits needs at least {} ancillas, got {}",
            n.saturating_sub(2),
            anc.len()
        )));
    }
    for &qubit in q {
        circuit.h(qubit)?.x(qubit)?;
    }
    MultiControlled::new()
        .with_copy(ControlledZ)
        .apply(circuit, &q[..n - 1], &anc[..n - 2], q[n - 1])?;
    for &qubit in q {
        circuit.x(qubit)?.h(qubit)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_iterations() {
        assert_eq!(GroverSearch::new(3, 5).unwrap().iterations(), 2);
        assert_eq!(GroverSearch::new(4, 0).unwrap().iterations(), 4);
        assert_eq!(GroverSearch::new(5, 1).unwrap().iterations(), 5);
        assert_eq!(
            GroverSearch::new(4, 0).unwrap().with_iterations(1).iterations(),
            1
        );
    }

    #[test]
    fn test_rejects_small_or_oversized() {
        assert!(GroverSearch::new(2, 0).is_err());
        assert!(GroverSearch::new(3, 8).is_err());
    }

    #[test]
    fn test_register_layout() {
        let circuit = GroverSearch::new(4, 6).unwrap().build().unwrap();
        assert_eq!(circuit.register("q").unwrap().len(), 4);
        assert_eq!(circuit.register("anc").unwrap().len(), 3);
        assert_eq!(circuit.register("tgt").unwrap().len(), 1);
        assert_eq!(circuit.num_qubits(), 8);
    }

    #[test]
    fn test_pattern_msb_first() {
        let search = GroverSearch::new(3, 0b100).unwrap();
        assert_eq!(search.pattern().bits(), &[true, false, false]);
    }
}
