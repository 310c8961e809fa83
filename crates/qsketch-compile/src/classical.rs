//! Basis-state evaluation of classical circuits.
//!
//! Circuits built only from `I`, `X`, `Z` and their controlled forms map a
//! computational basis state to another basis state times ±1. This module
//! tracks that mapping exactly, which is enough to check the truth table of
//! a multi-controlled decomposition without a statevector simulator.

use qsketch_ir::{Circuit, Instruction, IrError, QubitId, StandardGate};

use crate::error::{CompileError, CompileResult};

/// A computational basis state with a ±1 global phase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasisState {
    bits: Vec<bool>,
    negated: bool,
}

impl BasisState {
    /// |0…0⟩ on `n` qubits.
    pub fn zeros(n: usize) -> Self {
        Self {
            bits: vec![false; n],
            negated: false,
        }
    }

    /// Explicit per-qubit bits, qubit 0 first.
    pub fn from_bits(bits: impl IntoIterator<Item = bool>) -> Self {
        Self {
            bits: bits.into_iter().collect(),
            negated: false,
        }
    }

    /// Basis state whose qubit `j` holds bit `j` of `index`.
    pub fn from_index(index: u64, n: usize) -> Self {
        Self::from_bits((0..n).map(|j| j < 64 && (index >> j) & 1 == 1))
    }

    /// Inverse of [`BasisState::from_index`].
    pub fn index(&self) -> u64 {
        self.bits
            .iter()
            .take(64)
            .enumerate()
            .fold(0, |acc, (j, &b)| acc | (u64::from(b) << j))
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.bits.len()
    }

    /// Value of one qubit.
    ///
    /// # Panics
    ///
    /// Panics if `qubit` is outside the state.
    pub fn bit(&self, qubit: QubitId) -> bool {
        self.bits[qubit.index()]
    }

    /// Set one qubit.
    ///
    /// # Panics
    ///
    /// Panics if `qubit` is outside the state.
    pub fn set(&mut self, qubit: QubitId, value: bool) {
        self.bits[qubit.index()] = value;
    }

    /// All bits, qubit 0 first.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Whether the phase is -1.
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// The phase as ±1.
    pub fn sign(&self) -> i8 {
        if self.negated { -1 } else { 1 }
    }

    fn apply(&mut self, instruction: &Instruction) -> CompileResult<()> {
        let fires = instruction.controls().iter().all(|&c| self.bit(c));
        let target = match instruction.target() {
            Some(t) => t,
            None => return Ok(()),
        };
        match instruction.kind().base() {
            StandardGate::I => {}
            StandardGate::X => {
                if fires {
                    let flipped = !self.bit(target);
                    self.set(target, flipped);
                }
            }
            StandardGate::Z => {
                if fires && self.bit(target) {
                    self.negated = !self.negated;
                }
            }
            _ => return Err(CompileError::NonClassicalGate(instruction.name().to_string())),
        }
        Ok(())
    }
}

/// Whether every instruction in `circuit` is a (controlled) `I`, `X` or `Z`.
pub fn is_classical(circuit: &Circuit) -> bool {
    circuit.instructions().iter().all(|inst| {
        matches!(
            inst.kind().base(),
            StandardGate::I | StandardGate::X | StandardGate::Z
        )
    })
}

/// Run `circuit` on a basis state.
pub fn evaluate(circuit: &Circuit, input: &BasisState) -> CompileResult<BasisState> {
    if input.num_qubits() != circuit.num_qubits() {
        return Err(CompileError::InvalidParameter(format!(
            "input has {} qubits, circuit has {}",
            input.num_qubits(),
            circuit.num_qubits()
        )));
    }
    let mut state = input.clone();
    for inst in circuit.instructions() {
        state.apply(inst)?;
    }
    Ok(state)
}

/// Truth-table helper: evaluate every basis input over `qubits`, all other
/// qubits starting in |0⟩. Returns `(input, output)` pairs.
pub fn truth_table(
    circuit: &Circuit,
    qubits: &[QubitId],
) -> CompileResult<Vec<(BasisState, BasisState)>> {
    let n = qubits.len();
    if n >= 32 {
        return Err(CompileError::InvalidParameter(format!(
            "truth table over {n} qubits is too large"
        )));
    }
    if let Some(&qubit) = qubits.iter().find(|q| q.index() >= circuit.num_qubits()) {
        return Err(IrError::QubitNotFound {
            qubit,
            gate_name: None,
        }
        .into());
    }
    (0..1u64 << n)
        .map(|value| {
            let mut input = BasisState::zeros(circuit.num_qubits());
            for (j, &q) in qubits.iter().enumerate() {
                input.set(q, (value >> j) & 1 == 1);
            }
            evaluate(circuit, &input).map(|out| (input, out))
        })
        .collect()
}
