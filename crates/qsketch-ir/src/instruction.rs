//! Circuit instructions combining gates with operands.

use serde::{Deserialize, Serialize};

use crate::gate::{Gate, GateKind, StandardGate};
use crate::qubit::QubitId;

/// A gate applied to concrete qubits.
///
/// Operands are ordered controls first, target last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The gate.
    pub gate: Gate,
    /// Qubits this instruction operates on.
    pub qubits: Vec<QubitId>,
}

impl Instruction {
    /// Create a gate instruction.
    pub fn gate(gate: impl Into<Gate>, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            gate: gate.into(),
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Create a single-qubit gate instruction.
    pub fn single_qubit_gate(gate: StandardGate, qubit: QubitId) -> Self {
        Self::gate(Gate::single(gate), [qubit])
    }

    /// Create a controlled gate instruction.
    pub fn controlled_gate(gate: StandardGate, control: QubitId, target: QubitId) -> Self {
        Self::gate(Gate::controlled(gate), [control, target])
    }

    /// Create a doubly-controlled gate instruction.
    pub fn doubly_controlled_gate(
        gate: StandardGate,
        c1: QubitId,
        c2: QubitId,
        target: QubitId,
    ) -> Self {
        Self::gate(Gate::doubly_controlled(gate), [c1, c2, target])
    }

    /// Attach a label to the instruction's gate.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.gate.label = Some(label.into());
        self
    }

    /// Get the name of the instruction.
    pub fn name(&self) -> &'static str {
        self.gate.name()
    }

    /// The gate kind.
    pub fn kind(&self) -> &GateKind {
        &self.gate.kind
    }

    /// The gate label, if any.
    pub fn label(&self) -> Option<&str> {
        self.gate.label.as_deref()
    }

    /// Control operands.
    pub fn controls(&self) -> &[QubitId] {
        let n = self.gate.kind.num_controls() as usize;
        &self.qubits[..n.min(self.qubits.len())]
    }

    /// Target operand.
    pub fn target(&self) -> Option<QubitId> {
        self.qubits.last().copied()
    }

    /// Whether the instruction touches `qubit`.
    pub fn acts_on(&self, qubit: QubitId) -> bool {
        self.qubits.contains(&qubit)
    }

    /// The adjoint instruction on the same operands.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            gate: self.gate.inverse(),
            qubits: self.qubits.clone(),
        }
    }
}
