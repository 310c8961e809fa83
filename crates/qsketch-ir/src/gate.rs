//! Quantum gate types.
//!
//! Every gate is a single-qubit [`StandardGate`] optionally wrapped in one or
//! two controls. `CX` is `Controlled(X)`, the Toffoli is
//! `DoublyControlled(X)`, and any controlled-G a decomposition needs can be
//! written down without a dedicated variant.

use serde::{Deserialize, Serialize};

/// Single-qubit base gates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,
    /// Rotation around X axis.
    Rx(f64),
    /// Rotation around Y axis.
    Ry(f64),
    /// Rotation around Z axis.
    Rz(f64),
    /// Phase gate diag(1, e^{iθ}).
    P(f64),
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::I => "id",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::H => "h",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::T => "t",
            StandardGate::Tdg => "tdg",
            StandardGate::Rx(_) => "rx",
            StandardGate::Ry(_) => "ry",
            StandardGate::Rz(_) => "rz",
            StandardGate::P(_) => "p",
        }
    }

    /// Rotation or phase angle, if this gate has one.
    pub fn angle(&self) -> Option<f64> {
        match self {
            StandardGate::Rx(t) | StandardGate::Ry(t) | StandardGate::Rz(t) | StandardGate::P(t) => {
                Some(*t)
            }
            _ => None,
        }
    }

    /// The adjoint of this gate.
    pub fn inverse(&self) -> StandardGate {
        match *self {
            StandardGate::S => StandardGate::Sdg,
            StandardGate::Sdg => StandardGate::S,
            StandardGate::T => StandardGate::Tdg,
            StandardGate::Tdg => StandardGate::T,
            StandardGate::Rx(t) => StandardGate::Rx(-t),
            StandardGate::Ry(t) => StandardGate::Ry(-t),
            StandardGate::Rz(t) => StandardGate::Rz(-t),
            StandardGate::P(t) => StandardGate::P(-t),
            g @ (StandardGate::I
            | StandardGate::X
            | StandardGate::Y
            | StandardGate::Z
            | StandardGate::H) => g,
        }
    }

    /// Whether applying the gate twice is the identity.
    pub fn is_self_inverse(&self) -> bool {
        matches!(
            self,
            StandardGate::I | StandardGate::X | StandardGate::Y | StandardGate::Z | StandardGate::H
        )
    }
}

/// How many controls wrap a base gate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GateKind {
    /// The base gate acting on one qubit.
    Single(StandardGate),
    /// Base gate on the target iff the control is 1.
    Controlled(StandardGate),
    /// Base gate on the target iff both controls are 1.
    DoublyControlled(StandardGate),
}

impl GateKind {
    /// Get the name of this gate.
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::Single(g) => g.name(),
            GateKind::Controlled(g) => match g {
                StandardGate::I => "cid",
                StandardGate::X => "cx",
                StandardGate::Y => "cy",
                StandardGate::Z => "cz",
                StandardGate::H => "ch",
                StandardGate::S => "cs",
                StandardGate::Sdg => "csdg",
                StandardGate::T => "ct",
                StandardGate::Tdg => "ctdg",
                StandardGate::Rx(_) => "crx",
                StandardGate::Ry(_) => "cry",
                StandardGate::Rz(_) => "crz",
                StandardGate::P(_) => "cp",
            },
            GateKind::DoublyControlled(g) => match g {
                StandardGate::I => "ccid",
                StandardGate::X => "ccx",
                StandardGate::Y => "ccy",
                StandardGate::Z => "ccz",
                StandardGate::H => "cch",
                StandardGate::S => "ccs",
                StandardGate::Sdg => "ccsdg",
                StandardGate::T => "cct",
                StandardGate::Tdg => "cctdg",
                StandardGate::Rx(_) => "ccrx",
                StandardGate::Ry(_) => "ccry",
                StandardGate::Rz(_) => "ccrz",
                StandardGate::P(_) => "ccp",
            },
        }
    }

    /// Get the number of qubits.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        self.num_controls() + 1
    }

    /// Number of control operands preceding the target.
    #[inline]
    pub fn num_controls(&self) -> u32 {
        match self {
            GateKind::Single(_) => 0,
            GateKind::Controlled(_) => 1,
            GateKind::DoublyControlled(_) => 2,
        }
    }

    /// The wrapped single-qubit gate.
    #[inline]
    pub fn base(&self) -> StandardGate {
        match self {
            GateKind::Single(g) | GateKind::Controlled(g) | GateKind::DoublyControlled(g) => *g,
        }
    }

    /// Same control structure around the inverted base gate.
    pub fn inverse(&self) -> GateKind {
        match self {
            GateKind::Single(g) => GateKind::Single(g.inverse()),
            GateKind::Controlled(g) => GateKind::Controlled(g.inverse()),
            GateKind::DoublyControlled(g) => GateKind::DoublyControlled(g.inverse()),
        }
    }
}

/// A gate with associated metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// The kind of gate.
    pub kind: GateKind,
    /// Optional label for the gate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Gate {
    /// A bare single-qubit gate.
    pub fn single(gate: StandardGate) -> Self {
        Self::from_kind(GateKind::Single(gate))
    }

    /// A singly-controlled version of `gate`.
    pub fn controlled(gate: StandardGate) -> Self {
        Self::from_kind(GateKind::Controlled(gate))
    }

    /// A doubly-controlled version of `gate`.
    pub fn doubly_controlled(gate: StandardGate) -> Self {
        Self::from_kind(GateKind::DoublyControlled(gate))
    }

    fn from_kind(kind: GateKind) -> Self {
        Self { kind, label: None }
    }

    /// Add a label to the gate.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the name of this gate.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.kind.num_qubits()
    }

    /// The adjoint gate. The label is kept.
    #[must_use]
    pub fn inverse(&self) -> Gate {
        Gate {
            kind: self.kind.inverse(),
            label: self.label.clone(),
        }
    }
}

impl From<StandardGate> for Gate {
    fn from(gate: StandardGate) -> Self {
        Gate::single(gate)
    }
}

impl From<GateKind> for Gate {
    fn from(kind: GateKind) -> Self {
        Gate::from_kind(kind)
    }
}
