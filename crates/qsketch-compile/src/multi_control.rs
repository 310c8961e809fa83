//! Multi-controlled gate decomposition.
//!
//! An n-control gate is compiled into a V-chain of 2-control gates that
//! stages the running AND of the controls in `n - 1` ancilla qubits:
//!
//! ```text
//! compute     composite(c0, c1 -> a0), composite(c2, a0 -> a1), ...
//! copy        copy(a[n-2] -> target)
//! uncompute   compute gates replayed in reverse order
//! ```
//!
//! The composite gate must be self-inverse so the replay restores every
//! ancilla to |0⟩. The copy step is the only gate that touches the target.
//! Both steps are strategies: [`CompositeGate`] and [`CopyGate`] have default
//! implementations ([`Toffoli`], [`ControlledX`]) and can be swapped for
//! [`ControlledZ`], [`ControlledBase`], a user type, or a closure.

use std::ops::Range;

use rustc_hash::FxHashSet;
use tracing::debug;

use qsketch_ir::{Circuit, IrError, IrResult, QubitId, StandardGate};

use crate::error::{CompileError, CompileResult};

/// Writes the AND of two inputs into a third qubit.
///
/// Implementations must be self-inverse on the operands they touch.
pub trait CompositeGate {
    /// Short name used in logs.
    fn name(&self) -> &str {
        "composite"
    }

    /// Apply the gate with inputs `a`, `b` onto `target`.
    fn apply(&self, circuit: &mut Circuit, a: QubitId, b: QubitId, target: QubitId)
    -> IrResult<()>;
}

/// Applies the controlled base operation from the last ancilla to the target.
pub trait CopyGate {
    /// Short name used in logs.
    fn name(&self) -> &str {
        "copy"
    }

    /// Apply the gate controlled by `control` onto `target`.
    fn apply(&self, circuit: &mut Circuit, control: QubitId, target: QubitId) -> IrResult<()>;
}

impl<F> CompositeGate for F
where
    F: Fn(&mut Circuit, QubitId, QubitId, QubitId) -> IrResult<()>,
{
    fn apply(
        &self,
        circuit: &mut Circuit,
        a: QubitId,
        b: QubitId,
        target: QubitId,
    ) -> IrResult<()> {
        self(circuit, a, b, target)
    }
}

impl<F> CopyGate for F
where
    F: Fn(&mut Circuit, QubitId, QubitId) -> IrResult<()>,
{
    fn apply(&self, circuit: &mut Circuit, control: QubitId, target: QubitId) -> IrResult<()> {
        self(circuit, control, target)
    }
}

/// The Toffoli gate: X on the target iff both inputs are 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct Toffoli;

impl CompositeGate for Toffoli {
    fn name(&self) -> &str {
        "ccx"
    }

    fn apply(
        &self,
        circuit: &mut Circuit,
        a: QubitId,
        b: QubitId,
        target: QubitId,
    ) -> IrResult<()> {
        circuit.ccx(a, b, target)?;
        Ok(())
    }
}

/// CX copy: flips the target.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlledX;

impl CopyGate for ControlledX {
    fn name(&self) -> &str {
        "cx"
    }

    fn apply(&self, circuit: &mut Circuit, control: QubitId, target: QubitId) -> IrResult<()> {
        circuit.cx(control, target)?;
        Ok(())
    }
}

/// CZ copy: applies a phase flip when control and target are both 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlledZ;

impl CopyGate for ControlledZ {
    fn name(&self) -> &str {
        "cz"
    }

    fn apply(&self, circuit: &mut Circuit, control: QubitId, target: QubitId) -> IrResult<()> {
        circuit.cz(control, target)?;
        Ok(())
    }
}

/// Copy through any controlled single-qubit gate.
#[derive(Debug, Clone, Copy)]
pub struct ControlledBase(pub StandardGate);

impl CopyGate for ControlledBase {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn apply(&self, circuit: &mut Circuit, control: QubitId, target: QubitId) -> IrResult<()> {
        circuit.controlled(self.0, control, target)?;
        Ok(())
    }
}

/// Which value each control must hold for the gate to fire.
///
/// Controls whose bit is `false` are bracketed with X gates before the
/// compute phase and after the uncompute phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlPattern {
    bits: Vec<bool>,
}

impl ControlPattern {
    /// Fire when every control is 1.
    pub fn all_ones(n: usize) -> Self {
        Self {
            bits: vec![true; n],
        }
    }

    /// Fire when every control is 0.
    pub fn all_zeros(n: usize) -> Self {
        Self {
            bits: vec![false; n],
        }
    }

    /// Explicit per-control bits.
    pub fn from_bits(bits: impl IntoIterator<Item = bool>) -> Self {
        Self {
            bits: bits.into_iter().collect(),
        }
    }

    /// The `width`-bit binary representation of `value`, first control most
    /// significant.
    pub fn from_integer(value: u64, width: usize) -> Self {
        let bits = (0..width)
            .map(|j| {
                let shift = (width - 1 - j) as u32;
                value.checked_shr(shift).unwrap_or(0) & 1 == 1
            })
            .collect();
        Self { bits }
    }

    /// Number of controls the pattern covers.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the pattern is empty.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Per-control bits.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Positions of controls that must be 0.
    pub fn zero_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, b)| !**b)
            .map(|(i, _)| i)
    }
}

/// Instruction ranges emitted by one decomposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    /// Number of controls.
    pub num_controls: usize,
    /// Pattern X gates before the compute phase.
    pub pattern_in: Range<usize>,
    /// Compute phase.
    pub compute: Range<usize>,
    /// Copy phase.
    pub copy: Range<usize>,
    /// Uncompute phase.
    pub uncompute: Range<usize>,
    /// Pattern X gates after the uncompute phase.
    pub pattern_out: Range<usize>,
}

impl Decomposition {
    /// All instructions emitted.
    pub fn span(&self) -> Range<usize> {
        self.pattern_in.start..self.pattern_out.end
    }

    /// Number of instructions emitted.
    pub fn num_ops(&self) -> usize {
        self.span().len()
    }
}

/// Compiles n-control gates with a compute / copy / uncompute V-chain.
#[derive(Debug, Clone)]
pub struct MultiControlled<C = Toffoli, K = ControlledX> {
    composite: C,
    copy: K,
    pattern: Option<ControlPattern>,
}

impl MultiControlled {
    /// Toffoli composite, CX copy, all-ones pattern.
    pub fn new() -> Self {
        Self {
            composite: Toffoli,
            copy: ControlledX,
            pattern: None,
        }
    }
}

impl Default for MultiControlled {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CompositeGate, K: CopyGate> MultiControlled<C, K> {
    /// Replace the composite strategy.
    pub fn with_composite<C2: CompositeGate>(self, composite: C2) -> MultiControlled<C2, K> {
        MultiControlled {
            composite,
            copy: self.copy,
            pattern: self.pattern,
        }
    }

    /// Replace the copy strategy.
    pub fn with_copy<K2: CopyGate>(self, copy: K2) -> MultiControlled<C, K2> {
        MultiControlled {
            composite: self.composite,
            copy,
            pattern: self.pattern,
        }
    }

    /// Condition on `pattern` instead of all controls being 1.
    #[must_use]
    pub fn with_pattern(mut self, pattern: ControlPattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Append the decomposition to `circuit`.
    ///
    /// `ancillas` must hold exactly `controls.len() - 1` qubits in |0⟩; they
    /// are returned to |0⟩. All preconditions are checked before the first
    /// gate is emitted, so an `Err` leaves `circuit` untouched unless a
    /// custom strategy fails part-way.
    pub fn apply(
        &self,
        circuit: &mut Circuit,
        controls: &[QubitId],
        ancillas: &[QubitId],
        target: QubitId,
    ) -> CompileResult<Decomposition> {
        let n = controls.len();
        if n < 2 {
            return Err(CompileError::InsufficientControls { got: n });
        }
        if ancillas.len() != n - 1 {
            return Err(CompileError::InvalidAncillaCount {
                controls: n,
                expected: n - 1,
                got: ancillas.len(),
            });
        }
        if let Some(pattern) = &self.pattern {
            if pattern.len() != n {
                return Err(CompileError::PatternLengthMismatch {
                    controls: n,
                    pattern: pattern.len(),
                });
            }
        }
        check_operands(circuit, controls, ancillas, target)?;

        let start = circuit.num_ops();
        self.flip_zero_controls(circuit, controls)?;
        let pattern_in = start..circuit.num_ops();

        let steps = chain_steps(controls, ancillas);

        let compute_start = circuit.num_ops();
        for &(a, b, t) in &steps {
            self.composite.apply(circuit, a, b, t)?;
        }
        let compute = compute_start..circuit.num_ops();

        let copy_start = circuit.num_ops();
        self.copy.apply(circuit, ancillas[n - 2], target)?;
        let copy = copy_start..circuit.num_ops();

        let uncompute_start = circuit.num_ops();
        for &(a, b, t) in steps.iter().rev() {
            self.composite.apply(circuit, a, b, t)?;
        }
        let uncompute = uncompute_start..circuit.num_ops();

        let out_start = circuit.num_ops();
        self.flip_zero_controls(circuit, controls)?;
        let pattern_out = out_start..circuit.num_ops();

        debug!(
            "Decomposed {}-control gate ({} chain, {} copy): {} ops",
            n,
            self.composite.name(),
            self.copy.name(),
            pattern_out.end - start
        );

        Ok(Decomposition {
            num_controls: n,
            pattern_in,
            compute,
            copy,
            uncompute,
            pattern_out,
        })
    }

    fn flip_zero_controls(&self, circuit: &mut Circuit, controls: &[QubitId]) -> IrResult<()> {
        if let Some(pattern) = &self.pattern {
            for i in pattern.zero_positions() {
                circuit.x(controls[i])?;
            }
        }
        Ok(())
    }
}

/// Operand triples of the compute phase, in application order.
fn chain_steps(controls: &[QubitId], ancillas: &[QubitId]) -> Vec<(QubitId, QubitId, QubitId)> {
    let mut steps = Vec::with_capacity(ancillas.len());
    steps.push((controls[0], controls[1], ancillas[0]));
    for i in 2..controls.len() {
        steps.push((controls[i], ancillas[i - 2], ancillas[i - 1]));
    }
    steps
}

fn check_operands(
    circuit: &Circuit,
    controls: &[QubitId],
    ancillas: &[QubitId],
    target: QubitId,
) -> CompileResult<()> {
    let mut seen = FxHashSet::default();
    for &qubit in controls.iter().chain(ancillas).chain(std::iter::once(&target)) {
        if qubit.index() >= circuit.num_qubits() {
            return Err(IrError::QubitNotFound {
                qubit,
                gate_name: Some("multi_controlled".into()),
            }
            .into());
        }
        if !seen.insert(qubit) {
            return Err(IrError::DuplicateQubit {
                qubit,
                gate_name: Some("multi_controlled".into()),
            }
            .into());
        }
    }
    Ok(())
}

/// Multi-controlled X with the default Toffoli chain.
pub fn mcx(
    circuit: &mut Circuit,
    controls: &[QubitId],
    ancillas: &[QubitId],
    target: QubitId,
) -> CompileResult<Decomposition> {
    MultiControlled::new().apply(circuit, controls, ancillas, target)
}

/// Multi-controlled Z: Toffoli chain with a CZ copy.
pub fn mcz(
    circuit: &mut Circuit,
    controls: &[QubitId],
    ancillas: &[QubitId],
    target: QubitId,
) -> CompileResult<Decomposition> {
    MultiControlled::new()
        .with_copy(ControlledZ)
        .apply(circuit, controls, ancillas, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qsketch_ir::{GateKind, QuantumRegister};

    fn registers(n: u32) -> (Circuit, QuantumRegister, QuantumRegister, QubitId) {
        let mut circuit = Circuit::new("mc");
        let ctrl = circuit.add_qreg("ctrl", n).unwrap();
        let anc = circuit.add_qreg("anc", n.saturating_sub(1)).unwrap();
        let tgt = circuit.add_qreg("tgt", 1).unwrap();
        (circuit, ctrl, anc, tgt[0])
    }

    #[test]
    fn test_gate_sequence_for_four_controls() {
        let (mut circuit, ctrl, anc, tgt) = registers(4);
        let d = mcx(&mut circuit, ctrl.as_slice(), anc.as_slice(), tgt).unwrap();

        assert_eq!(d.compute, 0..3);
        assert_eq!(d.copy, 3..4);
        assert_eq!(d.uncompute, 4..7);
        assert_eq!(d.num_ops(), 7);

        let ops = circuit.instructions();
        assert_eq!(ops[0].qubits, vec![ctrl[0], ctrl[1], anc[0]]);
        assert_eq!(ops[1].qubits, vec![ctrl[2], anc[0], anc[1]]);
        assert_eq!(ops[2].qubits, vec![ctrl[3], anc[1], anc[2]]);
        assert_eq!(ops[3].name(), "cx");
        assert_eq!(ops[3].qubits, vec![anc[2], tgt]);
        assert_eq!(ops[4].qubits, ops[2].qubits);
        assert_eq!(ops[5].qubits, ops[1].qubits);
        assert_eq!(ops[6].qubits, ops[0].qubits);
    }

    #[test]
    fn test_two_controls_still_use_ancilla() {
        let (mut circuit, ctrl, anc, tgt) = registers(2);
        let d = mcx(&mut circuit, ctrl.as_slice(), anc.as_slice(), tgt).unwrap();
        assert_eq!(d.num_ops(), 3);
        assert_eq!(circuit.count_ops()["ccx"], 2);
    }

    #[test]
    fn test_only_copy_touches_target() {
        let (mut circuit, ctrl, anc, tgt) = registers(5);
        let d = mcz(&mut circuit, ctrl.as_slice(), anc.as_slice(), tgt).unwrap();
        let touching: Vec<usize> = circuit
            .instructions()
            .iter()
            .enumerate()
            .filter(|(_, inst)| inst.acts_on(tgt))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(touching, d.copy.collect::<Vec<_>>());
        assert_eq!(
            circuit.instructions()[d.compute.end].kind(),
            &GateKind::Controlled(StandardGate::Z)
        );
    }

    #[test]
    fn test_precondition_errors_leave_circuit_untouched() {
        let (mut circuit, ctrl, anc, tgt) = registers(3);

        let err = mcx(&mut circuit, &ctrl.as_slice()[..1], &[], tgt).unwrap_err();
        assert!(matches!(err, CompileError::InsufficientControls { got: 1 }));

        let err = mcx(&mut circuit, ctrl.as_slice(), &anc.as_slice()[..1], tgt).unwrap_err();
        assert!(matches!(
            err,
            CompileError::InvalidAncillaCount {
                controls: 3,
                expected: 2,
                got: 1
            }
        ));

        let err = MultiControlled::new()
            .with_pattern(ControlPattern::all_zeros(2))
            .apply(&mut circuit, ctrl.as_slice(), anc.as_slice(), tgt)
            .unwrap_err();
        assert!(matches!(err, CompileError::PatternLengthMismatch { .. }));

        let err = mcx(&mut circuit, ctrl.as_slice(), anc.as_slice(), ctrl[0]).unwrap_err();
        assert!(matches!(err, CompileError::Ir(IrError::DuplicateQubit { .. })));

        assert_eq!(circuit.num_ops(), 0);
    }

    #[test]
    fn test_pattern_brackets_zero_controls() {
        let (mut circuit, ctrl, anc, tgt) = registers(3);
        let d = MultiControlled::new()
            .with_pattern(ControlPattern::from_bits([true, false, false]))
            .apply(&mut circuit, ctrl.as_slice(), anc.as_slice(), tgt)
            .unwrap();

        assert_eq!(d.pattern_in.len(), 2);
        assert_eq!(d.pattern_out.len(), 2);
        let first: Vec<_> = circuit.instructions()[d.pattern_in.clone()]
            .iter()
            .map(|i| i.qubits[0])
            .collect();
        assert_eq!(first, vec![ctrl[1], ctrl[2]]);
    }

    #[test]
    fn test_pattern_from_integer_is_msb_first() {
        let p = ControlPattern::from_integer(0b110, 3);
        assert_eq!(p.bits(), &[true, true, false]);
        assert_eq!(p.zero_positions().collect::<Vec<_>>(), vec![2]);
        assert_eq!(ControlPattern::from_integer(31, 5), ControlPattern::all_ones(5));
    }

    #[test]
    fn test_closure_strategies() {
        let (mut circuit, ctrl, anc, tgt) = registers(3);
        let copy = |c: &mut Circuit, control: QubitId, target: QubitId| -> IrResult<()> {
            c.cry(0.5, control, target)?;
            Ok(())
        };
        MultiControlled::new()
            .with_copy(copy)
            .apply(&mut circuit, ctrl.as_slice(), anc.as_slice(), tgt)
            .unwrap();
        assert_eq!(circuit.count_ops()["cry"], 1);
        assert_eq!(circuit.count_ops()["ccx"], 4);
    }
}
