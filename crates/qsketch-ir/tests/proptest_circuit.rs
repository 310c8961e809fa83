//! Property-based tests for circuit construction.

use proptest::prelude::*;
use qsketch_ir::{Circuit, QubitId};

/// Generate a random circuit over 1-5 qubits with 1-12 gates.
fn arb_circuit() -> impl Strategy<Value = Circuit> {
    (1_u32..=5).prop_flat_map(|num_qubits| {
        prop::collection::vec(arb_gate_op(num_qubits), 1..=12).prop_map(move |ops| {
            let mut circuit = Circuit::with_size("test", num_qubits);
            for op in ops {
                op.apply(&mut circuit);
            }
            circuit
        })
    })
}

/// Gate operations that can be applied to a circuit.
#[derive(Debug, Clone)]
enum GateOp {
    H(u32),
    X(u32),
    T(u32),
    Ry(f64, u32),
    CX(u32, u32),
    CCX(u32, u32, u32),
}

impl GateOp {
    fn apply(self, circuit: &mut Circuit) {
        // Duplicate operands are rejected; skipping them keeps the generator simple.
        let _ = match self {
            GateOp::H(q) => circuit.h(QubitId(q)).map(|_| ()),
            GateOp::X(q) => circuit.x(QubitId(q)).map(|_| ()),
            GateOp::T(q) => circuit.t(QubitId(q)).map(|_| ()),
            GateOp::Ry(theta, q) => circuit.ry(theta, QubitId(q)).map(|_| ()),
            GateOp::CX(a, b) => circuit.cx(QubitId(a), QubitId(b)).map(|_| ()),
            GateOp::CCX(a, b, c) => circuit
                .ccx(QubitId(a), QubitId(b), QubitId(c))
                .map(|_| ()),
        };
    }
}

fn arb_gate_op(num_qubits: u32) -> impl Strategy<Value = GateOp> {
    let q = 0..num_qubits;
    prop_oneof![
        q.clone().prop_map(GateOp::H),
        q.clone().prop_map(GateOp::X),
        q.clone().prop_map(GateOp::T),
        (-3.0f64..3.0, q.clone()).prop_map(|(t, q)| GateOp::Ry(t, q)),
        (q.clone(), q.clone()).prop_map(|(a, b)| GateOp::CX(a, b)),
        (q.clone(), q.clone(), q).prop_map(|(a, b, c)| GateOp::CCX(a, b, c)),
    ]
}

proptest! {
    #[test]
    fn prop_depth_bounded_by_ops(circuit in arb_circuit()) {
        prop_assert!(circuit.depth() <= circuit.num_ops());
        prop_assert_eq!(circuit.depth() == 0, circuit.num_ops() == 0);
    }

    #[test]
    fn prop_double_inverse_is_identity(circuit in arb_circuit()) {
        let twice = circuit.inverse().inverse();
        prop_assert_eq!(twice.instructions(), circuit.instructions());
        prop_assert_eq!(twice.num_qubits(), circuit.num_qubits());
    }

    #[test]
    fn prop_inverse_reverses_order(circuit in arb_circuit()) {
        let inv = circuit.inverse();
        let n = circuit.num_ops();
        for (i, inst) in inv.instructions().iter().enumerate() {
            prop_assert_eq!(&inst.qubits, &circuit.instructions()[n - 1 - i].qubits);
        }
    }

    #[test]
    fn prop_json_preserves_instructions(circuit in arb_circuit()) {
        let json = circuit.to_json().unwrap();
        let parsed: Circuit = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed.num_ops(), circuit.num_ops());
        for (a, b) in parsed.instructions().iter().zip(circuit.instructions()) {
            prop_assert_eq!(a.name(), b.name());
            prop_assert_eq!(&a.qubits, &b.qubits);
        }
    }

    #[test]
    fn prop_operands_are_distinct(circuit in arb_circuit()) {
        for inst in circuit.instructions() {
            let mut qs = inst.qubits.clone();
            qs.sort();
            qs.dedup();
            prop_assert_eq!(qs.len(), inst.qubits.len());
        }
    }
}
