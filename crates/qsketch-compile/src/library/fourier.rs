//! Quantum Fourier transform without the final swap layer.
//!
//! `append_qft` leaves the output bit-reversed relative to the textbook
//! transform; `append_iqft` expects that ordering, so the two compose to the
//! identity.

use std::f64::consts::PI;

use qsketch_ir::{Circuit, QubitId};

use crate::error::CompileResult;
use crate::synthesis;

/// How the controlled phase rotations are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FourierStyle {
    /// Native `cp` gates.
    #[default]
    ControlledPhase,
    /// `crz` synthesized from `rz` and `cx`. Equal to `cp` up to a phase on
    /// the control, which the Hadamard layers do not observe in measurement
    /// statistics.
    SynthesizedRz,
}

fn controlled_phase(
    circuit: &mut Circuit,
    style: FourierStyle,
    theta: f64,
    control: QubitId,
    target: QubitId,
) -> CompileResult<()> {
    match style {
        FourierStyle::ControlledPhase => {
            circuit.cp(theta, control, target)?;
        }
        FourierStyle::SynthesizedRz => synthesis::crz(circuit, theta, control, target)?,
    }
    Ok(())
}

/// Append the forward transform over `qubits`.
pub fn append_qft(circuit: &mut Circuit, qubits: &[QubitId], style: FourierStyle) -> CompileResult<()> {
    for j in 0..qubits.len() {
        circuit.h(qubits[j])?;
        for k in (j + 1)..qubits.len() {
            let theta = PI / 2f64.powi((k - j) as i32);
            controlled_phase(circuit, style, theta, qubits[k], qubits[j])?;
        }
    }
    Ok(())
}

/// Append the inverse transform over `qubits`.
pub fn append_iqft(circuit: &mut Circuit, qubits: &[QubitId], style: FourierStyle) -> CompileResult<()> {
    for j in (0..qubits.len()).rev() {
        circuit.h(qubits[j])?;
        for k in (0..j).rev() {
            let theta = -PI / 2f64.powi((j - k) as i32);
            controlled_phase(circuit, style, theta, qubits[j], qubits[k])?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qft_gate_counts() {
        let mut circuit = Circuit::with_size("qft", 4);
        let qubits: Vec<_> = (0..4).map(QubitId).collect();
        append_qft(&mut circuit, &qubits, FourierStyle::ControlledPhase).unwrap();

        let counts = circuit.count_ops();
        assert_eq!(counts["h"], 4);
        assert_eq!(counts["cp"], 6);
        assert!(!counts.contains_key("swap"));
    }

    #[test]
    fn test_iqft_angles_are_negative() {
        let mut circuit = Circuit::with_size("iqft", 3);
        let qubits: Vec<_> = (0..3).map(QubitId).collect();
        append_iqft(&mut circuit, &qubits, FourierStyle::ControlledPhase).unwrap();

        let ops = circuit.instructions();
        assert_eq!(ops[0].name(), "h");
        assert_eq!(ops[0].qubits, vec![QubitId(2)]);
        assert_eq!(ops[1].qubits, vec![QubitId(2), QubitId(1)]);
        assert_eq!(ops[1].kind().base().angle(), Some(-PI / 2.0));
        assert_eq!(ops[2].kind().base().angle(), Some(-PI / 4.0));
    }

    #[test]
    fn test_synthesized_style_uses_cx_only() {
        let mut circuit = Circuit::with_size("iqft", 3);
        let qubits: Vec<_> = (0..3).map(QubitId).collect();
        append_iqft(&mut circuit, &qubits, FourierStyle::SynthesizedRz).unwrap();

        let counts = circuit.count_ops();
        assert_eq!(counts["cx"], 6);
        assert_eq!(counts["rz"], 6);
        assert!(!counts.contains_key("cp"));
    }
}
