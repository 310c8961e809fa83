//! Amplitude estimation through phase estimation of a Y rotation.
//!
//! The target qubit is prepared with `ry(2φ)`. Counting qubit `i` controls a
//! synthesized `cry(2^(i+1)·θ)` onto it, and an inverse Fourier transform
//! over the counting register turns the accumulated phase into a binary
//! fraction readable from the measurement.

use std::f64::consts::PI;

use tracing::{debug, instrument};

use qsketch_ir::Circuit;

use crate::error::{CompileError, CompileResult};
use crate::library::fourier::{FourierStyle, append_iqft};
use crate::synthesis;

/// Amplitude estimation with `counting_qubits` bits of precision.
#[derive(Debug, Clone, PartialEq)]
pub struct AmplitudeEstimation {
    /// Size of the counting register `q`.
    pub counting_qubits: u32,
    /// Initial Y rotation half-angle on the target.
    pub phi: f64,
    /// Rotation half-angle being estimated.
    pub theta: f64,
    /// Prepare the target in an eigenvector of the rotation (rx(π/2), z, x).
    pub eigenstate: bool,
}

impl AmplitudeEstimation {
    /// Estimation of `theta` with the target starting in |0⟩.
    pub fn new(counting_qubits: u32, theta: f64) -> Self {
        Self {
            counting_qubits,
            phi: 0.0,
            theta,
            eigenstate: false,
        }
    }

    /// The rotation angle whose `sin²(θ/2)` is `p`.
    pub fn theta_for_probability(p: f64) -> CompileResult<f64> {
        if !(0.0..=1.0).contains(&p) {
            return Err(CompileError::InvalidParameter(format!(
                "probability {p} outside [0, 1]"
            )));
        }
        Ok(2.0 * p.sqrt().asin())
    }

    /// Set the initial rotation.
    #[must_use]
    pub fn with_phi(mut self, phi: f64) -> Self {
        self.phi = phi;
        self
    }

    /// Prepare the target in the rotation's eigenvector.
    #[must_use]
    pub fn with_eigenstate(mut self, eigenstate: bool) -> Self {
        self.eigenstate = eigenstate;
        self
    }

    /// Build the circuit over registers `q` and `t`.
    #[instrument(skip(self), fields(n = self.counting_qubits))]
    pub fn build(&self) -> CompileResult<Circuit> {
        let n = self.counting_qubits;
        if n == 0 || n > 30 {
            return Err(CompileError::InvalidParameter(format!(
                "counting register must have 1..=30 qubits, got {n}"
            )));
        }
        let mut circuit = Circuit::new(format!("amplitude_{n}"));
        let q = circuit.add_qreg("q", n)?;
        let t = circuit.add_qreg("t", 1)?[0];

        circuit.ry(2.0 * self.phi, t)?;
        for &qubit in q.as_slice() {
            circuit.h(qubit)?;
        }
        if self.eigenstate {
            circuit.rx(PI / 2.0, t)?.z(t)?.x(t)?;
        }
        for (i, &qubit) in q.as_slice().iter().enumerate() {
            let angle = 2f64.powi(i as i32 + 1) * self.theta;
            synthesis::cry(&mut circuit, angle, qubit, t)?;
        }
        append_iqft(&mut circuit, q.as_slice(), FourierStyle::SynthesizedRz)?;

        debug!("Built amplitude estimation circuit: {} ops", circuit.num_ops());
        Ok(circuit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_and_counts() {
        let circuit = AmplitudeEstimation::new(3, 0.5).with_eigenstate(true).build().unwrap();
        assert_eq!(circuit.register("q").unwrap().len(), 3);
        assert_eq!(circuit.register("t").unwrap().len(), 1);

        let counts = circuit.count_ops();
        assert_eq!(counts["h"], 6);
        // 3 synthesized cry + 3 synthesized crz
        assert_eq!(counts["cx"], 12);
        assert_eq!(counts["rx"], 1);
        assert_eq!(counts["x"], 1);
    }

    #[test]
    fn test_rotation_angles_double() {
        let circuit = AmplitudeEstimation::new(2, 0.25).build().unwrap();
        let ry: Vec<f64> = circuit
            .instructions()
            .iter()
            .filter(|i| i.name() == "ry")
            .filter_map(|i| i.kind().base().angle())
            .collect();
        // initial ry(0), then ±θ/2·2^(i+1) halves
        assert_eq!(ry, vec![0.0, 0.25, -0.25, 0.5, -0.5]);
    }

    #[test]
    fn test_theta_for_probability() {
        let theta = AmplitudeEstimation::theta_for_probability(0.3).unwrap();
        assert!(((theta / 2.0).sin().powi(2) - 0.3).abs() < 1e-12);
        assert!(AmplitudeEstimation::theta_for_probability(1.5).is_err());
    }
}
