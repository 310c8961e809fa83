//! Single-qubit rotation circuits.
//!
//! Each circuit prepares one qubit whose measurement statistics encode an
//! angle; the matching inverse lives in `qsketch_eval::angle`.

use std::f64::consts::PI;

use qsketch_ir::{Circuit, QubitId};

use crate::error::{CompileError, CompileResult};

fn single(name: &str) -> CompileResult<(Circuit, QubitId)> {
    let mut circuit = Circuit::new(name);
    let q = circuit.add_qreg("q", 1)?;
    Ok((circuit, q[0]))
}

/// `h, rz(2θ), h`: P(1) = sin²θ.
pub fn h_rz_h(theta: f64) -> CompileResult<Circuit> {
    let (mut circuit, q) = single("h_rz_h")?;
    circuit.h(q)?.rz(2.0 * theta, q)?.h(q)?;
    Ok(circuit)
}

/// `h, rz(πx), h`: P(1) = sin²(πx/2).
pub fn h_rz_h_fraction(x: f64) -> CompileResult<Circuit> {
    let (mut circuit, q) = single("h_rz_h_fraction")?;
    circuit.h(q)?.rz(PI * x, q)?.h(q)?;
    Ok(circuit)
}

/// `ry(2θ)`: P(1) = sin²θ, P(0) = cos²θ.
pub fn ry_state(theta: f64) -> CompileResult<Circuit> {
    let (mut circuit, q) = single("ry_state")?;
    circuit.ry(2.0 * theta, q)?;
    Ok(circuit)
}

/// `ry(2θ), rx(−2θ)`: P(1) = sin²(2θ)/2.
pub fn ry_rx(theta: f64) -> CompileResult<Circuit> {
    let (mut circuit, q) = single("ry_rx")?;
    circuit.ry(2.0 * theta, q)?.rx(-2.0 * theta, q)?;
    Ok(circuit)
}

/// One `ry(θ)` per set bit among the low `n` bits of `m`, on register `tgt`.
///
/// With `k` set bits P(1) = sin²(kθ/2).
pub fn count_ones(n: u32, m: u64, theta: f64) -> CompileResult<Circuit> {
    if n > 64 {
        return Err(CompileError::InvalidParameter(format!(
            "count_ones reads at most 64 bits, got {n}"
        )));
    }
    let mut circuit = Circuit::new("count_ones");
    let t = circuit.add_qreg("tgt", 1)?[0];
    for i in 0..n {
        if (m >> i) & 1 == 1 {
            circuit.ry(theta, t)?;
        }
    }
    Ok(circuit)
}
