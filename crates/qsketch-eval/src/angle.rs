//! Closed-form angle recovery from single-qubit probabilities.
//!
//! Each function inverts the known outcome probability of one rotation
//! circuit. Results are on the principal branch of `asin` / `acos`; nothing
//! here tries to disambiguate angles outside `[0, π/2]`.

use std::f64::consts::PI;

use crate::error::{EvalError, EvalResult};

/// Rounding slack accepted outside `[0, 1]` before a probability is
/// rejected.
const SLACK: f64 = 1e-9;

fn checked(p: f64) -> EvalResult<f64> {
    if !p.is_finite() || p < -SLACK || p > 1.0 + SLACK {
        return Err(EvalError::InvalidProbability(p));
    }
    Ok(p.clamp(0.0, 1.0))
}

/// θ from `P(1) = sin²θ`: `asin(√p1)`.
pub fn angle_from_one(p1: f64) -> EvalResult<f64> {
    Ok(checked(p1)?.sqrt().asin())
}

/// θ from `P(0) = cos²θ`: `acos(√p0)`.
pub fn angle_from_zero(p0: f64) -> EvalResult<f64> {
    Ok(checked(p0)?.sqrt().acos())
}

/// Full rotation angle from `P(1) = sin²(θ/2)`: `2·asin(√p1)`.
pub fn rotation_from_one(p1: f64) -> EvalResult<f64> {
    Ok(2.0 * angle_from_one(p1)?)
}

/// Rotation as a fraction of π: `2·asin(√p1)/π`.
pub fn phase_fraction_from_one(p1: f64) -> EvalResult<f64> {
    Ok(rotation_from_one(p1)? / PI)
}

/// θ from `P(1) = sin²(2θ)/2` (the `ry(2θ), rx(−2θ)` circuit):
/// `asin(√(2p1))/2`.
pub fn angle_from_double_probability(p1: f64) -> EvalResult<f64> {
    let p = checked(p1)?;
    if 2.0 * p > 1.0 + SLACK {
        return Err(EvalError::InvalidProbability(p1));
    }
    Ok((2.0 * p).min(1.0).sqrt().asin() / 2.0)
}

/// Number of `ry(step)` rotations that produced `P(1) = p1`, rounded to the
/// nearest integer.
pub fn count_from_probability(p1: f64, step: f64) -> EvalResult<u64> {
    if step <= 0.0 || !step.is_finite() {
        return Err(EvalError::InvalidParameter(format!(
            "rotation step must be positive, got {step}"
        )));
    }
    let count = rotation_from_one(p1)? / step + 0.5;
    Ok(count.floor() as u64)
}
