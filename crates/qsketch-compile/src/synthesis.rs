//! Controlled rotations synthesized from single-qubit rotations and CX.
//!
//! Some executors only accept `cx` as a two-qubit gate. These helpers emit
//! the standard two-CX construction instead of a native `cry` / `crz`:
//!
//! ```text
//! r(θ/2) t; cx c,t; r(-θ/2) t; cx c,t
//! ```
//!
//! When the control is 0 the two half rotations cancel. When it is 1 the CX
//! pair conjugates the second half into `r(+θ/2)`, giving `r(θ)` in total.

use qsketch_ir::{Circuit, IrResult, QubitId};

/// Controlled-Ry(θ) from two Ry and two CX.
pub fn cry(circuit: &mut Circuit, theta: f64, control: QubitId, target: QubitId) -> IrResult<()> {
    circuit
        .ry(theta / 2.0, target)?
        .cx(control, target)?
        .ry(-theta / 2.0, target)?
        .cx(control, target)?;
    Ok(())
}

/// Controlled-Rz(θ) from two Rz and two CX.
pub fn crz(circuit: &mut Circuit, theta: f64, control: QubitId, target: QubitId) -> IrResult<()> {
    circuit
        .rz(theta / 2.0, target)?
        .cx(control, target)?
        .rz(-theta / 2.0, target)?
        .cx(control, target)?;
    Ok(())
}
