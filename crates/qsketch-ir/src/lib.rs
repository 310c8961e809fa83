//! qsketch Circuit Representation
//!
//! This crate is the gate sequence builder of qsketch. A [`Circuit`] is an
//! ordered list of [`Instruction`]s over named [`QuantumRegister`]s; the order
//! of instructions is the order in which gates are applied.
//!
//! # Core Components
//!
//! - **Qubits and registers**: [`QubitId`], [`Qubit`], [`QuantumRegister`]
//! - **Gates**: [`StandardGate`] single-qubit base gates, wrapped by
//!   [`GateKind`] into controlled and doubly-controlled variants
//! - **Instructions**: [`Instruction`] combining a [`Gate`] with its operands
//! - **Circuit**: [`Circuit`] fluent builder API
//!
//! # Example: Toffoli onto a target register
//!
//! ```rust
//! use qsketch_ir::Circuit;
//!
//! let mut circuit = Circuit::new("toffoli");
//! let ctrl = circuit.add_qreg("ctrl", 2).unwrap();
//! let tgt = circuit.add_qreg("tgt", 1).unwrap();
//!
//! circuit.h(ctrl[0]).unwrap().h(ctrl[1]).unwrap();
//! circuit.ccx(ctrl[0], ctrl[1], tgt[0]).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 3);
//! assert_eq!(circuit.depth(), 2);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate |
//! | `X`, `Y`, `Z` | 1 | Pauli gates |
//! | `S`, `Sdg`, `T`, `Tdg` | 1 | Phase-family Clifford+T gates |
//! | `Rx`, `Ry`, `Rz` | 1 | Rotation gates |
//! | `P` | 1 | Phase gate |
//! | `c*` | 2 | Any base gate with one control (`cx`, `cz`, `cry`, `cp`, ...) |
//! | `cc*` | 3 | Any base gate with two controls (`ccx`, `ccz`, ...) |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{Gate, GateKind, StandardGate};
pub use instruction::Instruction;
pub use qubit::{QuantumRegister, Qubit, QubitId};
