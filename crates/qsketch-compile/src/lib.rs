//! qsketch Compilation
//!
//! This crate turns high-level operations into gates a [`Circuit`] can hold.
//!
//! # Core Components
//!
//! - **Multi-control decomposition**: [`MultiControlled`] compiles an n-control
//!   gate into a compute / copy / uncompute chain of 2-control gates over
//!   `n - 1` ancillas. [`mcx`] and [`mcz`] cover the common cases.
//! - **Strategies**: [`CompositeGate`] and [`CopyGate`] pick the gates used in
//!   the chain and for the final copy; closures work too.
//! - **Synthesis**: [`synthesis::cry`] and [`synthesis::crz`] for CX-only
//!   executors.
//! - **Library**: Fourier transforms, Grover search, amplitude estimation and
//!   rotation circuits in [`library`].
//! - **Classical evaluation**: [`classical::evaluate`] runs X/Z-only circuits
//!   on basis states to check truth tables.
//!
//! # Example: 5-control Toffoli
//!
//! ```rust
//! use qsketch_compile::{classical, mcx};
//! use qsketch_ir::Circuit;
//!
//! let mut circuit = Circuit::new("c5x");
//! let ctrl = circuit.add_qreg("ctrl", 5).unwrap();
//! let anc = circuit.add_qreg("anc", 4).unwrap();
//! let tgt = circuit.add_qreg("tgt", 1).unwrap();
//!
//! let d = mcx(&mut circuit, ctrl.as_slice(), anc.as_slice(), tgt[0]).unwrap();
//! assert_eq!(d.num_ops(), 9);
//!
//! let mut input = classical::BasisState::zeros(circuit.num_qubits());
//! for &c in ctrl.as_slice() {
//!     input.set(c, true);
//! }
//! let output = classical::evaluate(&circuit, &input).unwrap();
//! assert!(output.bit(tgt[0]));
//! ```
//!
//! [`Circuit`]: qsketch_ir::Circuit

pub mod classical;
pub mod error;
pub mod library;
pub mod multi_control;
pub mod synthesis;

pub use error::{CompileError, CompileResult};
pub use multi_control::{
    CompositeGate, ControlPattern, ControlledBase, ControlledX, ControlledZ, CopyGate,
    Decomposition, MultiControlled, Toffoli, mcx, mcz,
};
