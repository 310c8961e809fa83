//! Parameterized circuit families.
//!
//! Each family is one builder that appends to, or returns, a [`Circuit`]
//! (`qsketch_ir::Circuit`). Multi-controlled steps go through
//! [`MultiControlled`](crate::MultiControlled); controlled rotations that must
//! run on CX-only executors go through [`synthesis`](crate::synthesis).

pub mod estimation;
pub mod fourier;
pub mod grover;
pub mod rotation;

pub use estimation::AmplitudeEstimation;
pub use fourier::{FourierStyle, append_iqft, append_qft};
pub use grover::{GroverSearch, append_diffusion};
pub use rotation::{count_ones, h_rz_h, h_rz_h_fraction, ry_rx, ry_state};
