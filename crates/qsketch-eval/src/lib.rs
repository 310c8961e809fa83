//! qsketch Result Interpretation
//!
//! Turns executor output into probability tables and parameter estimates.
//!
//! # Core Components
//!
//! - [`ProbabilityTable`]: normalized outcome probabilities from
//!   [`Counts`](qsketch_hal::Counts) or a
//!   [`Statevector`](qsketch_hal::Statevector), keyed least-significant
//!   qubit first
//! - [`Estimates`]: binned counting-register outcomes with ranking,
//!   interpolation and sin² post-processing
//! - [`angle`]: inverse-trig recovery of rotation angles
//! - [`Experiment`]: submit and interpret in one call
//!
//! # Example
//!
//! ```rust
//! use qsketch_eval::ProbabilityTable;
//! use qsketch_hal::Counts;
//!
//! let counts = Counts::from_pairs([("000", 512), ("111", 512)]);
//! let table = ProbabilityTable::from_counts(&counts).unwrap();
//! assert_eq!(table.get("000"), 0.5);
//! assert_eq!(table.get("111"), 0.5);
//! ```

pub mod angle;
pub mod error;
pub mod estimate;
pub mod experiment;
pub mod probability;

pub use error::{EvalError, EvalResult};
pub use estimate::{
    Estimate, Estimates, Tick, bin_by_prefix, interpolate, sin_squared_of_fraction,
};
pub use experiment::{Experiment, Mode};
pub use probability::{PRECISION, ProbabilityTable, bitstring, round_to};
