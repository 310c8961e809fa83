//! qsketch Executor Abstraction
//!
//! This crate is the boundary between circuit construction and whatever
//! runs the circuit: a local simulator, a remote device, or recorded
//! results.
//!
//! # Overview
//!
//! - A blocking [`Executor`] trait returning [`Counts`] or a [`Statevector`]
//! - [`ExecutorConfig`] and named [`ExecutorProfiles`] loaded from YAML
//! - An [`ExecutorRegistry`] for creating executors by name
//! - A [`ReplayExecutor`] that serves recorded results
//!
//! # Example: Replaying recorded counts
//!
//! ```rust
//! use qsketch_hal::{Counts, Executor, ReplayExecutor};
//! use qsketch_ir::Circuit;
//!
//! let executor = ReplayExecutor::new()
//!     .with_counts("ghz", Counts::from_pairs([("000", 512), ("111", 512)]));
//!
//! let circuit = Circuit::with_size("ghz", 3);
//! let counts = executor.submit(&circuit, 1024).unwrap();
//! assert_eq!(counts.get("111"), 512);
//! ```
//!
//! # Configuration
//!
//! | Source | Purpose |
//! |--------|---------|
//! | `$QSKETCH_CONFIG` | Profile file path |
//! | `~/.qsketch/executors.yaml` | Default profile file |
//! | `$QSKETCH_TOKEN` | Token for profiles without one |

pub mod config;
pub mod error;
pub mod executor;
pub mod registry;
pub mod replay;
pub mod result;

pub use config::{CONFIG_ENV, ExecutorConfig, ExecutorProfiles, TOKEN_ENV};
pub use error::{HalError, HalResult};
pub use executor::{Executor, ExecutorFactory};
pub use registry::ExecutorRegistry;
pub use replay::{Recording, ReplayExecutor};
pub use result::{Counts, Statevector};
