//! Probability tables from counts and statevectors.
//!
//! Keys are bitstrings written least-significant qubit first: character `j`
//! is qubit `j`, so index 1 on three qubits is `"100"`.

use std::collections::BTreeMap;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::debug;

use qsketch_hal::{Counts, Statevector};

use crate::error::{EvalError, EvalResult};

/// Decimal places kept for amplitudes and probabilities.
pub const PRECISION: i32 = 5;

/// Round to `decimals` places, ties to even.
pub fn round_to(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round_ties_even() / scale
}

fn round_amplitude(a: Complex64) -> Complex64 {
    Complex64::new(round_to(a.re, PRECISION), round_to(a.im, PRECISION))
}

/// The `width`-character key for basis index `index`.
pub fn bitstring(index: usize, width: usize) -> String {
    (0..width)
        .map(|j| if j < usize::BITS as usize && (index >> j) & 1 == 1 { '1' } else { '0' })
        .collect()
}

/// Outcome probabilities keyed by bitstring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProbabilityTable {
    entries: BTreeMap<String, f64>,
}

impl ProbabilityTable {
    /// Probabilities of every basis state.
    ///
    /// Amplitudes are rounded to [`PRECISION`] places first, then the
    /// probability `|a|²` is rounded again. Zero entries are kept.
    pub fn from_statevector(statevector: &Statevector) -> EvalResult<Self> {
        let len = statevector.len();
        let width = statevector
            .num_qubits()
            .ok_or(EvalError::MalformedStatevector(len))? as usize;

        let entries = statevector
            .amplitudes()
            .iter()
            .enumerate()
            .map(|(i, &a)| {
                let magnitude = round_amplitude(a).norm();
                (bitstring(i, width), round_to(magnitude * magnitude, PRECISION))
            })
            .collect();
        debug!("Probability table from {} amplitudes", len);
        Ok(Self { entries })
    }

    /// Relative frequencies `count / total`.
    pub fn from_counts(counts: &Counts) -> EvalResult<Self> {
        let total = counts.total_shots();
        if total == 0 {
            return Err(EvalError::DivisionByZero("counts total zero shots".into()));
        }
        let entries = counts
            .iter()
            .map(|(k, &c)| (k.clone(), c as f64 / total as f64))
            .collect();
        debug!("Probability table from {} shots", total);
        Ok(Self { entries })
    }

    /// Build from explicit `(bitstring, probability)` pairs.
    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (S, f64)>) -> Self {
        Self {
            entries: pairs.into_iter().map(|(k, p)| (k.into(), p)).collect(),
        }
    }

    /// Drop entries with probability ≤ 0.
    #[must_use]
    pub fn filtered(&self) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(_, p)| **p > 0.0)
                .map(|(k, p)| (k.clone(), *p))
                .collect(),
        }
    }

    /// Probability of `bitstring`, zero if absent.
    pub fn get(&self, bitstring: &str) -> f64 {
        self.entries.get(bitstring).copied().unwrap_or(0.0)
    }

    /// Probability that `qubit` reads 1.
    pub fn probability_of_one(&self, qubit: usize) -> f64 {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_bytes().get(qubit) == Some(&b'1'))
            .map(|(_, p)| p)
            .sum()
    }

    /// Sum of all probabilities.
    pub fn total(&self) -> f64 {
        self.entries.values().sum()
    }

    /// Entries in bitstring order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, &p)| (k.as_str(), p))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
