//! Phase and amplitude estimation from binned outcomes.
//!
//! The counting register of an estimation circuit reads out a binary
//! fraction. [`bin_by_prefix`] groups a probability table by that register,
//! [`Estimates`] orders the bins and [`Estimates::interpolate`] places the
//! estimate between the two most likely bins.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EvalError, EvalResult};
use crate::probability::{PRECISION, ProbabilityTable, round_to};

/// Decimal places used when merging sin² values.
const SINE_PRECISION: i32 = 4;

/// Maps a counting-register integer `y` of `width` bits to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tick {
    /// `y / 2^width`, in [0, 1).
    #[default]
    Fraction,
    /// `2y / 2^width`, in [0, 2).
    DoubledFraction,
}

impl Tick {
    /// Value of bin `y`.
    pub fn value(self, y: u64, width: usize) -> f64 {
        let scale = 2f64.powi(width as i32);
        match self {
            Tick::Fraction => y as f64 / scale,
            Tick::DoubledFraction => 2.0 * y as f64 / scale,
        }
    }
}

/// One bin: a value and its probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Bin value.
    pub value: f64,
    /// Probability mass of the bin.
    pub probability: f64,
}

/// Bins ordered by value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Estimates {
    bins: Vec<Estimate>,
}

/// Group `table` by the integer read from the first `width` characters of
/// each key (first character most significant) and map it through `tick`.
pub fn bin_by_prefix(table: &ProbabilityTable, width: usize, tick: Tick) -> EvalResult<Estimates> {
    if width == 0 || width > 63 {
        return Err(EvalError::InvalidWidth { width, len: 0 });
    }
    let mut bins: BTreeMap<u64, f64> = BTreeMap::new();
    for (key, p) in table.iter() {
        if key.len() < width {
            return Err(EvalError::InvalidWidth {
                width,
                len: key.len(),
            });
        }
        let y = key.as_bytes()[..width]
            .iter()
            .try_fold(0u64, |acc, &b| match b {
                b'0' => Ok(acc << 1),
                b'1' => Ok((acc << 1) | 1),
                _ => Err(EvalError::InvalidBitstring(key.to_string())),
            })?;
        *bins.entry(y).or_insert(0.0) += p;
    }
    debug!("Binned {} outcomes into {} bins", table.len(), bins.len());
    Ok(Estimates {
        bins: bins
            .into_iter()
            .map(|(y, probability)| Estimate {
                value: tick.value(y, width),
                probability,
            })
            .collect(),
    })
}

impl Estimates {
    /// Build from explicit `(value, probability)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut bins: Vec<Estimate> = pairs
            .into_iter()
            .map(|(value, probability)| Estimate { value, probability })
            .collect();
        bins.sort_by(|a, b| a.value.total_cmp(&b.value));
        Self { bins }
    }

    /// Bins in value order.
    pub fn bins(&self) -> &[Estimate] {
        &self.bins
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Whether there are no bins.
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Fold a doubled-fraction scale back onto `[0, pivot]`.
    ///
    /// Bins other than the pivot absorb their mirror image, so their
    /// probability is doubled; bins above the pivot are dropped.
    /// Probabilities are rounded.
    #[must_use]
    pub fn fold_mirrored(&self, pivot: f64) -> Self {
        Self {
            bins: self
                .bins
                .iter()
                .filter(|e| e.value <= pivot)
                .map(|e| {
                    let p = if e.value == pivot {
                        e.probability
                    } else {
                        2.0 * e.probability
                    };
                    Estimate {
                        value: e.value,
                        probability: round_to(p, PRECISION),
                    }
                })
                .collect(),
        }
    }

    /// Probabilities rounded to five decimals.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            bins: self
                .bins
                .iter()
                .map(|e| Estimate {
                    value: e.value,
                    probability: round_to(e.probability, PRECISION),
                })
                .collect(),
        }
    }

    /// Bins by descending probability, equal probabilities by ascending
    /// value.
    pub fn ranked(&self) -> Vec<Estimate> {
        let mut ranked = self.bins.clone();
        ranked.sort_by(|a, b| {
            b.probability
                .total_cmp(&a.probability)
                .then(a.value.total_cmp(&b.value))
        });
        ranked
    }

    /// Weighted position between the two most likely bins.
    pub fn interpolate(&self) -> EvalResult<f64> {
        interpolate(&self.ranked())
    }

    /// Merge ranked bins by `sin²(π·value)` rounded to four decimals,
    /// keeping first-seen order.
    pub fn combine_sines(&self) -> Vec<Estimate> {
        let mut merged: Vec<Estimate> = Vec::new();
        for e in self.ranked() {
            let sine = round_to(sin_squared_of_fraction(e.value), SINE_PRECISION);
            match merged.iter_mut().find(|m| m.value == sine) {
                Some(m) => m.probability += e.probability,
                None => merged.push(Estimate {
                    value: sine,
                    probability: e.probability,
                }),
            }
        }
        merged
    }
}

/// Interpolate between the first two entries of a ranked outcome list.
///
/// With `p1 ≥ p2` at values `s` and `e` the result is
/// `s + (e − s) · p2 / (p1 + p2)`. A single outcome returns its value.
pub fn interpolate(ranked: &[Estimate]) -> EvalResult<f64> {
    match ranked {
        [] => Err(EvalError::NoOutcomes),
        [only] => Ok(only.value),
        [first, second, ..] => {
            let weight = first.probability + second.probability;
            if weight == 0.0 {
                return Err(EvalError::DivisionByZero(
                    "top two outcomes have zero probability".into(),
                ));
            }
            Ok(first.value + (second.value - first.value) * second.probability / weight)
        }
    }
}

/// `sin²(π·x)`: the probability encoded by an estimated phase fraction.
pub fn sin_squared_of_fraction(x: f64) -> f64 {
    (PI * x).sin().powi(2)
}
