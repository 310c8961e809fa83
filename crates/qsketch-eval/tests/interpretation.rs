//! End-to-end interpretation of recorded executor output.

use num_complex::Complex64;
use proptest::prelude::*;
use qsketch_compile::library::{h_rz_h, ry_rx, ry_state};
use qsketch_eval::{
    EvalError, Experiment, ProbabilityTable, Tick, angle, bin_by_prefix, sin_squared_of_fraction,
};
use qsketch_hal::{Counts, ReplayExecutor, Statevector};
use qsketch_ir::Circuit;

/// `H·Rz(2θ)·H|0⟩ = (cos θ, −i·sin θ)` up to global phase.
fn h_rz_h_state(theta: f64) -> Statevector {
    Statevector::new(vec![
        Complex64::new(theta.cos(), 0.0),
        Complex64::new(0.0, -theta.sin()),
    ])
}

#[test]
fn test_h_rz_h_statevector_probabilities() {
    let theta = 0.258;
    let circuit = h_rz_h(theta).unwrap();
    let executor = ReplayExecutor::new().with_statevector(circuit.name(), h_rz_h_state(theta));

    let table = Experiment::new(&executor).probabilities(&circuit).unwrap();

    // Amplitudes round to 0.9669 and 0.25515 before squaring.
    assert_eq!(table.get("0"), 0.9349);
    assert_eq!(table.get("1"), 0.0651);
    assert!((angle::angle_from_one(table.get("1")).unwrap() - theta).abs() < 1e-4);
}

#[test]
fn test_ghz_counts() {
    let circuit = Circuit::with_size("ghz", 3);
    let executor = ReplayExecutor::new()
        .with_counts("ghz", Counts::from_pairs([("000", 512), ("111", 512)]));

    let table = Experiment::new(&executor).sample(&circuit, 1024).unwrap();
    assert_eq!(
        table.iter().collect::<Vec<_>>(),
        vec![("000", 0.5), ("111", 0.5)]
    );
}

#[test]
fn test_malformed_statevector_from_executor() {
    let circuit = Circuit::with_size("bad", 2);
    let executor =
        ReplayExecutor::new().with_statevector("bad", Statevector::from_real([1.0, 0.0, 0.0]));

    let err = Experiment::new(&executor).probabilities(&circuit).unwrap_err();
    assert!(matches!(err, EvalError::MalformedStatevector(3)));
}

#[test]
fn test_statevector_keys_are_lsb_first() {
    // |q0 q1⟩ = |1 0⟩ is index 1.
    let sv = Statevector::from_real([0.0, 1.0, 0.0, 0.0]);
    let table = ProbabilityTable::from_statevector(&sv).unwrap().filtered();
    assert_eq!(table.iter().collect::<Vec<_>>(), vec![("10", 1.0)]);
}

#[test]
fn test_ry_rx_recovers_angle() {
    let theta = 0.258f64;
    let circuit = ry_rx(theta).unwrap();
    let p1 = (2.0 * theta).sin().powi(2) / 2.0;
    let executor = ReplayExecutor::new().with_statevector(
        circuit.name(),
        Statevector::from_real([(1.0 - p1).sqrt(), p1.sqrt()]),
    );

    let table = Experiment::new(&executor).probabilities(&circuit).unwrap();
    let recovered = angle::angle_from_double_probability(table.get("1")).unwrap();
    assert!((recovered - theta).abs() < 1e-4);
}

#[test]
fn test_amplitude_estimation_readout() {
    // Three counting qubits plus the target. The phase fraction sits between
    // bins 1/8 and 2/8, closer to 2/8.
    let table = ProbabilityTable::from_pairs([
        ("0010", 0.20),
        ("0011", 0.10),
        ("0100", 0.35),
        ("0101", 0.15),
        ("1110", 0.20),
    ]);
    let estimates = bin_by_prefix(&table, 3, Tick::Fraction).unwrap().rounded();

    let ranked = estimates.ranked();
    assert_eq!(ranked[0].value, 0.25);
    assert_eq!(ranked[1].value, 0.125);
    assert_eq!(ranked[1].probability, 0.3);

    let estimate = estimates.interpolate().unwrap();
    assert!((estimate - 0.203125).abs() < 1e-12);

    // 1/8 and 7/8 share sin²(π·x).
    let sines = estimates.combine_sines();
    assert_eq!(sines.len(), 2);
    assert_eq!(sines[0].value, 0.5);
    assert!((sines[1].probability - 0.5).abs() < 1e-12);
    assert!((sin_squared_of_fraction(0.25) - 0.5).abs() < 1e-12);
}

proptest! {
    #[test]
    fn prop_unfiltered_probabilities_sum_to_one(
        k in 1usize..=4,
        raw in prop::collection::vec((-1.0f64..1.0, -1.0f64..1.0), 16),
    ) {
        let amps: Vec<Complex64> = raw[..1 << k]
            .iter()
            .map(|&(re, im)| Complex64::new(re, im))
            .collect();
        let norm = amps.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt();
        prop_assume!(norm > 1e-3);
        let sv = Statevector::new(amps.iter().map(|a| *a / norm).collect());

        let table = ProbabilityTable::from_statevector(&sv).unwrap();
        prop_assert_eq!(table.len(), 1 << k);
        prop_assert!((table.total() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn prop_ry_state_round_trip(theta in 0.1f64..1.4) {
        let circuit = ry_state(theta).unwrap();
        let executor = ReplayExecutor::new().with_statevector(
            circuit.name(),
            Statevector::from_real([theta.cos(), theta.sin()]),
        );
        let table = Experiment::new(&executor).probabilities(&circuit).unwrap();

        let from_one = angle::angle_from_one(table.get("1")).unwrap();
        let from_zero = angle::angle_from_zero(table.get("0")).unwrap();
        prop_assert!((from_one - theta).abs() < 1e-4);
        prop_assert!((from_zero - theta).abs() < 1e-4);
    }

    #[test]
    fn prop_counts_normalize(a in 1u64..10_000, b in 0u64..10_000) {
        let table = ProbabilityTable::from_counts(&Counts::from_pairs([("0", a), ("1", b)])).unwrap();
        prop_assert!((table.total() - 1.0).abs() < 1e-12);
        prop_assert_eq!(table.filtered().len(), if b == 0 { 1 } else { 2 });
    }
}
