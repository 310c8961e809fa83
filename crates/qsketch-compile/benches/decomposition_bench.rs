//! Benchmarks for multi-controlled decomposition and circuit families
//!
//! Run with: cargo bench -p qsketch-compile

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qsketch_compile::library::{AmplitudeEstimation, FourierStyle, GroverSearch, append_qft};
use qsketch_compile::{classical, mcx};
use qsketch_ir::{Circuit, QubitId};

fn controlled_circuit(n: u32) -> (Circuit, Vec<QubitId>, Vec<QubitId>, QubitId) {
    let mut circuit = Circuit::new("bench");
    let ctrl = circuit.add_qreg("ctrl", n).unwrap();
    let anc = circuit.add_qreg("anc", n - 1).unwrap();
    let tgt = circuit.add_qreg("tgt", 1).unwrap();
    (circuit, ctrl.as_slice().to_vec(), anc.as_slice().to_vec(), tgt[0])
}

/// Benchmark a single multi-controlled X
fn bench_mcx(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcx");

    for n in &[2u32, 5, 10, 20, 50] {
        group.bench_with_input(BenchmarkId::new("controls", n), n, |b, &n| {
            let (circuit, ctrl, anc, tgt) = controlled_circuit(n);
            b.iter(|| {
                let mut c = circuit.clone();
                mcx(&mut c, black_box(&ctrl), black_box(&anc), black_box(tgt)).unwrap();
                c
            });
        });
    }

    group.finish();
}

/// Benchmark truth-table checks on the classical evaluator
fn bench_truth_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("truth_table");

    for n in &[3u32, 6, 9] {
        let (mut circuit, ctrl, anc, tgt) = controlled_circuit(*n);
        mcx(&mut circuit, &ctrl, &anc, tgt).unwrap();
        group.bench_with_input(BenchmarkId::new("controls", n), &circuit, |b, circuit| {
            b.iter(|| classical::truth_table(black_box(circuit), &ctrl).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the algorithm family builders
fn bench_families(c: &mut Criterion) {
    let mut group = c.benchmark_group("families");

    for n in &[3u32, 5, 8] {
        group.bench_with_input(BenchmarkId::new("grover", n), n, |b, &n| {
            b.iter(|| GroverSearch::new(n, 1).unwrap().build().unwrap());
        });
        group.bench_with_input(BenchmarkId::new("amplitude", n), n, |b, &n| {
            b.iter(|| AmplitudeEstimation::new(n, 0.3).build().unwrap());
        });
    }

    group.bench_function("qft_20", |b| {
        let qubits: Vec<_> = (0..20).map(QubitId).collect();
        b.iter(|| {
            let mut circuit = Circuit::with_size("qft", 20);
            append_qft(&mut circuit, black_box(&qubits), FourierStyle::ControlledPhase).unwrap();
            circuit
        });
    });

    group.finish();
}

criterion_group!(benches, bench_mcx, bench_truth_table, bench_families);
criterion_main!(benches);
