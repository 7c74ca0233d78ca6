mod common;

use brute_rules::{mine_itemsets, mine_rules, MiningConfig};
use common::generate_dataset;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Catalog size dominates: every level enumerates C(n, k) candidates.
fn bench_catalog_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("brute_force_catalog_scaling");

    for num_items in [6, 8, 10, 12] {
        let (names, transactions) = generate_dataset(500, num_items, 4, 0.8);

        group.bench_with_input(BenchmarkId::from_parameter(num_items), &transactions, |b, tx| {
            b.iter(|| mine_itemsets(black_box(&names), black_box(tx), black_box(10.0)));
        });
    }

    group.finish();
}

fn bench_transaction_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("brute_force_transaction_scaling");

    for num_tx in [100, 500, 1000, 5000] {
        let (names, transactions) = generate_dataset(num_tx, 10, 4, 0.8);

        group.bench_with_input(BenchmarkId::from_parameter(num_tx), &transactions, |b, tx| {
            b.iter(|| mine_itemsets(black_box(&names), black_box(tx), black_box(10.0)));
        });
    }

    group.finish();
}

/// Lower support keeps more levels alive before the sweep stops.
fn bench_min_support(c: &mut Criterion) {
    let mut group = c.benchmark_group("brute_force_min_support");
    let (names, transactions) = generate_dataset(1000, 10, 5, 0.7);

    for min_support in [5.0, 10.0, 25.0, 50.0] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.0}", min_support)),
            &min_support,
            |b, &sup| {
                b.iter(|| mine_itemsets(black_box(&names), black_box(&transactions), black_box(sup)));
            },
        );
    }

    group.finish();
}

fn bench_full_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("brute_force_full_pass");
    let (names, transactions) = generate_dataset(1000, 10, 5, 0.8);

    for (name, support, confidence) in [("loose", 5.0, 30.0), ("typical", 25.0, 60.0), ("strict", 50.0, 90.0)] {
        let config = MiningConfig::new(support, confidence).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, config| {
            b.iter(|| mine_rules(black_box(&names), black_box(&transactions), black_box(config)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_catalog_scaling,
    bench_transaction_scaling,
    bench_min_support,
    bench_full_pass
);
criterion_main!(benches);
