mod common;

use brute_rules::bf::{sweep_frequent_itemsets, MiningContext};
use brute_rules::{mine_rules, MiningConfig};
use common::generate_dataset;
use std::time::Instant;

fn stress_test_catalog_growth() {
    println!("\n=== Catalog Growth (combinatorial blow-up) ===");

    let configs = vec![
        ("10 items", 10_000, 10, 5),
        ("14 items", 10_000, 14, 6),
        ("16 items", 10_000, 16, 7),
        ("18 items", 10_000, 18, 8),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        println!("\nTesting: {}", name);
        let (names, transactions) = generate_dataset(num_tx, num_items, avg_size, 0.7);

        let ctx = MiningContext::new(&transactions, 5.0);
        let start = Instant::now();
        let result = sweep_frequent_itemsets(&ctx, &names);
        let elapsed = start.elapsed();

        println!("  Time: {:?}", elapsed);
        println!("  Candidates evaluated: {}", result.stats.candidates_evaluated());
        println!("  Frequent itemsets: {}", result.registry.len());
        println!("  Max itemset size: {}", result.registry.max_itemset_size());
        match result.stats.stopped_at {
            Some(k) => println!("  Sweep stopped at k = {}", k),
            None => println!("  Sweep ran to k = {}", num_items - 1),
        }
    }
}

fn stress_test_low_support() {
    println!("\n=== Low Support Test ===");

    let (names, transactions) = generate_dataset(20_000, 12, 6, 0.8);

    for &min_support in &[50.0, 25.0, 10.0, 5.0, 1.0] {
        println!("\nTesting min_support = {}%", min_support);
        let config = MiningConfig::new(min_support, 60.0).unwrap();

        let start = Instant::now();
        let report = mine_rules(&names, &transactions, &config);
        let elapsed = start.elapsed();

        println!("  Time: {:?}", elapsed);
        println!("  Frequent itemsets: {}", report.frequent.len());
        println!("  Rules generated: {}", report.rules_generated);
        println!("  Rules selected: {}", report.rules.len());

        if report.rules_generated > 1_000_000 {
            println!("  ⚠ Rule explosion detected!");
        }
    }
}

fn main() {
    println!("Brute-Force Mining Stress Tests");
    println!("===============================");

    stress_test_catalog_growth();
    stress_test_low_support();

    println!("\n=== All stress tests completed ===");
}
