use super::candidates::{sweep_frequent_itemsets, SweepStats};
use super::itemset::Transaction;
use super::registry::FrequentRegistry;
use super::rule::AssociationRule;
use super::rules::{generate_all_rules, select_rules};
use super::support::MiningContext;
use crate::config::MiningConfig;
use std::time::{Duration, Instant};

/// Result of one complete mining pass.
#[derive(Debug, Clone)]
pub struct MiningReport {
    pub frequent: FrequentRegistry,
    pub sweep: SweepStats,
    /// Rules that met the confidence threshold, in generation order.
    pub rules: Vec<AssociationRule>,
    pub rules_generated: usize,
    pub rules_skipped: usize,
    pub total_transactions: usize,
    pub elapsed: Duration,
}

/// What the caller should report: rules, or the distinct "nothing found"
/// state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MiningOutcome<'a> {
    Rules(&'a [AssociationRule]),
    NoRules,
}

impl MiningReport {
    pub fn outcome(&self) -> MiningOutcome<'_> {
        if self.rules.is_empty() {
            MiningOutcome::NoRules
        } else {
            MiningOutcome::Rules(&self.rules)
        }
    }
}

/// Frequent itemsets of `transactions` over `catalog` at `min_support_percent`.
pub fn mine_itemsets(
    catalog: &[String],
    transactions: &[Transaction],
    min_support_percent: f64,
) -> FrequentRegistry {
    let ctx = MiningContext::new(transactions, min_support_percent);
    sweep_frequent_itemsets(&ctx, catalog).registry
}

/// Sweep, derive rules and filter them by confidence. Thresholds are assumed
/// to have been validated by [`MiningConfig::new`].
pub fn mine_rules(
    catalog: &[String],
    transactions: &[Transaction],
    config: &MiningConfig,
) -> MiningReport {
    let start = Instant::now();
    let ctx = MiningContext::new(transactions, config.min_support_percent);

    let mut sweep = sweep_frequent_itemsets(&ctx, catalog);
    sweep.registry.attach_antecedents();
    let generated = generate_all_rules(&sweep.registry);
    let rules_generated = generated.rules.len();
    let rules_skipped = generated.unsupported.len();
    let rules = select_rules(generated.rules, config.min_confidence_percent);

    let elapsed = start.elapsed();
    tracing::info!(
        frequent_itemsets = sweep.registry.len(),
        rules_generated,
        rules_selected = rules.len(),
        rules_skipped,
        elapsed_ms = elapsed.as_millis() as u64,
        "mining pass complete"
    );

    MiningReport {
        frequent: sweep.registry,
        sweep: sweep.stats,
        rules,
        rules_generated,
        rules_skipped,
        total_transactions: ctx.total_transactions(),
        elapsed,
    }
}
