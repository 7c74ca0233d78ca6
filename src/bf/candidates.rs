use super::combinations::{binomial, for_each_combination};
use super::itemset::Itemset;
use super::registry::FrequentRegistry;
use super::support::MiningContext;
use serde::Serialize;

/// Counters for one level of the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelStats {
    pub k: usize,
    pub candidates: usize,
    pub frequent: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SweepStats {
    pub levels: Vec<LevelStats>,
    /// The level that came back empty and ended the sweep, if any.
    pub stopped_at: Option<usize>,
}

impl SweepStats {
    pub fn candidates_evaluated(&self) -> usize {
        self.levels.iter().map(|level| level.candidates).sum()
    }
}

#[derive(Debug, Clone)]
pub struct SweepResult {
    pub registry: FrequentRegistry,
    pub stats: SweepStats,
}

/// Build every size-`k` combination of `base_item_names`, score it against
/// the context's transactions and return the frequent ones.
pub fn generate_level(ctx: &MiningContext<'_>, k: usize, base_item_names: &[String]) -> Vec<Itemset> {
    let mut candidates = Vec::with_capacity(binomial(base_item_names.len(), k).min(1 << 16));
    for_each_combination(base_item_names, k, |combination| {
        candidates.push(Itemset::new(combination.iter().map(|&name| name.clone())));
    });

    ctx.compute_support(&mut candidates);
    ctx.filter_frequent(candidates)
}

/// Run levels `k = 1 ..= n - 1` over the full catalog, stopping at the
/// first level with no frequent itemsets.
pub fn sweep_frequent_itemsets(ctx: &MiningContext<'_>, base_item_names: &[String]) -> SweepResult {
    let n = base_item_names.len();
    let mut registry = FrequentRegistry::new();
    let mut stats = SweepStats::default();

    for k in 1..n {
        let frequent = generate_level(ctx, k, base_item_names);
        let level = LevelStats {
            k,
            candidates: binomial(n, k),
            frequent: frequent.len(),
        };
        tracing::debug!(k, candidates = level.candidates, frequent = level.frequent, "swept level");
        stats.levels.push(level);

        if frequent.is_empty() {
            stats.stopped_at = Some(k);
            break;
        }
        registry.extend(frequent);
    }

    SweepResult { registry, stats }
}
