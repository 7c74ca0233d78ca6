pub mod candidates;
pub mod combinations;
pub mod itemset;
pub mod mining;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod support;


pub use candidates::{generate_level, sweep_frequent_itemsets, LevelStats, SweepResult, SweepStats};
pub use itemset::{Itemset, ItemsetKey, Transaction};
pub use mining::{mine_itemsets, mine_rules, MiningOutcome, MiningReport};
pub use registry::{FrequentLevel, FrequentRegistry};
pub use rule::AssociationRule;
pub use rules::{confidence_percent, derive_rules, generate_all_rules, generate_rules, select_rules, RuleBatch};
pub use support::{count_support, filter_frequent, MiningContext};
