use crate::bf::{AssociationRule, FrequentRegistry, LevelStats, MiningOutcome, MiningReport};
use crate::config::MiningConfig;
use serde::Serialize;
use std::fmt::Write as _;

pub const RULES_HEADER: &str = "Association rules (X -> Y read 'X implies Y'):";

pub const NO_RULES_GUIDANCE: &str = "No rules found. Try a lower minimum support value \
(25 or less is realistic for these data sets) or a lower minimum confidence level \
(60 or less is realistic for these data sets)";

/// Serializable summary of a mining pass.
#[derive(Debug, Serialize)]
pub struct ReportDocument<'a> {
    pub min_support_percent: f64,
    pub min_confidence_percent: f64,
    pub total_transactions: usize,
    pub frequent_itemsets: usize,
    pub rules_generated: usize,
    pub rules_skipped: usize,
    pub levels: &'a [LevelStats],
    pub stopped_at: Option<usize>,
    pub elapsed_seconds: f64,
    /// `"rules"` or `"no_rules"`.
    pub outcome: &'static str,
    pub message: Option<&'static str>,
    pub rules: &'a [AssociationRule],
}

impl<'a> ReportDocument<'a> {
    pub fn new(report: &'a MiningReport, config: &MiningConfig) -> Self {
        let (outcome, message) = match report.outcome() {
            MiningOutcome::Rules(_) => ("rules", None),
            MiningOutcome::NoRules => ("no_rules", Some(NO_RULES_GUIDANCE)),
        };
        Self {
            min_support_percent: config.min_support_percent,
            min_confidence_percent: config.min_confidence_percent,
            total_transactions: report.total_transactions,
            frequent_itemsets: report.frequent.len(),
            rules_generated: report.rules_generated,
            rules_skipped: report.rules_skipped,
            levels: &report.sweep.levels,
            stopped_at: report.sweep.stopped_at,
            elapsed_seconds: report.elapsed.as_secs_f64(),
            outcome,
            message,
            rules: &report.rules,
        }
    }
}

/// Human-readable rule listing, or the guidance message when nothing passed
/// the thresholds.
pub fn render_rules(report: &MiningReport) -> String {
    let mut out = String::new();
    match report.outcome() {
        MiningOutcome::NoRules => {
            out.push_str(NO_RULES_GUIDANCE);
            out.push('\n');
        }
        MiningOutcome::Rules(rules) => {
            out.push_str(RULES_HEADER);
            out.push('\n');
            for rule in rules {
                let _ = writeln!(out, "{rule}");
            }
        }
    }
    let _ = writeln!(
        out,
        "\nResults returned in {:.6} seconds from brute force algorithm",
        report.elapsed.as_secs_f64()
    );
    out
}

pub fn render_itemsets(registry: &FrequentRegistry) -> String {
    let mut out = String::new();
    for level in registry.levels().iter().filter(|level| !level.is_empty()) {
        let _ = writeln!(out, "Frequent {}-itemsets ({}):", level.itemset_size, level.len());
        for itemset in level.iter_itemsets() {
            let _ = writeln!(out, "  {itemset}");
        }
    }
    if out.is_empty() {
        out.push_str("No frequent itemsets found. Try a lower minimum support value.\n");
    }
    out
}

pub fn render_json(report: &MiningReport, config: &MiningConfig) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ReportDocument::new(report, config))
}
