use super::itemset::Itemset;
use super::registry::FrequentRegistry;
use super::rule::AssociationRule;
use crate::error::{MiningError, MiningResult};

/// Rules derived from one itemset, plus the antecedents that were skipped
/// because their support could not be found.
#[derive(Debug, Clone, Default)]
pub struct RuleBatch {
    pub rules: Vec<AssociationRule>,
    pub unsupported: Vec<Vec<String>>,
}

/// `itemset_count / antecedent_count * 100`. A zero antecedent count is an
/// error rather than an infinite or NaN confidence.
pub fn confidence_percent(
    itemset_count: usize,
    antecedent_count: usize,
    antecedent: &[String],
) -> MiningResult<f64> {
    if antecedent_count == 0 {
        return Err(MiningError::ZeroAntecedentSupport {
            antecedent: antecedent.to_vec(),
        });
    }
    Ok(itemset_count as f64 / antecedent_count as f64 * 100.0)
}

/// Build one rule per proper nonempty antecedent of `itemset`. Antecedent
/// support comes from `registry`; an antecedent with no recorded support is
/// skipped and reported in [`RuleBatch::unsupported`].
pub fn generate_rules(itemset: &Itemset, registry: &FrequentRegistry) -> RuleBatch {
    let enumerated;
    let antecedents = if itemset.antecedent_candidates().is_empty() {
        enumerated = itemset.enumerate_antecedents();
        enumerated.as_slice()
    } else {
        itemset.antecedent_candidates()
    };

    let mut batch = RuleBatch::default();
    for antecedent in antecedents {
        let consequent: Vec<String> = itemset
            .items()
            .iter()
            .filter(|item| !antecedent.contains(*item))
            .cloned()
            .collect();

        let antecedent_count = registry.support_of(antecedent.as_slice());
        match confidence_percent(itemset.support_count(), antecedent_count, antecedent) {
            Ok(confidence) => batch.rules.push(AssociationRule::new(
                antecedent.clone(),
                consequent,
                itemset.support_percent(),
                confidence,
            )),
            Err(e) => {
                tracing::warn!(error = %e, itemset = ?itemset.items(), "skipping rule");
                batch.unsupported.push(antecedent.clone());
            }
        }
    }
    batch
}

/// Keep rules whose confidence reaches `min_confidence_percent`, in order.
#[must_use]
pub fn select_rules(rules: Vec<AssociationRule>, min_confidence_percent: f64) -> Vec<AssociationRule> {
    rules
        .into_iter()
        .filter(|rule| rule.confidence_percent >= min_confidence_percent)
        .collect()
}

/// Expand every registered itemset into rules, in discovery order.
pub fn generate_all_rules(registry: &FrequentRegistry) -> RuleBatch {
    let mut all = RuleBatch::default();
    for itemset in registry.iter() {
        let batch = generate_rules(itemset, registry);
        all.rules.extend(batch.rules);
        all.unsupported.extend(batch.unsupported);
    }
    all
}

/// Rules from `registry` that meet `min_confidence_percent`.
pub fn derive_rules(registry: &FrequentRegistry, min_confidence_percent: f64) -> Vec<AssociationRule> {
    select_rules(generate_all_rules(registry).rules, min_confidence_percent)
}
