use super::combinations::for_each_combination;
use ahash::AHashSet;
use serde::Serialize;
use std::fmt;

/// One transaction: the set of item tokens it contains.
pub type Transaction = AHashSet<String>;

/// Canonical form of an itemset: its members sorted. Two itemsets with the
/// same members have the same key regardless of generation order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ItemsetKey(Vec<String>);

impl ItemsetKey {
    pub fn from_items<S: AsRef<str>>(items: &[S]) -> Self {
        let mut key: Vec<String> = items.iter().map(|s| s.as_ref().to_string()).collect();
        key.sort_unstable();
        key.dedup();
        Self(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A candidate or frequent itemset with its support statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itemset {
    items: Vec<String>,
    support_count: usize,
    support_percent: f64,
    #[serde(skip)]
    antecedent_candidates: Vec<Vec<String>>,
}

impl Itemset {
    /// Build an unscored itemset. Repeated names are collapsed, keeping the
    /// first occurrence so items stay in generation order.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = AHashSet::new();
        let items: Vec<String> = items
            .into_iter()
            .map(Into::into)
            .filter(|item| seen.insert(item.clone()))
            .collect();
        debug_assert!(!items.is_empty(), "itemsets must be nonempty");

        Self {
            items,
            support_count: 0,
            support_percent: 0.0,
            antecedent_candidates: Vec::new(),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn key(&self) -> ItemsetKey {
        ItemsetKey::from_items(&self.items)
    }

    pub fn support_count(&self) -> usize {
        self.support_count
    }

    pub fn support_percent(&self) -> f64 {
        self.support_percent
    }

    pub fn is_subset_of(&self, transaction: &Transaction) -> bool {
        self.items.iter().all(|item| transaction.contains(item))
    }

    pub(crate) fn increment_support(&mut self) {
        self.support_count += 1;
    }

    /// Recompute the percentage from the current count. With no
    /// transactions the percentage is 0.
    pub(crate) fn refresh_support_percent(&mut self, total_transactions: usize) {
        self.support_percent = if total_transactions == 0 {
            0.0
        } else {
            self.support_count as f64 / total_transactions as f64 * 100.0
        };
    }

    /// Every proper nonempty subset of `items`, sized 1 through `len - 1`,
    /// smallest first. A singleton yields nothing.
    pub fn enumerate_antecedents(&self) -> Vec<Vec<String>> {
        let mut antecedents = Vec::new();
        for size in 1..self.items.len() {
            for_each_combination(&self.items, size, |combination| {
                antecedents.push(combination.iter().map(|&item| item.clone()).collect());
            });
        }
        antecedents
    }

    /// Populate the antecedent candidates if they have not been attached yet.
    pub fn attach_antecedents(&mut self) -> &[Vec<String>] {
        if self.antecedent_candidates.is_empty() && self.items.len() > 1 {
            self.antecedent_candidates = self.enumerate_antecedents();
        }
        &self.antecedent_candidates
    }

    pub fn antecedent_candidates(&self) -> &[Vec<String>] {
        &self.antecedent_candidates
    }
}

impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}} Support: {}, {:.2}%",
            self.items.join(", "),
            self.support_count,
            self.support_percent
        )
    }
}
