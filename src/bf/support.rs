use super::itemset::{Itemset, Transaction};

/// Per-run state shared by the support counter and the candidate generator.
#[derive(Debug, Clone, Copy)]
pub struct MiningContext<'a> {
    transactions: &'a [Transaction],
    min_support_percent: f64,
}

impl<'a> MiningContext<'a> {
    pub fn new(transactions: &'a [Transaction], min_support_percent: f64) -> Self {
        Self {
            transactions,
            min_support_percent,
        }
    }

    pub fn total_transactions(&self) -> usize {
        self.transactions.len()
    }

    /// Count, for every candidate, the transactions containing it, then
    /// derive the support percentages.
    pub fn compute_support(&self, candidates: &mut [Itemset]) {
        for candidate in candidates.iter_mut() {
            for transaction in self.transactions {
                if candidate.is_subset_of(transaction) {
                    candidate.increment_support();
                }
            }
        }

        let total = self.total_transactions();
        for candidate in candidates.iter_mut() {
            candidate.refresh_support_percent(total);
        }
    }

    pub fn filter_frequent(&self, candidates: Vec<Itemset>) -> Vec<Itemset> {
        filter_frequent(candidates, self.min_support_percent)
    }
}

/// Keep candidates whose support percentage reaches `min_support_percent`,
/// in their input order.
#[must_use = "the filtered itemsets are returned, the input is consumed"]
pub fn filter_frequent(candidates: Vec<Itemset>, min_support_percent: f64) -> Vec<Itemset> {
    candidates
        .into_iter()
        .filter(|candidate| candidate.support_percent() >= min_support_percent)
        .collect()
}

/// `|{t in transactions : items ⊆ t}|` for an arbitrary item list.
pub fn count_support<S: AsRef<str>>(items: &[S], transactions: &[Transaction]) -> usize {
    transactions
        .iter()
        .filter(|transaction| items.iter().all(|item| transaction.contains(item.as_ref())))
        .count()
}
