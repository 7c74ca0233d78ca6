use super::itemset::{Itemset, ItemsetKey};
use ahash::AHashMap;
use serde::Serialize;

/// All frequent itemsets of one size, in discovery order.
#[derive(Debug, Clone, Serialize)]
pub struct FrequentLevel {
    pub itemset_size: usize,
    itemsets: Vec<Itemset>,
}

impl FrequentLevel {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            itemset_size,
            itemsets: Vec::new(),
        }
    }

    pub fn add_itemset(&mut self, itemset: Itemset) -> usize {
        debug_assert_eq!(itemset.len(), self.itemset_size);
        self.itemsets.push(itemset);
        self.itemsets.len() - 1
    }

    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &Itemset> {
        self.itemsets.iter()
    }
}

/// Every frequent itemset found during one mining pass, grouped by size and
/// indexed by canonical key for constant-time support lookups.
#[derive(Debug, Clone, Default)]
pub struct FrequentRegistry {
    levels: Vec<FrequentLevel>,
    support_index: AHashMap<ItemsetKey, usize>,
}

impl FrequentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an itemset, growing the level list as needed. An itemset
    /// whose key is already present is ignored.
    pub fn add_itemset(&mut self, itemset: Itemset) -> bool {
        let size = itemset.len();
        if size == 0 {
            return false;
        }

        let key = itemset.key();
        if self.support_index.contains_key(&key) {
            return false;
        }
        self.support_index.insert(key, itemset.support_count());

        while self.levels.len() < size {
            self.levels.push(FrequentLevel::new(self.levels.len() + 1));
        }
        self.levels[size - 1].add_itemset(itemset);
        true
    }

    pub fn extend<I: IntoIterator<Item = Itemset>>(&mut self, itemsets: I) {
        for itemset in itemsets {
            self.add_itemset(itemset);
        }
    }

    /// Support count of the itemset with exactly these members, or 0 if it
    /// was never registered.
    pub fn support_of<S: AsRef<str>>(&self, items: &[S]) -> usize {
        self.support_of_key(&ItemsetKey::from_items(items))
    }

    pub fn support_of_key(&self, key: &ItemsetKey) -> usize {
        self.support_index.get(key).copied().unwrap_or(0)
    }

    pub fn contains<S: AsRef<str>>(&self, items: &[S]) -> bool {
        self.support_index.contains_key(&ItemsetKey::from_items(items))
    }

    pub fn levels(&self) -> &[FrequentLevel] {
        &self.levels
    }

    pub fn level(&self, itemset_size: usize) -> Option<&FrequentLevel> {
        itemset_size
            .checked_sub(1)
            .and_then(|idx| self.levels.get(idx))
    }

    pub fn max_itemset_size(&self) -> usize {
        self.levels
            .iter()
            .rev()
            .find(|level| !level.is_empty())
            .map_or(0, |level| level.itemset_size)
    }

    pub fn len(&self) -> usize {
        self.support_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.support_index.is_empty()
    }

    /// Attach antecedent candidates to every registered itemset of size two
    /// or more, ahead of rule generation.
    pub fn attach_antecedents(&mut self) {
        for level in self.levels.iter_mut().skip(1) {
            for itemset in level.itemsets.iter_mut() {
                itemset.attach_antecedents();
            }
        }
    }

    /// Itemsets in discovery order: by size, then by generation order.
    pub fn iter(&self) -> impl Iterator<Item = &Itemset> {
        self.levels.iter().flat_map(|level| level.iter_itemsets())
    }
}
