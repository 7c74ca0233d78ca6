//! Input boundary: item catalogs, transaction lists and the CSV / dense
//! matrix formats they arrive in.

use crate::bf::{mine_rules, MiningReport, Transaction};
use crate::config::MiningConfig;
use crate::error::{MiningError, MiningResult};
use ahash::AHashSet;
use ndarray::ArrayView2;
use std::path::{Path, PathBuf};

pub const CATALOG_COLUMN: &str = "Item Name";
pub const TRANSACTION_COLUMN: &str = "Transaction";

/// A validated catalog and the transactions to mine against it.
#[derive(Debug, Clone)]
pub struct MiningInput {
    catalog: Vec<String>,
    transactions: Vec<Transaction>,
    unknown_tokens: usize,
}

impl MiningInput {
    /// Validate and take ownership of a catalog and its transactions.
    ///
    /// The catalog must be nonempty with unique names and there must be at
    /// least one transaction (empty transactions are fine). Tokens outside
    /// the catalog are kept but counted, since no catalog itemset can match
    /// them.
    pub fn new(catalog: Vec<String>, transactions: Vec<Transaction>) -> MiningResult<Self> {
        if catalog.is_empty() {
            return Err(MiningError::EmptyCatalog);
        }

        let mut known = AHashSet::with_capacity(catalog.len());
        for item in &catalog {
            if !known.insert(item.as_str()) {
                return Err(MiningError::DuplicateItem { item: item.clone() });
            }
        }

        if transactions.is_empty() {
            return Err(MiningError::NoTransactions);
        }

        let unknown_tokens = transactions
            .iter()
            .flat_map(|transaction| transaction.iter())
            .filter(|token| !known.contains(token.as_str()))
            .count();
        if unknown_tokens > 0 {
            tracing::warn!(unknown_tokens, "transactions reference items missing from the catalog");
        }

        Ok(Self {
            catalog,
            transactions,
            unknown_tokens,
        })
    }

    pub fn from_token_lists<T, S>(catalog: Vec<String>, transactions: T) -> MiningResult<Self>
    where
        T: IntoIterator,
        T::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let transactions = transactions
            .into_iter()
            .map(|tokens| tokens.into_iter().map(Into::into).collect())
            .collect();
        Self::new(catalog, transactions)
    }

    pub fn from_dense(matrix: ArrayView2<i32>, item_names: Vec<String>) -> MiningResult<Self> {
        let transactions = transactions_from_dense(matrix, &item_names)?;
        Self::new(item_names, transactions)
    }

    pub fn from_csv<P: AsRef<Path>, Q: AsRef<Path>>(catalog_path: P, transactions_path: Q) -> MiningResult<Self> {
        let catalog = read_catalog_csv(catalog_path)?;
        let transactions = read_transactions_csv(transactions_path)?;
        Self::new(catalog, transactions)
    }

    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn unknown_tokens(&self) -> usize {
        self.unknown_tokens
    }

    pub fn mine(&self, config: &MiningConfig) -> MiningReport {
        mine_rules(&self.catalog, &self.transactions, config)
    }
}

/// Split a `"a, b, c"` transaction cell into its tokens.
pub fn tokenize_transaction(raw: &str) -> Transaction {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Convert a one-hot matrix (rows = transactions, columns = items) to
/// transactions of item names.
pub fn transactions_from_dense(matrix: ArrayView2<i32>, item_names: &[String]) -> MiningResult<Vec<Transaction>> {
    let num_transactions = matrix.shape()[0];
    let num_items = matrix.shape()[1];
    if num_items != item_names.len() {
        return Err(MiningError::ShapeMismatch {
            columns: num_items,
            names: item_names.len(),
        });
    }

    Ok((0..num_transactions)
        .map(|i| {
            (0..num_items)
                .filter(|&j| matrix[[i, j]] != 0)
                .map(|j| item_names[j].clone())
                .collect()
        })
        .collect())
}

fn column_index(
    reader: &mut csv::Reader<std::fs::File>,
    column: &'static str,
    path: &Path,
) -> MiningResult<usize> {
    reader
        .headers()?
        .iter()
        .position(|header| header.trim() == column)
        .ok_or_else(|| MiningError::MissingColumn {
            column,
            path: path.display().to_string(),
        })
}

/// Item names from the `Item Name` column of a catalog CSV.
pub fn read_catalog_csv<P: AsRef<Path>>(path: P) -> MiningResult<Vec<String>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;
    let idx = column_index(&mut reader, CATALOG_COLUMN, path)?;

    let mut catalog = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(name) = record.get(idx).map(str::trim).filter(|name| !name.is_empty()) {
            catalog.push(name.to_string());
        }
    }
    tracing::debug!(path = %path.display(), items = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// Tokenized transactions from the `Transaction` column of a CSV.
pub fn read_transactions_csv<P: AsRef<Path>>(path: P) -> MiningResult<Vec<Transaction>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;
    let idx = column_index(&mut reader, TRANSACTION_COLUMN, path)?;

    let mut transactions = Vec::new();
    for record in reader.records() {
        let record = record?;
        transactions.push(tokenize_transaction(record.get(idx).unwrap_or("")));
    }
    tracing::debug!(path = %path.display(), transactions = transactions.len(), "loaded transactions");
    Ok(transactions)
}

/// Catalog and transaction files for a named store: `DIR/NAME.csv` and
/// `DIR/NAME_transactions.csv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub catalog: PathBuf,
    pub transactions: PathBuf,
}

impl StorePaths {
    pub fn resolve<P: AsRef<Path>>(data_dir: P, store: &str) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            catalog: data_dir.join(format!("{store}.csv")),
            transactions: data_dir.join(format!("{store}_transactions.csv")),
        }
    }

    pub fn load(&self) -> MiningResult<MiningInput> {
        MiningInput::from_csv(&self.catalog, &self.transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn tokenize_trims_and_drops_empty_tokens() {
        let tx = tokenize_transaction("Pen, Paper ,, Ink");
        assert_eq!(tx.len(), 3);
        assert!(tx.contains("Pen") && tx.contains("Paper") && tx.contains("Ink"));
        assert!(tokenize_transaction("").is_empty());
    }

    #[test]
    fn rejects_empty_and_duplicate_catalogs() {
        let tx = vec![tokenize_transaction("a")];
        assert!(matches!(MiningInput::new(vec![], tx.clone()), Err(MiningError::EmptyCatalog)));
        assert!(matches!(
            MiningInput::new(names(&["a", "a"]), tx),
            Err(MiningError::DuplicateItem { .. })
        ));
        assert!(matches!(MiningInput::new(names(&["a"]), vec![]), Err(MiningError::NoTransactions)));
    }

    #[test]
    fn counts_unknown_tokens() {
        let input = MiningInput::from_token_lists(names(&["a", "b"]), vec![vec!["a", "z"], vec![]]).unwrap();
        assert_eq!(input.unknown_tokens(), 1);
        assert_eq!(input.transactions().len(), 2);
    }

    #[test]
    fn dense_matrix_conversion() {
        let matrix = Array2::from_shape_vec((3, 3), vec![1, 1, 0, 0, 0, 0, 1, 0, 1]).unwrap();
        let tx = transactions_from_dense(matrix.view(), &names(&["a", "b", "c"])).unwrap();
        assert_eq!(tx.len(), 3);
        assert!(tx[0].contains("a") && tx[0].contains("b") && !tx[0].contains("c"));
        assert!(tx[1].is_empty());
        assert!(tx[2].contains("a") && tx[2].contains("c"));
    }

    #[test]
    fn dense_matrix_shape_mismatch() {
        let matrix = Array2::<i32>::zeros((2, 3));
        let err = transactions_from_dense(matrix.view(), &names(&["a", "b"])).unwrap_err();
        assert!(matches!(err, MiningError::ShapeMismatch { columns: 3, names: 2 }));
    }

    #[test]
    fn store_paths_follow_naming_convention() {
        let paths = StorePaths::resolve("data", "staples");
        assert_eq!(paths.catalog, Path::new("data").join("staples.csv"));
        assert_eq!(paths.transactions, Path::new("data").join("staples_transactions.csv"));
    }
}
