//! Brute-force frequent itemset mining and association rule generation.
//!
//! Every level `k` of the search is rebuilt from the full item catalog,
//! scored against every transaction and filtered by minimum support. The
//! sweep stops at the first empty level. Rules are then derived from each
//! frequent itemset and filtered by minimum confidence.

pub mod bf;
pub mod config;
pub mod error;
pub mod ingest;
pub mod report;

pub use bf::{
    derive_rules, mine_itemsets, mine_rules, AssociationRule, FrequentRegistry, Itemset, MiningOutcome,
    MiningReport, Transaction,
};
pub use config::MiningConfig;
pub use error::{MiningError, MiningResult};
pub use ingest::MiningInput;

#[cfg(feature = "python")]
mod python {
    use crate::bf::AssociationRule;
    use crate::config::MiningConfig;
    use crate::ingest::MiningInput;
    use crate::MiningError;
    use numpy::PyReadonlyArray2;
    use pyo3::prelude::*;

    type RuleTuple = (Vec<String>, Vec<String>, f64, f64);

    fn to_py_err(e: MiningError) -> PyErr {
        pyo3::exceptions::PyValueError::new_err(e.to_string())
    }

    fn rule_tuples(input: &MiningInput, config: &MiningConfig) -> Vec<RuleTuple> {
        input
            .mine(config)
            .rules
            .into_iter()
            .map(|rule: AssociationRule| {
                (rule.antecedent, rule.consequent, rule.support_percent, rule.confidence_percent)
            })
            .collect()
    }

    #[pyfunction]
    #[pyo3(name = "mine_rules")]
    fn mine_rules_py(
        catalog: Vec<String>,
        transactions: Vec<Vec<String>>,
        min_support: f64,
        min_confidence: f64,
    ) -> PyResult<Vec<RuleTuple>> {
        let config = MiningConfig::new(min_support, min_confidence).map_err(to_py_err)?;
        let input = MiningInput::from_token_lists(catalog, transactions).map_err(to_py_err)?;
        Ok(rule_tuples(&input, &config))
    }

    #[pyfunction]
    #[pyo3(name = "mine_rules_dense")]
    fn mine_rules_dense_py<'py>(
        transactions: PyReadonlyArray2<'py, i32>,
        item_names: Vec<String>,
        min_support: f64,
        min_confidence: f64,
    ) -> PyResult<Vec<RuleTuple>> {
        let config = MiningConfig::new(min_support, min_confidence).map_err(to_py_err)?;
        let input = MiningInput::from_dense(transactions.as_array(), item_names).map_err(to_py_err)?;
        Ok(rule_tuples(&input, &config))
    }

    #[pymodule]
    fn brute_rules(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(mine_rules_py, m)?)?;
        m.add_function(wrap_pyfunction!(mine_rules_dense_py, m)?)?;
        Ok(())
    }
}
