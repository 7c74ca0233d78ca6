/// Errors raised by input validation, configuration and rule derivation.
#[derive(Debug, thiserror::Error)]
pub enum MiningError {
    #[error("invalid {name}: {value} (expected a percentage from 1 to 100)")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("item catalog is empty")]
    EmptyCatalog,

    #[error("duplicate item in catalog: {item}")]
    DuplicateItem { item: String },

    #[error("no transactions to mine")]
    NoTransactions,

    #[error("matrix has {columns} columns but {names} item names were given")]
    ShapeMismatch { columns: usize, names: usize },

    #[error("missing column '{column}' in {path}")]
    MissingColumn { column: &'static str, path: String },

    #[error("antecedent {antecedent:?} has zero support")]
    ZeroAntecedentSupport { antecedent: Vec<String> },

    #[error("config error: {reason}")]
    Config { reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MiningResult<T> = Result<T, MiningError>;
