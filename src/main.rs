//! brute-rules CLI
//!
//! Loads a store's item catalog and transactions from CSV, mines association
//! rules by brute force and prints them.

use anyhow::{bail, Context, Result};
use brute_rules::config::FileConfig;
use brute_rules::ingest::{MiningInput, StorePaths};
use brute_rules::report::{render_itemsets, render_json, render_rules};
use brute_rules::{mine_itemsets, MiningConfig};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "brute-rules")]
#[command(about = "Brute-force association rule mining", long_about = None)]
struct Cli {
    /// Verbose mode
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mine association rules and print those meeting both thresholds
    Mine {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        thresholds: ThresholdArgs,

        /// Output as JSON (machine-readable)
        #[arg(long)]
        json: bool,
    },

    /// List frequent itemsets per level without deriving rules
    Itemsets {
        #[command(flatten)]
        source: SourceArgs,

        /// Minimum support percentage (1-100)
        #[arg(long)]
        min_support: Option<f64>,

        /// TOML file with a [thresholds] table
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Store name, resolved to DATA_DIR/STORE.csv and DATA_DIR/STORE_transactions.csv
    #[arg(long, conflicts_with_all = ["catalog", "transactions"])]
    store: Option<String>,

    /// Directory holding store CSV files
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Item catalog CSV (column "Item Name")
    #[arg(long, requires = "transactions")]
    catalog: Option<PathBuf>,

    /// Transactions CSV (column "Transaction")
    #[arg(long, requires = "catalog")]
    transactions: Option<PathBuf>,
}

#[derive(Args)]
struct ThresholdArgs {
    /// Minimum support percentage (1-100)
    #[arg(long)]
    min_support: Option<f64>,

    /// Minimum confidence percentage (1-100)
    #[arg(long)]
    min_confidence: Option<f64>,

    /// TOML file with a [thresholds] table
    #[arg(long)]
    config: Option<PathBuf>,
}

impl SourceArgs {
    fn load(&self) -> Result<MiningInput> {
        let paths = match (&self.store, &self.catalog, &self.transactions) {
            (Some(store), _, _) => StorePaths::resolve(&self.data_dir, store),
            (None, Some(catalog), Some(transactions)) => StorePaths {
                catalog: catalog.clone(),
                transactions: transactions.clone(),
            },
            _ => bail!("either --store or both --catalog and --transactions are required"),
        };

        paths.load().with_context(|| {
            format!(
                "failed to load {} / {}",
                paths.catalog.display(),
                paths.transactions.display()
            )
        })
    }
}

fn load_file_config(path: Option<&PathBuf>) -> Result<FileConfig> {
    match path {
        Some(path) => FileConfig::load(path).with_context(|| format!("failed to read config {}", path.display())),
        None => Ok(FileConfig::default()),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "brute_rules=debug" } else { "brute_rules=info" };
    let filter = EnvFilter::try_from_env("BRUTE_RULES_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Mine {
            source,
            thresholds,
            json,
        } => {
            let config = load_file_config(thresholds.config.as_ref())?
                .resolve(thresholds.min_support, thresholds.min_confidence)
                .context("invalid thresholds")?;
            let input = source.load()?;
            let report = input.mine(&config);

            if json {
                println!("{}", render_json(&report, &config)?);
            } else {
                print!("{}", render_rules(&report));
            }
        }

        Commands::Itemsets {
            source,
            min_support,
            config,
        } => {
            let min_support = min_support
                .or(load_file_config(config.as_ref())?.thresholds.min_support_percent)
                .context("minimum support not set (use --min-support or a config file)")?;
            // Confidence is unused here; validate support on its own.
            let config = MiningConfig::new(min_support, 100.0).context("invalid thresholds")?;
            let input = source.load()?;
            let registry = mine_itemsets(input.catalog(), input.transactions(), config.min_support_percent);
            print!("{}", render_itemsets(&registry));
        }
    }

    Ok(())
}
