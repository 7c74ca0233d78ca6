use brute_rules::ingest::transactions_from_dense;
use brute_rules::Transaction;
use ndarray::Array2;
use rand::Rng;

/// Generate a synthetic one-hot transaction matrix.
///
/// Parameters:
/// - num_transactions: Number of transactions
/// - num_items: Catalog size
/// - avg_transaction_size: Average items per transaction
/// - density: Chance that each drawn item is actually kept (0.0-1.0)
fn generate_matrix(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> Array2<i32> {
    let mut rng = rand::thread_rng();
    let mut data = vec![0i32; num_transactions * num_items];

    for tx_idx in 0..num_transactions {
        let random_factor: f64 = rng.gen();
        let num_items_in_tx = (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;
        let num_items_in_tx = num_items_in_tx.min(num_items);

        for _ in 0..num_items_in_tx {
            let density_check: f64 = rng.gen();
            if density_check < density {
                let item = rng.gen_range(0..num_items);
                data[tx_idx * num_items + item] = 1;
            }
        }
    }

    Array2::from_shape_vec((num_transactions, num_items), data).unwrap()
}

pub fn generate_dataset(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> (Vec<String>, Vec<Transaction>) {
    let names: Vec<String> = (0..num_items).map(|i| format!("item_{i}")).collect();
    let matrix = generate_matrix(num_transactions, num_items, avg_transaction_size, density);
    let transactions = transactions_from_dense(matrix.view(), &names).unwrap();
    (names, transactions)
}
