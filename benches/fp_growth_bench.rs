use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fpbasket::fp::growth::min_count;
use fpbasket::fp::{fp_growth_algorithm, transactions_from_dense, MiningParams};
use fpbasket::{ExecutionMode, FpGrowth};
use ndarray::Array2;
use rand::Rng;

/// Generate synthetic transaction data
///
/// Parameters:
/// - num_transactions: Number of transactions
/// - num_items: Total number of possible items
/// - avg_transaction_size: Average items per transaction
/// - density: How dense the data is (0.0-1.0)
fn generate_transactions(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> Vec<Vec<usize>> {
    let mut rng = rand::thread_rng();
    let mut data = vec![0i32; num_transactions * num_items];

    for tx_idx in 0..num_transactions {
        let random_factor: f64 = rng.gen();
        let num_items_in_tx =
            (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;
        let num_items_in_tx = num_items_in_tx.min(num_items);

        for _ in 0..num_items_in_tx {
            let density_check: f64 = rng.gen();
            if density_check < density {
                let item = rng.gen_range(0..num_items);
                data[tx_idx * num_items + item] = 1;
            }
        }
    }

    let matrix = Array2::from_shape_vec((num_transactions, num_items), data).unwrap();
    transactions_from_dense(matrix.view())
}

fn params(transactions: &[Vec<usize>], min_support: f64, execution: ExecutionMode) -> MiningParams {
    MiningParams {
        min_count: min_count(min_support, transactions.len()),
        max_len: None,
        execution,
    }
}

/// Benchmark FP-Growth with different dataset sizes
fn bench_fp_growth_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_scaling");

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 50, 10),
        ("large_1000tx", 1000, 100, 15),
        ("xlarge_5000tx", 5000, 100, 20),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let transactions = generate_transactions(num_tx, num_items, avg_size, 0.7);
        let p = params(&transactions, 0.1, ExecutionMode::Sequential);

        group.bench_with_input(BenchmarkId::from_parameter(name), &transactions, |b, tx| {
            b.iter(|| fp_growth_algorithm(black_box(tx), black_box(p)));
        });
    }

    group.finish();
}

/// Benchmark FP-Growth with different min_support thresholds
fn bench_fp_growth_min_support(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_min_support");

    let transactions = generate_transactions(1000, 50, 10, 0.7);

    for &min_sup in &[0.05, 0.1, 0.2, 0.3, 0.5] {
        let p = params(&transactions, min_sup, ExecutionMode::Sequential);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.2}", min_sup)),
            &p,
            |b, &p| {
                b.iter(|| fp_growth_algorithm(black_box(&transactions), black_box(p)));
            },
        );
    }

    group.finish();
}

/// Sequential against rayon fan-out on the same data
fn bench_fp_growth_execution(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_execution");

    let transactions = generate_transactions(5000, 60, 15, 0.8);

    for (name, execution) in [
        ("sequential", ExecutionMode::Sequential),
        ("parallel", ExecutionMode::Parallel),
    ] {
        let p = params(&transactions, 0.05, execution);
        group.bench_with_input(BenchmarkId::from_parameter(name), &p, |b, &p| {
            b.iter(|| fp_growth_algorithm(black_box(&transactions), black_box(p)));
        });
    }

    group.finish();
}

/// Full fit including rule generation over string labels
fn bench_fit_with_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit_with_rules");

    let transactions: Vec<Vec<String>> = generate_transactions(2000, 40, 8, 0.8)
        .into_iter()
        .map(|tx| tx.into_iter().map(|item| format!("SKU-{item:04}")).collect())
        .collect();

    for &min_conf in &[0.2, 0.5, 0.8] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("conf_{:.1}", min_conf)),
            &min_conf,
            |b, &conf| {
                b.iter(|| {
                    let mut model = FpGrowth::new(0.05, conf).unwrap();
                    model.fit(black_box(transactions.clone())).unwrap();
                    model.rules(None).len()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_fp_growth_scaling,
    bench_fp_growth_min_support,
    bench_fp_growth_execution,
    bench_fit_with_rules
);
criterion_main!(benches);
