use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use fpbasket::fp::{format_rules, read_transactions_csv, write_rules_csv};
use fpbasket::{FpGrowth, MiningConfig};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Settings read from the TOML file given on the command line.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct AppConfig {
    input: PathBuf,
    output: PathBuf,
    transaction_column: String,
    item_column: String,
    top_n: usize,
    mining: MiningConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("online_retail_II_cutdown.csv"),
            output: PathBuf::from("association_rules.csv"),
            transaction_column: "Invoice".to_string(),
            item_column: "Description".to_string(),
            top_n: 20,
            mining: MiningConfig::default(),
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("FPBASKET_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_config() -> anyhow::Result<AppConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            toml::from_str(&text).with_context(|| format!("parsing config {path}"))
        }
        None => Ok(AppConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = load_config()?;

    let input = File::open(&config.input)
        .with_context(|| format!("opening {}", config.input.display()))?;
    let transactions = read_transactions_csv(
        BufReader::new(input),
        &config.transaction_column,
        &config.item_column,
    )?;
    tracing::info!(
        path = %config.input.display(),
        transactions = transactions.len(),
        "loaded transactions"
    );

    let mut model = FpGrowth::with_config(config.mining.clone())?;
    model.fit(transactions)?;

    let rules = model.rules(None);
    tracing::info!("\n{}", format_rules(rules, config.top_n));

    let output = File::create(&config.output)
        .with_context(|| format!("creating {}", config.output.display()))?;
    write_rules_csv(output, rules)?;
    tracing::info!(path = %config.output.display(), rules = rules.len(), "wrote rules");

    Ok(())
}
