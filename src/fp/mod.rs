pub mod combinations;
pub mod config;
pub mod error;
pub mod growth;
pub mod model;
pub mod report;
pub mod rules;
pub mod storage;
pub mod transactions;


pub use config::{ExecutionMode, MiningConfig};
pub use error::{FpError, Result};
pub use growth::{fp_growth_algorithm, FPNode, FPTree, ItemRanking, MiningParams};
pub use model::{FpGrowth, FrequentItemset};
pub use report::{format_rules, write_rules_csv};
pub use rules::{generate_rules, AssociationRule};
pub use storage::ItemsetStorage;
pub use transactions::{group_records, read_transactions_csv, transactions_from_dense, truncate_csv};
