pub mod builder;
pub mod mining;
pub mod ranking;
pub mod tree;

pub use mining::{fp_growth_algorithm, mine, MiningParams};
pub use ranking::{min_count, ItemRanking};
pub use tree::{FPNode, FPTree};
