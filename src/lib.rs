pub mod fp;

#[cfg(feature = "python")]
pub mod python;

pub use fp::{
    AssociationRule, ExecutionMode, FpError, FpGrowth, FrequentItemset, MiningConfig, Result,
};
