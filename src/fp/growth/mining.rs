use rayon::prelude::*;

use super::builder::{build_conditional_fp_tree, build_fp_tree};
use super::tree::FPTree;
use crate::fp::config::ExecutionMode;
use crate::fp::storage::ItemsetStorage;

/// Levels with fewer items than this stay on the calling thread.
const PAR_ITEMS_CUTOFF: usize = 4;

/// Fixed parameters shared by every recursive call of one mining run.
#[derive(Debug, Clone, Copy)]
pub struct MiningParams {
    pub min_count: u64,
    pub max_len: Option<usize>,
    pub execution: ExecutionMode,
}

/// Builds the top-level tree over `transactions` and mines it.
pub fn fp_growth_algorithm<T>(transactions: &[T], params: MiningParams) -> ItemsetStorage
where
    T: AsRef<[usize]>,
{
    let fp_tree = build_fp_tree(transactions, params.min_count);
    tracing::debug!(
        frequent_items = fp_tree.ranking().len(),
        nodes = fp_tree.node_count(),
        "built FP-tree"
    );
    mine(&fp_tree, &[], params)
}

/// Mines `fp_tree`, extending `prefix` with one item at a time, least
/// frequent first. Every itemset is reached along exactly one path.
pub fn mine(fp_tree: &FPTree, prefix: &[usize], params: MiningParams) -> ItemsetStorage {
    let items: Vec<(usize, u64)> = fp_tree.ranking().least_frequent_first().collect();

    let parallel =
        params.execution == ExecutionMode::Parallel && items.len() >= PAR_ITEMS_CUTOFF;

    if parallel {
        let branches: Vec<ItemsetStorage> = items
            .par_iter()
            .map(|&(item, count)| mine_item(fp_tree, prefix, item, count, params))
            .collect();

        let mut merged = ItemsetStorage::new();
        for branch in branches {
            merged.append(branch);
        }
        merged
    } else {
        let mut result = ItemsetStorage::new();
        for (item, count) in items {
            result.append(mine_item(fp_tree, prefix, item, count, params));
        }
        result
    }
}

fn mine_item(
    fp_tree: &FPTree,
    prefix: &[usize],
    item: usize,
    count: u64,
    params: MiningParams,
) -> ItemsetStorage {
    let mut result = ItemsetStorage::new();

    let mut new_pattern = prefix.to_vec();
    new_pattern.push(item);
    result.add_itemset(new_pattern.clone(), count);

    if params.max_len.is_some_and(|max_len| new_pattern.len() >= max_len) {
        return result;
    }

    let pattern_base = fp_tree.conditional_pattern_base(item);
    if let Some(conditional_tree) = build_conditional_fp_tree(&pattern_base, params.min_count) {
        tracing::trace!(
            depth = new_pattern.len(),
            paths = pattern_base.len(),
            items = conditional_tree.ranking().len(),
            "descending into conditional tree"
        );
        result.append(mine(&conditional_tree, &new_pattern, params));
    }

    result
}
