use super::ranking::ItemRanking;
use super::tree::FPTree;

/// Ranks `transactions` and inserts each of them once.
pub fn build_fp_tree<T: AsRef<[usize]>>(transactions: &[T], min_count: u64) -> FPTree {
    let ranking = ItemRanking::from_transactions(transactions, min_count);
    let mut fp_tree = FPTree::new(ranking);

    for transaction in transactions {
        fp_tree.insert(transaction.as_ref(), 1);
    }

    fp_tree
}

/// Re-ranks a conditional pattern base and builds its tree. Returns `None`
/// when no item in the base reaches `min_count`.
pub fn build_conditional_fp_tree(
    pattern_base: &[(Vec<usize>, u64)],
    min_count: u64,
) -> Option<FPTree> {
    let ranking = ItemRanking::from_pattern_base(pattern_base, min_count);
    if ranking.is_empty() {
        return None;
    }

    let mut conditional_tree = FPTree::new(ranking);
    for (path, count) in pattern_base {
        conditional_tree.insert(path, *count);
    }

    Some(conditional_tree)
}
