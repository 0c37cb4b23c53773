/// Calls `callback` with every `k`-element combination of `items`, in
/// lexicographic order of positions.
pub fn for_each_combination<T, F>(items: &[T], k: usize, callback: &mut F)
where
    T: Copy,
    F: FnMut(&[T]),
{
    if k == 0 || k > items.len() {
        return;
    }

    let mut current = Vec::with_capacity(k);
    combinations_recursive(items, k, 0, &mut current, callback);
}

fn combinations_recursive<T, F>(
    items: &[T],
    k: usize,
    start: usize,
    current: &mut Vec<T>,
    callback: &mut F,
) where
    T: Copy,
    F: FnMut(&[T]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    // leave room for the elements still to be picked
    let last_start = items.len() - (k - current.len());
    for i in start..=last_start {
        current.push(items[i]);
        combinations_recursive(items, k, i + 1, current, callback);
        current.pop();
    }
}

/// Every split of `itemset` into a non-empty antecedent and non-empty
/// consequent, smallest antecedents first.
pub fn antecedent_splits<T: Copy + PartialEq>(itemset: &[T]) -> Vec<(Vec<T>, Vec<T>)> {
    let mut splits = Vec::new();

    for size in 1..itemset.len() {
        for_each_combination(itemset, size, &mut |antecedent: &[T]| {
            let consequent: Vec<T> = itemset
                .iter()
                .filter(|item| !antecedent.contains(item))
                .copied()
                .collect();
            splits.push((antecedent.to_vec(), consequent));
        });
    }

    splits
}
