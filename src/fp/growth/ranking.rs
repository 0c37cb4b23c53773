use std::collections::{HashMap, HashSet};

/// Frequency-ranked item domain for one (possibly conditional) tree.
///
/// `order` holds the retained items by descending count; equal counts fall
/// back to ascending item id so the tree shape is reproducible.
#[derive(Debug, Clone, Default)]
pub struct ItemRanking {
    counts: HashMap<usize, u64>,
    positions: HashMap<usize, usize>,
    order: Vec<usize>,
}

/// Absolute count an itemset needs to reach `min_support` of `num_transactions`.
pub fn min_count(min_support: f64, num_transactions: usize) -> u64 {
    let raw = min_support * num_transactions as f64;
    let nearest = raw.round();
    // 0.7 * 10 lands on 7.000000000000001
    if (raw - nearest).abs() < 1e-9 {
        nearest as u64
    } else {
        raw.ceil() as u64
    }
}

impl ItemRanking {
    pub fn from_counts(item_counts: HashMap<usize, u64>, min_count: u64) -> Self {
        let mut frequent: Vec<(usize, u64)> = item_counts
            .into_iter()
            .filter(|&(_, count)| count >= min_count)
            .collect();

        frequent.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        let order: Vec<usize> = frequent.iter().map(|&(item, _)| item).collect();
        let positions = order
            .iter()
            .enumerate()
            .map(|(rank, &item)| (item, rank))
            .collect();

        Self {
            counts: frequent.into_iter().collect(),
            positions,
            order,
        }
    }

    /// Counts every item once per transaction, however often it is repeated.
    pub fn from_transactions<T: AsRef<[usize]>>(transactions: &[T], min_count: u64) -> Self {
        let mut item_counts: HashMap<usize, u64> = HashMap::new();
        let mut seen = HashSet::new();

        for transaction in transactions {
            seen.clear();
            for &item in transaction.as_ref() {
                if seen.insert(item) {
                    *item_counts.entry(item).or_insert(0) += 1;
                }
            }
        }

        Self::from_counts(item_counts, min_count)
    }

    /// Ranks a conditional pattern base; each path weighs as many transactions
    /// as its count.
    pub fn from_pattern_base(pattern_base: &[(Vec<usize>, u64)], min_count: u64) -> Self {
        let mut item_counts: HashMap<usize, u64> = HashMap::new();

        for (path, count) in pattern_base {
            for &item in path {
                *item_counts.entry(item).or_insert(0) += count;
            }
        }

        Self::from_counts(item_counts, min_count)
    }

    pub fn rank(&self, item: usize) -> Option<usize> {
        self.positions.get(&item).copied()
    }

    pub fn count(&self, item: usize) -> Option<u64> {
        self.counts.get(&item).copied()
    }

    pub fn contains(&self, item: usize) -> bool {
        self.positions.contains_key(&item)
    }

    /// Items from most to least frequent.
    pub fn items(&self) -> &[usize] {
        &self.order
    }

    /// `(item, count)` pairs from least to most frequent, the order the miner
    /// visits them in.
    pub fn least_frequent_first(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.order.iter().rev().map(move |&item| (item, self.counts[&item]))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
