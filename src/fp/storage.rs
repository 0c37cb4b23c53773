/// Frequent itemsets packed into flat arrays, in emission order.
#[derive(Debug, Clone, Default)]
pub struct ItemsetStorage {
    items: Vec<usize>,
    offsets: Vec<(usize, usize)>,
    counts: Vec<u64>,
}

impl ItemsetStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `items` sorted and deduplicated; returns its index.
    pub fn add_itemset(&mut self, mut items: Vec<usize>, count: u64) -> usize {
        items.sort_unstable();
        items.dedup();

        let start = self.items.len();
        self.items.extend_from_slice(&items);
        self.offsets.push((start, items.len()));
        self.counts.push(count);

        self.offsets.len() - 1
    }

    pub fn get_itemset(&self, idx: usize) -> &[usize] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub fn count(&self, idx: usize) -> u64 {
        self.counts[idx]
    }

    /// Appends everything in `other`, keeping its order.
    pub fn append(&mut self, other: ItemsetStorage) {
        let shift = self.items.len();
        self.items.extend(other.items);
        self.offsets
            .extend(other.offsets.into_iter().map(|(start, len)| (start + shift, len)));
        self.counts.extend(other.counts);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[usize], u64)> {
        (0..self.len()).map(move |idx| (self.get_itemset(idx), self.counts[idx]))
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}
