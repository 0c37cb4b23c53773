use std::collections::HashMap;

use super::ranking::ItemRanking;

#[derive(Debug, Clone)]
pub struct FPNode {
    pub item: Option<usize>,
    pub count: u64,
    pub parent: Option<usize>,
    pub children: HashMap<usize, usize>,
}

/// Prefix tree over rank-sorted transactions.
///
/// Nodes live in one arena and refer to each other by index. The header table
/// keeps, per item, the nodes carrying that item in creation order.
#[derive(Debug, Clone)]
pub struct FPTree {
    pub nodes: Vec<FPNode>,
    pub header_table: HashMap<usize, Vec<usize>>,
    pub root_index: usize,
    ranking: ItemRanking,
}

impl FPNode {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: HashMap::new(),
        }
    }

    pub fn new_item(item: usize, count: u64, parent: usize) -> Self {
        Self {
            item: Some(item),
            count,
            parent: Some(parent),
            children: HashMap::new(),
        }
    }
}

impl FPTree {
    pub fn new(ranking: ItemRanking) -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            header_table: HashMap::new(),
            root_index: 0,
            ranking,
        }
    }

    pub fn ranking(&self) -> &ItemRanking {
        &self.ranking
    }

    /// Inserts the ranked items of `transaction`, highest rank first, adding
    /// `multiplier` to every node on the path.
    pub fn insert(&mut self, transaction: &[usize], multiplier: u64) {
        let mut ranked: Vec<(usize, usize)> = transaction
            .iter()
            .filter_map(|&item| self.ranking.rank(item).map(|rank| (rank, item)))
            .collect();
        ranked.sort_unstable();
        ranked.dedup();

        let mut current_index = self.root_index;

        for (_, item) in ranked {
            if let Some(&child_index) = self.nodes[current_index].children.get(&item) {
                self.nodes[child_index].count += multiplier;
                current_index = child_index;
            } else {
                let new_index = self.nodes.len();
                self.nodes
                    .push(FPNode::new_item(item, multiplier, current_index));
                self.nodes[current_index].children.insert(item, new_index);
                self.header_table.entry(item).or_default().push(new_index);
                current_index = new_index;
            }
        }
    }

    /// Ancestor paths of every node carrying `item`, paired with that node's
    /// count. Paths run from the immediate parent up to the root's child.
    pub fn conditional_pattern_base(&self, item: usize) -> Vec<(Vec<usize>, u64)> {
        self.header_table.get(&item).map_or(Vec::new(), |nodes| {
            nodes
                .iter()
                .map(|&idx| {
                    let mut path = Vec::new();
                    let mut current = self.nodes[idx].parent;

                    while let Some(i) = current {
                        if let Some(item) = self.nodes[i].item {
                            path.push(item);
                        }
                        current = self.nodes[i].parent;
                    }

                    (path, self.nodes[idx].count)
                })
                .collect()
        })
    }

    /// Sum of node counts along the item's header list.
    pub fn item_support(&self, item: usize) -> u64 {
        self.header_table.get(&item).map_or(0, |nodes| {
            nodes.iter().map(|&idx| self.nodes[idx].count).sum()
        })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
