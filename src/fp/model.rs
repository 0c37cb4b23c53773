use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

use super::config::MiningConfig;
use super::error::{FpError, Result};
use super::growth::{fp_growth_algorithm, min_count, MiningParams};
use super::rules::{generate_rules, AssociationRule};

/// A frequent itemset with its absolute count and support fraction.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequentItemset<T> {
    /// Items in ascending order.
    pub items: Vec<T>,
    pub count: u64,
    pub support: f64,
}

/// FP-Growth miner over transactions of arbitrary item labels.
///
/// Labels are interned to dense ids in ascending label order before mining,
/// which makes the rank tie-break lexicographic on the label.
#[derive(Debug, Clone)]
pub struct FpGrowth<T> {
    config: MiningConfig,
    num_transactions: usize,
    itemsets: Vec<FrequentItemset<T>>,
    rules: Vec<AssociationRule<T>>,
}

impl<T> FpGrowth<T>
where
    T: Clone + Eq + Hash + Ord,
{
    pub fn new(min_support: f64, min_confidence: f64) -> Result<Self> {
        Self::with_config(MiningConfig::new(min_support, min_confidence))
    }

    pub fn with_config(config: MiningConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            num_transactions: 0,
            itemsets: Vec::new(),
            rules: Vec::new(),
        })
    }

    pub fn config(&self) -> &MiningConfig {
        &self.config
    }

    /// Mines frequent itemsets and association rules from `transactions`.
    ///
    /// Previous results are replaced only when the run succeeds.
    pub fn fit<I, Tx>(&mut self, transactions: I) -> Result<()>
    where
        I: IntoIterator<Item = Tx>,
        Tx: IntoIterator<Item = T>,
    {
        let transactions: Vec<Vec<T>> = transactions
            .into_iter()
            .map(|tx| tx.into_iter().collect())
            .collect();

        if transactions.is_empty() {
            return Err(FpError::EmptyInput);
        }
        let num_transactions = transactions.len();

        let labels: Vec<T> = transactions
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<T>>()
            .into_iter()
            .collect();
        let ids: HashMap<&T, usize> = labels.iter().enumerate().map(|(id, l)| (l, id)).collect();

        let encoded: Vec<Vec<usize>> = transactions
            .iter()
            .map(|tx| {
                let mut items: Vec<usize> = tx.iter().map(|item| ids[item]).collect();
                items.sort_unstable();
                items.dedup();
                items
            })
            .collect();

        let params = MiningParams {
            min_count: min_count(self.config.min_support, num_transactions),
            max_len: self.config.max_len,
            execution: self.config.execution,
        };
        tracing::info!(
            transactions = num_transactions,
            distinct_items = labels.len(),
            min_count = params.min_count,
            "mining frequent itemsets"
        );

        let storage = fp_growth_algorithm(&encoded, params);
        tracing::info!(itemsets = storage.len(), "mined frequent itemsets");

        let rules = generate_rules(&storage, num_transactions, self.config.min_confidence);
        tracing::info!(rules = rules.len(), "generated association rules");

        let itemsets = storage
            .iter()
            .map(|(items, count)| FrequentItemset {
                items: items.iter().map(|&id| labels[id].clone()).collect(),
                count,
                support: count as f64 / num_transactions as f64,
            })
            .collect();

        self.num_transactions = num_transactions;
        self.itemsets = itemsets;
        self.rules = rules
            .into_iter()
            .map(|rule| rule.map_items(|id| labels[id].clone()))
            .collect();

        Ok(())
    }

    /// Frequent itemsets in the order the miner produced them.
    pub fn frequent_itemsets(&self) -> &[FrequentItemset<T>] {
        &self.itemsets
    }

    /// Rules by descending confidence, cut to the first `top_n` when given.
    pub fn rules(&self, top_n: Option<usize>) -> &[AssociationRule<T>] {
        match top_n {
            Some(n) => &self.rules[..n.min(self.rules.len())],
            None => &self.rules,
        }
    }

    pub fn transaction_count(&self) -> usize {
        self.num_transactions
    }
}
