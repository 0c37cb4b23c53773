use std::collections::HashMap;

use super::combinations::antecedent_splits;
use super::storage::ItemsetStorage;

/// An if-antecedent-then-consequent rule with its strength measures.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationRule<T> {
    pub antecedent: Vec<T>,
    pub consequent: Vec<T>,
    /// Support of antecedent ∪ consequent.
    pub support: f64,
    pub confidence: f64,
    /// Zero when the consequent's support is unknown.
    pub lift: f64,
    /// Infinite at confidence 1.
    pub conviction: f64,
}

impl<T> AssociationRule<T> {
    /// Relabels both sides of the rule.
    pub fn map_items<U, F>(self, mut f: F) -> AssociationRule<U>
    where
        F: FnMut(T) -> U,
    {
        AssociationRule {
            antecedent: self.antecedent.into_iter().map(&mut f).collect(),
            consequent: self.consequent.into_iter().map(&mut f).collect(),
            support: self.support,
            confidence: self.confidence,
            lift: self.lift,
            conviction: self.conviction,
        }
    }
}

/// Derives every rule reaching `min_confidence` from the mined itemsets.
///
/// Itemsets in `storage` are sorted, so every antecedent and consequent
/// produced by splitting one is sorted too and can be looked up directly.
/// The result is ordered by descending confidence; equal confidences keep
/// generation order.
pub fn generate_rules(
    storage: &ItemsetStorage,
    num_transactions: usize,
    min_confidence: f64,
) -> Vec<AssociationRule<usize>> {
    let total = num_transactions as f64;
    let count_map: HashMap<&[usize], u64> = storage.iter().collect();

    let mut rules = Vec::new();

    for (itemset, count) in storage.iter() {
        if itemset.len() < 2 {
            continue;
        }
        let support = count as f64 / total;

        for (antecedent, consequent) in antecedent_splits(itemset) {
            let Some(&antecedent_count) = count_map.get(antecedent.as_slice()) else {
                tracing::debug!(?antecedent, ?itemset, "antecedent support missing, skipping rule");
                continue;
            };

            // ratio of counts keeps exact boundaries such as 2/4 == 0.5
            let confidence = count as f64 / antecedent_count as f64;
            if confidence < min_confidence {
                continue;
            }

            let consequent_support = count_map
                .get(consequent.as_slice())
                .map_or(0.0, |&c| c as f64 / total);

            let lift = if consequent_support > 0.0 {
                confidence / consequent_support
            } else {
                0.0
            };
            let conviction = if confidence == 1.0 {
                f64::INFINITY
            } else {
                (1.0 - consequent_support) / (1.0 - confidence)
            };

            rules.push(AssociationRule {
                antecedent,
                consequent,
                support,
                confidence,
                lift,
                conviction,
            });
        }
    }

    rules.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    rules
}
