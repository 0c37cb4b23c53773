use std::collections::{BTreeSet, HashMap, HashSet};

use fpbasket::fp::growth::min_count;
use fpbasket::FpGrowth;
use proptest::prelude::*;

fn transactions_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(0u8..8, 0..6), 1..40)
}

fn brute_force_count(transactions: &[Vec<u8>], itemset: &[u8]) -> u64 {
    transactions
        .iter()
        .filter(|tx| itemset.iter().all(|item| tx.contains(item)))
        .count() as u64
}

fn fitted(transactions: &[Vec<u8>], min_support: f64, min_confidence: f64) -> FpGrowth<u8> {
    let mut model = FpGrowth::new(min_support, min_confidence).unwrap();
    model.fit(transactions.to_vec()).unwrap();
    model
}

proptest! {
    #[test]
    fn emits_every_frequent_itemset(
        transactions in transactions_strategy(),
        min_support in 0.02f64..0.7,
    ) {
        let model = fitted(&transactions, min_support, 0.0);
        let emitted: HashMap<Vec<u8>, u64> = model
            .frequent_itemsets()
            .iter()
            .map(|itemset| (itemset.items.clone(), itemset.count))
            .collect();

        let threshold = min_count(min_support, transactions.len());
        let mut expected = HashMap::new();
        for mask in 1u16..(1 << 8) {
            let itemset: Vec<u8> = (0u8..8).filter(|item| mask & (1 << item) != 0).collect();
            let count = brute_force_count(&transactions, &itemset);
            if count >= threshold {
                expected.insert(itemset, count);
            }
        }

        prop_assert_eq!(emitted, expected);
    }

    #[test]
    fn counts_match_brute_force(
        transactions in transactions_strategy(),
        min_support in 0.05f64..0.6,
    ) {
        let model = fitted(&transactions, min_support, 0.0);
        for itemset in model.frequent_itemsets() {
            prop_assert_eq!(itemset.count, brute_force_count(&transactions, &itemset.items));
        }
    }

    #[test]
    fn single_items_counted_once_per_transaction(
        transactions in transactions_strategy(),
    ) {
        let model = fitted(&transactions, 1.0 / transactions.len() as f64, 0.0);
        let singles: HashMap<u8, u64> = model
            .frequent_itemsets()
            .iter()
            .filter(|itemset| itemset.items.len() == 1)
            .map(|itemset| (itemset.items[0], itemset.count))
            .collect();

        let present: BTreeSet<u8> = transactions.iter().flatten().copied().collect();
        prop_assert_eq!(singles.len(), present.len());
        for item in present {
            let expected = transactions.iter().filter(|tx| tx.contains(&item)).count() as u64;
            prop_assert_eq!(singles[&item], expected);
        }
    }

    #[test]
    fn no_duplicate_itemsets(
        transactions in transactions_strategy(),
        min_support in 0.05f64..0.6,
    ) {
        let model = fitted(&transactions, min_support, 0.0);
        let mut seen = HashSet::new();
        for itemset in model.frequent_itemsets() {
            prop_assert!(seen.insert(itemset.items.clone()), "duplicate {:?}", itemset.items);
        }
    }

    #[test]
    fn downward_closure(
        transactions in transactions_strategy(),
        min_support in 0.05f64..0.6,
    ) {
        let model = fitted(&transactions, min_support, 0.0);
        let supports: HashMap<Vec<u8>, f64> = model
            .frequent_itemsets()
            .iter()
            .map(|itemset| (itemset.items.clone(), itemset.support))
            .collect();

        for (items, &support) in &supports {
            if items.len() < 2 {
                continue;
            }
            for skip in 0..items.len() {
                let mut subset = items.clone();
                subset.remove(skip);
                let subset_support = supports.get(&subset);
                prop_assert!(subset_support.is_some(), "{:?} missing subset {:?}", items, subset);
                prop_assert!(*subset_support.unwrap() >= support);
            }
        }
    }

    #[test]
    fn rule_identity_and_ordering(
        transactions in transactions_strategy(),
        min_support in 0.05f64..0.6,
        min_confidence in 0.0f64..1.0,
    ) {
        let model = fitted(&transactions, min_support, min_confidence);
        let supports: HashMap<Vec<u8>, f64> = model
            .frequent_itemsets()
            .iter()
            .map(|itemset| (itemset.items.clone(), itemset.support))
            .collect();

        let rules = model.rules(None);
        for rule in rules {
            prop_assert!(rule.confidence >= min_confidence);
            prop_assert!(!rule.antecedent.is_empty() && !rule.consequent.is_empty());
            prop_assert!(rule.antecedent.iter().all(|item| !rule.consequent.contains(item)));

            let antecedent_support = supports[&rule.antecedent];
            prop_assert!((rule.support - antecedent_support * rule.confidence).abs() < 1e-9);
        }
        prop_assert!(rules.windows(2).all(|w| w[0].confidence >= w[1].confidence));
    }
}
