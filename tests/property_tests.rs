//! Property-based tests for reconciliation invariants
//!
//! These tests use proptest to verify:
//! - Completeness: every local record lands in exactly one output
//! - Relayer precedence: shared keys resolve to the relayer copy
//! - Collapse: one merged record per relayer key, the first one
//! - Order: local-only records first, then relayer records, each in input order

use bridge_reconciler::{merge_and_capture_outdated, BridgeTransaction, ReconcileSummary};
use proptest::prelude::*;
use serde_json::Value;
use std::collections::HashSet;

/// Small key alphabet so local and relayer lists collide often
fn hash_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "0x[0-9a-f]{1}",
        "0x[0-9a-f]{2}",
    ]
}

/// Each record carries its origin and position so copies stay distinguishable
fn list_strategy(origin: &'static str) -> impl Strategy<Value = Vec<BridgeTransaction>> {
    prop::collection::vec(hash_strategy(), 0..24).prop_map(move |hashes| {
        hashes
            .into_iter()
            .enumerate()
            .map(|(i, h)| {
                BridgeTransaction::new(h)
                    .with_field("origin", origin)
                    .with_field("index", i as u64)
            })
            .collect()
    })
}

fn first_occurrences(relayer: &[BridgeTransaction]) -> Vec<BridgeTransaction> {
    let mut seen = HashSet::new();
    relayer
        .iter()
        .filter(|tx| seen.insert(tx.src_tx_hash.clone()))
        .cloned()
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: the output is local-only records followed by first-occurrence relayer records
    #[test]
    fn prop_merged_is_local_only_then_deduplicated_relayer(
        local in list_strategy("local"),
        relayer in list_strategy("relayer"),
    ) {
        let relayer_keys: HashSet<&str> = relayer.iter().map(|tx| tx.src_tx_hash.as_str()).collect();
        let mut expected: Vec<BridgeTransaction> = local
            .iter()
            .filter(|tx| !relayer_keys.contains(tx.src_tx_hash.as_str()))
            .cloned()
            .collect();
        expected.extend(first_occurrences(&relayer));

        let result = merge_and_capture_outdated(&local, &relayer);

        prop_assert_eq!(result.merged, expected);
    }

    /// Property: outdated is exactly the local records whose key the relayer knows, in order
    #[test]
    fn prop_outdated_is_superseded_local_records(
        local in list_strategy("local"),
        relayer in list_strategy("relayer"),
    ) {
        let relayer_keys: HashSet<&str> = relayer.iter().map(|tx| tx.src_tx_hash.as_str()).collect();
        let expected: Vec<BridgeTransaction> = local
            .iter()
            .filter(|tx| relayer_keys.contains(tx.src_tx_hash.as_str()))
            .cloned()
            .collect();

        let result = merge_and_capture_outdated(&local, &relayer);

        prop_assert_eq!(result.outdated, expected);
    }

    /// Property: no local record survives in merged when the relayer has its key
    #[test]
    fn prop_relayer_precedence(
        local in list_strategy("local"),
        relayer in list_strategy("relayer"),
    ) {
        let relayer_keys: HashSet<&str> = relayer.iter().map(|tx| tx.src_tx_hash.as_str()).collect();

        let result = merge_and_capture_outdated(&local, &relayer);

        for tx in &result.merged {
            if relayer_keys.contains(tx.src_tx_hash.as_str()) {
                prop_assert_eq!(tx.field("origin"), Some(&Value::from("relayer")));
            }
        }
        for tx in &result.outdated {
            prop_assert_eq!(tx.field("origin"), Some(&Value::from("local")));
        }
    }

    /// Property: record counts add up
    #[test]
    fn prop_counts_balance(
        local in list_strategy("local"),
        relayer in list_strategy("relayer"),
    ) {
        let distinct_relayer: HashSet<&str> = relayer.iter().map(|tx| tx.src_tx_hash.as_str()).collect();

        let result = merge_and_capture_outdated(&local, &relayer);
        let summary = ReconcileSummary::new(local.len(), relayer.len(), &result);

        prop_assert_eq!(summary.local_retained + summary.outdated, local.len());
        prop_assert_eq!(summary.relayer_retained, distinct_relayer.len());
        prop_assert_eq!(
            summary.merged + summary.outdated + summary.relayer_duplicates,
            local.len() + relayer.len()
        );
    }

    /// Property: with no relayer records the local list passes through unchanged
    #[test]
    fn prop_empty_relayer_is_identity(local in list_strategy("local")) {
        let result = merge_and_capture_outdated(&local, &[]);

        prop_assert_eq!(result.merged, local);
        prop_assert!(result.outdated.is_empty());
    }

    /// Property: reconciling twice gives the same answer
    #[test]
    fn prop_deterministic(
        local in list_strategy("local"),
        relayer in list_strategy("relayer"),
    ) {
        let first = merge_and_capture_outdated(&local, &relayer);
        let second = merge_and_capture_outdated(&local, &relayer);

        prop_assert_eq!(first, second);
    }
}
