//! Property-based tests for session construction and forwarding.
//!
//! These tests use proptest to generate arbitrary host contents and verify
//! that the views mirror the host exactly.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p curator --test property_tests
//! PROPTEST_CASES=10000 cargo test -p curator --test property_tests
//! ```

use proptest::prelude::*;
use serde_json::json;

use curator::{ClusterBridge, ClusterPairKey, CurationSession, InMemoryBridge};

// =============================================================================
// Test Strategies
// =============================================================================

/// Cluster labels, duplicates and negatives included.
fn labels() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-50i64..500, 0..40)
}

/// Ordered cluster pairs.
fn pair_records() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((0i64..100, 0i64..100), 0..40)
}

/// Metric and tag names.
fn name() -> impl Strategy<Value = String> {
    "[a-z_]{1,20}"
}

/// Log messages, including quotes and escapes.
fn message() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 \"\\\\{}\\[\\]:,]{0,60}"
}

/// A bridge that serves the given snapshots verbatim.
struct SnapshotBridge {
    numbers: String,
    pairs: String,
    inner: InMemoryBridge,
}

impl ClusterBridge for SnapshotBridge {
    fn cluster_numbers(&self) -> curator::Result<String> {
        Ok(self.numbers.clone())
    }
    fn cluster_pairs(&self) -> curator::Result<String> {
        Ok(self.pairs.clone())
    }
    fn metric(&self, k: i64, name: &str) -> curator::Result<serde_json::Value> {
        self.inner.metric(k, name)
    }
    fn set_metric(
        &self,
        k: i64,
        name: &str,
        value: serde_json::Value,
    ) -> curator::Result<serde_json::Value> {
        self.inner.set_metric(k, name, value)
    }
    fn pair_metric(&self, k1: i64, k2: i64, name: &str) -> curator::Result<serde_json::Value> {
        self.inner.pair_metric(k1, k2, name)
    }
    fn set_pair_metric(
        &self,
        k1: i64,
        k2: i64,
        name: &str,
        value: serde_json::Value,
    ) -> curator::Result<serde_json::Value> {
        self.inner.set_pair_metric(k1, k2, name, value)
    }
    fn has_tag(&self, k: i64, name: &str) -> curator::Result<bool> {
        self.inner.has_tag(k, name)
    }
    fn add_tag(&self, k: i64, name: &str) -> curator::Result<()> {
        self.inner.add_tag(k, name)
    }
    fn remove_tag(&self, k: i64, name: &str) -> curator::Result<()> {
        self.inner.remove_tag(k, name)
    }
    fn log(&self, message: &str) -> curator::Result<()> {
        self.inner.log(message)
    }
}

// =============================================================================
// Registry Properties
// =============================================================================

proptest! {
    /// Every label in the snapshot becomes a view, in order, duplicates kept.
    #[test]
    fn registry_mirrors_cluster_snapshot(numbers in labels()) {
        let bridge = SnapshotBridge {
            numbers: serde_json::to_string(&numbers).unwrap(),
            pairs: "[]".to_string(),
            inner: InMemoryBridge::new(),
        };
        let session = CurationSession::new(&bridge).unwrap();

        let seen: Vec<i64> = session.clusters().iter().map(|c| c.k()).collect();
        prop_assert_eq!(seen, numbers);
    }

    /// Every pair record becomes a pair view with matching sides.
    #[test]
    fn registry_mirrors_pair_snapshot(records in pair_records()) {
        let keys: Vec<ClusterPairKey> = records.iter().copied().map(ClusterPairKey::from).collect();
        let bridge = SnapshotBridge {
            numbers: "[]".to_string(),
            pairs: serde_json::to_string(&keys).unwrap(),
            inner: InMemoryBridge::new(),
        };
        let session = CurationSession::new(&bridge).unwrap();

        prop_assert_eq!(session.cluster_pairs().len(), records.len());
        for (pair, (k1, k2)) in session.cluster_pairs().iter().zip(records) {
            prop_assert_eq!(pair.k1(), k1);
            prop_assert_eq!(pair.k2(), k2);
            prop_assert_eq!(pair.cluster1().k(), k1);
            prop_assert_eq!(pair.cluster2().k(), k2);
        }
    }

    /// Arbitrary text never panics session setup; it either decodes or fails.
    #[test]
    fn setup_never_panics(numbers in ".{0,40}", pairs in ".{0,40}") {
        let bridge = SnapshotBridge { numbers, pairs, inner: InMemoryBridge::new() };
        let _ = CurationSession::new(&bridge);
    }
}

// =============================================================================
// Forwarding Properties
// =============================================================================

proptest! {
    /// A written metric is read back through any view of the same cluster.
    #[test]
    fn metric_round_trip(k in -50i64..500, metric in name(), value in -1e6f64..1e6) {
        let bridge = InMemoryBridge::new();
        let session = CurationSession::new(&bridge).unwrap();

        session.cluster(k).set_metric(&metric, value).unwrap();
        prop_assert_eq!(session.cluster(k).metric(&metric).unwrap(), json!(value));
    }

    /// Adding then removing a tag leaves it absent; adding leaves it present.
    #[test]
    fn tag_round_trip(k in -50i64..500, tag in name()) {
        let bridge = InMemoryBridge::new();
        let session = CurationSession::new(&bridge).unwrap();
        let cluster = session.cluster(k);

        cluster.add_tag(&tag).unwrap();
        prop_assert!(cluster.has_tag(&tag).unwrap());
        cluster.remove_tag(&tag).unwrap();
        prop_assert!(!cluster.has_tag(&tag).unwrap());
    }

    /// Strings reach the log sink unchanged.
    #[test]
    fn console_forwards_strings_verbatim(text in message()) {
        let bridge = InMemoryBridge::new();
        let session = CurationSession::new(&bridge).unwrap();

        session.console().log(&text).unwrap();
        prop_assert_eq!(bridge.log_text(), format!("{text}\n"));
    }

    /// Non-string values reach the log sink as their JSON encoding.
    #[test]
    fn console_encodes_structured_values(values in prop::collection::vec(any::<i32>(), 0..10)) {
        let bridge = InMemoryBridge::new();
        let session = CurationSession::new(&bridge).unwrap();

        session.console().log(&values).unwrap();
        let expected = serde_json::to_string(&values).unwrap();
        prop_assert_eq!(bridge.log_text(), format!("{expected}\n"));
    }
}
