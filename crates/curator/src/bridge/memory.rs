//! In-memory host bridge.

use std::cell::RefCell;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

use super::host::{ClusterBridge, ClusterPairKey, MetricValue};

/// Attributes the host keeps for a single cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterAttributes {
    /// Named metrics, in insertion order.
    #[serde(default)]
    pub metrics: IndexMap<String, MetricValue>,

    /// Tags attached to the cluster, in insertion order.
    #[serde(default)]
    pub tags: IndexSet<String>,
}

/// Attributes the host keeps for a cluster pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PairAttributes {
    /// Named metrics, in insertion order.
    #[serde(default)]
    pub metrics: IndexMap<String, MetricValue>,
}

#[derive(Debug, Default)]
struct HostState {
    clusters: IndexMap<i64, ClusterAttributes>,
    pairs: IndexMap<ClusterPairKey, PairAttributes>,
    log: String,
}

/// A complete [`ClusterBridge`] backed by in-memory attribute tables.
///
/// Snapshots list clusters and pairs in the order they were first seen.
/// Reading a metric that was never written yields `null`; writing one
/// creates the cluster (or pair) entry on demand, and so does adding a tag.
/// Log lines are buffered with a trailing newline each.
#[derive(Debug, Default)]
pub struct InMemoryBridge {
    state: RefCell<HostState>,
}

impl InMemoryBridge {
    /// Create an empty bridge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a cluster with no attributes.
    pub fn with_cluster(mut self, k: i64) -> Self {
        self.state.get_mut().clusters.entry(k).or_default();
        self
    }

    /// Register a cluster and seed one of its metrics.
    pub fn with_cluster_metric(
        mut self,
        k: i64,
        name: impl Into<String>,
        value: impl Into<MetricValue>,
    ) -> Self {
        self.state
            .get_mut()
            .clusters
            .entry(k)
            .or_default()
            .metrics
            .insert(name.into(), value.into());
        self
    }

    /// Register a cluster and attach a tag to it.
    pub fn with_cluster_tag(mut self, k: i64, tag: impl Into<String>) -> Self {
        self.state
            .get_mut()
            .clusters
            .entry(k)
            .or_default()
            .tags
            .insert(tag.into());
        self
    }

    /// Register a cluster pair with no attributes.
    pub fn with_cluster_pair(mut self, k1: i64, k2: i64) -> Self {
        self.state
            .get_mut()
            .pairs
            .entry(ClusterPairKey::new(k1, k2))
            .or_default();
        self
    }

    /// Register a cluster pair and seed one of its metrics.
    pub fn with_pair_metric(
        mut self,
        k1: i64,
        k2: i64,
        name: impl Into<String>,
        value: impl Into<MetricValue>,
    ) -> Self {
        self.state
            .get_mut()
            .pairs
            .entry(ClusterPairKey::new(k1, k2))
            .or_default()
            .metrics
            .insert(name.into(), value.into());
        self
    }

    /// Snapshot of a cluster's attributes, if the host knows the cluster.
    pub fn cluster_attributes(&self, k: i64) -> Option<ClusterAttributes> {
        self.state.borrow().clusters.get(&k).cloned()
    }

    /// Snapshot of a pair's attributes, if the host knows the pair.
    pub fn pair_attributes(&self, k1: i64, k2: i64) -> Option<PairAttributes> {
        self.state
            .borrow()
            .pairs
            .get(&ClusterPairKey::new(k1, k2))
            .cloned()
    }

    /// Everything logged so far.
    pub fn log_text(&self) -> String {
        self.state.borrow().log.clone()
    }

    /// Drain the log buffer.
    pub fn take_log(&self) -> String {
        std::mem::take(&mut self.state.borrow_mut().log)
    }
}

impl ClusterBridge for InMemoryBridge {
    fn cluster_numbers(&self) -> Result<String> {
        let numbers: Vec<i64> = self.state.borrow().clusters.keys().copied().collect();
        Ok(serde_json::to_string(&numbers)?)
    }

    fn cluster_pairs(&self) -> Result<String> {
        let pairs: Vec<ClusterPairKey> = self.state.borrow().pairs.keys().copied().collect();
        Ok(serde_json::to_string(&pairs)?)
    }

    fn metric(&self, k: i64, name: &str) -> Result<MetricValue> {
        let state = self.state.borrow();
        let value = state
            .clusters
            .get(&k)
            .and_then(|attributes| attributes.metrics.get(name))
            .cloned()
            .unwrap_or(Value::Null);
        Ok(value)
    }

    fn set_metric(&self, k: i64, name: &str, value: MetricValue) -> Result<MetricValue> {
        self.state
            .borrow_mut()
            .clusters
            .entry(k)
            .or_default()
            .metrics
            .insert(name.to_string(), value);
        Ok(Value::Null)
    }

    fn pair_metric(&self, k1: i64, k2: i64, name: &str) -> Result<MetricValue> {
        let state = self.state.borrow();
        let value = state
            .pairs
            .get(&ClusterPairKey::new(k1, k2))
            .and_then(|attributes| attributes.metrics.get(name))
            .cloned()
            .unwrap_or(Value::Null);
        Ok(value)
    }

    fn set_pair_metric(
        &self,
        k1: i64,
        k2: i64,
        name: &str,
        value: MetricValue,
    ) -> Result<MetricValue> {
        self.state
            .borrow_mut()
            .pairs
            .entry(ClusterPairKey::new(k1, k2))
            .or_default()
            .metrics
            .insert(name.to_string(), value);
        Ok(Value::Null)
    }

    fn has_tag(&self, k: i64, name: &str) -> Result<bool> {
        let state = self.state.borrow();
        Ok(state
            .clusters
            .get(&k)
            .is_some_and(|attributes| attributes.tags.contains(name)))
    }

    fn add_tag(&self, k: i64, name: &str) -> Result<()> {
        self.state
            .borrow_mut()
            .clusters
            .entry(k)
            .or_default()
            .tags
            .insert(name.to_string());
        Ok(())
    }

    fn remove_tag(&self, k: i64, name: &str) -> Result<()> {
        if let Some(attributes) = self.state.borrow_mut().clusters.get_mut(&k) {
            attributes.tags.shift_remove(name);
        }
        Ok(())
    }

    fn log(&self, message: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.log.push_str(message);
        state.log.push('\n');
        Ok(())
    }
}
