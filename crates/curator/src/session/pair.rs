//! Cluster pair view.

use std::fmt;

use crate::bridge::{ClusterBridge, ClusterPairKey, MetricValue};
use crate::error::Result;

use super::cluster::Cluster;

/// A view of an ordered pair of clusters.
///
/// Pairs carry metrics only. Tags are a per-cluster concept and are reached
/// through [`ClusterPair::cluster1`] / [`ClusterPair::cluster2`].
#[derive(Clone, Copy)]
pub struct ClusterPair<'a> {
    key: ClusterPairKey,
    bridge: &'a dyn ClusterBridge,
}

impl<'a> ClusterPair<'a> {
    /// Create a view of the pair `(k1, k2)`.
    pub fn new(k1: i64, k2: i64, bridge: &'a dyn ClusterBridge) -> Self {
        Self::from_key(ClusterPairKey::new(k1, k2), bridge)
    }

    pub fn from_key(key: ClusterPairKey, bridge: &'a dyn ClusterBridge) -> Self {
        Self { key, bridge }
    }

    pub fn k1(&self) -> i64 {
        self.key.k1
    }

    pub fn k2(&self) -> i64 {
        self.key.k2
    }

    pub fn key(&self) -> ClusterPairKey {
        self.key
    }

    /// A fresh view of the first cluster.
    pub fn cluster1(&self) -> Cluster<'a> {
        Cluster::new(self.key.k1, self.bridge)
    }

    /// A fresh view of the second cluster.
    pub fn cluster2(&self) -> Cluster<'a> {
        Cluster::new(self.key.k2, self.bridge)
    }

    /// Read a pair metric.
    pub fn metric(&self, name: &str) -> Result<MetricValue> {
        tracing::trace!(k1 = self.key.k1, k2 = self.key.k2, metric = name, "read pair metric");
        self.bridge.pair_metric(self.key.k1, self.key.k2, name)
    }

    /// Write a pair metric, returning the host's acknowledgement unchanged.
    pub fn set_metric(&self, name: &str, value: impl Into<MetricValue>) -> Result<MetricValue> {
        tracing::trace!(k1 = self.key.k1, k2 = self.key.k2, metric = name, "write pair metric");
        self.bridge
            .set_pair_metric(self.key.k1, self.key.k2, name, value.into())
    }
}

impl fmt::Debug for ClusterPair<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClusterPair")
            .field("k1", &self.key.k1)
            .field("k2", &self.key.k2)
            .finish()
    }
}
