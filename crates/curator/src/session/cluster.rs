//! Cluster view.

use std::fmt;

use crate::bridge::{ClusterBridge, MetricValue};
use crate::error::Result;

/// A view of one cluster, keyed by its label.
///
/// The view stores nothing but the label and a reference to the bridge.
/// Every accessor is a forwarded bridge call, so two views with the same
/// label are interchangeable. Labels are not checked against the host.
#[derive(Clone, Copy)]
pub struct Cluster<'a> {
    k: i64,
    bridge: &'a dyn ClusterBridge,
}

impl<'a> Cluster<'a> {
    /// Create a view of cluster `k`.
    pub fn new(k: i64, bridge: &'a dyn ClusterBridge) -> Self {
        Self { k, bridge }
    }

    /// The cluster label.
    pub fn k(&self) -> i64 {
        self.k
    }

    /// Read a metric. Absent metrics come back however the host reports them.
    pub fn metric(&self, name: &str) -> Result<MetricValue> {
        tracing::trace!(k = self.k, metric = name, "read cluster metric");
        self.bridge.metric(self.k, name)
    }

    /// Write a metric, returning the host's acknowledgement unchanged.
    pub fn set_metric(&self, name: &str, value: impl Into<MetricValue>) -> Result<MetricValue> {
        tracing::trace!(k = self.k, metric = name, "write cluster metric");
        self.bridge.set_metric(self.k, name, value.into())
    }

    pub fn has_tag(&self, name: &str) -> Result<bool> {
        self.bridge.has_tag(self.k, name)
    }

    pub fn add_tag(&self, name: &str) -> Result<()> {
        tracing::trace!(k = self.k, tag = name, "add cluster tag");
        self.bridge.add_tag(self.k, name)
    }

    pub fn remove_tag(&self, name: &str) -> Result<()> {
        tracing::trace!(k = self.k, tag = name, "remove cluster tag");
        self.bridge.remove_tag(self.k, name)
    }
}

impl fmt::Debug for Cluster<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cluster").field("k", &self.k).finish()
    }
}
