//! Bridge trait and shared wire types.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A metric value as seen by curation programs.
///
/// Hosts may store numbers or strings; `Value::Null` stands for an absent
/// metric.
pub type MetricValue = serde_json::Value;

/// Key of a cluster pair, as encoded in the pair snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClusterPairKey {
    pub k1: i64,
    pub k2: i64,
}

impl ClusterPairKey {
    /// Create a new pair key. Order is significant.
    pub fn new(k1: i64, k2: i64) -> Self {
        Self { k1, k2 }
    }
}

impl From<(i64, i64)> for ClusterPairKey {
    fn from((k1, k2): (i64, i64)) -> Self {
        Self::new(k1, k2)
    }
}

/// Host-side operations available to curation code.
///
/// Every accessor in this crate funnels through these methods. Errors
/// returned here reach the caller unchanged.
///
/// Implementations are not required to be thread-safe; curation runs are
/// single-threaded and every call completes before the next one starts.
pub trait ClusterBridge {
    /// JSON array of the cluster numbers known to the host.
    fn cluster_numbers(&self) -> Result<String>;

    /// JSON array of `{"k1": .., "k2": ..}` records known to the host.
    fn cluster_pairs(&self) -> Result<String>;

    /// Read a cluster metric.
    fn metric(&self, k: i64, name: &str) -> Result<MetricValue>;

    /// Write a cluster metric and return the host's acknowledgement.
    fn set_metric(&self, k: i64, name: &str, value: MetricValue) -> Result<MetricValue>;

    /// Read a cluster-pair metric.
    fn pair_metric(&self, k1: i64, k2: i64, name: &str) -> Result<MetricValue>;

    /// Write a cluster-pair metric and return the host's acknowledgement.
    fn set_pair_metric(
        &self,
        k1: i64,
        k2: i64,
        name: &str,
        value: MetricValue,
    ) -> Result<MetricValue>;

    /// Whether the cluster carries the tag.
    fn has_tag(&self, k: i64, name: &str) -> Result<bool>;

    /// Attach a tag to the cluster.
    fn add_tag(&self, k: i64, name: &str) -> Result<()>;

    /// Detach a tag from the cluster.
    fn remove_tag(&self, k: i64, name: &str) -> Result<()>;

    /// Send a line to the host's log sink.
    fn log(&self, message: &str) -> Result<()>;
}
