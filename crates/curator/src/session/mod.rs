//! Curation session: cluster views, pair views and the console.
//!
//! A session is built once over a bridge. Construction pulls the cluster and
//! pair snapshots from the host and turns them into registries of views, in
//! the order the host returned them. The registries are never modified
//! afterwards.
//!
//! # Example
//!
//! ```
//! use curator::{CurationSession, InMemoryBridge};
//!
//! let bridge = InMemoryBridge::new()
//!     .with_cluster(1)
//!     .with_cluster(2)
//!     .with_cluster(5)
//!     .with_cluster_pair(1, 2);
//!
//! let session = CurationSession::new(&bridge).unwrap();
//! let labels: Vec<i64> = session.clusters().iter().map(|c| c.k()).collect();
//! assert_eq!(labels, vec![1, 2, 5]);
//!
//! let pair = &session.cluster_pairs()[0];
//! assert_eq!((pair.cluster1().k(), pair.cluster2().k()), (1, 2));
//! ```

mod cluster;
mod console;
mod pair;

pub use cluster::Cluster;
pub use console::Console;
pub use pair::ClusterPair;

use std::fmt;

use serde::de::DeserializeOwned;

use crate::bridge::{ClusterBridge, ClusterPairKey};
use crate::error::{CurationError, Result};

/// Registries of cluster and pair views plus the console, over one bridge.
pub struct CurationSession<'a> {
    bridge: &'a dyn ClusterBridge,
    clusters: Vec<Cluster<'a>>,
    cluster_pairs: Vec<ClusterPair<'a>>,
    console: Console<'a>,
}

impl<'a> CurationSession<'a> {
    /// Build the registries from the bridge's snapshots.
    ///
    /// Fails with [`CurationError::Parse`] if either snapshot is not valid
    /// JSON of the expected shape; bridge errors pass through unchanged.
    pub fn new(bridge: &'a dyn ClusterBridge) -> Result<Self> {
        let numbers: Vec<i64> =
            decode_snapshot("cluster numbers", &bridge.cluster_numbers()?)?;
        let clusters: Vec<Cluster<'a>> = numbers
            .into_iter()
            .map(|k| Cluster::new(k, bridge))
            .collect();

        let keys: Vec<ClusterPairKey> =
            decode_snapshot("cluster pairs", &bridge.cluster_pairs()?)?;
        let cluster_pairs: Vec<ClusterPair<'a>> = keys
            .into_iter()
            .map(|key| ClusterPair::from_key(key, bridge))
            .collect();

        tracing::debug!(
            clusters = clusters.len(),
            cluster_pairs = cluster_pairs.len(),
            "curation session initialized"
        );

        Ok(Self {
            bridge,
            clusters,
            cluster_pairs,
            console: Console::new(bridge),
        })
    }

    /// Cluster views, in snapshot order.
    pub fn clusters(&self) -> &[Cluster<'a>] {
        &self.clusters
    }

    /// Cluster pair views, in snapshot order.
    pub fn cluster_pairs(&self) -> &[ClusterPair<'a>] {
        &self.cluster_pairs
    }

    pub fn console(&self) -> &Console<'a> {
        &self.console
    }

    /// A view of any cluster label, registered or not.
    pub fn cluster(&self, k: i64) -> Cluster<'a> {
        Cluster::new(k, self.bridge)
    }

    /// A view of any cluster pair, registered or not.
    pub fn cluster_pair(&self, k1: i64, k2: i64) -> ClusterPair<'a> {
        ClusterPair::new(k1, k2, self.bridge)
    }
}

impl fmt::Debug for CurationSession<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurationSession")
            .field("clusters", &self.clusters)
            .field("cluster_pairs", &self.cluster_pairs)
            .finish_non_exhaustive()
    }
}

fn decode_snapshot<T: DeserializeOwned>(snapshot: &'static str, json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|source| CurationError::Parse { snapshot, source })
}
