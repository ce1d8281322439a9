//! Host bridge contract and the in-memory reference host.
//!
//! The bridge is the only way curation code reaches cluster data. Hosts
//! implement [`ClusterBridge`]; [`InMemoryBridge`] is a complete
//! implementation for embedding and tests.
//!
//! # Example
//!
//! ```
//! use curator::{ClusterBridge, InMemoryBridge};
//!
//! let bridge = InMemoryBridge::new().with_cluster(3).with_cluster(7);
//! assert_eq!(bridge.cluster_numbers().unwrap(), "[3,7]");
//!
//! bridge.add_tag(3, "noise").unwrap();
//! assert!(bridge.has_tag(3, "noise").unwrap());
//! ```

mod host;
mod memory;

pub use host::{ClusterBridge, ClusterPairKey, MetricValue};
pub use memory::{ClusterAttributes, InMemoryBridge, PairAttributes};
