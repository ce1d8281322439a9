//! Curator: scripting bridge for spike-sorting cluster curation.
//!
//! Curation programs never touch cluster data directly. Every read and write
//! goes through a host-provided [`ClusterBridge`]; this crate wraps that bridge
//! in lightweight views so programs can work with clusters and cluster pairs.
//!
//! # Core Principles
//!
//! - **Stateless views**: [`Cluster`] and [`ClusterPair`] hold only their
//!   labels and cache nothing
//! - **Host owns the data**: metrics, tags and logs live behind the bridge
//! - **Explicit capabilities**: the console is passed around, not global
//!
//! # Example
//!
//! ```
//! use curator::{CurationSession, InMemoryBridge};
//!
//! let bridge = InMemoryBridge::new()
//!     .with_cluster_metric(1, "firing_rate", 4.2)
//!     .with_cluster(2)
//!     .with_cluster_pair(1, 2);
//!
//! let session = CurationSession::new(&bridge).unwrap();
//! for cluster in session.clusters() {
//!     if cluster.metric("firing_rate").unwrap().as_f64().unwrap_or(0.0) < 1.0 {
//!         cluster.add_tag("rejected").unwrap();
//!     }
//! }
//!
//! assert!(session.cluster(2).has_tag("rejected").unwrap());
//! assert!(!session.cluster(1).has_tag("rejected").unwrap());
//! ```

pub mod bridge;
pub mod error;
pub mod program;
pub mod session;

pub use bridge::{
    ClusterAttributes, ClusterBridge, ClusterPairKey, InMemoryBridge, MetricValue,
    PairAttributes,
};
pub use error::{CurationError, Result};
pub use program::{CurationProgram, ProgramConfig, ProgramError, ProgramOutput, ProgramRunner};
pub use session::{Cluster, ClusterPair, Console, CurationSession};
