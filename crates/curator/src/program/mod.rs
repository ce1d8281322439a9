//! Running curation programs against a host.
//!
//! A curation program is user code that walks the session's clusters and
//! pairs, reads metrics, and writes metrics and tags back through the
//! bridge. The [`ProgramRunner`] builds a fresh session for every run,
//! captures what the program logs through its console, and turns any
//! failure into part of the [`ProgramOutput`] report instead of an error.
//!
//! # Example
//!
//! ```
//! use curator::{InMemoryBridge, ProgramRunner};
//!
//! let bridge = InMemoryBridge::new()
//!     .with_cluster_metric(1, "isolation", 0.98)
//!     .with_cluster_metric(2, "isolation", 0.41);
//!
//! let output = ProgramRunner::new().apply_with(&bridge, |session| {
//!     for cluster in session.clusters() {
//!         let isolation = cluster.metric("isolation")?.as_f64().unwrap_or(0.0);
//!         if isolation < 0.9 {
//!             cluster.add_tag("rejected")?;
//!             session.console().log(&format!("rejected {}", cluster.k()))?;
//!         }
//!     }
//!     Ok(())
//! });
//!
//! assert!(output.is_success());
//! assert_eq!(output.log, "rejected 2\n");
//! ```

mod output;
mod runner;

pub use output::{ProgramError, ProgramOutput};
pub use runner::{ProgramConfig, ProgramRunner};

use crate::error::Result;
use crate::session::CurationSession;

/// Name reported for programs that do not provide one.
pub const DEFAULT_PROGRAM_NAME: &str = "curation_program";

/// User code run against a curation session.
pub trait CurationProgram {
    /// Execute the program. Returning an error aborts the run; host changes
    /// already made stay in place.
    fn run(&self, session: &CurationSession<'_>) -> Result<()>;

    /// Name used in output reports and logs.
    fn name(&self) -> &str {
        DEFAULT_PROGRAM_NAME
    }
}
