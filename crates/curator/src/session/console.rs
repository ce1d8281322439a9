//! Console that routes program output to the host's log sink.

use std::fmt;

use serde::Serialize;

use crate::bridge::ClusterBridge;
use crate::error::Result;

/// Log capability handed to curation programs.
///
/// Strings are forwarded verbatim. Anything else is encoded as compact JSON
/// first.
#[derive(Clone, Copy)]
pub struct Console<'a> {
    bridge: &'a dyn ClusterBridge,
}

impl<'a> Console<'a> {
    pub fn new(bridge: &'a dyn ClusterBridge) -> Self {
        Self { bridge }
    }

    /// Log any serializable value.
    pub fn log<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let encoded = serde_json::to_string(value)?;
        let message = if encoded.starts_with('"') {
            serde_json::from_str::<String>(&encoded)?
        } else {
            encoded
        };
        self.bridge.log(&message)
    }
}

impl fmt::Debug for Console<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}
