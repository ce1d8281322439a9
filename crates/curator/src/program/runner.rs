//! Program runner.

use std::cell::RefCell;

use chrono::Utc;

use crate::bridge::{ClusterBridge, MetricValue};
use crate::error::Result;
use crate::session::CurationSession;

use super::output::{ProgramError, ProgramOutput};
use super::{CurationProgram, DEFAULT_PROGRAM_NAME};

/// Configuration for program runs.
#[derive(Debug, Clone, Default)]
pub struct ProgramConfig {
    /// Also pass captured console lines on to the host's own log sink.
    pub forward_log: bool,

    /// Emit every captured console line as a `tracing` info event.
    pub echo_log: bool,
}

impl ProgramConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_forward_log(mut self, forward_log: bool) -> Self {
        self.forward_log = forward_log;
        self
    }

    pub fn with_echo_log(mut self, echo_log: bool) -> Self {
        self.echo_log = echo_log;
        self
    }
}

/// Applies curation programs to a host bridge.
#[derive(Debug, Clone, Default)]
pub struct ProgramRunner {
    config: ProgramConfig,
}

impl ProgramRunner {
    /// Create a runner with default configuration.
    pub fn new() -> Self {
        Self::with_config(ProgramConfig::default())
    }

    /// Create a runner with custom configuration.
    pub fn with_config(config: ProgramConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProgramConfig {
        &self.config
    }

    /// Apply a program. Never fails; errors end up in the output.
    pub fn apply(
        &self,
        bridge: &dyn ClusterBridge,
        program: &dyn CurationProgram,
    ) -> ProgramOutput {
        self.run(bridge, program.name(), |session| program.run(session))
    }

    /// Apply a closure as an unnamed program.
    pub fn apply_with<F>(&self, bridge: &dyn ClusterBridge, program: F) -> ProgramOutput
    where
        F: FnOnce(&CurationSession<'_>) -> Result<()>,
    {
        self.run(bridge, DEFAULT_PROGRAM_NAME, program)
    }

    fn run<F>(&self, bridge: &dyn ClusterBridge, name: &str, program: F) -> ProgramOutput
    where
        F: FnOnce(&CurationSession<'_>) -> Result<()>,
    {
        let started_at = Utc::now();
        tracing::debug!(program = name, "applying curation program");

        let capture = CapturingBridge::new(bridge, &self.config);
        let result = CurationSession::new(&capture).and_then(|session| program(&session));
        let log = capture.into_log();

        let error = match result {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(program = name, error = %err, "curation program failed");
                Some(ProgramError::from(&err))
            }
        };

        let finished_at = Utc::now();
        tracing::debug!(
            program = name,
            success = error.is_none(),
            log_bytes = log.len(),
            "curation program finished"
        );

        ProgramOutput {
            program: name.to_string(),
            started_at,
            finished_at,
            log,
            error,
        }
    }
}

/// Wraps the host bridge for one run and keeps that run's console output.
struct CapturingBridge<'a> {
    inner: &'a dyn ClusterBridge,
    forward_log: bool,
    echo_log: bool,
    log: RefCell<String>,
}

impl<'a> CapturingBridge<'a> {
    fn new(inner: &'a dyn ClusterBridge, config: &ProgramConfig) -> Self {
        Self {
            inner,
            forward_log: config.forward_log,
            echo_log: config.echo_log,
            log: RefCell::new(String::new()),
        }
    }

    fn into_log(self) -> String {
        self.log.into_inner()
    }
}

impl ClusterBridge for CapturingBridge<'_> {
    fn cluster_numbers(&self) -> Result<String> {
        self.inner.cluster_numbers()
    }

    fn cluster_pairs(&self) -> Result<String> {
        self.inner.cluster_pairs()
    }

    fn metric(&self, k: i64, name: &str) -> Result<MetricValue> {
        self.inner.metric(k, name)
    }

    fn set_metric(&self, k: i64, name: &str, value: MetricValue) -> Result<MetricValue> {
        self.inner.set_metric(k, name, value)
    }

    fn pair_metric(&self, k1: i64, k2: i64, name: &str) -> Result<MetricValue> {
        self.inner.pair_metric(k1, k2, name)
    }

    fn set_pair_metric(
        &self,
        k1: i64,
        k2: i64,
        name: &str,
        value: MetricValue,
    ) -> Result<MetricValue> {
        self.inner.set_pair_metric(k1, k2, name, value)
    }

    fn has_tag(&self, k: i64, name: &str) -> Result<bool> {
        self.inner.has_tag(k, name)
    }

    fn add_tag(&self, k: i64, name: &str) -> Result<()> {
        self.inner.add_tag(k, name)
    }

    fn remove_tag(&self, k: i64, name: &str) -> Result<()> {
        self.inner.remove_tag(k, name)
    }

    fn log(&self, message: &str) -> Result<()> {
        {
            let mut log = self.log.borrow_mut();
            log.push_str(message);
            log.push('\n');
        }
        if self.echo_log {
            tracing::info!(target: "curator::console", "{message}");
        }
        if self.forward_log {
            self.inner.log(message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::InMemoryBridge;
    use crate::error::CurationError;

    struct TagAll {
        tag: &'static str,
    }

    impl CurationProgram for TagAll {
        fn run(&self, session: &CurationSession<'_>) -> Result<()> {
            for cluster in session.clusters() {
                cluster.add_tag(self.tag)?;
            }
            session.console().log(&session.clusters().len())
        }

        fn name(&self) -> &str {
            "tag_all"
        }
    }

    #[test]
    fn test_apply_named_program() {
        let bridge = InMemoryBridge::new().with_cluster(1).with_cluster(2);
        let output = ProgramRunner::new().apply(&bridge, &TagAll { tag: "reviewed" });

        assert!(output.is_success());
        assert_eq!(output.program, "tag_all");
        assert_eq!(output.log, "2\n");
        assert!(bridge.has_tag(1, "reviewed").unwrap());
        assert!(bridge.has_tag(2, "reviewed").unwrap());
    }

    #[test]
    fn test_log_is_captured_not_forwarded_by_default() {
        let bridge = InMemoryBridge::new();
        let output = ProgramRunner::new().apply_with(&bridge, |session| {
            session.console().log("hello")
        });

        assert_eq!(output.log, "hello\n");
        assert!(bridge.log_text().is_empty());
    }

    #[test]
    fn test_forward_log() {
        let bridge = InMemoryBridge::new();
        let runner = ProgramRunner::with_config(
            ProgramConfig::new().with_forward_log(true).with_echo_log(true),
        );
        let output = runner.apply_with(&bridge, |session| session.console().log("hello"));

        assert_eq!(output.log, "hello\n");
        assert_eq!(bridge.log_text(), "hello\n");
    }

    #[test]
    fn test_each_run_starts_with_empty_log() {
        let bridge = InMemoryBridge::new();
        let runner = ProgramRunner::new();

        runner.apply_with(&bridge, |session| session.console().log("first"));
        let output = runner.apply_with(&bridge, |session| session.console().log("second"));

        assert_eq!(output.log, "second\n");
    }

    #[test]
    fn test_program_error_keeps_earlier_output() {
        let bridge = InMemoryBridge::new().with_cluster(1);
        let output = ProgramRunner::new().apply_with(&bridge, |session| {
            session.console().log("before")?;
            session.cluster(1).add_tag("partial")?;
            Err(CurationError::program("stopped"))
        });

        assert_eq!(output.log, "before\n");
        assert_eq!(output.error.as_ref().unwrap().kind, "ProgramError");
        assert!(bridge.has_tag(1, "partial").unwrap());
        assert!(output.render().ends_with("ERROR: ProgramError: stopped\n"));
    }
}
