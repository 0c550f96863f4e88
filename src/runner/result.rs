//! Typed outcomes for solver invocations.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::solvers::SolverKind;

/// Maximum captured-stream length kept on a result.
const STREAM_SUMMARY_LIMIT: usize = 10_000;

/// Terminal state of one solver invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvocationStatus {
    /// A precondition failed; the solver was never spawned.
    Skipped,
    /// The solver ran and exited zero.
    Completed,
    /// The solver ran and exited nonzero.
    Failed,
    /// Spawning the solver or handling its results hit an unexpected error.
    Errored,
}

impl std::fmt::Display for InvocationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvocationStatus::Skipped => write!(f, "skipped"),
            InvocationStatus::Completed => write!(f, "completed"),
            InvocationStatus::Failed => write!(f, "failed"),
            InvocationStatus::Errored => write!(f, "errored"),
        }
    }
}

/// Outcome of invoking one external solver.
///
/// Always terminal: the runner folds every failure mode into one of these
/// rather than propagating errors to the driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationResult {
    /// Which solver this outcome belongs to.
    pub solver: SolverKind,
    /// Terminal state of the invocation.
    pub status: InvocationStatus,
    /// Exit code from the solver process, if one ran to completion.
    pub exit_code: Option<i32>,
    /// Captured stdout (truncated if very long).
    pub stdout: String,
    /// Captured stderr (truncated if very long).
    pub stderr: String,
    /// Wall-clock time spent on this invocation.
    pub duration: Duration,
    /// Timestamp when the invocation started.
    pub started_at: DateTime<Utc>,
    /// Timestamp when the invocation reached its terminal state.
    pub completed_at: DateTime<Utc>,
    /// Human-readable diagnostic for non-completed outcomes.
    pub diagnostic: Option<String>,
}

impl InvocationResult {
    /// Precondition failure: nothing was spawned.
    pub fn skipped(solver: SolverKind, diagnostic: impl Into<String>) -> Self {
        Self::terminal(solver, InvocationStatus::Skipped, None, Duration::ZERO)
            .with_diagnostic(diagnostic)
    }

    /// Spawn or file I/O failure, contained at the invocation boundary.
    pub fn errored(solver: SolverKind, duration: Duration, diagnostic: impl Into<String>) -> Self {
        Self::terminal(solver, InvocationStatus::Errored, None, duration)
            .with_diagnostic(diagnostic)
    }

    /// The solver ran but exited nonzero.
    pub fn failed(
        solver: SolverKind,
        exit_code: i32,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
        duration: Duration,
        diagnostic: impl Into<String>,
    ) -> Self {
        Self::terminal(solver, InvocationStatus::Failed, Some(exit_code), duration)
            .with_stdout(stdout)
            .with_stderr(stderr)
            .with_diagnostic(diagnostic)
    }

    /// The solver ran to completion and its results were routed.
    pub fn completed(
        solver: SolverKind,
        exit_code: i32,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self::terminal(solver, InvocationStatus::Completed, Some(exit_code), duration)
            .with_stdout(stdout)
            .with_stderr(stderr)
    }

    fn terminal(
        solver: SolverKind,
        status: InvocationStatus,
        exit_code: Option<i32>,
        duration: Duration,
    ) -> Self {
        let now = Utc::now();
        Self {
            solver,
            status,
            exit_code,
            stdout: String::new(),
            stderr: String::new(),
            duration,
            started_at: now - chrono::Duration::from_std(duration).unwrap_or_default(),
            completed_at: now,
            diagnostic: None,
        }
    }

    /// Sets the captured stdout summary.
    pub fn with_stdout(mut self, stdout: impl Into<String>) -> Self {
        self.stdout = truncate_stream(stdout.into());
        self
    }

    /// Sets the captured stderr summary.
    pub fn with_stderr(mut self, stderr: impl Into<String>) -> Self {
        self.stderr = truncate_stream(stderr.into());
        self
    }

    /// Sets the diagnostic message.
    pub fn with_diagnostic(mut self, diagnostic: impl Into<String>) -> Self {
        self.diagnostic = Some(diagnostic.into());
        self
    }

    /// Returns true if the solver ran to completion.
    pub fn is_success(&self) -> bool {
        self.status == InvocationStatus::Completed
    }
}

/// Aggregated outcome of one full harness run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Unique identifier for this run.
    pub run_id: String,
    /// Timestamp when the run started.
    pub started_at: DateTime<Utc>,
    /// Timestamp when the run finished.
    pub finished_at: DateTime<Utc>,
    /// Total wall-clock duration.
    pub duration: Duration,
    /// Per-solver outcomes, in invocation order.
    pub results: Vec<InvocationResult>,
}

impl RunReport {
    /// Creates a report from collected results.
    pub fn new(run_id: impl Into<String>, results: Vec<InvocationResult>, duration: Duration) -> Self {
        let now = Utc::now();
        Self {
            run_id: run_id.into(),
            started_at: now - chrono::Duration::from_std(duration).unwrap_or_default(),
            finished_at: now,
            duration,
            results,
        }
    }

    /// Number of results in the given terminal state.
    pub fn count(&self, status: InvocationStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }

    /// True when every solver ran to completion.
    pub fn all_completed(&self) -> bool {
        self.results.iter().all(InvocationResult::is_success)
    }
}

/// Truncates a captured stream to the summary limit.
fn truncate_stream(s: String) -> String {
    if s.len() <= STREAM_SUMMARY_LIMIT {
        return s;
    }
    let mut end = STREAM_SUMMARY_LIMIT;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... [truncated]", &s[..end])
}
