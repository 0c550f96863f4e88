//! Adapters for the external Sokoban solvers.
//!
//! Each adapter knows how to:
//! 1. Locate its executable and required input files
//! 2. Encode its command line (argv vector or single shell line)
//! 3. Route its results to the shared output file

pub mod solver_two;
pub mod takaken;
pub mod yass;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::config::HarnessConfig;
use super::output::Disposition;

/// The external solvers driven by the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverKind {
    /// takaken74, which writes the results file itself.
    Takaken,
    /// The bundled sokoban_solver executable.
    SolverTwo,
    /// YASS (Yet Another Sokoban Solver).
    Yass,
}

impl SolverKind {
    /// All solvers, in invocation order.
    pub const ALL: [SolverKind; 3] = [SolverKind::Takaken, SolverKind::SolverTwo, SolverKind::Yass];

    /// Short name used in diagnostics.
    pub fn display_name(&self) -> &'static str {
        match self {
            SolverKind::Takaken => "takaken74",
            SolverKind::SolverTwo => "sokoban_solver",
            SolverKind::Yass => "YASS",
        }
    }
}

impl std::fmt::Display for SolverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A fully-encoded child-process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandSpec {
    /// Program plus ordered argument vector, spawned directly.
    Argv {
        /// Executable to spawn.
        program: PathBuf,
        /// Arguments in order.
        args: Vec<String>,
    },
    /// A single composed command line handed to the platform shell.
    ShellLine(String),
}

impl CommandSpec {
    /// Human-readable rendering for logs.
    pub fn display_line(&self) -> String {
        match self {
            CommandSpec::Argv { program, args } => {
                let mut line = program.display().to_string();
                for arg in args {
                    line.push(' ');
                    line.push_str(arg);
                }
                line
            }
            CommandSpec::ShellLine(line) => line.clone(),
        }
    }
}

/// Trait for solver invocation profiles.
///
/// Implementations are purely descriptive: they encode where the executable
/// lives, which inputs must exist, how the command line is built, and how
/// results reach the shared output file. The executor owns the shared
/// validate/execute/report logic.
pub trait SolverAdapter: Send + Sync {
    /// Returns the solver this adapter drives.
    fn kind(&self) -> SolverKind;

    /// Short name used in diagnostics.
    fn display_name(&self) -> &'static str {
        self.kind().display_name()
    }

    /// Path to the solver executable.
    fn executable<'c>(&self, config: &'c HarnessConfig) -> &'c Path;

    /// Input files that must exist before the solver is launched.
    fn required_inputs(&self, config: &HarnessConfig) -> Vec<PathBuf>;

    /// Encodes the child-process invocation.
    fn command(&self, config: &HarnessConfig) -> CommandSpec;

    /// How this solver's results reach the output file.
    fn disposition(&self) -> Disposition;

    /// Label for the appended section header, for append-mode solvers.
    fn section_label(&self) -> Option<&'static str>;

    /// Whether the runner echoes the output file back after a successful run.
    fn echoes_output_file(&self) -> bool;
}

pub use solver_two::SolverTwoAdapter;
pub use takaken::TakakenAdapter;
pub use yass::YassAdapter;

/// Creates the adapter for the given solver.
pub fn create_adapter(kind: SolverKind) -> Box<dyn SolverAdapter> {
    match kind {
        SolverKind::Takaken => Box::new(TakakenAdapter),
        SolverKind::SolverTwo => Box::new(SolverTwoAdapter),
        SolverKind::Yass => Box::new(YassAdapter),
    }
}
