//! Solver runner for external Sokoban solvers.
//!
//! This module provides the infrastructure to drive pre-built solver
//! executables against a puzzle file and collect their textual output into
//! one shared results file.
//!
//! # Architecture
//!
//! ```text
//! HarnessConfig → SolverRunner → solver process → output file → RunReport
//! ```
//!
//! The runner, for each solver in turn:
//! 1. Checks the executable and required input files exist
//! 2. Spawns the solver and waits for it to exit
//! 3. Captures stdout/stderr and the exit status
//! 4. Routes results into the shared output file per the solver's disposition
//!
//! Every failure mode is contained within its own invocation; one solver
//! going missing or crashing never stops the rest of the battery.
//!
//! # Example
//!
//! ```ignore
//! use soko_harness::runner::{HarnessConfig, SolverRunner};
//!
//! let config = HarnessConfig::new("boards/board.txt", "sokoban_output.txt");
//! let runner = SolverRunner::new(config);
//! let report = runner.run_all().await;
//!
//! println!("{} of {} solvers completed", report.count(InvocationStatus::Completed), report.results.len());
//! ```

pub mod config;
pub mod executor;
pub mod output;
pub mod result;
pub mod solvers;

pub use config::{HarnessConfig, OptimizeTarget, SolverTwoParams, TakakenParams, YassParams};
pub use executor::{RunnerError, SolverRunner};
pub use output::{Disposition, NO_OUTPUT_PLACEHOLDER};
pub use result::{InvocationResult, InvocationStatus, RunReport};
pub use solvers::{create_adapter, CommandSpec, SolverAdapter, SolverKind};
