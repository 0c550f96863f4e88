//! Adapter for the bundled sokoban_solver executable.
//!
//! Takes three positional parameters (iterative mode, search engine, step
//! bound) and reads its board internally, so there is no input file to
//! validate.

use std::path::{Path, PathBuf};

use super::{CommandSpec, SolverAdapter, SolverKind};
use crate::runner::config::HarnessConfig;
use crate::runner::output::Disposition;

/// Invocation profile for sokoban_solver.
pub struct SolverTwoAdapter;

impl SolverAdapter for SolverTwoAdapter {
    fn kind(&self) -> SolverKind {
        SolverKind::SolverTwo
    }

    fn executable<'c>(&self, config: &'c HarnessConfig) -> &'c Path {
        &config.solver_two.exe
    }

    fn required_inputs(&self, _config: &HarnessConfig) -> Vec<PathBuf> {
        Vec::new()
    }

    fn command(&self, config: &HarnessConfig) -> CommandSpec {
        let params = &config.solver_two;
        CommandSpec::Argv {
            program: params.exe.clone(),
            args: vec![
                params.iterative.to_string(),
                params.engine.clone(),
                params.steps.to_string(),
            ],
        }
    }

    fn disposition(&self) -> Disposition {
        Disposition::Append
    }

    fn section_label(&self) -> Option<&'static str> {
        Some("Sokoban Solver Two")
    }

    fn echoes_output_file(&self) -> bool {
        false
    }
}
