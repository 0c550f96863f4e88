//! Adapter for the YASS solver.
//!
//! YASS is driven through the platform shell with a single composed command
//! line rather than an argv vector, and the composed line is logged before
//! execution.

use std::path::{Path, PathBuf};

use super::{CommandSpec, SolverAdapter, SolverKind};
use crate::runner::config::HarnessConfig;
use crate::runner::output::Disposition;

/// Invocation profile for YASS.
pub struct YassAdapter;

impl SolverAdapter for YassAdapter {
    fn kind(&self) -> SolverKind {
        SolverKind::Yass
    }

    fn executable<'c>(&self, config: &'c HarnessConfig) -> &'c Path {
        &config.yass.exe
    }

    fn required_inputs(&self, config: &HarnessConfig) -> Vec<PathBuf> {
        vec![config.input_file.clone()]
    }

    fn command(&self, config: &HarnessConfig) -> CommandSpec {
        let params = &config.yass;
        CommandSpec::ShellLine(format!(
            "{} {} -level {} -maxtime {} -optimize {}",
            params.exe.display(),
            config.input_file.display(),
            params.levels,
            params.max_time,
            params.optimize,
        ))
    }

    fn disposition(&self) -> Disposition {
        Disposition::Append
    }

    fn section_label(&self) -> Option<&'static str> {
        Some("YASS Solver")
    }

    fn echoes_output_file(&self) -> bool {
        false
    }
}
