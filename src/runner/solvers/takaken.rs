//! Adapter for the takaken74 solver.
//!
//! takaken74 writes its results straight to the file named by `-out`, so the
//! runner does not append captured stdout; it re-reads that file and echoes
//! it back after a successful run.

use std::path::{Path, PathBuf};

use super::{CommandSpec, SolverAdapter, SolverKind};
use crate::runner::config::HarnessConfig;
use crate::runner::output::Disposition;

/// Invocation profile for takaken74.
pub struct TakakenAdapter;

impl SolverAdapter for TakakenAdapter {
    fn kind(&self) -> SolverKind {
        SolverKind::Takaken
    }

    fn executable<'c>(&self, config: &'c HarnessConfig) -> &'c Path {
        &config.takaken.exe
    }

    fn required_inputs(&self, config: &HarnessConfig) -> Vec<PathBuf> {
        vec![config.input_file.clone()]
    }

    fn command(&self, config: &HarnessConfig) -> CommandSpec {
        let params = &config.takaken;
        CommandSpec::Argv {
            program: params.exe.clone(),
            args: vec![
                "-in".to_string(),
                config.input_file.display().to_string(),
                "-out".to_string(),
                config.output_file.display().to_string(),
                "-time".to_string(),
                params.time_limit.to_string(),
                "-level".to_string(),
                params.level.clone(),
            ],
        }
    }

    fn disposition(&self) -> Disposition {
        Disposition::Overwrite
    }

    fn section_label(&self) -> Option<&'static str> {
        None
    }

    fn echoes_output_file(&self) -> bool {
        true
    }
}
