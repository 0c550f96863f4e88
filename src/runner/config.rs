//! Configuration for harness runs.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for one full harness run.
///
/// Holds the two shared paths (puzzle input, results file) plus the
/// parameter block for each external solver. Defaults mirror the layout the
/// solver executables ship with, so a bare `run` works from the solvers'
/// directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Puzzle board file handed to solvers that read one.
    pub input_file: PathBuf,
    /// Shared results file all solvers write into.
    pub output_file: PathBuf,
    /// Parameters for the takaken74 solver.
    pub takaken: TakakenParams,
    /// Parameters for the bundled sokoban_solver executable.
    pub solver_two: SolverTwoParams,
    /// Parameters for the YASS solver.
    pub yass: YassParams,
}

impl HarnessConfig {
    /// Creates a configuration with default solver parameters for the given
    /// input and output paths.
    pub fn new(input_file: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input_file.into(),
            output_file: output_file.into(),
            takaken: TakakenParams::default(),
            solver_two: SolverTwoParams::default(),
            yass: YassParams::default(),
        }
    }

    /// Sets the takaken74 parameters.
    pub fn with_takaken(mut self, params: TakakenParams) -> Self {
        self.takaken = params;
        self
    }

    /// Sets the sokoban_solver parameters.
    pub fn with_solver_two(mut self, params: SolverTwoParams) -> Self {
        self.solver_two = params;
        self
    }

    /// Sets the YASS parameters.
    pub fn with_yass(mut self, params: YassParams) -> Self {
        self.yass = params;
        self
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::new("boards/board.txt", "sokoban_output.txt")
    }
}

/// Parameters for the takaken74 solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TakakenParams {
    /// Path to the takaken74 executable.
    pub exe: PathBuf,
    /// Time limit in seconds, enforced by the solver itself.
    pub time_limit: u64,
    /// Level selector: a level number or "all".
    pub level: String,
}

impl Default for TakakenParams {
    fn default() -> Self {
        Self {
            exe: PathBuf::from("takaken74.exe"),
            time_limit: 600,
            level: "1".to_string(),
        }
    }
}

/// Parameters for the bundled sokoban_solver executable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverTwoParams {
    /// Path to the sokoban_solver executable.
    pub exe: PathBuf,
    /// Whether the solver deepens its step bound iteratively.
    pub iterative: bool,
    /// Search engine name understood by the solver.
    pub engine: String,
    /// Step bound for the search.
    pub steps: u32,
}

impl Default for SolverTwoParams {
    fn default() -> Self {
        Self {
            exe: PathBuf::from("main.exe"),
            iterative: true,
            engine: "SAT".to_string(),
            steps: 11,
        }
    }
}

/// Parameters for the YASS solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YassParams {
    /// Path to the YASS executable.
    pub exe: PathBuf,
    /// Level range selector, e.g. "1-10".
    pub levels: String,
    /// Time limit in seconds, enforced by the solver itself.
    pub max_time: u64,
    /// What solutions are optimized for.
    pub optimize: OptimizeTarget,
}

impl Default for YassParams {
    fn default() -> Self {
        Self {
            exe: PathBuf::from("YASS.exe"),
            levels: "1-10".to_string(),
            max_time: 600,
            optimize: OptimizeTarget::Moves,
        }
    }
}

/// Optimization target accepted by YASS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizeTarget {
    /// Minimize pusher moves.
    #[default]
    Moves,
    /// Minimize box pushes.
    Pushes,
}

impl OptimizeTarget {
    /// Returns the flag value YASS expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizeTarget::Moves => "moves",
            OptimizeTarget::Pushes => "pushes",
        }
    }
}

impl std::fmt::Display for OptimizeTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OptimizeTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "moves" => Ok(OptimizeTarget::Moves),
            "pushes" => Ok(OptimizeTarget::Pushes),
            other => Err(format!("Unknown optimize target: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = HarnessConfig::default();
        assert_eq!(config.input_file, PathBuf::from("boards/board.txt"));
        assert_eq!(config.output_file, PathBuf::from("sokoban_output.txt"));
        assert_eq!(config.takaken.exe, PathBuf::from("takaken74.exe"));
        assert_eq!(config.takaken.time_limit, 600);
        assert_eq!(config.takaken.level, "1");
        assert_eq!(config.solver_two.exe, PathBuf::from("main.exe"));
        assert!(config.solver_two.iterative);
        assert_eq!(config.solver_two.engine, "SAT");
        assert_eq!(config.solver_two.steps, 11);
        assert_eq!(config.yass.exe, PathBuf::from("YASS.exe"));
        assert_eq!(config.yass.levels, "1-10");
        assert_eq!(config.yass.max_time, 600);
        assert_eq!(config.yass.optimize, OptimizeTarget::Moves);
    }

    #[test]
    fn test_config_builder() {
        let config = HarnessConfig::new("puzzle.txt", "out.txt")
            .with_takaken(TakakenParams {
                time_limit: 60,
                level: "all".to_string(),
                ..Default::default()
            })
            .with_yass(YassParams {
                optimize: OptimizeTarget::Pushes,
                ..Default::default()
            });

        assert_eq!(config.input_file, PathBuf::from("puzzle.txt"));
        assert_eq!(config.takaken.time_limit, 60);
        assert_eq!(config.takaken.level, "all");
        assert_eq!(config.yass.optimize, OptimizeTarget::Pushes);
        assert_eq!(config.solver_two.steps, 11);
    }

    #[test]
    fn test_optimize_target_from_str() {
        assert_eq!("moves".parse::<OptimizeTarget>().unwrap(), OptimizeTarget::Moves);
        assert_eq!("Pushes".parse::<OptimizeTarget>().unwrap(), OptimizeTarget::Pushes);
        assert!("speed".parse::<OptimizeTarget>().is_err());
    }

    #[test]
    fn test_optimize_target_display() {
        assert_eq!(OptimizeTarget::Moves.to_string(), "moves");
        assert_eq!(OptimizeTarget::Pushes.to_string(), "pushes");
    }
}
