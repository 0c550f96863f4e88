//! CLI command definitions for soko-harness.
//!
//! One `run` command drives the full solver battery. Every argument has a
//! default matching the layout the solver executables ship with, so a bare
//! `soko-harness run` from that directory does a complete pass.

use std::path::PathBuf;

use clap::Parser;

use crate::runner::{
    HarnessConfig, InvocationStatus, OptimizeTarget, RunReport, SolverRunner, SolverTwoParams,
    TakakenParams, YassParams,
};

/// Default executable locations, next to the harness.
const DEFAULT_TAKAKEN_EXE: &str = "takaken74.exe";
const DEFAULT_SOLVER_TWO_EXE: &str = "main.exe";
const DEFAULT_YASS_EXE: &str = "YASS.exe";

/// Default puzzle input and shared results file.
const DEFAULT_INPUT_FILE: &str = "boards/board.txt";
const DEFAULT_OUTPUT_FILE: &str = "sokoban_output.txt";

/// External Sokoban solver harness.
#[derive(Parser)]
#[command(name = "soko-harness")]
#[command(about = "Run a battery of external Sokoban solvers and collect their results")]
#[command(version)]
#[command(
    long_about = "soko-harness shells out to three pre-built Sokoban solvers (takaken74, \
sokoban_solver, YASS) in sequence, captures their output and exit status, and collects \
results into one shared text file.\n\nExample usage:\n  soko-harness run --input boards/board.txt --output sokoban_output.txt"
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Run all three solvers sequentially against one puzzle file.
    Run(RunArgs),
}

/// Arguments for `soko-harness run`.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Puzzle board file passed to solvers that read one.
    #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
    pub input: PathBuf,

    /// Shared results file all solvers write into.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Path to the takaken74 executable.
    #[arg(long, default_value = DEFAULT_TAKAKEN_EXE)]
    pub takaken_exe: PathBuf,

    /// Time limit in seconds for takaken74 (enforced by the solver itself).
    #[arg(long, default_value = "600")]
    pub takaken_time: u64,

    /// Level selector for takaken74: a level number or "all".
    #[arg(long, default_value = "1")]
    pub takaken_level: String,

    /// Path to the sokoban_solver executable.
    #[arg(long, default_value = DEFAULT_SOLVER_TWO_EXE)]
    pub solver_two_exe: PathBuf,

    /// Run sokoban_solver in iterative deepening mode.
    #[arg(long, default_value = "true")]
    pub iterative: bool,

    /// Search engine name passed to sokoban_solver.
    #[arg(long, default_value = "SAT")]
    pub engine: String,

    /// Step bound passed to sokoban_solver.
    #[arg(long, default_value = "11")]
    pub steps: u32,

    /// Path to the YASS executable.
    #[arg(long, default_value = DEFAULT_YASS_EXE)]
    pub yass_exe: PathBuf,

    /// Level range for YASS, e.g. "1-10".
    #[arg(long, default_value = "1-10")]
    pub yass_levels: String,

    /// Time limit in seconds for YASS (enforced by the solver itself).
    #[arg(long, default_value = "600")]
    pub yass_maxtime: u64,

    /// Optimization target for YASS (moves, pushes).
    #[arg(long, default_value = "moves")]
    pub optimize: String,

    /// Output JSON summary instead of the human-readable table.
    #[arg(short = 'j', long)]
    pub json: bool,
}

impl RunArgs {
    /// Builds the harness configuration from parsed arguments.
    fn into_config(self) -> anyhow::Result<(HarnessConfig, bool)> {
        let optimize: OptimizeTarget = self
            .optimize
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?;

        let config = HarnessConfig::new(self.input, self.output)
            .with_takaken(TakakenParams {
                exe: self.takaken_exe,
                time_limit: self.takaken_time,
                level: self.takaken_level,
            })
            .with_solver_two(SolverTwoParams {
                exe: self.solver_two_exe,
                iterative: self.iterative,
                engine: self.engine,
                steps: self.steps,
            })
            .with_yass(YassParams {
                exe: self.yass_exe,
                levels: self.yass_levels,
                max_time: self.yass_maxtime,
                optimize,
            });

        Ok((config, self.json))
    }
}

/// Parses CLI arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Runs the parsed CLI command.
///
/// Individual solver failures are reported in the summary but never turn
/// into a nonzero exit; the process fails only on operator errors such as an
/// unknown optimize target.
pub async fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Run(args) => run_harness(args).await,
    }
}

async fn run_harness(args: RunArgs) -> anyhow::Result<()> {
    let (config, json) = args.into_config()?;

    let runner = SolverRunner::new(config);
    let report = runner.run_all().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }

    Ok(())
}

/// Prints the human-readable run summary.
fn print_summary(report: &RunReport) {
    println!("\n=== Sokoban Harness Results ===");
    println!("Run id:     {}", report.run_id);
    println!("Completed:  {}", report.count(InvocationStatus::Completed));
    println!("Failed:     {}", report.count(InvocationStatus::Failed));
    println!("Skipped:    {}", report.count(InvocationStatus::Skipped));
    println!("Errored:    {}", report.count(InvocationStatus::Errored));
    println!("Total time: {:.1}s", report.duration.as_secs_f64());
    println!();

    for result in &report.results {
        let name = result.solver.display_name();
        match &result.diagnostic {
            Some(diagnostic) => {
                // Keep the table readable when a diagnostic spans lines.
                let first_line = diagnostic.lines().next().unwrap_or_default();
                println!("  {:<16} {:<10} {}", name, result.status.to_string(), first_line);
            }
            None => println!("  {:<16} {}", name, result.status),
        }
    }
}
