//! Solver executor - the shared invocation logic for every profile.

use std::process::Stdio;
use std::time::Instant;

use tokio::process::Command;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::config::HarnessConfig;
use super::output::{self, Disposition, NO_OUTPUT_PLACEHOLDER};
use super::result::{InvocationResult, InvocationStatus, RunReport};
use super::solvers::{create_adapter, CommandSpec, SolverAdapter, SolverKind};

/// Drives the external solvers against one [`HarnessConfig`].
pub struct SolverRunner {
    /// Configuration shared by all invocations.
    config: HarnessConfig,
}

impl SolverRunner {
    /// Creates a runner for the given configuration.
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this runner was built with.
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Runs every solver in fixed order and collects their outcomes.
    ///
    /// Each invocation is awaited to completion before the next starts, and
    /// no outcome of one solver prevents the others from running.
    pub async fn run_all(&self) -> RunReport {
        let run_id = format!("harness-{}", Uuid::new_v4());
        let start = Instant::now();

        info!(
            "Starting harness run {} against {}",
            run_id,
            self.config.input_file.display()
        );

        let mut results = Vec::with_capacity(SolverKind::ALL.len());
        for kind in SolverKind::ALL {
            let adapter = create_adapter(kind);
            info!("Running the {} solver...", adapter.display_name());
            results.push(self.run(adapter.as_ref()).await);
        }

        let report = RunReport::new(run_id, results, start.elapsed());
        info!(
            "Harness run {} finished in {:?}: {} completed, {} failed, {} skipped, {} errored",
            report.run_id,
            report.duration,
            report.count(InvocationStatus::Completed),
            report.count(InvocationStatus::Failed),
            report.count(InvocationStatus::Skipped),
            report.count(InvocationStatus::Errored),
        );
        report
    }

    /// Runs a single solver: validate, execute, report.
    ///
    /// Always returns a terminal result; spawn and file I/O failures are
    /// folded into it rather than propagated.
    pub async fn run(&self, adapter: &dyn SolverAdapter) -> InvocationResult {
        let kind = adapter.kind();
        let name = adapter.display_name();

        let exe = adapter.executable(&self.config);
        if !exe.is_file() {
            let diagnostic = format!("File not found: {}", exe.display());
            warn!("{}", diagnostic);
            return InvocationResult::skipped(kind, diagnostic);
        }
        for input in adapter.required_inputs(&self.config) {
            if !input.is_file() {
                let diagnostic = format!("Input file not found: {}", input.display());
                warn!("{}", diagnostic);
                return InvocationResult::skipped(kind, diagnostic);
            }
        }

        let spec = adapter.command(&self.config);
        match &spec {
            CommandSpec::ShellLine(line) => info!("Running command: {}", line),
            CommandSpec::Argv { .. } => debug!("Command: {}", spec.display_line()),
        }

        let start = Instant::now();
        let raw = match execute(&spec).await {
            Ok(raw) => raw,
            Err(e) => {
                let diagnostic = format!("Failed to run the {} solver: {}", name, e);
                error!("{}", diagnostic);
                return InvocationResult::errored(kind, start.elapsed(), diagnostic);
            }
        };
        let duration = start.elapsed();

        let exit_code = raw.status.code().unwrap_or(-1);
        let stdout = String::from_utf8_lossy(&raw.stdout).to_string();
        let stderr = String::from_utf8_lossy(&raw.stderr).to_string();

        if !raw.status.success() {
            let diagnostic = format!("Errors from the {} solver:\n{}", name, stderr);
            error!("{}", diagnostic);
            return InvocationResult::failed(kind, exit_code, stdout, stderr, duration, diagnostic);
        }

        if stdout.is_empty() {
            info!("Output from the {} solver:\n{}", name, NO_OUTPUT_PLACEHOLDER);
        } else {
            info!("Output from the {} solver:\n{}", name, stdout);
        }

        if let Err(e) = self.route_results(adapter, &stdout) {
            let diagnostic = format!("Failed to run the {} solver: {}", name, e);
            error!("{}", diagnostic);
            return InvocationResult::errored(kind, duration, diagnostic);
        }

        InvocationResult::completed(kind, exit_code, stdout, stderr, duration)
    }

    /// Routes a successful solver's output per its disposition, then echoes
    /// the output file back if the profile asks for it.
    fn route_results(
        &self,
        adapter: &dyn SolverAdapter,
        stdout: &str,
    ) -> Result<(), RunnerError> {
        match adapter.disposition() {
            Disposition::Append => {
                let label = adapter.section_label().unwrap_or_else(|| adapter.display_name());
                output::append_section(&self.config.output_file, label, stdout)?;
            }
            // The solver already wrote the file through its own output flag.
            Disposition::Overwrite => {}
        }

        if adapter.echoes_output_file() {
            let contents = output::read_contents(&self.config.output_file)?;
            println!("{}", contents);
        }

        Ok(())
    }
}

/// Spawns the encoded command and waits for it to exit, capturing both
/// streams as text.
async fn execute(spec: &CommandSpec) -> Result<std::process::Output, RunnerError> {
    let mut cmd = match spec {
        CommandSpec::Argv { program, args } => {
            let mut cmd = Command::new(program);
            cmd.args(args);
            cmd
        }
        CommandSpec::ShellLine(line) => shell_command(line),
    };

    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let child = cmd.spawn().map_err(RunnerError::Spawn)?;
    child.wait_with_output().await.map_err(RunnerError::Io)
}

#[cfg(unix)]
fn shell_command(line: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(line);
    cmd
}

#[cfg(windows)]
fn shell_command(line: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(line);
    cmd
}

/// Error types for the runner's fallible internals.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("failed to spawn process: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::config::{SolverTwoParams, TakakenParams, YassParams};
    use crate::runner::solvers::{SolverTwoAdapter, TakakenAdapter, YassAdapter};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Config whose executables and files all live under `dir`.
    fn stub_config(dir: &Path) -> HarnessConfig {
        HarnessConfig::new(dir.join("board.txt"), dir.join("results.txt"))
            .with_takaken(TakakenParams {
                exe: dir.join("takaken74"),
                ..Default::default()
            })
            .with_solver_two(SolverTwoParams {
                exe: dir.join("solver_two"),
                ..Default::default()
            })
            .with_yass(YassParams {
                exe: dir.join("yass"),
                ..Default::default()
            })
    }

    #[cfg(unix)]
    fn write_stub(path: &Path, script: &str) {
        use std::os::unix::fs::PermissionsExt;
        fs::write(path, script).unwrap();
        let mut perms = fs::metadata(path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms).unwrap();
    }

    #[tokio::test]
    async fn test_missing_executable_is_skipped() {
        let temp = TempDir::new().unwrap();
        let config = stub_config(temp.path());
        fs::write(&config.input_file, "#####\n").unwrap();

        let runner = SolverRunner::new(config);
        let result = runner.run(&TakakenAdapter).await;

        assert_eq!(result.status, InvocationStatus::Skipped);
        assert!(result.diagnostic.unwrap().contains("File not found"));
        assert_eq!(result.exit_code, None);
    }

    #[tokio::test]
    async fn test_missing_input_is_skipped() {
        let temp = TempDir::new().unwrap();
        let config = stub_config(temp.path());
        // Executable present, puzzle file absent.
        fs::write(&config.yass.exe, "").unwrap();

        let runner = SolverRunner::new(config);
        let result = runner.run(&YassAdapter).await;

        assert_eq!(result.status, InvocationStatus::Skipped);
        assert!(result.diagnostic.unwrap().contains("Input file not found"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_append_profile_writes_separator_and_stdout() {
        let temp = TempDir::new().unwrap();
        let config = stub_config(temp.path());
        fs::write(&config.output_file, "earlier section\n").unwrap();
        write_stub(&config.solver_two.exe, "#!/bin/sh\necho solution: LURD\n");

        let runner = SolverRunner::new(config);
        let result = runner.run(&SolverTwoAdapter).await;

        assert_eq!(result.status, InvocationStatus::Completed);
        assert_eq!(result.exit_code, Some(0));
        let contents = fs::read_to_string(&runner.config().output_file).unwrap();
        assert_eq!(
            contents,
            "earlier section\n\n--- Sokoban Solver Two Results ---\nsolution: LURD\n"
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_nonzero_exit_appends_nothing() {
        let temp = TempDir::new().unwrap();
        let config = stub_config(temp.path());
        fs::write(&config.output_file, "earlier section\n").unwrap();
        write_stub(
            &config.solver_two.exe,
            "#!/bin/sh\necho 'no plan within bound' >&2\nexit 1\n",
        );

        let runner = SolverRunner::new(config);
        let result = runner.run(&SolverTwoAdapter).await;

        assert_eq!(result.status, InvocationStatus::Failed);
        assert_eq!(result.exit_code, Some(1));
        assert!(result.diagnostic.unwrap().contains("no plan within bound"));
        let contents = fs::read_to_string(&runner.config().output_file).unwrap();
        assert_eq!(contents, "earlier section\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_takaken_reads_back_solver_written_file() {
        let temp = TempDir::new().unwrap();
        let config = stub_config(temp.path());
        fs::write(&config.input_file, "#####\n").unwrap();
        // takaken74 is invoked as: exe -in <input> -out <output> -time <t> -level <l>,
        // so the stub sees the output path as its fourth argument.
        write_stub(
            &config.takaken.exe,
            "#!/bin/sh\nprintf 'Level 1 solved in 42 moves\\n' > \"$4\"\necho done\n",
        );

        let runner = SolverRunner::new(config);
        let result = runner.run(&TakakenAdapter).await;

        assert_eq!(result.status, InvocationStatus::Completed);
        let contents = fs::read_to_string(&runner.config().output_file).unwrap();
        assert_eq!(contents, "Level 1 solved in 42 moves\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_takaken_missing_output_file_is_errored() {
        let temp = TempDir::new().unwrap();
        let config = stub_config(temp.path());
        fs::write(&config.input_file, "#####\n").unwrap();
        // Exits zero without ever writing the -out file, so the echo read fails.
        write_stub(&config.takaken.exe, "#!/bin/sh\nexit 0\n");

        let runner = SolverRunner::new(config);
        let result = runner.run(&TakakenAdapter).await;

        assert_eq!(result.status, InvocationStatus::Errored);
        assert!(result
            .diagnostic
            .unwrap()
            .contains("Failed to run the takaken74 solver"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_empty_stdout_appends_placeholder() {
        let temp = TempDir::new().unwrap();
        let config = stub_config(temp.path());
        write_stub(&config.solver_two.exe, "#!/bin/sh\nexit 0\n");

        let runner = SolverRunner::new(config);
        let result = runner.run(&SolverTwoAdapter).await;

        assert_eq!(result.status, InvocationStatus::Completed);
        let contents = fs::read_to_string(&runner.config().output_file).unwrap();
        assert_eq!(
            contents,
            "\n--- Sokoban Solver Two Results ---\nNo output received.\n"
        );
    }
}
