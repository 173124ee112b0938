// Dweve XBench - Cross-language benchmark comparison
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Execution of external build and benchmark commands.
//!
//! Commands run one at a time on a current-thread tokio runtime. Stdout is
//! captured in full and handed to the parser; stderr is captured only to be
//! logged when a command fails. A command still running at its timeout is
//! killed.
//!
//! A failing build step fails its source. A benchmark run that exits
//! non-zero still contributes whatever benchmark lines it printed.

use crate::config::{CommandSpec, RunConfig, RunSource, DEFAULT_BUILD_TIMEOUT_SECS, DEFAULT_RUN_TIMEOUT_SECS};
use crate::error::CliError;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};
use tokio::process::Command;
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, info, warn};

/// Captured result of a finished command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Everything the command wrote to stdout.
    pub stdout: String,
    /// Everything the command wrote to stderr.
    pub stderr: String,
    /// Exit status.
    pub status: ExitStatus,
    /// Wall-clock duration.
    pub elapsed: Duration,
}

impl CommandOutput {
    /// Whether the command exited successfully.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// The last few lines of stderr.
    fn stderr_tail(&self) -> String {
        let tail: Vec<&str> = self.stderr.lines().rev().take(5).collect();
        tail.into_iter().rev().collect::<Vec<_>>().join("\n")
    }
}

/// Creates the runtime that drives external commands.
pub fn runtime() -> Result<Runtime, CliError> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::Runtime { message: e.to_string() })
}

/// Runs one command in `cwd` to completion.
///
/// Fails when the command cannot be started or runs past `timeout`, in which
/// case it is killed. A non-zero exit is reported through
/// [`CommandOutput::status`], not as an error.
pub async fn run_command(command: &CommandSpec, cwd: &Path, timeout: Duration) -> Result<CommandOutput, CliError> {
    let cmdline = command.to_string();
    debug!(command = %cmdline, cwd = %cwd.display(), timeout_secs = timeout.as_secs(), "running command");

    let start = Instant::now();
    let child = Command::new(&command.program)
        .args(&command.args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output();

    let output = match tokio::time::timeout(timeout, child).await {
        Ok(result) => result.map_err(|e| CliError::Spawn {
            command: cmdline.clone(),
            message: e.to_string(),
        })?,
        Err(_) => {
            warn!(command = %cmdline, timeout_secs = timeout.as_secs(), "command timed out, killed");
            return Err(CliError::Timeout {
                command: cmdline,
                timeout_secs: timeout.as_secs(),
            });
        }
    };

    let output = CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        status: output.status,
        elapsed: start.elapsed(),
    };
    debug!(command = %cmdline, status = %output.status, elapsed_ms = output.elapsed.as_millis() as u64, "command finished");
    Ok(output)
}

/// Runs one command and fails unless it exits successfully.
pub async fn run_checked(command: &CommandSpec, cwd: &Path, timeout: Duration) -> Result<CommandOutput, CliError> {
    let output = run_command(command, cwd, timeout).await?;
    if !output.success() {
        warn!(command = %command, stderr = %output.stderr_tail(), "command failed");
        return Err(CliError::CommandFailed {
            command: command.to_string(),
            status: output.status.to_string(),
        });
    }
    Ok(output)
}

/// Builds (when configured) and runs one source, returning its stdout.
///
/// Returns `Ok(None)` for a source without a `run` command.
pub async fn run_source(config: &RunConfig, source: &RunSource) -> Result<Option<String>, CliError> {
    if let Some(build) = &source.build {
        info!(source = %source.id, command = %build, "building");
        let timeout = build.timeout_secs.unwrap_or(DEFAULT_BUILD_TIMEOUT_SECS);
        run_checked(build, &config.working_dir(build), Duration::from_secs(timeout)).await?;
    }

    let Some(run) = &source.run else {
        warn!(source = %source.id, "no run command configured");
        return Ok(None);
    };

    info!(source = %source.id, command = %run, "running benchmarks");
    let timeout = run.timeout_secs.unwrap_or(DEFAULT_RUN_TIMEOUT_SECS);
    let output = run_command(run, &config.working_dir(run), Duration::from_secs(timeout)).await?;
    if !output.success() {
        warn!(
            source = %source.id,
            status = %output.status,
            stderr = %output.stderr_tail(),
            "benchmark run exited unsuccessfully; keeping its output"
        );
    }
    Ok(Some(output.stdout))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> CommandSpec {
        CommandSpec::new("sh", &["-c", script])
    }

    #[tokio::test]
    async fn test_captures_stdout() {
        let out = run_command(
            &sh("echo 'BenchmarkGoNodeCreation-8 10 150.4 ns/op'"),
            Path::new("."),
            Duration::from_secs(10),
        )
        .await
        .unwrap();
        assert!(out.success());
        assert!(out.stdout.contains("150.4 ns/op"));
    }

    #[tokio::test]
    async fn test_non_zero_exit_keeps_output() {
        let out = run_command(&sh("echo partial; echo oops >&2; exit 3"), Path::new("."), Duration::from_secs(10))
            .await
            .unwrap();
        assert!(!out.success());
        assert_eq!(out.stdout.trim(), "partial");
        assert_eq!(out.stderr_tail(), "oops");
    }

    #[tokio::test]
    async fn test_run_checked_rejects_non_zero_exit() {
        let err = run_checked(&sh("exit 3"), Path::new("."), Duration::from_secs(10))
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::CommandFailed { .. }));
    }

    #[tokio::test]
    async fn test_timeout_kills() {
        let start = Instant::now();
        let err = run_command(&sh("sleep 5"), Path::new("."), Duration::from_millis(200))
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Timeout { .. }));
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[tokio::test]
    async fn test_spawn_failure() {
        let cmd = CommandSpec::new("definitely-not-a-real-benchmark-binary", &[]);
        let err = run_command(&cmd, Path::new("."), Duration::from_secs(1)).await.unwrap_err();
        assert!(matches!(err, CliError::Spawn { .. }));
    }

    #[tokio::test]
    async fn test_run_source_without_run_command() {
        let config = RunConfig::default();
        let source = RunSource::new("go");
        assert_eq!(run_source(&config, &source).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_failing_run_step_still_yields_benchmarks() {
        let config = RunConfig::default();
        let source = RunSource::new("go").with_run(sh("echo 'BenchmarkX-8 1 2 ns/op'; echo FAIL; exit 1"));
        let stdout = run_source(&config, &source).await.unwrap().unwrap();
        assert!(stdout.contains("BenchmarkX-8 1 2 ns/op"));
        assert!(stdout.contains("FAIL"));
    }

    #[tokio::test]
    async fn test_failing_build_step_fails_source() {
        let config = RunConfig::default();
        let source = RunSource::new("go")
            .with_build(sh("exit 2"))
            .with_run(sh("echo 'BenchmarkX-8 1 2 ns/op'"));
        let err = run_source(&config, &source).await.unwrap_err();
        assert!(matches!(err, CliError::CommandFailed { .. }));
    }

    #[test]
    fn test_runtime_drives_commands() {
        let runtime = runtime().unwrap();
        let out = runtime
            .block_on(run_command(&sh("echo ok"), Path::new("."), Duration::from_secs(10)))
            .unwrap();
        assert_eq!(out.stdout.trim(), "ok");
    }
}
