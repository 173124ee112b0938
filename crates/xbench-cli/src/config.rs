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

//! Run configuration files.
//!
//! A run configuration lists the sources to compare, how to read their
//! output and, for `xbench run`, how to build and execute each benchmark
//! suite. Files are YAML (`.yaml`, `.yml`) or JSON (anything else).
//!
//! ```yaml
//! title: Mesh backends
//! operations: [node_creation, message_send]
//! sources:
//!   - id: go
//!     run: { program: go, args: [test, -bench=., -benchmem, ./tests/benchmark] }
//!   - id: zig
//!     format: google-benchmark
//!     build: { program: zig, args: [build, bench], timeout_secs: 120 }
//!     run: { program: ./zig-out/bin/bench }
//! ```

use crate::commands::read_file;
use crate::error::CliError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use xbench_core::config::DEFAULT_TITLE;
use xbench_core::{ComparisonConfig, DecorationTable, SourceFormat, SourceSpec};

/// Default timeout for build steps, in seconds.
pub const DEFAULT_BUILD_TIMEOUT_SECS: u64 = 60;

/// Default timeout for benchmark runs, in seconds.
pub const DEFAULT_RUN_TIMEOUT_SECS: u64 = 300;

/// An external command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Program to execute (looked up on `PATH` unless it contains a `/`).
    pub program: String,
    /// Arguments.
    #[serde(default)]
    pub args: Vec<String>,
    /// Working directory, relative to the configuration's base directory.
    #[serde(default)]
    pub cwd: Option<PathBuf>,
    /// Timeout in seconds; the role default applies when absent.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl CommandSpec {
    /// Creates a command.
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: None,
            timeout_secs: None,
        }
    }

    /// Sets the working directory.
    pub fn in_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Sets the timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// One source of a run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSource {
    /// Source identifier.
    pub id: String,
    /// Output format; inferred from the identifier when absent.
    #[serde(default)]
    pub format: Option<SourceFormat>,
    /// Extra name decorations.
    #[serde(default)]
    pub decorations: DecorationTable,
    /// Optional build step, run before `run`.
    #[serde(default)]
    pub build: Option<CommandSpec>,
    /// Benchmark command whose stdout is parsed.
    #[serde(default)]
    pub run: Option<CommandSpec>,
}

impl RunSource {
    /// Creates a source with no commands.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            format: None,
            decorations: DecorationTable::empty(),
            build: None,
            run: None,
        }
    }

    /// Sets the build step.
    pub fn with_build(mut self, build: CommandSpec) -> Self {
        self.build = Some(build);
        self
    }

    /// Sets the benchmark command.
    pub fn with_run(mut self, run: CommandSpec) -> Self {
        self.run = Some(run);
        self
    }

    /// The normalization settings of this source.
    ///
    /// The identifier always counts as a language tag.
    pub fn spec(&self) -> Result<SourceSpec, CliError> {
        let format = match self.format {
            Some(format) => format,
            None => SourceFormat::default_for_source(self.id.trim()).ok_or_else(|| {
                CliError::config(format!(
                    "source '{}' has no default format; set `format` to one of: {}",
                    self.id,
                    format_names()
                ))
            })?,
        };
        let decorations = self.decorations.clone().with_tag(self.id.trim());
        Ok(SourceSpec::new(&self.id, format)?.with_decorations(decorations))
    }
}

/// Complete configuration of a comparison or run.
///
/// Fields missing from a file are empty, not the [`Default`] mesh preset;
/// the preset applies only when no file is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Report title.
    #[serde(default = "default_title")]
    pub title: String,
    /// Operations of interest; empty means every measured operation.
    #[serde(default)]
    pub operations: Vec<String>,
    /// Sources in report order.
    #[serde(default)]
    pub sources: Vec<RunSource>,
    /// Base directory for relative working directories. Set from the
    /// configuration file's location when loading.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for RunConfig {
    /// The four mesh backends and the commands their suites are run with.
    fn default() -> Self {
        let sources = vec![
            RunSource::new("go").with_run(
                CommandSpec::new("go", &["test", "-bench=.", "-benchmem", "./tests/benchmark"])
                    .with_timeout(DEFAULT_RUN_TIMEOUT_SECS),
            ),
            RunSource::new("cpp")
                .with_build(CommandSpec::new("make", &["cpp-bench"]).with_timeout(DEFAULT_BUILD_TIMEOUT_SECS))
                .with_run(CommandSpec::new("./build/cpp-bench", &[]).with_timeout(DEFAULT_RUN_TIMEOUT_SECS)),
            RunSource::new("c")
                .with_build(CommandSpec::new("make", &["c-bench"]).with_timeout(DEFAULT_BUILD_TIMEOUT_SECS))
                .with_run(CommandSpec::new("./build/c-bench", &[]).with_timeout(DEFAULT_RUN_TIMEOUT_SECS)),
            RunSource::new("rust").with_run(
                CommandSpec::new("cargo", &["bench"])
                    .in_dir("rust")
                    .with_timeout(DEFAULT_RUN_TIMEOUT_SECS),
            ),
        ];

        Self {
            title: DEFAULT_TITLE.to_string(),
            operations: xbench_core::DEFAULT_OPERATIONS.iter().map(|s| s.to_string()).collect(),
            sources,
            base_dir: PathBuf::from("."),
        }
    }
}

impl RunConfig {
    /// Loads a configuration file (YAML or JSON by extension).
    pub fn load(path: &str) -> Result<Self, CliError> {
        let content = read_file(path)?;
        let is_yaml = matches!(
            Path::new(path).extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        let mut config: RunConfig = if is_yaml {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };

        config.base_dir = Path::new(path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when given, otherwise returns the default configuration.
    pub fn load_or_default(path: Option<&str>) -> Result<Self, CliError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Checks that every source resolves and the comparison is consistent.
    pub fn validate(&self) -> Result<(), CliError> {
        self.comparison()?.validate()?;
        Ok(())
    }

    /// The core comparison configuration.
    pub fn comparison(&self) -> Result<ComparisonConfig, CliError> {
        let ops: Vec<&str> = self.operations.iter().map(String::as_str).collect();
        let mut config = ComparisonConfig::empty()
            .with_title(self.title.clone())
            .with_operations(&ops)?;
        for source in &self.sources {
            config.sources.push(source.spec()?);
        }
        Ok(config)
    }

    /// Looks up a source by identifier.
    pub fn source(&self, id: &str) -> Option<&RunSource> {
        self.sources.iter().find(|s| s.id == id)
    }

    /// Resolves a command's working directory against the base directory.
    pub fn working_dir(&self, command: &CommandSpec) -> PathBuf {
        match &command.cwd {
            Some(cwd) if cwd.is_absolute() => cwd.clone(),
            Some(cwd) => self.base_dir.join(cwd),
            None => self.base_dir.clone(),
        }
    }
}

/// Comma separated list of format names.
pub fn format_names() -> String {
    SourceFormat::ALL
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}
