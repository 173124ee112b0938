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

//! Commands that build and run benchmark suites.

use super::analysis::ReportArgs;
use crate::commands;
use crate::error::CliError;
use clap::Subcommand;
use xbench_report::DEFAULT_RESULTS_FILE;

/// Execution of external benchmark suites.
#[derive(Subcommand)]
pub enum ExecutionCommands {
    /// Build and run every configured benchmark suite, then compare
    ///
    /// Without a configuration the Go, C++, C and Rust suites are run from
    /// the current directory. A suite that fails to build, fails to run or
    /// times out is reported as failed; the others still run.
    Run {
        /// Run configuration (YAML or JSON)
        #[arg(short, long)]
        config: Option<String>,

        /// Only run these sources (repeatable)
        #[arg(long = "only", value_name = "ID")]
        only: Vec<String>,

        /// Where to save the normalized results
        #[arg(short, long, default_value = DEFAULT_RESULTS_FILE)]
        results: String,

        #[command(flatten)]
        report: ReportArgs,
    },
}

impl ExecutionCommands {
    /// Execute the command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ExecutionCommands::Run {
                config,
                only,
                results,
                report,
            } => commands::run(
                config.as_deref(),
                &only,
                &results,
                &report.operations,
                report.title.as_deref(),
                &report.output(),
            ),
        }
    }
}
