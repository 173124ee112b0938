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

//! CLI command definitions and argument parsing.
//!
//! Commands are grouped by what they work on:
//!
//! - [`analysis`]: captured output and saved results (parse, compare, report)
//! - [`execution`]: running benchmark suites (run)
//! - [`utility`]: informational commands (formats)
//!
//! ```text
//! Commands
//! ├── Analysis (parse, compare, report)
//! ├── Execution (run)
//! └── Utility (formats)
//! ```

mod analysis;
mod execution;
mod utility;

use crate::error::CliError;
use clap::Subcommand;

pub use analysis::{AnalysisCommands, ReportArgs};
pub use execution::ExecutionCommands;
pub use utility::UtilityCommands;

/// Top-level CLI commands enum.
#[derive(Subcommand)]
pub enum Commands {
    // Analysis commands - flattened to appear at top level
    #[command(flatten)]
    Analysis(AnalysisCommands),

    // Execution commands - flattened to appear at top level
    #[command(flatten)]
    Execution(ExecutionCommands),

    // Utility commands - flattened to appear at top level
    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `Err` if file I/O fails, a configuration is invalid, or a
    /// captured output uses an unknown time unit (`parse` only; the
    /// comparison commands report such sources as failed instead).
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Analysis(cmd) => cmd.execute(),
            Commands::Execution(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
