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

//! Commands that work on captured output and saved results.

use crate::commands::{self, parse_input, InputArg, OutputOptions};
use crate::error::CliError;
use clap::{Args, Subcommand};
use xbench_core::SourceFormat;

/// Report destinations shared by every comparison command.
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Operations to include, comma separated (defaults to the configured or measured ones)
    #[arg(long, value_delimiter = ',')]
    pub operations: Vec<String>,

    /// Report title
    #[arg(long)]
    pub title: Option<String>,

    /// Also write the report as JSON to this file
    #[arg(long, value_name = "FILE")]
    pub json: Option<String>,

    /// Also write the report as Markdown to this file
    #[arg(long, value_name = "FILE")]
    pub markdown: Option<String>,
}

impl ReportArgs {
    pub(crate) fn output(&self) -> OutputOptions {
        OutputOptions {
            json: self.json.clone(),
            markdown: self.markdown.clone(),
        }
    }
}

/// Parsing and comparison of already captured benchmark output.
#[derive(Subcommand)]
pub enum AnalysisCommands {
    /// Normalize one captured benchmark output
    ///
    /// Prints the canonical `{ operation: nanoseconds }` mapping as JSON.
    Parse {
        /// Captured benchmark output
        #[arg(value_name = "FILE")]
        file: String,

        /// Output format (go-test, google-benchmark, c-summary, rust-bench)
        #[arg(short, long)]
        format: Option<SourceFormat>,

        /// Source identifier; selects the default format and is stripped as a language tag
        #[arg(short, long)]
        source: Option<String>,

        /// Additional language tag to strip (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Compare captured outputs of several sources
    ///
    /// Each input is `ID=PATH` or `ID:FORMAT=PATH`. The format defaults to
    /// the conventional one for go, cpp, c and rust.
    Compare {
        /// Captured output per source
        #[arg(short, long = "input", value_name = "ID=PATH", required = true, value_parser = parse_input)]
        inputs: Vec<InputArg>,

        /// Run configuration (YAML or JSON) giving source order and formats
        #[arg(short, long)]
        config: Option<String>,

        /// Save the normalized results to this file
        #[arg(long, value_name = "FILE")]
        save: Option<String>,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Re-render results saved by `run` or `compare --save`
    Report {
        /// Results file
        #[arg(value_name = "RESULTS")]
        results: String,

        /// Run configuration giving source order, title and operations
        #[arg(short, long)]
        config: Option<String>,

        #[command(flatten)]
        report: ReportArgs,
    },
}

impl AnalysisCommands {
    /// Execute the analysis command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            AnalysisCommands::Parse {
                file,
                format,
                source,
                tags,
                output,
                pretty,
            } => commands::parse(&file, format, source.as_deref(), &tags, output.as_deref(), pretty),
            AnalysisCommands::Compare {
                inputs,
                config,
                save,
                report,
            } => commands::compare(
                &inputs,
                config.as_deref(),
                &report.operations,
                report.title.as_deref(),
                save.as_deref(),
                &report.output(),
            ),
            AnalysisCommands::Report {
                results,
                config,
                report,
            } => commands::report(
                &results,
                config.as_deref(),
                &report.operations,
                report.title.as_deref(),
                &report.output(),
            ),
        }
    }
}
