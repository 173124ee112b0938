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

//! CLI command implementations

mod compare;
mod formats;
mod parse;
mod report;
mod run;

pub use compare::{compare, parse_input, InputArg};
pub use formats::formats;
pub use parse::parse;
pub use report::{report, OutputOptions};
pub use run::run;

use crate::error::CliError;
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use xbench_core::ComparisonReport;

/// Default maximum input size (100 MB).
///
/// Can be overridden via the `XBENCH_MAX_INPUT_SIZE` environment variable.
pub const DEFAULT_MAX_INPUT_SIZE: u64 = 100 * 1024 * 1024;

fn get_max_input_size() -> u64 {
    std::env::var("XBENCH_MAX_INPUT_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_INPUT_SIZE)
}

/// Read a file from disk with size validation.
///
/// Files larger than the limit (see [`DEFAULT_MAX_INPUT_SIZE`]) are rejected
/// before any memory is allocated for them.
///
/// # Errors
///
/// Returns `Err` if the file metadata cannot be accessed, the file is too
/// large, or the file cannot be read as UTF-8.
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max = get_max_input_size();
    if metadata.len() > max {
        return Err(CliError::file_too_large(path, metadata.len(), max));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file or stdout.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

/// Prints one warning line per failed source to stderr.
pub(crate) fn print_source_failures(report: &ComparisonReport) {
    for diag in report.failed_sources() {
        eprintln!("{} {}: {}", "✗".red().bold(), diag.source, diag.status);
    }
}
