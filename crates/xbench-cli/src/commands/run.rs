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

//! Run command - build and run every benchmark suite, then compare

use super::report::{build_report, emit, OutputOptions};
use crate::config::RunConfig;
use crate::error::CliError;
use crate::runner::{run_source, runtime};
use colored::Colorize;
use std::path::Path;
use tracing::warn;
use xbench_core::{ingest, ResultStore};
use xbench_report::save_results;

/// Run the configured benchmark suites one after another.
///
/// A source whose build fails, whose commands time out, or whose output
/// cannot be normalized is recorded as failed; the remaining sources still
/// run. A benchmark run that exits non-zero keeps the lines it printed.
/// Results are saved to `results` before the report is printed.
///
/// # Arguments
///
/// * `config` - Run configuration (the four default backends when `None`)
/// * `only` - Restrict the run to these source identifiers
/// * `results` - Where to save the result store
/// * `operations` - Operations to show, overriding the configuration
/// * `title` - Report title, overriding the configuration
/// * `output` - Additional report files
pub fn run(
    config: Option<&str>,
    only: &[String],
    results: &str,
    operations: &[String],
    title: Option<&str>,
    output: &OutputOptions,
) -> Result<(), CliError> {
    let config = RunConfig::load_or_default(config)?;
    let comparison = config.comparison()?;

    if let Some(unknown) = only.iter().find(|id| config.source(id).is_none()) {
        return Err(CliError::invalid_input(format!("unknown source '{}'", unknown)));
    }

    let runtime = runtime()?;
    let mut store = ResultStore::new();
    for (source, spec) in config.sources.iter().zip(&comparison.sources) {
        if !only.is_empty() && !only.contains(&source.id) {
            continue;
        }

        eprintln!("{} {}", "Running".cyan().bold(), source.id);
        match runtime.block_on(run_source(&config, source)) {
            Ok(text) => {
                if let Err(e) = ingest(&mut store, spec, text.as_deref()) {
                    warn!(source = %spec.id, error = %e, "output could not be normalized");
                }
            }
            Err(e) => {
                warn!(source = %spec.id, error = %e, "benchmark run failed");
                store.record_failure(spec.id.clone(), e.to_string());
            }
        }
    }

    save_results(&store, Path::new(results))?;
    eprintln!("{} {}", "Saved".green().bold(), results);

    let report = build_report(
        &store,
        Some(title.map_or_else(|| comparison.title.clone(), str::to_string)),
        comparison.operations.clone(),
        operations,
        &comparison.source_ids(),
    )?;
    emit(&report, output)
}
