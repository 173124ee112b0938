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

//! Report command - re-render persisted results

use super::print_source_failures;
use crate::config::RunConfig;
use crate::error::CliError;
use std::path::Path;
use tracing::info;
use xbench_core::config::DEFAULT_TITLE;
use xbench_core::{ComparisonReport, OperationName, ResultStore, SourceId};
use xbench_report::{export_json, export_markdown, load_results, print_report};

/// Where a report goes besides the console.
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    /// Write the JSON report here.
    pub json: Option<String>,
    /// Write the Markdown report here.
    pub markdown: Option<String>,
}

/// Re-render a persisted result store.
///
/// # Arguments
///
/// * `results` - Path to a results file written by `run` or `compare --save`
/// * `config` - Optional run configuration giving source order, title and operations
/// * `operations` - Operations to show, overriding the configuration
/// * `title` - Report title, overriding the configuration
/// * `output` - Additional report files
pub fn report(
    results: &str,
    config: Option<&str>,
    operations: &[String],
    title: Option<&str>,
    output: &OutputOptions,
) -> Result<(), CliError> {
    let store = load_results(Path::new(results))?;
    info!(path = results, sources = store.len(), "loaded results");

    let (config_title, config_ops, source_ids) = match config {
        Some(path) => {
            let comparison = RunConfig::load(path)?.comparison()?;
            let ids = comparison.source_ids();
            (Some(comparison.title), comparison.operations, ids)
        }
        None => (None, Vec::new(), store.sources().cloned().collect()),
    };

    let report = build_report(
        &store,
        title.map(str::to_string).or(config_title),
        config_ops,
        operations,
        &source_ids,
    )?;
    emit(&report, output)
}

/// Builds a report, resolving operations in priority order: explicit list,
/// configured list, then every operation in the store.
pub(crate) fn build_report(
    store: &ResultStore,
    title: Option<String>,
    configured: Vec<OperationName>,
    explicit: &[String],
    sources: &[SourceId],
) -> Result<ComparisonReport, CliError> {
    let mut operations = if explicit.is_empty() {
        configured
    } else {
        explicit
            .iter()
            .map(|op| OperationName::new(op))
            .collect::<Result<Vec<_>, _>>()?
    };
    if operations.is_empty() {
        operations = store.operations();
    }

    Ok(ComparisonReport::build(
        title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        store,
        &operations,
        sources,
    ))
}

/// Prints the report and writes the requested report files.
pub(crate) fn emit(report: &ComparisonReport, output: &OutputOptions) -> Result<(), CliError> {
    print_report(report);
    print_source_failures(report);

    if let Some(path) = &output.json {
        export_json(report, Path::new(path))?;
        info!(path = %path, "wrote JSON report");
    }
    if let Some(path) = &output.markdown {
        export_markdown(report, Path::new(path))?;
        info!(path = %path, "wrote Markdown report");
    }
    Ok(())
}
