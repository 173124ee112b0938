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

//! Compare command - build a comparison from captured outputs

use super::read_file;
use super::report::{build_report, emit, OutputOptions};
use crate::config::{RunConfig, RunSource};
use crate::error::CliError;
use std::path::Path;
use tracing::warn;
use xbench_core::{ingest, ResultStore, SourceFormat, SourceSpec};
use xbench_report::save_results;

/// A captured output on the command line: `ID=PATH` or `ID:FORMAT=PATH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputArg {
    /// Source identifier.
    pub id: String,
    /// Explicit output format.
    pub format: Option<SourceFormat>,
    /// Path to the captured output.
    pub path: String,
}

/// Parses an `--input` value.
pub fn parse_input(value: &str) -> Result<InputArg, String> {
    let (source, path) = value
        .split_once('=')
        .ok_or_else(|| format!("expected ID=PATH or ID:FORMAT=PATH, got '{}'", value))?;
    if path.is_empty() {
        return Err(format!("missing path in '{}'", value));
    }

    let (id, format) = match source.split_once(':') {
        Some((id, format)) => (id, Some(format.parse::<SourceFormat>().map_err(|e| e.to_string())?)),
        None => (source, None),
    };
    if id.trim().is_empty() {
        return Err(format!("missing source identifier in '{}'", value));
    }

    Ok(InputArg {
        id: id.trim().to_string(),
        format,
        path: path.to_string(),
    })
}

/// Compare captured benchmark outputs.
///
/// Sources appear in configuration order when a configuration is given,
/// otherwise in command-line order. Configured sources without an input are
/// reported as not run. A source whose output cannot be normalized is
/// reported as failed; the others are still compared.
pub fn compare(
    inputs: &[InputArg],
    config: Option<&str>,
    operations: &[String],
    title: Option<&str>,
    save: Option<&str>,
    output: &OutputOptions,
) -> Result<(), CliError> {
    let run_config = config.map(RunConfig::load).transpose()?;

    let mut specs: Vec<SourceSpec> = match &run_config {
        Some(cfg) => cfg.comparison()?.sources,
        None => Vec::new(),
    };
    let mut store = ResultStore::new();

    for (idx, input) in inputs.iter().enumerate() {
        if inputs[..idx].iter().any(|other| other.id == input.id) {
            return Err(CliError::invalid_input(format!("source '{}' given more than once", input.id)));
        }

        let configured = run_config.as_ref().and_then(|cfg| cfg.source(&input.id));
        let mut source = configured.cloned().unwrap_or_else(|| RunSource::new(&input.id));
        if input.format.is_some() {
            source.format = input.format;
        }
        let spec = source.spec()?;

        match specs.iter_mut().find(|s| s.id == spec.id) {
            Some(existing) => *existing = spec.clone(),
            None => specs.push(spec.clone()),
        }

        let text = read_file(&input.path)?;
        if let Err(e) = ingest(&mut store, &spec, Some(&text)) {
            warn!(source = %spec.id, path = %input.path, error = %e, "skipping source");
        }
    }

    if let Some(path) = save {
        save_results(&store, Path::new(path))?;
    }

    let comparison = run_config.as_ref().map(RunConfig::comparison).transpose()?;
    let source_ids: Vec<_> = specs.iter().map(|s| s.id.clone()).collect();
    let report = build_report(
        &store,
        title
            .map(str::to_string)
            .or_else(|| comparison.as_ref().map(|c| c.title.clone())),
        comparison.map(|c| c.operations).unwrap_or_default(),
        operations,
        &source_ids,
    )?;
    emit(&report, output)
}
