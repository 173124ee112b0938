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

//! Parse command - normalize one captured output

use super::{read_file, write_output};
use crate::config::RunSource;
use crate::error::CliError;
use tracing::info;
use xbench_core::{normalize, DecorationTable, SourceFormat, SourceSpec};

/// Normalize one captured benchmark output and print it as JSON.
///
/// # Arguments
///
/// * `file` - Captured benchmark output
/// * `format` - Output format; inferred from `source` when absent
/// * `source` - Source identifier; also stripped as a language tag
/// * `tags` - Additional language tags to strip
/// * `output` - Output file (stdout when `None`)
/// * `pretty` - Pretty-print the JSON
///
/// # Errors
///
/// Returns `Err` if neither a format nor a source with a default format is
/// given, the file cannot be read, or a line uses an unknown time unit.
pub fn parse(
    file: &str,
    format: Option<SourceFormat>,
    source: Option<&str>,
    tags: &[String],
    output: Option<&str>,
    pretty: bool,
) -> Result<(), CliError> {
    let mut decorations = DecorationTable::empty();
    for tag in tags {
        decorations = decorations.with_tag(tag.clone());
    }

    let spec = match (source, format) {
        (Some(id), format) => {
            let mut run_source = RunSource::new(id);
            run_source.format = format;
            run_source.decorations = decorations;
            run_source.spec()?
        }
        (None, Some(format)) => SourceSpec::new(format.name(), format)?.with_decorations(decorations),
        (None, None) => {
            return Err(CliError::invalid_input(
                "either --format or --source with a known default format is required",
            ))
        }
    };

    let text = read_file(file)?;
    let samples = spec.format.parse(&text);
    let result = normalize(&samples, &spec.decoration_table())?;
    info!(file, format = %spec.format, samples = samples.len(), operations = result.len(), "parsed");

    let mut json = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    json.push('\n');
    write_output(&json, output)
}
