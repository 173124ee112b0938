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

//! Ingestion of captured benchmark output into a [`ResultStore`].
//!
//! Each source is handled independently. A source whose output cannot be
//! normalized is recorded as failed and its error is handed back, but the
//! remaining sources are still processed.

use crate::config::SourceSpec;
use crate::error::FormatError;
use crate::normalize::normalize;
use crate::store::{ResultStore, SourceResult};
use crate::types::SourceId;
use tracing::{debug, info, warn};

/// Parses, normalizes and records the output of one source.
///
/// `None` or blank output is recorded as a completed source without
/// measurements.
///
/// # Errors
///
/// Returns the [`FormatError`] that halted normalization. The source is
/// recorded as failed before returning.
pub fn ingest(store: &mut ResultStore, source: &SourceSpec, output: Option<&str>) -> Result<usize, FormatError> {
    let text = match output {
        Some(text) if !text.trim().is_empty() => text,
        _ => {
            info!(source = %source.id, "no benchmark output, recording empty result");
            store.record(source.id.clone(), SourceResult::new());
            return Ok(0);
        }
    };

    let samples = source.format.parse(text);
    debug!(source = %source.id, format = %source.format, samples = samples.len(), "parsed benchmark output");

    match normalize(&samples, &source.decoration_table()) {
        Ok(result) => {
            let count = result.len();
            info!(source = %source.id, operations = count, "ingested benchmark output");
            store.record(source.id.clone(), result);
            Ok(count)
        }
        Err(e) => {
            warn!(source = %source.id, error = %e, "normalization failed");
            store.record_failure(source.id.clone(), e.to_string());
            Err(e)
        }
    }
}

/// Ingests several sources in order.
///
/// Returns the errors of the sources that failed; an empty vector means every
/// source was recorded as completed.
pub fn ingest_all<'a, 'b, I>(store: &mut ResultStore, inputs: I) -> Vec<(SourceId, FormatError)>
where
    I: IntoIterator<Item = (&'a SourceSpec, Option<&'b str>)>,
{
    inputs
        .into_iter()
        .filter_map(|(source, output)| {
            ingest(store, source, output)
                .err()
                .map(|e| (source.id.clone(), e))
        })
        .collect()
}
