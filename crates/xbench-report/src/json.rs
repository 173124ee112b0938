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

//! JSON export of reports and persistence of result stores.
//!
//! A persisted store is a plain `{ source: { operation: nanoseconds } }`
//! object, so results written by one run can be compared or re-rendered
//! later without re-running anything.

use crate::error::{ReportError, Result};
use std::fs;
use std::path::Path;
use tracing::info;
use xbench_core::{ComparisonReport, ResultStore};

/// Default file name for persisted results.
pub const DEFAULT_RESULTS_FILE: &str = "benchmark_results.json";

/// Renders a report as pretty-printed JSON.
///
/// Absent matrix cells are `null`.
pub fn render_json(report: &ComparisonReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| ReportError::json(Path::new("<memory>"), e))
}

/// Writes a report as JSON to `path`.
pub fn export_json(report: &ComparisonReport, path: &Path) -> Result<()> {
    let json = render_json(report)?;
    fs::write(path, json).map_err(|e| ReportError::io(path, e))
}

/// Persists a result store to `path`.
pub fn save_results(store: &ResultStore, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(store).map_err(|e| ReportError::json(path, e))?;
    fs::write(path, json).map_err(|e| ReportError::io(path, e))?;
    info!(path = %path.display(), sources = store.len(), "saved benchmark results");
    Ok(())
}

/// Loads a result store persisted by [`save_results`].
///
/// Every loaded source is marked completed; failure reasons are not
/// persisted.
pub fn load_results(path: &Path) -> Result<ResultStore> {
    let content = fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| ReportError::json(path, e))
}
