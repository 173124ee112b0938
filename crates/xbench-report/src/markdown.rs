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

//! Markdown export for comparison reports.

use crate::error::{ReportError, Result};
use std::fs;
use std::path::Path;
use xbench_core::ComparisonReport;

/// Renders a report as a Markdown document.
pub fn render_markdown(report: &ComparisonReport) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", report.title));
    md.push_str(&format!("**Timestamp:** {}\n\n", report.timestamp));

    md.push_str("## Results\n\n");
    md.push_str("| Operation |");
    for source in report.matrix.sources() {
        md.push_str(&format!(" {} |", source));
    }
    md.push_str(" Fastest |\n");
    md.push_str("|-----------|");
    for _ in report.matrix.sources() {
        md.push_str("------|");
    }
    md.push_str("---------|\n");

    for row in &report.summary.rows {
        md.push_str(&format!("| {} |", row.operation.title()));
        for cell in &row.cells {
            let fastest = row.fastest.as_ref() == Some(&cell.source);
            if fastest {
                md.push_str(&format!(" **{}** |", cell.display));
            } else {
                md.push_str(&format!(" {} |", cell.display));
            }
        }
        let fastest = row
            .fastest
            .as_ref()
            .map_or_else(|| "-".to_string(), |s| s.to_string());
        md.push_str(&format!(" {} |\n", fastest));
    }

    if !report.diagnostics.is_empty() {
        md.push_str("\n## Sources\n\n");
        for diag in &report.diagnostics {
            md.push_str(&format!("- **{}**: {}\n", diag.source, diag.status));
        }
    }

    md
}

/// Writes a report as Markdown to `path`.
pub fn export_markdown(report: &ComparisonReport, path: &Path) -> Result<()> {
    fs::write(path, render_markdown(report)).map_err(|e| ReportError::io(path, e))
}
