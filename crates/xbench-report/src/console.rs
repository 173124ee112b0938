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

//! Console reporter for comparison reports.
//!
//! Renders the summary as a fixed-width table: one row per operation, one
//! column per source, plus the fastest source. Present cells slower than the
//! fastest carry their ratio (`1.52 µs (10.12x)`).

use xbench_core::{ComparisonReport, SummaryCell};

const RULE_WIDTH: usize = 80;

/// Renders the full report: header, table, source diagnostics and wins.
pub fn render_report(report: &ComparisonReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "=".repeat(RULE_WIDTH)));
    out.push_str(&format!("{}\n", report.title));
    out.push_str(&format!("{}\n", "=".repeat(RULE_WIDTH)));
    out.push_str(&format!("Timestamp: {}\n\n", report.timestamp));

    out.push_str(&render_table(report));

    if !report.diagnostics.is_empty() {
        out.push_str("\nSources:\n");
        let width = report
            .diagnostics
            .iter()
            .map(|d| d.source.as_str().chars().count())
            .max()
            .unwrap_or(0);
        for diag in &report.diagnostics {
            out.push_str(&format!("  {:<width$}  {}\n", diag.source.as_str(), diag.status, width = width));
        }
    }

    let wins: Vec<String> = report
        .summary
        .wins()
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(source, count)| format!("{} {}", source, count))
        .collect();
    if !wins.is_empty() {
        out.push_str(&format!("\nFastest per operation: {}\n", wins.join(", ")));
    }

    out
}

/// Renders only the comparison table.
pub fn render_table(report: &ComparisonReport) -> String {
    let mut header = vec!["Operation".to_string()];
    header.extend(report.matrix.sources().iter().map(|s| s.to_string()));
    header.push("Fastest".to_string());

    let rows: Vec<Vec<String>> = report
        .summary
        .rows
        .iter()
        .map(|row| {
            let present = row.cells.iter().filter(|c| c.magnitude.is_some()).count();
            let mut line = vec![row.operation.title()];
            line.extend(row.cells.iter().map(|cell| cell_text(cell, present > 1)));
            line.push(row.fastest.as_ref().map_or_else(|| "-".to_string(), |s| s.to_string()));
            line
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            std::iter::once(&header)
                .chain(rows.iter())
                .map(|r| r[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&format_line(&header, &widths));
    let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    out.push_str(&format!("{}\n", "-".repeat(total)));
    for row in &rows {
        out.push_str(&format_line(row, &widths));
    }
    out
}

/// Prints the full report to stdout.
pub fn print_report(report: &ComparisonReport) {
    print!("{}", render_report(report));
}

fn cell_text(cell: &SummaryCell, show_ratio: bool) -> String {
    match cell.relative {
        Some(ratio) if show_ratio && ratio > 1.0 && ratio.is_finite() => {
            format!("{} ({:.2}x)", cell.display, ratio)
        }
        _ => cell.display.clone(),
    }
}

fn format_line(fields: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = fields
        .iter()
        .zip(widths)
        .map(|(field, &width)| {
            let pad = width.saturating_sub(field.chars().count());
            format!("{}{}", field, " ".repeat(pad))
        })
        .collect();
    format!("{}\n", padded.join("  ").trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use xbench_core::{OperationName, ResultStore, SourceId, TimeNanoseconds};

    fn report() -> ComparisonReport {
        let op = |s: &str| OperationName::new(s).unwrap();
        let src = |s: &str| SourceId::new(s).unwrap();
        let ns = |v: f64| TimeNanoseconds::new(v).unwrap();

        let mut store = ResultStore::new();
        store.record(src("go"), vec![(op("node_creation"), ns(150.0))].into_iter().collect());
        store.record(src("rust"), vec![(op("node_creation"), ns(300.0))].into_iter().collect());
        store.record_failure(src("cpp"), "exit status 2");

        ComparisonReport::build(
            "Mesh",
            &store,
            &[op("node_creation"), op("message_send")],
            &[src("go"), src("cpp"), src("rust")],
        )
    }

    #[test]
    fn test_render_table() {
        let table = render_table(&report());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Operation"));
        assert!(lines[0].ends_with("Fastest"));
        assert!(lines[2].starts_with("Node Creation"));
        assert!(lines[2].contains("150.0 ns"));
        assert!(lines[2].contains("300.0 ns (2.00x)"));
        assert!(lines[2].ends_with("go"));
        assert!(lines[3].contains("N/A"));
        assert!(lines[3].ends_with('-'));
    }

    #[test]
    fn test_render_report_lists_sources() {
        let text = render_report(&report());
        assert!(text.contains("Mesh"));
        assert!(text.contains("Timestamp:"));
        assert!(text.contains("cpp   failed: exit status 2"));
        assert!(text.contains("rust  1 operation"));
        assert!(text.contains("Fastest per operation: go 1"));
    }
}
