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

//! Human-readable summary of a comparison matrix.
//!
//! Each present value is bucketed by magnitude purely to choose a display
//! unit. Buckets never change stored data. A value is bucketed as it will be
//! displayed, so 999.96 ns is shown as `1.00 µs`, never as `1000.0 ns`.

use crate::matrix::{Cell, ComparisonMatrix};
use crate::types::{OperationName, SourceId, TimeNanoseconds};
use serde::Serialize;

/// Display label for a missing measurement.
pub const ABSENT_LABEL: &str = "N/A";

/// Magnitude bucket of a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Magnitude {
    /// Below one microsecond; shown in ns.
    SubMicrosecond,
    /// Below one millisecond; shown in µs.
    SubMillisecond,
    /// One millisecond or more; shown in ms.
    Milliseconds,
}

impl Magnitude {
    /// Buckets a duration by its value after display rounding.
    pub fn of(time: TimeNanoseconds) -> Self {
        if displayed(time.get(), 1) < 1_000.0 {
            Magnitude::SubMicrosecond
        } else if displayed(time.as_micros(), 2) < 1_000.0 {
            Magnitude::SubMillisecond
        } else {
            Magnitude::Milliseconds
        }
    }
}

// Value as printed with `decimals` places.
fn displayed(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

/// Formats a duration in the unit chosen by its magnitude.
///
/// ```
/// use xbench_core::{summary::format_time, TimeNanoseconds};
///
/// assert_eq!(format_time(TimeNanoseconds::new(150.44).unwrap()), "150.4 ns");
/// assert_eq!(format_time(TimeNanoseconds::new(12_346.0).unwrap()), "12.35 µs");
/// assert_eq!(format_time(TimeNanoseconds::new(12_500_000.0).unwrap()), "12.50 ms");
/// ```
pub fn format_time(time: TimeNanoseconds) -> String {
    match Magnitude::of(time) {
        Magnitude::SubMicrosecond => format!("{:.1} ns", time.get()),
        Magnitude::SubMillisecond => format!("{:.2} µs", time.as_micros()),
        Magnitude::Milliseconds => format!("{:.2} ms", time.as_millis()),
    }
}

/// One displayed cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCell {
    /// Column source.
    pub source: SourceId,
    /// Formatted value, or [`ABSENT_LABEL`].
    pub display: String,
    /// Magnitude bucket; `None` when absent.
    pub magnitude: Option<Magnitude>,
    /// Time divided by the row's fastest time; `None` when absent or when
    /// the fastest time is zero and this one is not.
    pub relative: Option<f64>,
    /// Present, but slower than a recorded zero, so no ratio exists.
    pub relative_undefined: bool,
}

/// One displayed operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    /// Row operation.
    pub operation: OperationName,
    /// Cells in source order.
    pub cells: Vec<SummaryCell>,
    /// Fastest source, if any source measured the operation.
    pub fastest: Option<SourceId>,
}

/// Display-ready view of a [`ComparisonMatrix`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSummary {
    /// Rows in operation order.
    pub rows: Vec<SummaryRow>,
}

impl ComparisonSummary {
    /// Builds the summary of a matrix.
    pub fn from_matrix(matrix: &ComparisonMatrix) -> Self {
        let rows = matrix
            .rows()
            .enumerate()
            .map(|(row_idx, (operation, cells))| {
                let fastest = matrix.fastest_in_row(row_idx);
                let cells = cells
                    .iter()
                    .zip(matrix.sources())
                    .map(|(cell, source)| summarize_cell(*cell, source, fastest.map(|(_, t)| t)))
                    .collect();

                SummaryRow {
                    operation: operation.clone(),
                    cells,
                    fastest: fastest.map(|(column, _)| matrix.sources()[column].clone()),
                }
            })
            .collect();

        Self { rows }
    }

    /// Number of operations each source was fastest on, in source order of
    /// the first row. Sources that never win are listed with zero.
    pub fn wins(&self) -> Vec<(SourceId, usize)> {
        let Some(first) = self.rows.first() else {
            return Vec::new();
        };
        first
            .cells
            .iter()
            .map(|cell| {
                let count = self
                    .rows
                    .iter()
                    .filter(|row| row.fastest.as_ref() == Some(&cell.source))
                    .count();
                (cell.source.clone(), count)
            })
            .collect()
    }
}

fn summarize_cell(cell: Cell, source: &SourceId, fastest: Option<TimeNanoseconds>) -> SummaryCell {
    match cell {
        Cell::Present(time) => {
            let relative = fastest.and_then(|best| {
                if best.get() > 0.0 {
                    Some(time.get() / best.get())
                } else if time.get() == 0.0 {
                    Some(1.0)
                } else {
                    None
                }
            });
            SummaryCell {
                source: source.clone(),
                display: format_time(time),
                magnitude: Some(Magnitude::of(time)),
                relative_undefined: fastest.is_some() && relative.is_none(),
                relative,
            }
        }
        Cell::Absent => SummaryCell {
            source: source.clone(),
            display: ABSENT_LABEL.to_string(),
            magnitude: None,
            relative: None,
            relative_undefined: false,
        },
    }
}
