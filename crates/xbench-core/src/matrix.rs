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

//! Operation x source comparison matrix.

use crate::store::ResultStore;
use crate::types::{OperationName, SourceId, TimeNanoseconds};
use serde::{Serialize, Serializer};

/// One matrix cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    /// The source measured the operation.
    Present(TimeNanoseconds),
    /// The source has no measurement for the operation.
    Absent,
}

impl Cell {
    /// The measured time, if present.
    pub fn time(self) -> Option<TimeNanoseconds> {
        match self {
            Cell::Present(time) => Some(time),
            Cell::Absent => None,
        }
    }

    /// Returns whether the cell holds a measurement.
    pub fn is_present(self) -> bool {
        matches!(self, Cell::Present(_))
    }
}

impl From<Option<TimeNanoseconds>> for Cell {
    fn from(value: Option<TimeNanoseconds>) -> Self {
        value.map_or(Cell::Absent, Cell::Present)
    }
}

/// Serialized as the number of nanoseconds, or `null` when absent.
impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Present(time) => serializer.serialize_f64(time.get()),
            Cell::Absent => serializer.serialize_none(),
        }
    }
}

/// Dense cross-tabulation of operations (rows) against sources (columns).
///
/// Built purely from [`ResultStore::lookup`]; it holds no data the store does
/// not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonMatrix {
    operations: Vec<OperationName>,
    sources: Vec<SourceId>,
    cells: Vec<Vec<Cell>>,
}

impl ComparisonMatrix {
    /// Builds the matrix in the given row and column order.
    pub fn build(store: &ResultStore, operations: &[OperationName], sources: &[SourceId]) -> Self {
        let cells = operations
            .iter()
            .map(|op| {
                sources
                    .iter()
                    .map(|source| Cell::from(store.lookup(source, op)))
                    .collect()
            })
            .collect();

        Self {
            operations: operations.to_vec(),
            sources: sources.to_vec(),
            cells,
        }
    }

    /// Row labels.
    pub fn operations(&self) -> &[OperationName] {
        &self.operations
    }

    /// Column labels.
    pub fn sources(&self) -> &[SourceId] {
        &self.sources
    }

    /// The cell at (`row`, `column`); `Absent` when out of range.
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells
            .get(row)
            .and_then(|r| r.get(column))
            .copied()
            .unwrap_or(Cell::Absent)
    }

    /// The cell for a named operation and source.
    pub fn get(&self, operation: &OperationName, source: &SourceId) -> Cell {
        let row = self.operations.iter().position(|op| op == operation);
        let column = self.sources.iter().position(|s| s == source);
        match (row, column) {
            (Some(row), Some(column)) => self.cell(row, column),
            _ => Cell::Absent,
        }
    }

    /// All cells of one operation, in source order.
    pub fn row(&self, row: usize) -> &[Cell] {
        self.cells.get(row).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All cells of one source, in operation order.
    pub fn column(&self, column: usize) -> Vec<Cell> {
        (0..self.operations.len())
            .map(|row| self.cell(row, column))
            .collect()
    }

    /// Iterates `(operation, cells)` rows.
    pub fn rows(&self) -> impl Iterator<Item = (&OperationName, &[Cell])> {
        self.operations
            .iter()
            .zip(self.cells.iter().map(Vec::as_slice))
    }

    /// Number of present cells.
    pub fn present_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_present()).count()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.operations.len() * self.sources.len()
    }

    /// Column index and time of the fastest present cell in a row.
    ///
    /// Ties go to the earlier column.
    pub fn fastest_in_row(&self, row: usize) -> Option<(usize, TimeNanoseconds)> {
        self.row(row)
            .iter()
            .enumerate()
            .filter_map(|(column, cell)| cell.time().map(|t| (column, t)))
            .fold(None, |best: Option<(usize, TimeNanoseconds)>, (column, time)| match best {
                Some((_, best_time)) if best_time.get() <= time.get() => best,
                _ => Some((column, time)),
            })
    }
}
