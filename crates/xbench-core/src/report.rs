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

//! Complete comparison report.
//!
//! A [`ComparisonReport`] bundles everything a renderer needs: the matrix,
//! its display summary and one diagnostic line per source, so a reader can
//! tell a source that never ran from one that ran and measured nothing.

use crate::config::{ComparisonConfig, DEFAULT_TITLE};
use crate::matrix::ComparisonMatrix;
use crate::store::{ResultStore, SourceStatus};
use crate::summary::ComparisonSummary;
use crate::types::{OperationName, SourceId};
use serde::Serialize;

/// Diagnostic line for one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceDiagnostic {
    /// Source identifier.
    pub source: SourceId,
    /// Human-readable status (`3 operations`, `no data`, `failed: ...`).
    pub status: String,
    /// Number of recorded operations (including ones outside the report).
    pub operations: usize,
    /// Whether the source was recorded as failed.
    pub failed: bool,
    /// Whether the source was never recorded at all.
    pub missing: bool,
}

impl SourceDiagnostic {
    fn from_store(store: &ResultStore, source: &SourceId) -> Self {
        let status = store.status(source);
        Self {
            source: source.clone(),
            status: status.label(),
            operations: store.get(source).map_or(0, |r| r.len()),
            failed: matches!(status, SourceStatus::Failed(_)),
            missing: matches!(status, SourceStatus::NeverRecorded),
        }
    }
}

/// Comparison of several sources over a set of operations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    /// Report title.
    pub title: String,
    /// Generation time, RFC 3339 UTC.
    pub timestamp: String,
    /// Operation x source matrix.
    pub matrix: ComparisonMatrix,
    /// Display view of the matrix.
    pub summary: ComparisonSummary,
    /// One entry per source, in column order.
    pub diagnostics: Vec<SourceDiagnostic>,
}

impl ComparisonReport {
    /// Builds a report over explicit operations and sources.
    pub fn build(
        title: impl Into<String>,
        store: &ResultStore,
        operations: &[OperationName],
        sources: &[SourceId],
    ) -> Self {
        let matrix = ComparisonMatrix::build(store, operations, sources);
        let summary = ComparisonSummary::from_matrix(&matrix);
        let diagnostics = sources
            .iter()
            .map(|source| SourceDiagnostic::from_store(store, source))
            .collect();

        Self {
            title: title.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            matrix,
            summary,
            diagnostics,
        }
    }

    /// Builds a report for a configuration.
    ///
    /// An empty operation list falls back to every operation in the store.
    pub fn from_config(store: &ResultStore, config: &ComparisonConfig) -> Self {
        let operations = if config.operations.is_empty() {
            store.operations()
        } else {
            config.operations.clone()
        };
        Self::build(config.title.clone(), store, &operations, &config.source_ids())
    }

    /// Builds a report over everything in the store: all recorded sources
    /// in identifier order and all measured operations.
    pub fn from_store(store: &ResultStore) -> Self {
        let sources: Vec<SourceId> = store.sources().cloned().collect();
        Self::build(DEFAULT_TITLE, store, &store.operations(), &sources)
    }

    /// Replaces the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sources recorded as failed.
    pub fn failed_sources(&self) -> impl Iterator<Item = &SourceDiagnostic> {
        self.diagnostics.iter().filter(|d| d.failed)
    }
}
