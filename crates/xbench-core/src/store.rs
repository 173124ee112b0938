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

//! Per-source result accumulation.
//!
//! A [`ResultStore`] owns one [`SourceResult`] per [`SourceId`] for a whole
//! comparison run. Recording a source replaces whatever was stored for it
//! before; results from different runs of the same source are never merged.
//!
//! The store keeps track of *why* a source has no data. A source that ran and
//! produced nothing parseable, a source whose run failed, and a source that
//! was never recorded all look the same through [`ResultStore::lookup`], but
//! [`ResultStore::status`] tells them apart for diagnostics.

use crate::types::{OperationName, SourceId, TimeNanoseconds};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::btree_map::{self, BTreeMap};
use std::collections::BTreeSet;
use tracing::debug;

/// Normalized measurements of one source: operation -> time per iteration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceResult {
    entries: BTreeMap<OperationName, TimeNanoseconds>,
}

impl SourceResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a measurement, returning the value it replaced.
    pub fn insert(&mut self, operation: OperationName, time: TimeNanoseconds) -> Option<TimeNanoseconds> {
        self.entries.insert(operation, time)
    }

    /// Looks up a measurement.
    pub fn get(&self, operation: &OperationName) -> Option<TimeNanoseconds> {
        self.entries.get(operation).copied()
    }

    /// Looks up a measurement by canonical name.
    pub fn get_str(&self, operation: &str) -> Option<TimeNanoseconds> {
        self.entries
            .iter()
            .find(|(name, _)| name.as_str() == operation)
            .map(|(_, time)| *time)
    }

    /// Number of measured operations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no operation was measured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates measurements in operation-name order.
    pub fn iter(&self) -> btree_map::Iter<'_, OperationName, TimeNanoseconds> {
        self.entries.iter()
    }

    /// Operation names in order.
    pub fn operations(&self) -> impl Iterator<Item = &OperationName> {
        self.entries.keys()
    }
}

impl<'a> IntoIterator for &'a SourceResult {
    type Item = (&'a OperationName, &'a TimeNanoseconds);
    type IntoIter = btree_map::Iter<'a, OperationName, TimeNanoseconds>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(OperationName, TimeNanoseconds)> for SourceResult {
    fn from_iter<I: IntoIterator<Item = (OperationName, TimeNanoseconds)>>(iter: I) -> Self {
        SourceResult {
            entries: iter.into_iter().collect(),
        }
    }
}

/// How a source came to be in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SourceOutcome {
    /// The source's output was parsed (possibly yielding no measurements).
    Completed,
    /// The run or its normalization failed; no measurements are kept.
    Failed {
        /// What went wrong.
        reason: String,
    },
}

/// Diagnostic view of one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceStatus {
    /// Never recorded in this run.
    NeverRecorded,
    /// Ran and was parsed, but produced no measurements.
    Empty,
    /// Ran and produced this many measurements.
    Populated(usize),
    /// Ran and failed.
    Failed(String),
}

impl SourceStatus {
    /// Short label for reports.
    pub fn label(&self) -> String {
        match self {
            SourceStatus::NeverRecorded => "not run".to_string(),
            SourceStatus::Empty => "no data".to_string(),
            SourceStatus::Populated(1) => "1 operation".to_string(),
            SourceStatus::Populated(n) => format!("{} operations", n),
            SourceStatus::Failed(reason) => format!("failed: {}", reason),
        }
    }

    /// Returns whether the source has at least one measurement.
    pub fn has_data(&self) -> bool {
        matches!(self, SourceStatus::Populated(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
struct SourceEntry {
    outcome: SourceOutcome,
    result: SourceResult,
}

/// All source results of one comparison run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultStore {
    sources: BTreeMap<SourceId, SourceEntry>,
}

impl ResultStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a parsed source, replacing any previous entry for it.
    pub fn record(&mut self, source: SourceId, result: SourceResult) {
        debug!(source = %source, operations = result.len(), "recording source");
        self.sources.insert(
            source,
            SourceEntry {
                outcome: SourceOutcome::Completed,
                result,
            },
        );
    }

    /// Records a source whose run failed, replacing any previous entry for it.
    ///
    /// The source stays present with an empty result so reports can show
    /// "no data" explicitly.
    pub fn record_failure(&mut self, source: SourceId, reason: impl Into<String>) {
        let reason = reason.into();
        debug!(source = %source, reason = %reason, "recording failed source");
        self.sources.insert(
            source,
            SourceEntry {
                outcome: SourceOutcome::Failed { reason },
                result: SourceResult::new(),
            },
        );
    }

    /// Looks up the time of `operation` for `source`.
    ///
    /// `None` when the source was never recorded or has no such operation.
    pub fn lookup(&self, source: &SourceId, operation: &OperationName) -> Option<TimeNanoseconds> {
        self.sources
            .get(source)
            .and_then(|entry| entry.result.get(operation))
    }

    /// The recorded result of a source.
    pub fn get(&self, source: &SourceId) -> Option<&SourceResult> {
        self.sources.get(source).map(|entry| &entry.result)
    }

    /// Diagnostic status of a source.
    pub fn status(&self, source: &SourceId) -> SourceStatus {
        match self.sources.get(source) {
            None => SourceStatus::NeverRecorded,
            Some(SourceEntry {
                outcome: SourceOutcome::Failed { reason },
                ..
            }) => SourceStatus::Failed(reason.clone()),
            Some(entry) if entry.result.is_empty() => SourceStatus::Empty,
            Some(entry) => SourceStatus::Populated(entry.result.len()),
        }
    }

    /// Returns whether `source` has an entry (even an empty one).
    pub fn contains(&self, source: &SourceId) -> bool {
        self.sources.contains_key(source)
    }

    /// Recorded sources in identifier order.
    pub fn sources(&self) -> impl Iterator<Item = &SourceId> {
        self.sources.keys()
    }

    /// Every operation measured by any source, sorted and de-duplicated.
    pub fn operations(&self) -> Vec<OperationName> {
        let all: BTreeSet<&OperationName> = self
            .sources
            .values()
            .flat_map(|entry| entry.result.operations())
            .collect();
        all.into_iter().cloned().collect()
    }

    /// Number of recorded sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns whether no source was recorded.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Serialized as `{ source: { operation: nanoseconds } }`.
impl Serialize for ResultStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sources.len()))?;
        for (source, entry) in &self.sources {
            map.serialize_entry(source, &entry.result)?;
        }
        map.end()
    }
}

/// Every deserialized source is marked completed.
impl<'de> Deserialize<'de> for ResultStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<SourceId, SourceResult>::deserialize(deserializer)?;
        let mut store = ResultStore::new();
        for (source, result) in raw {
            store.record(source, result);
        }
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(name: &str) -> OperationName {
        OperationName::new(name).unwrap()
    }

    fn src(id: &str) -> SourceId {
        SourceId::new(id).unwrap()
    }

    fn ns(v: f64) -> TimeNanoseconds {
        TimeNanoseconds::new(v).unwrap()
    }

    #[test]
    fn test_record_and_lookup() {
        let mut store = ResultStore::new();
        let result: SourceResult = vec![(op("node_creation"), ns(150.4))].into_iter().collect();
        store.record(src("go"), result);

        assert_eq!(store.lookup(&src("go"), &op("node_creation")), Some(ns(150.4)));
        assert_eq!(store.lookup(&src("go"), &op("message_send")), None);
        assert_eq!(store.lookup(&src("rust"), &op("node_creation")), None);
    }

    #[test]
    fn test_record_replaces_without_merging() {
        let mut store = ResultStore::new();
        store.record(
            src("go"),
            vec![(op("a"), ns(1.0)), (op("b"), ns(2.0))].into_iter().collect(),
        );
        store.record(src("go"), vec![(op("a"), ns(3.0))].into_iter().collect());

        assert_eq!(store.lookup(&src("go"), &op("a")), Some(ns(3.0)));
        assert_eq!(store.lookup(&src("go"), &op("b")), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_absence_distinction() {
        let mut store = ResultStore::new();
        store.record(src("c"), SourceResult::new());

        assert_eq!(store.lookup(&src("c"), &op("node_creation")), None);
        assert_eq!(store.lookup(&src("cpp"), &op("node_creation")), None);
        assert_eq!(store.status(&src("c")), SourceStatus::Empty);
        assert_eq!(store.status(&src("cpp")), SourceStatus::NeverRecorded);
        assert!(store.contains(&src("c")));
        assert!(!store.contains(&src("cpp")));
    }

    #[test]
    fn test_zero_is_present() {
        let mut store = ResultStore::new();
        store.record(src("go"), vec![(op("noop"), TimeNanoseconds::ZERO)].into_iter().collect());
        assert_eq!(store.lookup(&src("go"), &op("noop")), Some(TimeNanoseconds::ZERO));
        assert_eq!(store.status(&src("go")), SourceStatus::Populated(1));
    }

    #[test]
    fn test_record_failure() {
        let mut store = ResultStore::new();
        store.record(src("rust"), vec![(op("a"), ns(1.0))].into_iter().collect());
        store.record_failure(src("rust"), "timed out after 300s");

        assert_eq!(store.lookup(&src("rust"), &op("a")), None);
        assert_eq!(
            store.status(&src("rust")),
            SourceStatus::Failed("timed out after 300s".to_string())
        );
        assert!(store.get(&src("rust")).unwrap().is_empty());
    }

    #[test]
    fn test_operations_union() {
        let mut store = ResultStore::new();
        store.record(src("go"), vec![(op("b"), ns(1.0)), (op("a"), ns(1.0))].into_iter().collect());
        store.record(src("c"), vec![(op("c"), ns(1.0)), (op("a"), ns(1.0))].into_iter().collect());
        let ops: Vec<String> = store.operations().iter().map(|o| o.to_string()).collect();
        assert_eq!(ops, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_serde_shape() {
        let mut store = ResultStore::new();
        store.record(src("go"), vec![(op("node_creation"), ns(150.5))].into_iter().collect());
        store.record_failure(src("cpp"), "build failed");

        let json = serde_json::to_string(&store).unwrap();
        assert_eq!(json, r#"{"cpp":{},"go":{"node_creation":150.5}}"#);

        let back: ResultStore = serde_json::from_str(&json).unwrap();
        assert_eq!(back.lookup(&src("go"), &op("node_creation")), Some(ns(150.5)));
        assert_eq!(back.status(&src("cpp")), SourceStatus::Empty);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(SourceStatus::Populated(1).label(), "1 operation");
        assert_eq!(SourceStatus::Populated(7).label(), "7 operations");
        assert_eq!(SourceStatus::NeverRecorded.label(), "not run");
        assert!(SourceStatus::Failed("x".into()).label().contains("failed"));
    }
}
