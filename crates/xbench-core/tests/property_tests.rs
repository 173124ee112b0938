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

//! Property-based tests for canonicalization and the comparison matrix.
//!
//! - Canonicalization is idempotent for any input and any decoration table
//! - Canonical names only contain lowercase ASCII alphanumerics and `_`
//! - Parsers never panic on arbitrary text
//! - Building the matrix twice from the same store gives the same matrix

use proptest::prelude::*;
use xbench_core::{
    canonicalize, ComparisonMatrix, DecorationTable, OperationName, ResultStore, SourceFormat,
    SourceId, SourceResult, TimeNanoseconds,
};

// ===== Generators =====

/// Raw benchmark names in the styles the harnesses print.
fn raw_name() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("Benchmark[A-Z][a-zA-Z0-9]{0,20}(-[0-9]{1,2})?")
            .expect("Failed to create go name regex"),
        prop::string::string_regex("BM_[A-Za-z][A-Za-z0-9_/]{0,20}")
            .expect("Failed to create google name regex"),
        prop::string::string_regex("bench_[a-z][a-z0-9_]{0,20}")
            .expect("Failed to create rust name regex"),
        prop::string::string_regex("[A-Za-z][A-Za-z0-9 _.:-]{0,30}")
            .expect("Failed to create free-form name regex"),
    ]
}

fn decoration_table() -> impl Strategy<Value = DecorationTable> {
    (
        prop::collection::vec("[A-Za-z_]{1,6}", 0..3),
        prop::collection::vec("[A-Za-z_]{1,6}", 0..2),
        prop::collection::vec("[a-z]{1,4}", 0..3),
    )
        .prop_map(|(prefixes, suffixes, tags)| DecorationTable {
            prefixes,
            suffixes,
            tags,
        })
}

fn time() -> impl Strategy<Value = TimeNanoseconds> {
    (0.0f64..1e10).prop_map(|v| TimeNanoseconds::new(v).expect("non-negative finite"))
}

// ===== Properties =====

proptest! {
    #[test]
    fn prop_canonicalize_is_idempotent(raw in raw_name(), table in decoration_table()) {
        if let Some(once) = canonicalize(&raw, &table) {
            let twice = canonicalize(once.as_str(), &table);
            prop_assert_eq!(Some(once), twice);
        }
    }

    #[test]
    fn prop_canonical_names_are_snake_case(raw in any::<String>()) {
        if let Some(name) = canonicalize(&raw, &DecorationTable::empty()) {
            let s = name.as_str();
            prop_assert!(!s.is_empty());
            prop_assert!(!s.starts_with('_') && !s.ends_with('_'));
            prop_assert!(!s.contains("__"));
            prop_assert!(s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
        }
    }

    #[test]
    fn prop_parsers_never_panic(text in any::<String>()) {
        for format in SourceFormat::ALL {
            let _ = format.parse(&text);
        }
    }

    #[test]
    fn prop_parsed_values_are_valid(lines in prop::collection::vec(".{0,80}", 0..20)) {
        let text = lines.join("\n");
        for format in SourceFormat::ALL {
            for sample in format.parse(&text) {
                prop_assert!(sample.value.is_finite() && sample.value >= 0.0);
                prop_assert!(sample.line >= 1);
            }
        }
    }

    #[test]
    fn prop_matrix_is_deterministic(
        entries in prop::collection::vec(("[a-z]{1,8}", 0usize..3, time()), 0..30)
    ) {
        let sources: Vec<SourceId> = ["go", "cpp", "rust"]
            .iter()
            .map(|s| SourceId::new(s).expect("valid id"))
            .collect();

        let mut results = vec![SourceResult::new(), SourceResult::new(), SourceResult::new()];
        for (name, idx, t) in &entries {
            let op = OperationName::new(name).expect("non-empty name");
            results[*idx].insert(op, *t);
        }

        let mut store = ResultStore::new();
        for (source, result) in sources.iter().zip(results) {
            store.record(source.clone(), result);
        }

        let ops = store.operations();
        let a = ComparisonMatrix::build(&store, &ops, &sources);
        let b = ComparisonMatrix::build(&store, &ops, &sources);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.cell_count(), ops.len() * sources.len());
        prop_assert!(ops.iter().enumerate().all(|(row, _)| a.fastest_in_row(row).is_some()));
    }
}
