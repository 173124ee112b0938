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

//! Name canonicalization and unit conversion.
//!
//! Turns the [`RawSample`]s produced by a format parser into a
//! [`SourceResult`]: operation names are mapped to their canonical
//! [`OperationName`] and every duration is converted to nanoseconds.
//!
//! The decorations stripped from names are data, not code: a
//! [`DecorationTable`] lists the prefixes and suffixes a harness wraps around
//! benchmark names and the language tags a suite adds to its own names
//! (`BenchmarkGoNodeCreation`, `bench_rust_node_creation`).

use crate::error::FormatError;
use crate::store::SourceResult;
use crate::types::{OperationName, RawSample, TimeNanoseconds, TimeUnit};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Decorations stripped from raw benchmark names during canonicalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorationTable {
    /// Prefixes removed case-insensitively from the raw name (`Benchmark`, `BM_`).
    pub prefixes: Vec<String>,
    /// Suffixes removed case-insensitively from the raw name.
    pub suffixes: Vec<String>,
    /// Leading name tokens removed after snake-casing (`go`, `rust`).
    pub tags: Vec<String>,
}

impl DecorationTable {
    /// A table that strips nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Adds a prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefixes.push(prefix.into());
        self
    }

    /// Adds a suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffixes.push(suffix.into());
        self
    }

    /// Adds a language tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Combines two tables; entries already present are not duplicated.
    pub fn merged(&self, other: &DecorationTable) -> DecorationTable {
        fn union(a: &[String], b: &[String]) -> Vec<String> {
            let mut out = a.to_vec();
            for item in b {
                if !out.contains(item) {
                    out.push(item.clone());
                }
            }
            out
        }

        DecorationTable {
            prefixes: union(&self.prefixes, &other.prefixes),
            suffixes: union(&self.suffixes, &other.suffixes),
            tags: union(&self.tags, &other.tags),
        }
    }
}

/// Canonicalizes a raw benchmark name.
///
/// Strips the table's prefixes and suffixes, splits CamelCase, lower-cases,
/// collapses separators to `_` and finally drops leading language tags. The
/// steps repeat until the name stops changing, so the result is a fixpoint
/// and canonicalization is idempotent.
///
/// Returns `None` when nothing is left of the name.
///
/// # Examples
///
/// ```
/// use xbench_core::normalize::{canonicalize, DecorationTable};
///
/// let table = DecorationTable::empty().with_prefix("Benchmark").with_tag("go");
/// let name = canonicalize("BenchmarkGoNodeCreation", &table).unwrap();
/// assert_eq!(name.as_str(), "node_creation");
/// ```
pub fn canonicalize(raw: &str, table: &DecorationTable) -> Option<OperationName> {
    let mut current = canonical_pass(raw, table);
    loop {
        let next = canonical_pass(&current, table);
        if next == current {
            break;
        }
        current = next;
    }

    if current.is_empty() {
        None
    } else {
        Some(OperationName::from_canonical(current))
    }
}

fn canonical_pass(raw: &str, table: &DecorationTable) -> String {
    let stripped = strip_decorations(raw.trim(), table);
    let snake = collapse_separators(&split_camel_case(stripped));
    strip_tags(snake, &table.tags)
}

fn strip_decorations<'a>(mut name: &'a str, table: &DecorationTable) -> &'a str {
    let mut changed = true;
    while changed {
        changed = false;
        for prefix in table.prefixes.iter().filter(|p| !p.is_empty()) {
            if let Some(head) = name.get(..prefix.len()) {
                if head.eq_ignore_ascii_case(prefix) {
                    name = &name[prefix.len()..];
                    changed = true;
                }
            }
        }
        for suffix in table.suffixes.iter().filter(|s| !s.is_empty()) {
            if name.len() >= suffix.len() {
                let split = name.len() - suffix.len();
                if let Some(tail) = name.get(split..) {
                    if tail.eq_ignore_ascii_case(suffix) {
                        name = &name[..split];
                        changed = true;
                    }
                }
            }
        }
    }
    name
}

/// Inserts `_` at CamelCase word boundaries (`HTTPServerStart` -> `HTTP_Server_Start`).
fn split_camel_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 8);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).map_or(false, |n| n.is_lowercase());
            if prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower)
            {
                out.push('_');
            }
        }
        out.push(c);
    }
    out
}

fn collapse_separators(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_sep = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }
    out
}

fn strip_tags(mut name: String, tags: &[String]) -> String {
    let mut changed = true;
    while changed {
        changed = false;
        for tag in tags {
            let tag = collapse_separators(tag);
            if tag.is_empty() {
                continue;
            }
            let lead = format!("{}_", tag);
            if name.len() > lead.len() && name.starts_with(&lead) {
                name = name[lead.len()..].to_string();
                changed = true;
            }
        }
    }
    name
}

/// Converts raw samples into a [`SourceResult`].
///
/// Later samples overwrite earlier ones that canonicalize to the same
/// operation (last write wins). A sample whose name canonicalizes to nothing
/// is dropped.
///
/// # Errors
///
/// Returns [`FormatError::UnknownUnit`] for the first sample whose unit token
/// has no conversion factor. No partial result is returned in that case.
pub fn normalize(samples: &[RawSample], table: &DecorationTable) -> Result<SourceResult, FormatError> {
    let mut result = SourceResult::new();

    for sample in samples {
        let unit = TimeUnit::from_token(&sample.unit).ok_or_else(|| FormatError::UnknownUnit {
            unit: sample.unit.clone(),
            line: sample.line,
            text: sample.text.clone(),
        })?;

        let Some(name) = canonicalize(&sample.name, table) else {
            warn!(line = sample.line, raw = %sample.name, "benchmark name is empty after canonicalization");
            continue;
        };

        let time = match TimeNanoseconds::new(unit.to_nanos(sample.value)) {
            Ok(time) => time,
            Err(e) => {
                debug!(line = sample.line, error = %e, "dropping out-of-range duration");
                continue;
            }
        };

        if let Some(previous) = result.insert(name.clone(), time) {
            debug!(
                operation = %name,
                previous = previous.get(),
                current = time.get(),
                "duplicate operation, keeping the later measurement"
            );
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str, value: f64, unit: &str, line: usize) -> RawSample {
        RawSample {
            name: name.to_string(),
            value,
            unit: unit.to_string(),
            line,
            text: format!("{} {} {}", name, value, unit),
        }
    }

    fn go_table() -> DecorationTable {
        DecorationTable::empty()
            .with_prefix("Benchmark")
            .with_tag("go")
    }

    #[test]
    fn test_camel_case_split() {
        assert_eq!(split_camel_case("NodeCreation"), "Node_Creation");
        assert_eq!(split_camel_case("HTTPServerStart"), "HTTP_Server_Start");
        assert_eq!(split_camel_case("Sha256Hash"), "Sha256_Hash");
        assert_eq!(split_camel_case("node_creation"), "node_creation");
    }

    #[test]
    fn test_variants_converge() {
        let table = DecorationTable::empty()
            .with_prefix("Benchmark")
            .with_prefix("BM_")
            .with_prefix("bench_");
        for raw in ["BenchmarkNodeCreation", "BM_node_creation", "bench_node_creation"] {
            assert_eq!(canonicalize(raw, &table).unwrap().as_str(), "node_creation", "{}", raw);
        }
    }

    #[test]
    fn test_language_tags() {
        let table = DecorationTable::empty()
            .with_tag("go")
            .with_tag("cpp")
            .with_tag("c")
            .with_tag("rust");
        assert_eq!(canonicalize("GoNodeCreation", &table).unwrap().as_str(), "node_creation");
        assert_eq!(canonicalize("CppCryptoEncrypt", &table).unwrap().as_str(), "crypto_encrypt");
        assert_eq!(canonicalize("C node creation", &table).unwrap().as_str(), "node_creation");
        assert_eq!(canonicalize("rust_gossip_protocol", &table).unwrap().as_str(), "gossip_protocol");
        // "c" only matches a whole leading token
        assert_eq!(canonicalize("crypto_decrypt", &table).unwrap().as_str(), "crypto_decrypt");
        // a name that is only a tag is kept rather than emptied
        assert_eq!(canonicalize("go", &table).unwrap().as_str(), "go");
    }

    #[test]
    fn test_canonicalize_idempotent() {
        let table = go_table().with_tag("go");
        for raw in [
            "BenchmarkGoGoNodeCreation",
            "  Benchmark  Message--Send ",
            "BenchmarkBenchmarkX",
            "already_canonical",
        ] {
            let once = canonicalize(raw, &table).unwrap();
            let twice = canonicalize(once.as_str(), &table).unwrap();
            assert_eq!(once, twice, "{}", raw);
        }
    }

    #[test]
    fn test_canonicalize_empty() {
        assert!(canonicalize("", &DecorationTable::empty()).is_none());
        assert!(canonicalize("Benchmark", &go_table()).is_none());
        assert!(canonicalize("---", &DecorationTable::empty()).is_none());
    }

    #[test]
    fn test_suffix_stripping() {
        let table = DecorationTable::empty().with_suffix("_mean");
        assert_eq!(canonicalize("parse_MEAN", &table).unwrap().as_str(), "parse");
    }

    #[test]
    fn test_normalize_units() {
        let samples = vec![
            sample("slow", 12.5, "ms", 1),
            sample("fast", 7.3, "ns", 2),
            sample("mid", 3.0, "µs", 3),
        ];
        let result = normalize(&samples, &DecorationTable::empty()).unwrap();
        assert_eq!(result.get_str("slow").unwrap().get(), 12_500_000.0);
        assert_eq!(result.get_str("fast").unwrap().get(), 7.3);
        assert_eq!(result.get_str("mid").unwrap().get(), 3_000.0);
    }

    #[test]
    fn test_normalize_last_write_wins() {
        let samples = vec![
            sample("BenchmarkNodeCreation", 100.0, "ns/op", 1),
            sample("Benchmarknode_creation", 200.0, "ns/op", 2),
        ];
        let result = normalize(&samples, &go_table()).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.get_str("node_creation").unwrap().get(), 200.0);
    }

    #[test]
    fn test_normalize_unknown_unit() {
        let samples = vec![
            sample("ok", 1.0, "ns", 1),
            sample("bad", 1.0, "furlongs", 2),
        ];
        let err = normalize(&samples, &DecorationTable::empty()).unwrap_err();
        assert_eq!(err.line(), 2);
        let FormatError::UnknownUnit { unit, .. } = err;
        assert_eq!(unit, "furlongs");
    }

    #[test]
    fn test_normalize_drops_empty_names() {
        let samples = vec![sample("Benchmark", 1.0, "ns/op", 1), sample("x", 2.0, "ns", 2)];
        let result = normalize(&samples, &go_table()).unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_merged_tables() {
        let a = DecorationTable::empty().with_prefix("BM_").with_tag("cpp");
        let b = DecorationTable::empty().with_tag("cpp").with_tag("c");
        let merged = a.merged(&b);
        assert_eq!(merged.prefixes, vec!["BM_".to_string()]);
        assert_eq!(merged.tags, vec!["cpp".to_string(), "c".to_string()]);
    }
}
