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

//! Benchmark output formats.
//!
//! Each supported harness prints its results in its own textual convention.
//! [`SourceFormat`] is the closed set of conventions XBench understands; its
//! [`parse`](SourceFormat::parse) method extracts one [`RawSample`] per
//! recognized data line.
//!
//! All parsers share the same contract:
//!
//! - input is processed line by line and only lines matching the format's
//!   marker are data lines; everything else is skipped silently
//! - a marker line whose duration is missing or not a non-negative number is
//!   dropped and parsing continues
//! - samples are returned in input order, so later duplicates win during
//!   normalization
//! - no data lines at all yields an empty vector, never an error
//!
//! | Format             | Marker                                   | Duration                       |
//! |--------------------|------------------------------------------|--------------------------------|
//! | `go-test`          | line starts with `Benchmark`             | field 3 + unit field 4 (`ns/op`) |
//! | `google-benchmark` | first field starts with `BM_`            | first `<n> <unit>` after name  |
//! | `c-summary`        | contains `iterations in`                 | total / iterations             |
//! | `rust-bench`       | `bench_` name with `time:` or `bench:`   | first value of the field       |

mod c_summary;
mod go;
mod google;
mod rust;

use crate::error::{Result, XbenchError};
use crate::normalize::DecorationTable;
use crate::types::RawSample;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported benchmark output convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceFormat {
    /// `go test -bench` output.
    GoTest,
    /// Google Benchmark console output (C++).
    GoogleBenchmark,
    /// `<name>: <N> iterations in <total><unit>` summaries (C harness).
    CSummary,
    /// libtest `#[bench]` and Criterion output (Rust).
    RustBench,
}

impl SourceFormat {
    /// Every supported format.
    pub const ALL: [SourceFormat; 4] = [
        SourceFormat::GoTest,
        SourceFormat::GoogleBenchmark,
        SourceFormat::CSummary,
        SourceFormat::RustBench,
    ];

    /// Configuration name of the format.
    pub fn name(self) -> &'static str {
        match self {
            SourceFormat::GoTest => "go-test",
            SourceFormat::GoogleBenchmark => "google-benchmark",
            SourceFormat::CSummary => "c-summary",
            SourceFormat::RustBench => "rust-bench",
        }
    }

    /// One-line description of the data-line marker.
    pub fn marker(self) -> &'static str {
        match self {
            SourceFormat::GoTest => "lines starting with `Benchmark`: name, iterations, value, `ns/op`",
            SourceFormat::GoogleBenchmark => "lines whose first field starts with `BM_`: name, time, unit, cpu, unit, iterations",
            SourceFormat::CSummary => "`<name>: <N> iterations in <total><unit>`; time per iteration is total / N",
            SourceFormat::RustBench => "`test bench_<name> ... time: [v unit ...]` or `... bench: v ns/iter`",
        }
    }

    /// Format conventionally used by a source identifier, if any.
    pub fn default_for_source(source: &str) -> Option<SourceFormat> {
        match source {
            "go" | "golang" => Some(SourceFormat::GoTest),
            "cpp" | "c++" | "cxx" => Some(SourceFormat::GoogleBenchmark),
            "c" => Some(SourceFormat::CSummary),
            "rust" | "rs" => Some(SourceFormat::RustBench),
            _ => None,
        }
    }

    /// Decorations this harness adds to benchmark names.
    pub fn decorations(self) -> DecorationTable {
        match self {
            SourceFormat::GoTest => DecorationTable::empty().with_prefix("Benchmark"),
            SourceFormat::GoogleBenchmark => DecorationTable::empty().with_prefix("BM_"),
            SourceFormat::CSummary => DecorationTable::empty(),
            SourceFormat::RustBench => DecorationTable::empty().with_prefix("bench_"),
        }
    }

    /// Extracts raw samples from the complete output of one run.
    pub fn parse(self, text: &str) -> Vec<RawSample> {
        match self {
            SourceFormat::GoTest => go::parse(text),
            SourceFormat::GoogleBenchmark => google::parse(text),
            SourceFormat::CSummary => c_summary::parse(text),
            SourceFormat::RustBench => rust::parse(text),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SourceFormat {
    type Err = XbenchError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        SourceFormat::ALL
            .into_iter()
            .find(|format| format.name() == wanted)
            .or_else(|| SourceFormat::default_for_source(&wanted))
            .ok_or_else(|| XbenchError::UnknownFormat {
                name: s.to_string(),
                supported: SourceFormat::ALL
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Parses a duration token: thousands separators allowed, must be finite and
/// non-negative.
pub(crate) fn parse_value(token: &str) -> Option<f64> {
    let cleaned = token.replace(',', "");
    let value: f64 = cleaned.parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Returns whether `token` looks like a unit (`ns`, `µs`, `ns/op`).
pub(crate) fn is_unit_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_alphabetic() || c == '/')
}

/// Splits a token with an attached unit (`12.34ms`).
pub(crate) fn split_value_unit(token: &str) -> Option<(f64, String)> {
    let at = token.find(|c: char| c.is_alphabetic())?;
    let (number, unit) = token.split_at(at);
    if !is_unit_token(unit) {
        return None;
    }
    Some((parse_value(number)?, unit.to_string()))
}

/// Reads `<value> <unit>` or `<value><unit>` from the start of `tokens`.
pub(crate) fn value_and_unit(tokens: &[&str]) -> Option<(f64, String)> {
    let first = tokens.first()?;
    match parse_value(first) {
        Some(value) => {
            let unit = tokens.get(1).filter(|t| is_unit_token(t))?;
            Some((value, unit.to_string()))
        }
        None => split_value_unit(first),
    }
}
