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

//! Rust benchmark output: libtest `#[bench]` and Criterion.
//!
//! ```text
//! test bench_rust_node_creation ... bench:         150 ns/iter (+/- 3)
//! test bench_rust_message_send ... time: [150.4 ns 151.0 ns 151.6 ns]
//! bench_rust_gossip_protocol  time:   [12.101 µs 12.250 µs 12.398 µs]
//! bench_rust_a_very_long_benchmark_name_that_wraps
//!                         time:   [1.2001 ms 1.2100 ms 1.2199 ms]
//! ```
//!
//! Criterion reports `[lower estimate upper]`; the first value is taken.
//! Criterion moves the `time:` field to the next line when the name is long,
//! so a lone `bench_` name is remembered for the following line.

use super::{parse_value, value_and_unit};
use crate::types::RawSample;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

const NAME_MARKER: &str = "bench_";

static TIME_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\btime:\s*\[?(?P<rest>.*)$").expect("valid regex"));

static BENCH_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bbench:\s*(?P<rest>.*)$").expect("valid regex"));

pub(crate) fn parse(text: &str) -> Vec<RawSample> {
    let mut samples = Vec::new();
    let mut pending_name: Option<String> = None;

    for (idx, line) in text.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let timing = TIME_FIELD
            .captures(line)
            .map(|c| (c, false))
            .or_else(|| BENCH_FIELD.captures(line).map(|c| (c, true)));

        let name = match fields.as_slice() {
            ["test", name, ..] if name.starts_with(NAME_MARKER) => Some(name.to_string()),
            [name, ..] if name.starts_with(NAME_MARKER) => Some(name.to_string()),
            [first, ..] if first.starts_with("time:") => pending_name.take(),
            _ => None,
        };

        let Some((captures, thousands)) = timing else {
            // Criterion prints a long benchmark ID alone on its line.
            pending_name = match fields.as_slice() {
                [only] if only.starts_with(NAME_MARKER) => Some(only.to_string()),
                _ => None,
            };
            continue;
        };
        pending_name = None;

        let Some(name) = name else {
            continue;
        };

        let rest: Vec<&str> = captures["rest"]
            .split_whitespace()
            .map(|t| t.trim_end_matches(']'))
            .collect();
        let sample = if thousands {
            rest.first()
                .and_then(|v| parse_value(v))
                .zip(rest.get(1).map(|u| u.to_string()))
        } else {
            value_and_unit(&rest)
        };

        let Some((value, unit)) = sample else {
            debug!(line = idx + 1, "rust-bench: unparseable duration");
            continue;
        };

        samples.push(RawSample {
            name: name[NAME_MARKER.len()..].to_string(),
            value,
            unit,
            line: idx + 1,
            text: line.to_string(),
        });
    }

    samples
}
