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

//! `go test -bench` output.
//!
//! ```text
//! goos: linux
//! BenchmarkGoNodeCreation-8        1000000       150.4 ns/op      64 B/op     2 allocs/op
//! PASS
//! ```

use super::{is_unit_token, parse_value};
use crate::types::RawSample;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

const MARKER: &str = "Benchmark";

/// Trailing `-<GOMAXPROCS>` the Go harness appends to every name.
static PROCS_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"-\d+$").expect("valid regex"));

pub(crate) fn parse(text: &str) -> Vec<RawSample> {
    let mut samples = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if !line.starts_with(MARKER) {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 4 {
            debug!(line = idx + 1, "go-test: benchmark line without timing fields");
            continue;
        }

        let name = PROCS_SUFFIX.replace(&fields[0][MARKER.len()..], "");
        if name.is_empty() {
            debug!(line = idx + 1, "go-test: empty benchmark name");
            continue;
        }

        let (Some(value), true) = (parse_value(fields[2]), is_unit_token(fields[3])) else {
            debug!(line = idx + 1, value = fields[2], "go-test: unparseable duration");
            continue;
        };

        samples.push(RawSample {
            name: name.into_owned(),
            value,
            unit: fields[3].to_string(),
            line: idx + 1,
            text: line.to_string(),
        });
    }

    samples
}
