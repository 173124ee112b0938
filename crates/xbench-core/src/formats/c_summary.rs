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

//! Summaries printed by hand-written C harnesses.
//!
//! ```text
//! Benchmarking C node creation...
//! C node creation: 1000 iterations in 12.34ms (81037.28 ops/sec)
//! ```
//!
//! The reported duration covers all iterations; the parser divides it by the
//! iteration count so the sample is a time per iteration in the declared unit.

use super::{is_unit_token, parse_value, split_value_unit};
use crate::types::RawSample;
use tracing::debug;

const MARKER: &str = "iterations in";

pub(crate) fn parse(text: &str) -> Vec<RawSample> {
    let mut samples = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if !line.contains(MARKER) {
            continue;
        }

        let Some((name, rest)) = line.split_once(':') else {
            debug!(line = idx + 1, "c-summary: missing ':' after benchmark name");
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }

        let fields: Vec<&str> = rest.split_whitespace().collect();
        if fields.len() < 4 || fields[1] != "iterations" || fields[2] != "in" {
            debug!(line = idx + 1, "c-summary: unexpected summary shape");
            continue;
        }

        let iterations = match fields[0].parse::<u64>() {
            Ok(n) if n > 0 => n,
            _ => {
                debug!(line = idx + 1, iterations = fields[0], "c-summary: invalid iteration count");
                continue;
            }
        };

        let total = match parse_value(fields[3]) {
            Some(value) => fields
                .get(4)
                .filter(|unit| is_unit_token(unit))
                .map(|unit| (value, unit.to_string())),
            None => split_value_unit(fields[3]),
        };
        let Some((total, unit)) = total else {
            debug!(line = idx + 1, total = fields[3], "c-summary: unparseable duration");
            continue;
        };

        samples.push(RawSample {
            name: name.to_string(),
            value: total / iterations as f64,
            unit,
            line: idx + 1,
            text: line.to_string(),
        });
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_c_output() {
        let output = "\
Starting C performance benchmarks...
Benchmarking C node creation...
C node creation: 1000 iterations in 12.50ms (80000.00 ops/sec)
Benchmarking C message send...
C message send: 10000 iterations in 5.00 ms (2000000.00 msg/sec)
C performance benchmarks completed!
";
        let samples = parse(output);
        assert_eq!(samples.len(), 2);

        assert_eq!(samples[0].name, "C node creation");
        assert_eq!(samples[0].value, 0.0125);
        assert_eq!(samples[0].unit, "ms");
        assert_eq!(samples[0].line, 3);

        assert_eq!(samples[1].name, "C message send");
        assert_eq!(samples[1].value, 0.0005);
    }

    #[test]
    fn test_malformed_summaries_dropped() {
        let output = "\
C crypto encrypt: 0 iterations in 1.00ms (0 ops/sec)
C crypto decrypt: many iterations in 1.00ms
C gossip protocol: 100 iterations in fastms
no colon 100 iterations in 1ms
C flooding protocol: 100 iterations in 2.00ms (50000.00 ops/sec)
";
        let samples = parse(output);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].name, "C flooding protocol");
        assert_eq!(samples[0].value, 0.02);
    }
}
