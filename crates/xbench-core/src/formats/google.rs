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

//! Google Benchmark console output (C++).
//!
//! ```text
//! ----------------------------------------------------------------
//! Benchmark                      Time             CPU   Iterations
//! ----------------------------------------------------------------
//! BM_CppNodeCreation          1523 ns         1520 ns       459876
//! BM_CppCryptoEncrypt/1024    12.3 us         12.3 us        56893
//! ```
//!
//! The wall-clock "Time" column is used; the CPU column is ignored.

use super::value_and_unit;
use crate::types::RawSample;
use tracing::debug;

const MARKER: &str = "BM_";

pub(crate) fn parse(text: &str) -> Vec<RawSample> {
    let mut samples = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let Some(first) = fields.first() else {
            continue;
        };
        let Some(name) = first.strip_prefix(MARKER) else {
            continue;
        };
        if name.is_empty() {
            continue;
        }

        let Some((value, unit)) = value_and_unit(&fields[1..]) else {
            debug!(line = idx + 1, "google-benchmark: no time column");
            continue;
        };

        samples.push(RawSample {
            name: name.to_string(),
            value,
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

    const OUTPUT: &str = "\
2025-01-12T10:00:00+00:00
Running ./build/cpp-bench
Run on (8 X 3600 MHz CPU s)
***WARNING*** CPU scaling is enabled, the benchmark real time measurements may be noisy.
----------------------------------------------------------------
Benchmark                      Time             CPU   Iterations
----------------------------------------------------------------
BM_CppNodeCreation          1523 ns         1520 ns       459876
BM_CppCryptoEncrypt/1024    12.3 us         12.3 us        56893
BM_CppGossipProtocol         4.5ms          4.4ms           155
BM_CppConsensusProtocol    ERROR OCCURRED: 'peer unreachable'
";

    #[test]
    fn test_parse_google_output() {
        let samples = parse(OUTPUT);
        assert_eq!(samples.len(), 3);

        assert_eq!(samples[0].name, "CppNodeCreation");
        assert_eq!(samples[0].value, 1523.0);
        assert_eq!(samples[0].unit, "ns");

        assert_eq!(samples[1].name, "CppCryptoEncrypt/1024");
        assert_eq!(samples[1].value, 12.3);
        assert_eq!(samples[1].unit, "us");

        assert_eq!(samples[2].value, 4.5);
        assert_eq!(samples[2].unit, "ms");
    }

    #[test]
    fn test_header_is_skipped() {
        assert!(parse("Benchmark   Time   CPU   Iterations").is_empty());
    }
}
