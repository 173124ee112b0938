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

//! End-to-end tests: captured benchmark output in, comparison report out.

use xbench_core::{
    ingest, ingest_all, Cell, ComparisonConfig, ComparisonMatrix, ComparisonReport,
    OperationName, ResultStore, SourceFormat, SourceId, SourceSpec, SourceStatus, ABSENT_LABEL,
};

const GO_OUTPUT: &str = "\
goos: linux
goarch: amd64
pkg: mesh/tests/benchmark
BenchmarkGoNodeCreation-8          1000000           150.4 ns/op          64 B/op          2 allocs/op
BenchmarkGoMessageSend-8            500000          2301 ns/op
BenchmarkGoCryptoEncrypt-8          100000         12034 ns/op
BenchmarkGoConsensusProtocol-8         100      12500000 ns/op
PASS
ok      mesh/tests/benchmark     4.512s
";

const CPP_OUTPUT: &str = "\
Run on (8 X 3600 MHz CPU s)
----------------------------------------------------------------
Benchmark                      Time             CPU   Iterations
----------------------------------------------------------------
BM_CppNodeCreation          1523 ns         1520 ns       459876
BM_CppMessageSend           1.20 us         1.19 us       583012
";

const C_OUTPUT: &str = "\
Starting C performance benchmarks...
Benchmarking C node creation...
C node creation: 1000 iterations in 0.12ms (8333333.33 ops/sec)
C gossip protocol: 100 iterations in 2.50ms (40000.00 ops/sec)
";

const RUST_OUTPUT: &str = "\
running 2 tests
test bench_rust_node_creation ... bench:         140 ns/iter (+/- 3)
test bench_rust_crypto_encrypt ... bench:      11,800 ns/iter (+/- 210)
test result: ok. 0 passed; 0 failed; 0 ignored; 2 measured
";

fn op(name: &str) -> OperationName {
    OperationName::new(name).unwrap()
}

fn src(id: &str) -> SourceId {
    SourceId::new(id).unwrap()
}

fn default_store() -> ResultStore {
    let config = ComparisonConfig::default();
    let outputs = [GO_OUTPUT, CPP_OUTPUT, C_OUTPUT, RUST_OUTPUT];
    let mut store = ResultStore::new();
    let errors = ingest_all(
        &mut store,
        config.sources.iter().zip(outputs.iter().map(|o| Some(*o))),
    );
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    store
}

#[test]
fn test_same_operation_from_two_formats() {
    let a = SourceSpec::new("sourceA", SourceFormat::GoTest).unwrap();
    let b = SourceSpec::new("sourceB", SourceFormat::RustBench).unwrap();

    let mut store = ResultStore::new();
    ingest(&mut store, &a, Some("Benchmarknode_creation-8   1000000   150.4 ns/op")).unwrap();
    ingest(
        &mut store,
        &b,
        Some("test bench_node_creation ... time: [150.4 ns 151.0 ns 151.6 ns]"),
    )
    .unwrap();

    let matrix = ComparisonMatrix::build(&store, &[op("node_creation")], &[a.id.clone(), b.id.clone()]);
    assert_eq!(matrix.present_count(), 2);

    let first = matrix.cell(0, 0).time().unwrap().get();
    let second = matrix.cell(0, 1).time().unwrap().get();
    assert!((first - 150.4).abs() < 1e-9);
    assert!((first - second).abs() < 1e-9);
}

#[test]
fn test_default_four_language_comparison() {
    let store = default_store();
    let report = ComparisonReport::from_config(&store, &ComparisonConfig::default());
    let matrix = &report.matrix;

    assert_eq!(matrix.operations().len(), 7);
    assert_eq!(matrix.sources().len(), 4);

    let node = op("node_creation");
    assert_eq!(matrix.get(&node, &src("go")).time().unwrap().get(), 150.4);
    assert_eq!(matrix.get(&node, &src("cpp")).time().unwrap().get(), 1523.0);
    assert!((matrix.get(&node, &src("c")).time().unwrap().get() - 120.0).abs() < 1e-6);
    assert_eq!(matrix.get(&node, &src("rust")).time().unwrap().get(), 140.0);

    let send = op("message_send");
    assert!((matrix.get(&send, &src("cpp")).time().unwrap().get() - 1200.0).abs() < 1e-6);
    assert_eq!(matrix.get(&send, &src("rust")), Cell::Absent);

    let gossip = matrix.get(&op("gossip_protocol"), &src("c")).time().unwrap().get();
    assert!((gossip - 25_000.0).abs() < 1e-6);

    let consensus = &report.summary.rows[6];
    assert_eq!(consensus.operation, op("consensus_protocol"));
    assert_eq!(consensus.cells[0].display, "12.50 ms");
    assert_eq!(consensus.cells[1].display, ABSENT_LABEL);

    let node_row = &report.summary.rows[0];
    assert_eq!(node_row.fastest, Some(src("c")));

    let flooding = &report.summary.rows[4];
    assert!(flooding.cells.iter().all(|c| c.display == ABSENT_LABEL));
    assert_eq!(flooding.fastest, None);
}

#[test]
fn test_malformed_line_is_skipped() {
    let spec = SourceSpec::for_source("go").unwrap();
    let mut store = ResultStore::new();
    let output = "\
BenchmarkGoNodeCreation-8   1000000   150.4 ns/op
BenchmarkGoMessageSend-8    1000000   fast ns/op
";
    assert_eq!(ingest(&mut store, &spec, Some(output)).unwrap(), 1);
    assert_eq!(store.status(&spec.id), SourceStatus::Populated(1));
}

#[test]
fn test_unknown_unit_halts_only_that_source() {
    let config = ComparisonConfig::default();
    let bad_cpp = "BM_CppNodeCreation   3 parsecs   3 parsecs   10\n";
    let outputs = [Some(GO_OUTPUT), Some(bad_cpp), None, Some(RUST_OUTPUT)];

    let mut store = ResultStore::new();
    let errors = ingest_all(&mut store, config.sources.iter().zip(outputs));

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].0, src("cpp"));
    assert!(errors[0].1.to_string().contains("parsecs"));

    assert!(store.status(&src("go")).has_data());
    assert!(store.status(&src("rust")).has_data());
    assert_eq!(store.status(&src("c")), SourceStatus::Empty);
    assert!(matches!(store.status(&src("cpp")), SourceStatus::Failed(_)));
    assert_eq!(store.lookup(&src("cpp"), &op("node_creation")), None);
}

#[test]
fn test_absent_versus_never_recorded() {
    let mut store = ResultStore::new();
    ingest(&mut store, &SourceSpec::for_source("c").unwrap(), Some("no benchmarks here\n")).unwrap();

    let matrix = ComparisonMatrix::build(&store, &[op("node_creation")], &[src("c"), src("go")]);
    assert_eq!(matrix.cell(0, 0), Cell::Absent);
    assert_eq!(matrix.cell(0, 1), Cell::Absent);
    assert_eq!(store.status(&src("c")), SourceStatus::Empty);
    assert_eq!(store.status(&src("go")), SourceStatus::NeverRecorded);
}

#[test]
fn test_last_write_wins_within_one_output() {
    let spec = SourceSpec::for_source("go").unwrap();
    let mut store = ResultStore::new();
    let output = "\
BenchmarkGoNodeCreation-8   1000   100 ns/op
BenchmarkNodeCreation-4     1000   200 ns/op
";
    ingest(&mut store, &spec, Some(output)).unwrap();
    assert_eq!(store.lookup(&spec.id, &op("node_creation")).unwrap().get(), 200.0);
}

#[test]
fn test_report_is_deterministic() {
    let store = default_store();
    let config = ComparisonConfig::default();
    let a = ComparisonReport::from_config(&store, &config);
    let b = ComparisonReport::from_config(&store, &config);
    assert_eq!(a.matrix, b.matrix);
    assert_eq!(a.summary, b.summary);
    assert_eq!(a.diagnostics, b.diagnostics);
}

#[test]
fn test_store_json_shape() {
    let store = default_store();
    let json = serde_json::to_value(&store).unwrap();
    assert_eq!(json["go"]["node_creation"], 150.4);
    assert_eq!(json["rust"]["crypto_encrypt"], 11800.0);

    let back: ResultStore = serde_json::from_value(json).unwrap();
    assert_eq!(back.lookup(&src("go"), &op("node_creation")).unwrap().get(), 150.4);
}
