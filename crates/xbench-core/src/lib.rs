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

//! XBench Core
//!
//! Turns the human-readable output of independently built benchmark suites
//! into one canonical table (operation name to time per iteration in
//! nanoseconds) and cross-tabulates it into a comparison matrix.
//!
//! ## Pipeline
//!
//! ```text
//! raw text -> SourceFormat::parse -> RawSample* -> normalize -> SourceResult
//!          -> ResultStore -> ComparisonMatrix -> ComparisonSummary
//! ```
//!
//! ## Example
//!
//! ```
//! use xbench_core::{ingest, ComparisonReport, ResultStore, SourceFormat, SourceSpec};
//!
//! let go = SourceSpec::new("sourceA", SourceFormat::GoTest).unwrap();
//! let rust = SourceSpec::new("sourceB", SourceFormat::RustBench).unwrap();
//!
//! let mut store = ResultStore::new();
//! ingest(&mut store, &go, Some("Benchmarknode_creation-8   1000000   150.4 ns/op")).unwrap();
//! ingest(
//!     &mut store,
//!     &rust,
//!     Some("test bench_node_creation ... time: [150.4 ns 151.0 ns 151.6 ns]"),
//! )
//! .unwrap();
//!
//! let report = ComparisonReport::from_store(&store);
//! assert_eq!(report.matrix.present_count(), 2);
//! ```
//!
//! The core performs no I/O and never spawns processes; collecting output is
//! left to the caller.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod formats;
pub mod matrix;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod store;
pub mod summary;
pub mod types;

pub use config::{ComparisonConfig, SourceSpec, DEFAULT_OPERATIONS, DEFAULT_SOURCES};
pub use error::{FormatError, Result, XbenchError};
pub use formats::SourceFormat;
pub use matrix::{Cell, ComparisonMatrix};
pub use normalize::{canonicalize, normalize, DecorationTable};
pub use pipeline::{ingest, ingest_all};
pub use report::{ComparisonReport, SourceDiagnostic};
pub use store::{ResultStore, SourceResult, SourceStatus};
pub use summary::{format_time, ComparisonSummary, Magnitude, SummaryCell, SummaryRow, ABSENT_LABEL};
pub use types::{OperationName, RawSample, SourceId, TimeNanoseconds, TimeUnit};
