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

//! XBench Report
//!
//! Renders [`ComparisonReport`](xbench_core::ComparisonReport)s for people
//! and tools, and persists result stores between runs.
//!
//! # Modules
//!
//! - `console`: fixed-width table for terminals
//! - `markdown`: Markdown document export
//! - `json`: JSON export plus `save_results` / `load_results`

pub mod console;
pub mod error;
pub mod json;
pub mod markdown;

pub use console::{print_report, render_report, render_table};
pub use error::{ReportError, Result};
pub use json::{export_json, load_results, render_json, save_results, DEFAULT_RESULTS_FILE};
pub use markdown::{export_markdown, render_markdown};
