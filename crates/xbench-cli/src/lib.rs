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

//! XBench CLI library.
//!
//! Everything behind the `xbench` binary: the clap command surface, run
//! configuration files, external command execution and the command
//! implementations.
//!
//! # Commands
//!
//! - **run**: build and run the configured benchmark suites, save and compare
//! - **parse**: normalize one captured output to JSON
//! - **compare**: compare captured outputs of several sources
//! - **report**: re-render saved results
//! - **formats**: list supported output formats
//!
//! # Environment
//!
//! - `XBENCH_MAX_INPUT_SIZE`: maximum size in bytes of files read as input
//! - `RUST_LOG`: log filter, in addition to `-v` / `-vv`

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod runner;

pub use error::CliError;
