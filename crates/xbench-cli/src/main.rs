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

//! XBench Command Line Interface

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use xbench_cli::cli::Commands;

/// XBench - cross-language benchmark comparison
///
/// Normalizes the output of Go, C++, C and Rust benchmark suites into one
/// table of nanoseconds per operation and compares them side by side.
///
/// # Examples
///
/// ```bash
/// # Run the default suites and compare
/// xbench run
///
/// # Compare captured outputs
/// xbench compare -i go=go.txt -i rust=rust.txt --markdown report.md
///
/// # Normalize a single output
/// xbench parse cpp.txt --source cpp --pretty
/// ```
#[derive(Parser)]
#[command(name = "xbench")]
#[command(author, version, about = "XBench - cross-language benchmark comparison", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let mut filter = EnvFilter::from_default_env();
    for target in ["xbench", "xbench_cli", "xbench_core", "xbench_report"] {
        filter = filter.add_directive(
            format!("{}={}", target, level)
                .parse()
                .expect("valid log directive"),
        );
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
