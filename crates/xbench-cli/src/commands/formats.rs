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

//! Formats command - list supported output formats

use crate::config::RunConfig;
use crate::error::CliError;
use colored::Colorize;
use xbench_core::SourceFormat;

/// Print every supported format, its data-line marker and the default
/// sources that use it.
pub fn formats() -> Result<(), CliError> {
    let defaults = RunConfig::default();

    for format in SourceFormat::ALL {
        let sources: Vec<&str> = defaults
            .sources
            .iter()
            .filter(|s| SourceFormat::default_for_source(&s.id) == Some(format))
            .map(|s| s.id.as_str())
            .collect();

        println!("{}", format.name().bold());
        println!("  marker:  {}", format.marker());
        let prefixes = format.decorations().prefixes;
        if !prefixes.is_empty() {
            println!("  strips:  {}", prefixes.join(", "));
        }
        if !sources.is_empty() {
            println!("  default: {}", sources.join(", "));
        }
    }
    Ok(())
}
