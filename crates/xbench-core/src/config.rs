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

//! Comparison configuration.
//!
//! Describes which sources take part in a comparison, which output format
//! each of them prints, and which operations the report is about. The default
//! configuration covers the four mesh backends (Go, C++, C and Rust) and the
//! seven operations their benchmark suites share.
//!
//! # Example
//!
//! ```
//! use xbench_core::config::{ComparisonConfig, SourceSpec};
//! use xbench_core::SourceFormat;
//!
//! let config = ComparisonConfig::empty()
//!     .with_operations(&["node_creation", "message_send"])
//!     .unwrap()
//!     .with_source(SourceSpec::new("zig", SourceFormat::GoogleBenchmark).unwrap().with_tag("zig"));
//! assert!(config.validate().is_ok());
//! ```

use crate::error::{Result, XbenchError};
use crate::formats::SourceFormat;
use crate::normalize::DecorationTable;
use crate::types::{OperationName, SourceId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Operations compared by default.
pub const DEFAULT_OPERATIONS: &[&str] = &[
    "node_creation",
    "message_send",
    "crypto_encrypt",
    "crypto_decrypt",
    "flooding_protocol",
    "gossip_protocol",
    "consensus_protocol",
];

/// Sources compared by default, in report order.
pub const DEFAULT_SOURCES: &[&str] = &["go", "cpp", "c", "rust"];

/// Default report title.
pub const DEFAULT_TITLE: &str = "Cross-language benchmark comparison";

/// One benchmark source and how to read its output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpec {
    /// Source identifier (`go`, `rust`, ...).
    pub id: SourceId,
    /// Output convention of the source's benchmark harness.
    pub format: SourceFormat,
    /// Extra decorations on top of the format's own table.
    #[serde(default)]
    pub decorations: DecorationTable,
}

impl SourceSpec {
    /// Creates a source with the format's default decorations.
    pub fn new(id: &str, format: SourceFormat) -> Result<Self> {
        Ok(Self {
            id: SourceId::new(id)?,
            format,
            decorations: DecorationTable::empty(),
        })
    }

    /// Creates a source whose format is inferred from its identifier.
    ///
    /// The identifier is also registered as a language tag, so
    /// `BenchmarkGoNodeCreation` from source `go` becomes `node_creation`.
    pub fn for_source(id: &str) -> Result<Self> {
        let format = SourceFormat::default_for_source(id.trim()).ok_or_else(|| {
            XbenchError::InvalidConfig {
                parameter: format!("sources.{}", id.trim()),
                reason: "no default format for this source; specify one explicitly".to_string(),
            }
        })?;
        Ok(Self::new(id, format)?.with_tag(id.trim()))
    }

    /// Adds a language tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.decorations.tags.push(tag.into());
        self
    }

    /// Replaces the extra decorations.
    pub fn with_decorations(mut self, decorations: DecorationTable) -> Self {
        self.decorations = decorations;
        self
    }

    /// Decorations used when normalizing this source: the format's table
    /// merged with the source's own entries.
    pub fn decoration_table(&self) -> DecorationTable {
        self.format.decorations().merged(&self.decorations)
    }
}

/// Configuration of one comparison run.
///
/// Deserialized fields that are missing start out empty, as in
/// [`ComparisonConfig::empty`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// Report title.
    #[serde(default = "default_title")]
    pub title: String,
    /// Operations of interest, in report order.
    #[serde(default)]
    pub operations: Vec<OperationName>,
    /// Sources, in report order.
    #[serde(default)]
    pub sources: Vec<SourceSpec>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl ComparisonConfig {
    /// A configuration with no operations and no sources.
    pub fn empty() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            operations: Vec::new(),
            sources: Vec::new(),
        }
    }

    /// Sets the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replaces the operations of interest, canonicalizing each name.
    pub fn with_operations(mut self, operations: &[&str]) -> Result<Self> {
        self.operations = operations
            .iter()
            .map(|op| OperationName::new(op))
            .collect::<Result<Vec<_>>>()?;
        Ok(self)
    }

    /// Adds a source, replacing an existing one with the same identifier.
    pub fn with_source(mut self, source: SourceSpec) -> Self {
        match self.sources.iter_mut().find(|s| s.id == source.id) {
            Some(existing) => *existing = source,
            None => self.sources.push(source),
        }
        self
    }

    /// Looks up a source by identifier.
    pub fn source(&self, id: &SourceId) -> Option<&SourceSpec> {
        self.sources.iter().find(|s| &s.id == id)
    }

    /// Source identifiers in report order.
    pub fn source_ids(&self) -> Vec<SourceId> {
        self.sources.iter().map(|s| s.id.clone()).collect()
    }

    /// Checks that sources and operations are unique and present.
    pub fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            return Err(XbenchError::InvalidConfig {
                parameter: "sources".to_string(),
                reason: "at least one source is required".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for source in &self.sources {
            if !seen.insert(&source.id) {
                return Err(XbenchError::InvalidConfig {
                    parameter: "sources".to_string(),
                    reason: format!("duplicate source '{}'", source.id),
                });
            }
        }

        let mut seen = HashSet::new();
        for op in &self.operations {
            if !seen.insert(op) {
                return Err(XbenchError::InvalidConfig {
                    parameter: "operations".to_string(),
                    reason: format!("duplicate operation '{}'", op),
                });
            }
        }

        Ok(())
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        let operations = DEFAULT_OPERATIONS
            .iter()
            .filter_map(|op| OperationName::new(op).ok())
            .collect();
        let sources = DEFAULT_SOURCES
            .iter()
            .filter_map(|id| SourceSpec::for_source(id).ok())
            .collect();

        Self {
            title: DEFAULT_TITLE.to_string(),
            operations,
            sources,
        }
    }
}
