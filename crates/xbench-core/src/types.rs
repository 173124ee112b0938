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

//! Canonical data model: operation names, durations, units and sources.

use crate::error::{Result, XbenchError};
use crate::normalize::{canonicalize, DecorationTable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical identifier of a measured operation (e.g. `node_creation`).
///
/// Only produced by canonicalization, so every value is already a fixpoint:
/// canonicalizing it again yields the same name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OperationName(String);

impl OperationName {
    /// Canonicalizes `raw` without any format decorations.
    ///
    /// Use this for operation names coming from configuration or the command
    /// line, where no benchmark-harness prefix is expected.
    ///
    /// # Examples
    ///
    /// ```
    /// use xbench_core::OperationName;
    ///
    /// let op = OperationName::new("NodeCreation").unwrap();
    /// assert_eq!(op.as_str(), "node_creation");
    /// ```
    pub fn new(raw: &str) -> Result<Self> {
        canonicalize(raw, &DecorationTable::empty())
            .ok_or_else(|| XbenchError::InvalidOperation(raw.to_string()))
    }

    pub(crate) fn from_canonical(name: String) -> Self {
        OperationName(name)
    }

    /// The canonical name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable title (`node_creation` -> `Node Creation`).
    pub fn title(&self) -> String {
        self.0
            .split('_')
            .filter(|w| !w.is_empty())
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl TryFrom<String> for OperationName {
    type Error = XbenchError;

    fn try_from(value: String) -> Result<Self> {
        OperationName::new(&value)
    }
}

impl From<OperationName> for String {
    fn from(value: OperationName) -> Self {
        value.0
    }
}

impl fmt::Display for OperationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A non-negative, finite duration in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct TimeNanoseconds(f64);

impl TimeNanoseconds {
    /// A recorded zero duration. Distinct from an absent measurement.
    pub const ZERO: TimeNanoseconds = TimeNanoseconds(0.0);

    /// Creates a duration, rejecting negative, NaN and infinite values.
    pub fn new(nanos: f64) -> Result<Self> {
        if nanos.is_finite() && nanos >= 0.0 {
            Ok(TimeNanoseconds(nanos))
        } else {
            Err(XbenchError::InvalidTime(nanos))
        }
    }

    /// The duration in nanoseconds.
    pub fn get(self) -> f64 {
        self.0
    }

    /// The duration in microseconds.
    pub fn as_micros(self) -> f64 {
        self.0 / 1_000.0
    }

    /// The duration in milliseconds.
    pub fn as_millis(self) -> f64 {
        self.0 / 1_000_000.0
    }
}

impl TryFrom<f64> for TimeNanoseconds {
    type Error = XbenchError;

    fn try_from(value: f64) -> Result<Self> {
        TimeNanoseconds::new(value)
    }
}

impl From<TimeNanoseconds> for f64 {
    fn from(value: TimeNanoseconds) -> Self {
        value.0
    }
}

impl fmt::Display for TimeNanoseconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ns", self.0)
    }
}

/// Time unit declared by a benchmark line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// `ns`
    Nanoseconds,
    /// `us` / `µs`
    Microseconds,
    /// `ms`
    Milliseconds,
    /// `s`
    Seconds,
}

impl TimeUnit {
    /// Resolves a unit token such as `ns`, `ns/op`, `µs` or `ms/iter`.
    ///
    /// Returns `None` for tokens with no known conversion factor.
    pub fn from_token(token: &str) -> Option<Self> {
        let base = token
            .trim()
            .trim_end_matches("/op")
            .trim_end_matches("/iter");
        match base {
            "ns" => Some(TimeUnit::Nanoseconds),
            "us" | "µs" | "μs" => Some(TimeUnit::Microseconds),
            "ms" => Some(TimeUnit::Milliseconds),
            "s" => Some(TimeUnit::Seconds),
            _ => None,
        }
    }

    /// Multiplier converting a value in this unit to nanoseconds.
    pub fn factor(self) -> f64 {
        match self {
            TimeUnit::Nanoseconds => 1.0,
            TimeUnit::Microseconds => 1_000.0,
            TimeUnit::Milliseconds => 1_000_000.0,
            TimeUnit::Seconds => 1_000_000_000.0,
        }
    }

    /// Converts `value` in this unit to nanoseconds, keeping full precision.
    pub fn to_nanos(self, value: f64) -> f64 {
        match self {
            TimeUnit::Nanoseconds => value,
            _ => value * self.factor(),
        }
    }
}

/// Identifier of one benchmark source (one language/toolchain run).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SourceId(String);

impl SourceId {
    /// Creates a source identifier.
    ///
    /// Identifiers are non-empty and made of ASCII letters, digits, `-`, `_`
    /// or `.`.
    pub fn new(id: &str) -> Result<Self> {
        let id = id.trim();
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if valid {
            Ok(SourceId(id.to_string()))
        } else {
            Err(XbenchError::InvalidSourceId(id.to_string()))
        }
    }

    /// The identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SourceId {
    type Error = XbenchError;

    fn try_from(value: String) -> Result<Self> {
        SourceId::new(&value)
    }
}

impl From<SourceId> for String {
    fn from(value: SourceId) -> Self {
        value.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One benchmark line recognized by a format parser, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSample {
    /// Operation name with the format wrapper stripped.
    pub name: String,
    /// Time per iteration, in `unit`.
    pub value: f64,
    /// Unit token as written in the output (`ns/op`, `ms`, ...).
    pub unit: String,
    /// Line number (1-based).
    pub line: usize,
    /// The full raw line.
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_rejects_invalid() {
        assert!(TimeNanoseconds::new(-1.0).is_err());
        assert!(TimeNanoseconds::new(f64::NAN).is_err());
        assert!(TimeNanoseconds::new(f64::INFINITY).is_err());
        assert_eq!(TimeNanoseconds::new(0.0).unwrap(), TimeNanoseconds::ZERO);
    }

    #[test]
    fn test_time_conversions() {
        let t = TimeNanoseconds::new(2_500_000.0).unwrap();
        assert_eq!(t.as_millis(), 2.5);
        assert_eq!(t.as_micros(), 2_500.0);
    }

    #[test]
    fn test_unit_tokens() {
        assert_eq!(TimeUnit::from_token("ns/op"), Some(TimeUnit::Nanoseconds));
        assert_eq!(TimeUnit::from_token("ns/iter"), Some(TimeUnit::Nanoseconds));
        assert_eq!(TimeUnit::from_token("µs"), Some(TimeUnit::Microseconds));
        assert_eq!(TimeUnit::from_token("us"), Some(TimeUnit::Microseconds));
        assert_eq!(TimeUnit::from_token("ms"), Some(TimeUnit::Milliseconds));
        assert_eq!(TimeUnit::from_token("s"), Some(TimeUnit::Seconds));
        assert_eq!(TimeUnit::from_token("B/op"), None);
        assert_eq!(TimeUnit::from_token("furlongs"), None);
    }

    #[test]
    fn test_unit_conversion_precision() {
        assert_eq!(TimeUnit::Milliseconds.to_nanos(12.5), 12_500_000.0);
        assert_eq!(TimeUnit::Nanoseconds.to_nanos(7.3), 7.3);
        assert_eq!(TimeUnit::Seconds.to_nanos(1.5), 1_500_000_000.0);
    }

    #[test]
    fn test_source_id_validation() {
        assert_eq!(SourceId::new(" go ").unwrap().as_str(), "go");
        assert!(SourceId::new("sourceA").is_ok());
        assert!(SourceId::new("").is_err());
        assert!(SourceId::new("go lang").is_err());
    }

    #[test]
    fn test_operation_name_title() {
        let op = OperationName::new("consensus_protocol").unwrap();
        assert_eq!(op.title(), "Consensus Protocol");
    }

    #[test]
    fn test_operation_name_serde() {
        let op: OperationName = serde_json::from_str("\"MessageSend\"").unwrap();
        assert_eq!(op.as_str(), "message_send");
        assert_eq!(serde_json::to_string(&op).unwrap(), "\"message_send\"");
        assert!(serde_json::from_str::<OperationName>("\"--\"").is_err());
    }
}
