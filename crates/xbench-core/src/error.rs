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

//! Error types for benchmark normalization.
//!
//! Parsers never fail: malformed lines are skipped. The only hard failure
//! while turning raw output into a [`SourceResult`](crate::SourceResult) is a
//! unit token with no known conversion factor, reported as [`FormatError`].
//! Everything else (invalid identifiers, configuration mistakes) surfaces as
//! [`XbenchError`].

use thiserror::Error;

/// Result type for XBench core operations.
pub type Result<T> = std::result::Result<T, XbenchError>;

/// A raw benchmark line that cannot be converted to the canonical schema.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// The line declared a time unit with no conversion factor to nanoseconds.
    #[error("unknown time unit '{unit}' at line {line}: {text}")]
    UnknownUnit {
        /// The unit token as it appeared in the output.
        unit: String,
        /// Line number (1-based) in the source output.
        line: usize,
        /// The offending raw line.
        text: String,
    },
}

impl FormatError {
    /// Line number (1-based) of the offending line.
    pub fn line(&self) -> usize {
        match self {
            FormatError::UnknownUnit { line, .. } => *line,
        }
    }
}

/// Errors raised by the XBench core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum XbenchError {
    /// Raw output could not be normalized.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A source identifier was empty or contained unsupported characters.
    #[error("invalid source identifier '{0}': expected ASCII letters, digits, '-', '_' or '.'")]
    InvalidSourceId(String),

    /// An operation name canonicalized to nothing.
    #[error("invalid operation name '{0}': nothing left after canonicalization")]
    InvalidOperation(String),

    /// A duration was negative, NaN or infinite.
    #[error("invalid duration {0}: must be a finite, non-negative number of nanoseconds")]
    InvalidTime(f64),

    /// A format name did not match any supported format.
    #[error("unknown benchmark format '{name}' (supported: {supported})")]
    UnknownFormat {
        /// The requested format name.
        name: String,
        /// Comma separated list of supported names.
        supported: String,
    },

    /// Configuration failed validation.
    #[error("invalid configuration '{parameter}': {reason}")]
    InvalidConfig {
        /// Configuration parameter name.
        parameter: String,
        /// Reason for invalidity.
        reason: String,
    },
}
