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

//! Error types for report rendering and result persistence.

use std::path::Path;
use thiserror::Error;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors raised while writing or reading report files.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// File could not be read or written.
    #[error("I/O error on '{path}': {message}")]
    Io {
        /// File path.
        path: String,
        /// Underlying error message.
        message: String,
    },

    /// JSON could not be produced or parsed.
    #[error("JSON error in '{path}': {message}")]
    Json {
        /// File path, or `<memory>` for in-memory conversions.
        path: String,
        /// Underlying error message.
        message: String,
    },
}

impl ReportError {
    pub(crate) fn io(path: &Path, err: std::io::Error) -> Self {
        ReportError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn json(path: &Path, err: serde_json::Error) -> Self {
        ReportError::Json {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}
