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

//! Structured error types for the XBench CLI.
//!
//! All CLI operations return `Result<T, CliError>`; `main` prints the error
//! and exits with a failure status.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use xbench_core::XbenchError;
use xbench_report::ReportError;

/// The main error type for XBench CLI operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Input file exceeds the configured size limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB). Set XBENCH_MAX_INPUT_SIZE to raise the limit")]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
        /// The maximum allowed file size in MB (for display)
        max_mb: u64,
    },

    /// Configuration file is malformed or inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An external command could not be started.
    #[error("Failed to start '{command}': {message}")]
    Spawn {
        /// The command line
        command: String,
        /// The error message
        message: String,
    },

    /// An external command exited unsuccessfully.
    #[error("'{command}' failed with {status}")]
    CommandFailed {
        /// The command line
        command: String,
        /// Exit status description
        status: String,
    },

    /// An external command ran past its timeout and was killed.
    #[error("'{command}' timed out after {timeout_secs} seconds")]
    Timeout {
        /// The command line
        command: String,
        /// The timeout in seconds
        timeout_secs: u64,
    },

    /// The runtime that drives external commands could not be created.
    #[error("Failed to start the command runtime: {message}")]
    Runtime {
        /// The error message
        message: String,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },

    /// YAML deserialization error.
    #[error("YAML format error: {message}")]
    YamlFormat {
        /// The error message
        message: String,
    },

    /// Error from the normalization core.
    #[error(transparent)]
    Core(#[from] XbenchError),

    /// Error while writing or loading reports.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(source: serde_yaml::Error) -> Self {
        Self::YamlFormat {
            message: source.to_string(),
        }
    }
}

impl From<xbench_core::FormatError> for CliError {
    fn from(source: xbench_core::FormatError) -> Self {
        Self::Core(source.into())
    }
}
