// Dweve Halbench - Parser Benchmarking and Halstead Reporting
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

//! Error types for benchmarking and reporting operations.
//!
//! Every pipeline in this crate fails loudly: a malformed timing file, an
//! unmapped path, or a failed subject invocation aborts the whole operation
//! instead of producing a partially correct result.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for halbench operations
pub type Result<T> = std::result::Result<T, HalbenchError>;

/// Errors that can occur while timing, storing, aggregating or plotting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HalbenchError {
    /// A required file or folder is absent.
    #[error("Input not found: '{path}'")]
    InputNotFound {
        /// The missing path
        path: PathBuf,
    },

    /// A line of an input file could not be parsed.
    #[error("Malformed data in '{origin}' at line {line}: {reason}")]
    MalformedData {
        /// File (or in-memory source) the line came from
        origin: String,
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// No identifier table entry matches the requested key.
    #[error("No identifier table entry for {kind} '{key}'")]
    UnmappedIdentifier {
        /// Either "path" or "id"
        kind: &'static str,
        /// The key that failed to resolve
        key: String,
    },

    /// A metrics entry is not acceptable input for aggregation.
    #[error("Invalid input row '{path}': {reason}")]
    InvalidInputRow {
        /// The offending structural path
        path: String,
        /// Why the row was rejected
        reason: String,
    },

    /// The benchmarked command failed to launch or exited non-zero.
    #[error("External process '{program}' failed on invocation {invocation}: {reason}")]
    ExternalProcessFailure {
        /// Program that was invoked
        program: String,
        /// 1-based invocation number
        invocation: usize,
        /// Launch error or exit status
        reason: String,
    },

    /// An operation that needs at least one value received none.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// The identifier table violates its bijection or format rules.
    #[error("Invalid identifier table: {0}")]
    InvalidTable(String),

    /// Invalid configuration parameter.
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// I/O operation failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// YAML input could not be decoded.
    #[error("YAML error: {0}")]
    Yaml(String),

    /// JSON output could not be encoded.
    #[error("JSON error: {0}")]
    Json(String),

    /// The plotting backend reported an error.
    #[error("Plot rendering error: {0}")]
    Plot(String),
}

impl HalbenchError {
    /// Create an I/O error with file path context.
    ///
    /// A `NotFound` error is reported as [`HalbenchError::InputNotFound`].
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            return Self::InputNotFound { path };
        }
        Self::Io {
            path,
            message: source.to_string(),
        }
    }

    /// Create a malformed-data error for a specific line.
    pub fn malformed(origin: impl Into<String>, line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedData {
            origin: origin.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Create an invalid-configuration error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

/// Fails with [`HalbenchError::InputNotFound`] unless `path` exists.
///
/// Used to check every input up front, before any work starts.
pub fn require_exists(path: impl Into<PathBuf>) -> Result<PathBuf> {
    let path = path.into();
    if path.exists() {
        Ok(path)
    } else {
        Err(HalbenchError::InputNotFound { path })
    }
}
