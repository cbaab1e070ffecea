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

//! JSON export for experiment summaries and Halstead reports.

use crate::error::{HalbenchError, Result};
use crate::harness::Summary;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Statistics of one experiment series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentSummary {
    /// Series label.
    pub name: String,
    /// Number of samples.
    pub runs: usize,
    /// Mean duration in seconds.
    pub mean: f64,
    /// Population standard deviation in seconds.
    pub stddev: f64,
}

impl ExperimentSummary {
    /// Creates a summary entry.
    pub fn new(name: impl Into<String>, runs: usize, summary: &Summary) -> Self {
        Self {
            name: name.into(),
            runs,
            mean: summary.mean,
            stddev: summary.stddev,
        }
    }
}

/// A timestamped collection of experiment summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// RFC 3339 creation time.
    pub timestamp: String,
    /// Summaries in input order.
    pub experiments: Vec<ExperimentSummary>,
}

impl SummaryReport {
    /// Creates an empty report stamped with the current time.
    pub fn new() -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            experiments: Vec::new(),
        }
    }

    /// Appends a summary.
    pub fn push(&mut self, summary: ExperimentSummary) {
        self.experiments.push(summary);
    }
}

impl Default for SummaryReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializes any report as pretty-printed JSON.
pub fn to_json_string<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| HalbenchError::Json(e.to_string()))
}

/// Exports a report as JSON.
pub fn export_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let json = to_json_string(value)?;
    fs::write(path, json).map_err(|e| HalbenchError::io_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_json() {
        let mut report = SummaryReport::new();
        report.push(ExperimentSummary::new(
            "simple_jasm_expr",
            3,
            &Summary {
                mean: 2.0,
                stddev: 0.5,
            },
        ));
        let temp = NamedTempFile::new().unwrap();

        export_json(&report, temp.path()).unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        let parsed: SummaryReport = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, report);
        assert!(content.contains("\"timestamp\""));
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let report = SummaryReport::new();
        assert!(chrono::DateTime::parse_from_rfc3339(&report.timestamp).is_ok());
    }
}
