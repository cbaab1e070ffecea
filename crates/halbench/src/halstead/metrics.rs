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

//! Halstead metrics input produced by an external static analyser.
//!
//! The input is a YAML mapping from source path to an ordered mapping of
//! named numeric fields:
//!
//! ```yaml
//! src/jasm/match/match.py:
//!   h1: 7
//!   h2: 21
//!   N1: 13
//!   N2: 25
//!   vocabulary: 28
//!   length: 38
//!   calculated_length: 111.88
//!   volume: 182.67
//!   difficulty: 4.17
//!   effort: 761.14
//!   time: 42.29
//!   bugs: 0.06
//! ```
//!
//! Both the order of paths and the order of fields are preserved.

use crate::error::{HalbenchError, Result};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Column headers of a Halstead metrics row, in analyser order.
pub const HALSTEAD_COLUMNS: [&str; 12] = [
    "h1",
    "h2",
    "N1",
    "N2",
    "vocabulary",
    "length",
    "calculated length",
    "volume",
    "difficulty",
    "effort",
    "time",
    "bugs",
];

/// Named numeric fields of one source unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricRecord {
    fields: Vec<(String, f64)>,
}

impl MetricRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, keeping insertion order.
    pub fn with_field(mut self, name: impl Into<String>, value: f64) -> Self {
        self.fields.push((name.into(), value));
        self
    }

    /// Fields in order.
    pub fn fields(&self) -> &[(String, f64)] {
        &self.fields
    }

    /// Field values in order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.fields.iter().map(|(_, v)| *v)
    }

    /// Looks up a field by name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Ordered collection of per-path metric records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricsSet {
    records: Vec<(String, MetricRecord)>,
}

impl MetricsSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record for `path`.
    pub fn push(&mut self, path: impl Into<String>, record: MetricRecord) {
        self.records.push((path.into(), record));
    }

    /// Records in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricRecord)> {
        self.records.iter().map(|(p, r)| (p.as_str(), r))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Parses the YAML input format.
    ///
    /// # Errors
    ///
    /// Returns [`HalbenchError::Yaml`] if the document is not a mapping of
    /// paths to mappings of numeric fields.
    pub fn from_yaml_str(content: &str, origin: &str) -> Result<Self> {
        let doc: Value = serde_yaml::from_str(content)
            .map_err(|e| HalbenchError::Yaml(format!("{}: {}", origin, e)))?;

        let top = match doc {
            Value::Mapping(map) => map,
            Value::Null => return Ok(Self::new()),
            _ => {
                return Err(HalbenchError::Yaml(format!(
                    "{}: expected a mapping of paths to metrics",
                    origin
                )))
            }
        };

        let mut set = Self::new();
        for (key, value) in top {
            let path = key.as_str().ok_or_else(|| {
                HalbenchError::Yaml(format!("{}: metric keys must be path strings", origin))
            })?;
            let fields = value.as_mapping().ok_or_else(|| {
                HalbenchError::Yaml(format!(
                    "{}: entry '{}' is not a mapping of metric fields",
                    origin, path
                ))
            })?;

            let mut record = MetricRecord::new();
            for (name, number) in fields {
                let name = name.as_str().ok_or_else(|| {
                    HalbenchError::Yaml(format!(
                        "{}: entry '{}' has a non-string field name",
                        origin, path
                    ))
                })?;
                let number = number.as_f64().ok_or_else(|| {
                    HalbenchError::Yaml(format!(
                        "{}: field '{}' of '{}' is not numeric",
                        origin, name, path
                    ))
                })?;
                record = record.with_field(name, number);
            }
            set.push(path, record);
        }

        Ok(set)
    }

    /// Loads the YAML input format from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| HalbenchError::io_error(path, e))?;
        Self::from_yaml_str(&content, &path.display().to_string())
    }
}
