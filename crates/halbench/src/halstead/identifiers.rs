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

//! Bijective mapping between short report identifiers and source paths.
//!
//! Report tables show `1.07` instead of a long structural path. The table is
//! loaded once, validated up front, and then only queried. Lookups are exact
//! string matches in both directions; a miss is an error, never a default.
//!
//! # Table format
//!
//! ```yaml
//! - id: "0.01"
//!   path: logging_config.py
//! - id: "1.01"
//!   path: regex/yaml2regex.py
//! ```

use crate::config::DEFAULT_STRIP_PREFIX;
use crate::error::{HalbenchError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

const BUILTIN_TABLE: &str = include_str!("identifiers.yaml");

/// One `(id, path)` pair of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierEntry {
    /// Dotted two-level code, e.g. `1.07`.
    pub id: String,
    /// Structural path relative to the analysed package root.
    pub path: String,
}

impl IdentifierEntry {
    /// Creates an entry.
    pub fn new(id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
        }
    }

    /// Leading group number of the id (`1` for `1.07`).
    pub fn group(&self) -> Option<u32> {
        self.id.split_once('.').and_then(|(g, _)| g.parse().ok())
    }
}

/// Validated identifier table, indexed in both directions.
#[derive(Debug, Clone)]
pub struct IdentifierMap {
    entries: Vec<IdentifierEntry>,
    by_id: HashMap<String, usize>,
    by_path: HashMap<String, usize>,
    reserved: String,
}

impl IdentifierMap {
    /// Builds a map from an ordered list of entries.
    ///
    /// `reserved` is the project-root prefix that upstream code must already
    /// have stripped; an entry or a query carrying it indicates a
    /// double-prefixed path. Pass an empty string to disable the check.
    ///
    /// # Errors
    ///
    /// Returns [`HalbenchError::InvalidTable`] if the table is empty, an id is
    /// not `<digits>.<digits>`, an id or path contains `reserved`, or an id or
    /// path appears twice.
    pub fn from_entries(entries: Vec<IdentifierEntry>, reserved: &str) -> Result<Self> {
        if entries.is_empty() {
            return Err(HalbenchError::InvalidTable(
                "identifier table has no entries".to_string(),
            ));
        }

        let mut by_id = HashMap::with_capacity(entries.len());
        let mut by_path = HashMap::with_capacity(entries.len());

        for (idx, entry) in entries.iter().enumerate() {
            if !is_dotted_id(&entry.id) {
                return Err(HalbenchError::InvalidTable(format!(
                    "id '{}' is not of the form <group>.<index>",
                    entry.id
                )));
            }
            if entry.path.is_empty() {
                return Err(HalbenchError::InvalidTable(format!(
                    "id '{}' has an empty path",
                    entry.id
                )));
            }
            if !reserved.is_empty()
                && (entry.path.contains(reserved) || entry.id.contains(reserved))
            {
                return Err(HalbenchError::InvalidTable(format!(
                    "entry '{}' -> '{}' carries the reserved prefix '{}'",
                    entry.id, entry.path, reserved
                )));
            }
            if let Some(prev) = by_id.insert(entry.id.clone(), idx) {
                return Err(HalbenchError::InvalidTable(format!(
                    "duplicate id '{}' (paths '{}' and '{}')",
                    entry.id, entries[prev].path, entry.path
                )));
            }
            if let Some(prev) = by_path.insert(entry.path.clone(), idx) {
                return Err(HalbenchError::InvalidTable(format!(
                    "duplicate path '{}' (ids '{}' and '{}')",
                    entry.path, entries[prev].id, entry.id
                )));
            }
        }

        debug!(entries = entries.len(), "Identifier table validated");
        Ok(Self {
            entries,
            by_id,
            by_path,
            reserved: reserved.to_string(),
        })
    }

    /// Parses and validates a YAML table.
    pub fn from_yaml_str(content: &str, reserved: &str) -> Result<Self> {
        let entries: Vec<IdentifierEntry> =
            serde_yaml::from_str(content).map_err(|e| HalbenchError::Yaml(e.to_string()))?;
        Self::from_entries(entries, reserved)
    }

    /// Loads a YAML table from disk, guarding against the default root prefix.
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_with_reserved(path, DEFAULT_STRIP_PREFIX)
    }

    /// Loads a YAML table from disk, guarding against `reserved`.
    ///
    /// Pass the same prefix the aggregator strips so that a path which kept
    /// it after stripping is caught.
    pub fn load_with_reserved(path: &Path, reserved: &str) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| HalbenchError::io_error(path, e))?;
        Self::from_yaml_str(&content, reserved)
            .map_err(|e| match e {
                HalbenchError::Yaml(msg) => {
                    HalbenchError::Yaml(format!("{}: {}", path.display(), msg))
                }
                other => other,
            })
    }

    /// The table shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::builtin_with_reserved(DEFAULT_STRIP_PREFIX)
    }

    /// The shipped table, guarding against `reserved` instead of the default prefix.
    pub fn builtin_with_reserved(reserved: &str) -> Result<Self> {
        Self::from_yaml_str(BUILTIN_TABLE, reserved)
    }

    /// Resolves a path to its id.
    ///
    /// # Errors
    ///
    /// - [`HalbenchError::InvalidInputRow`] if the path still carries the
    ///   reserved prefix
    /// - [`HalbenchError::UnmappedIdentifier`] if no entry has exactly this path
    pub fn resolve_id(&self, path: &str) -> Result<&str> {
        if !self.reserved.is_empty() && path.contains(&self.reserved) {
            return Err(HalbenchError::InvalidInputRow {
                path: path.to_string(),
                reason: format!("path still carries the '{}' prefix", self.reserved),
            });
        }
        self.by_path
            .get(path)
            .map(|&idx| self.entries[idx].id.as_str())
            .ok_or_else(|| HalbenchError::UnmappedIdentifier {
                kind: "path",
                key: path.to_string(),
            })
    }

    /// Resolves an id to its path.
    ///
    /// # Errors
    ///
    /// Returns [`HalbenchError::UnmappedIdentifier`] if no entry has exactly this id.
    pub fn resolve_path(&self, id: &str) -> Result<&str> {
        self.by_id
            .get(id)
            .map(|&idx| self.entries[idx].path.as_str())
            .ok_or_else(|| HalbenchError::UnmappedIdentifier {
                kind: "id",
                key: id.to_string(),
            })
    }

    /// Entries in table order.
    pub fn entries(&self) -> &[IdentifierEntry] {
        &self.entries
    }

    /// Entries of one group (`0` = shared utilities, `1` = regex, ...).
    pub fn group(&self, group: u32) -> impl Iterator<Item = &IdentifierEntry> + '_ {
        self.entries
            .iter()
            .filter(move |e| e.group() == Some(group))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed map.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_dotted_id(id: &str) -> bool {
    match id.split_once('.') {
        Some((group, index)) => {
            !group.is_empty()
                && !index.is_empty()
                && group.bytes().all(|b| b.is_ascii_digit())
                && index.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}
