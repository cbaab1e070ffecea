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

//! Joins Halstead metrics with report identifiers.
//!
//! For every input path, in input order:
//!
//! 1. reject module initializers (the whole batch fails),
//! 2. strip the configured root prefix,
//! 3. resolve the cleaned path to its id,
//! 4. require exactly one value per Halstead column,
//! 5. emit a metrics row with values rounded for display,
//! 6. emit the matching id-to-path row.
//!
//! Every row is validated before anything is returned, so one bad path
//! rejects the whole report.

use crate::config::ReportConfig;
use crate::error::{HalbenchError, Result};
use crate::halstead::identifiers::IdentifierMap;
use crate::halstead::metrics::{MetricsSet, HALSTEAD_COLUMNS};
use serde::Serialize;
use tracing::{debug, info};

/// One row of the metrics-by-id table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsRow {
    /// Report identifier.
    pub id: String,
    /// Field values, rounded.
    pub values: Vec<f64>,
}

/// One row of the id-to-path table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRow {
    /// Report identifier.
    pub id: String,
    /// Path with the root prefix removed.
    pub path: String,
}

/// Metrics keyed by identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsTable {
    /// Column headers, excluding the id column.
    pub columns: Vec<String>,
    /// Rows in input order.
    pub rows: Vec<MetricsRow>,
}

/// Identifier to path lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileTable {
    /// Rows in input order.
    pub rows: Vec<FileRow>,
}

/// The two tables produced by one aggregation.
///
/// They are positionally parallel but each renders on its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HalsteadReport {
    /// Metrics-by-id table.
    pub metrics: MetricsTable,
    /// Id-to-path table.
    pub files: FileTable,
}

impl HalsteadReport {
    /// Returns a copy with both tables ordered by identifier.
    ///
    /// Ids compare by group, then by index (`1.9` < `1.10`).
    pub fn sorted_by_id(&self) -> Self {
        let mut sorted = self.clone();
        sorted.metrics.rows.sort_by_key(|r| id_sort_key(&r.id));
        sorted.files.rows.sort_by_key(|r| id_sort_key(&r.id));
        sorted
    }

    /// Number of rows in each table.
    pub fn len(&self) -> usize {
        self.metrics.rows.len()
    }

    /// True if no metrics were aggregated.
    pub fn is_empty(&self) -> bool {
        self.metrics.rows.is_empty()
    }
}

/// Builds [`HalsteadReport`]s against one identifier table.
pub struct ReportAggregator<'a> {
    mapper: &'a IdentifierMap,
    config: ReportConfig,
}

impl<'a> ReportAggregator<'a> {
    /// Creates an aggregator.
    pub fn new(mapper: &'a IdentifierMap, config: ReportConfig) -> Self {
        Self { mapper, config }
    }

    /// Aggregates every record of `metrics` into the two report tables.
    ///
    /// # Errors
    ///
    /// - [`HalbenchError::InvalidInputRow`] for a module-initializer path or a
    ///   record whose field count differs from [`HALSTEAD_COLUMNS`]
    /// - [`HalbenchError::UnmappedIdentifier`] for a path missing from the table
    pub fn build(&self, metrics: &MetricsSet) -> Result<HalsteadReport> {
        let mut metric_rows = Vec::with_capacity(metrics.len());
        let mut file_rows = Vec::with_capacity(metrics.len());

        for (raw_path, record) in metrics.iter() {
            reject_module_initializer(raw_path, &self.config.module_initializer)?;

            let path = strip_root_prefix(raw_path, &self.config.strip_prefix);
            let id = self.mapper.resolve_id(path)?;

            if record.len() != HALSTEAD_COLUMNS.len() {
                return Err(HalbenchError::InvalidInputRow {
                    path: raw_path.to_string(),
                    reason: format!(
                        "expected {} Halstead fields, found {}",
                        HALSTEAD_COLUMNS.len(),
                        record.len()
                    ),
                });
            }
            debug!(id, path, "Mapped metrics row");

            metric_rows.push(MetricsRow {
                id: id.to_string(),
                values: record
                    .values()
                    .map(|v| round_to(v, self.config.decimals))
                    .collect(),
            });
            file_rows.push(FileRow {
                id: id.to_string(),
                path: path.to_string(),
            });
        }

        info!(rows = metric_rows.len(), "Aggregated Halstead report");
        Ok(HalsteadReport {
            metrics: MetricsTable {
                columns: HALSTEAD_COLUMNS.iter().map(|c| c.to_string()).collect(),
                rows: metric_rows,
            },
            files: FileTable { rows: file_rows },
        })
    }
}

/// Rejects paths naming a module initializer file.
///
/// Initializers must be excluded by the upstream analyser; one in the input
/// rejects the whole batch.
pub fn reject_module_initializer(path: &str, marker: &str) -> Result<()> {
    if !marker.is_empty() && path.contains(marker) {
        return Err(HalbenchError::InvalidInputRow {
            path: path.to_string(),
            reason: format!("'{}' files must be excluded upstream", marker),
        });
    }
    Ok(())
}

/// Removes `prefix` from the start of `path` if present.
pub fn strip_root_prefix<'p>(path: &'p str, prefix: &str) -> &'p str {
    path.strip_prefix(prefix).unwrap_or(path)
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

fn id_sort_key(id: &str) -> (u64, u64, String) {
    let (group, index) = id.split_once('.').unwrap_or((id, ""));
    (
        group.parse().unwrap_or(u64::MAX),
        index.parse().unwrap_or(u64::MAX),
        id.to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::halstead::identifiers::IdentifierEntry;
    use crate::halstead::metrics::MetricRecord;

    fn mapper() -> IdentifierMap {
        IdentifierMap::from_entries(
            vec![
                IdentifierEntry::new("0.01", "logging_config.py"),
                IdentifierEntry::new("1.10", "regex/b.py"),
                IdentifierEntry::new("1.09", "regex/a.py"),
            ],
            "src/jasm/",
        )
        .unwrap()
    }

    fn record(values: &[f64]) -> MetricRecord {
        values
            .iter()
            .zip(HALSTEAD_COLUMNS.iter())
            .fold(MetricRecord::new(), |r, (v, name)| r.with_field(*name, *v))
    }

    /// A complete record starting with `lead`, padded with ones.
    fn full_record(lead: &[f64]) -> MetricRecord {
        let mut values = lead.to_vec();
        values.resize(HALSTEAD_COLUMNS.len(), 1.0);
        record(&values)
    }

    #[test]
    fn test_build_maps_and_rounds() {
        let map = mapper();
        let mut metrics = MetricsSet::new();
        metrics.push("src/jasm/regex/b.py", full_record(&[3.0, 111.882_9, 0.004_9]));
        metrics.push("logging_config.py", full_record(&[1.0, 2.0]));

        let report = ReportAggregator::new(&map, ReportConfig::default())
            .build(&metrics)
            .unwrap();

        assert_eq!(report.len(), 2);
        assert_eq!(report.metrics.rows[0].id, "1.10");
        assert_eq!(report.metrics.rows[0].values[..3], [3.0, 111.88, 0.0]);
        assert_eq!(report.metrics.rows[0].values.len(), 12);
        assert_eq!(report.files.rows[0].path, "regex/b.py");
        assert_eq!(report.files.rows[1].id, "0.01");
        assert_eq!(report.metrics.columns.len(), 12);
    }

    #[test]
    fn test_module_initializer_rejects_whole_batch() {
        let map = mapper();
        let mut metrics = MetricsSet::new();
        metrics.push("src/jasm/regex/a.py", full_record(&[]));
        metrics.push("src/jasm/regex/__init__.py", full_record(&[]));
        metrics.push("src/jasm/regex/b.py", full_record(&[]));

        let result = ReportAggregator::new(&map, ReportConfig::default()).build(&metrics);
        assert!(matches!(
            result,
            Err(HalbenchError::InvalidInputRow { path, .. }) if path == "src/jasm/regex/__init__.py"
        ));
    }

    #[test]
    fn test_unmapped_path_fails() {
        let map = mapper();
        let mut metrics = MetricsSet::new();
        metrics.push("src/jasm/regex/c.py", full_record(&[]));

        let result = ReportAggregator::new(&map, ReportConfig::default()).build(&metrics);
        assert!(matches!(
            result,
            Err(HalbenchError::UnmappedIdentifier { key, .. }) if key == "regex/c.py"
        ));
    }

    #[test]
    fn test_double_prefix_is_caught() {
        let map = mapper();
        let mut metrics = MetricsSet::new();
        metrics.push("src/jasm/src/jasm/regex/a.py", full_record(&[]));

        let result = ReportAggregator::new(&map, ReportConfig::default()).build(&metrics);
        assert!(matches!(result, Err(HalbenchError::InvalidInputRow { .. })));
    }

    #[test]
    fn test_short_record_rejects_whole_batch() {
        let map = mapper();
        let mut metrics = MetricsSet::new();
        metrics.push("regex/a.py", full_record(&[]));
        metrics.push("regex/b.py", record(&[7.0, 21.0, 13.0]));

        let result = ReportAggregator::new(&map, ReportConfig::default()).build(&metrics);
        assert!(matches!(
            result,
            Err(HalbenchError::InvalidInputRow { path, reason })
                if path == "regex/b.py" && reason.contains("found 3")
        ));
    }

    #[test]
    fn test_extra_field_rejected() {
        let map = mapper();
        let mut metrics = MetricsSet::new();
        metrics.push("regex/a.py", full_record(&[]).with_field("bugs_squared", 0.1));

        let result = ReportAggregator::new(&map, ReportConfig::default()).build(&metrics);
        assert!(matches!(
            result,
            Err(HalbenchError::InvalidInputRow { reason, .. }) if reason.contains("found 13")
        ));
    }

    #[test]
    fn test_sorted_by_id_uses_numeric_index() {
        let map = mapper();
        let mut metrics = MetricsSet::new();
        metrics.push("regex/b.py", full_record(&[]));
        metrics.push("logging_config.py", full_record(&[]));
        metrics.push("regex/a.py", full_record(&[]));

        let report = ReportAggregator::new(&map, ReportConfig::default())
            .build(&metrics)
            .unwrap();
        let input_order: Vec<&str> = report.files.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(input_order, vec!["1.10", "0.01", "1.09"]);

        let sorted = report.sorted_by_id();
        let ids: Vec<&str> = sorted.metrics.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["0.01", "1.09", "1.10"]);
        let file_ids: Vec<&str> = sorted.files.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(file_ids, ids);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.234_56, 2), 1.23);
        assert_eq!(round_to(761.145_1, 2), 761.15);
        assert_eq!(round_to(7.0, 2), 7.0);
        assert_eq!(round_to(0.061, 1), 0.1);
    }

    #[test]
    fn test_strip_root_prefix() {
        assert_eq!(strip_root_prefix("src/jasm/match/match.py", "src/jasm/"), "match/match.py");
        assert_eq!(strip_root_prefix("match/match.py", "src/jasm/"), "match/match.py");
        assert_eq!(strip_root_prefix("lib/src/jasm/x.py", "src/jasm/"), "lib/src/jasm/x.py");
    }
}
