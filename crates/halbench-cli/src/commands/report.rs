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

//! Report command - Halstead metrics to id-keyed tables

use super::write_output;
use crate::cli::ReportFormat;
use halbench::halstead::{IdentifierMap, MetricsSet, ReportAggregator};
use halbench::reporters::{latex, markdown, to_json_string};
use halbench::{HalbenchError, ReportConfig};
use std::path::Path;

/// Aggregates `metrics` against the identifier table and renders the result.
pub fn report(
    metrics: &Path,
    identifiers: Option<&Path>,
    format: ReportFormat,
    sort: bool,
    strip_prefix: Option<String>,
    output: Option<&Path>,
) -> Result<(), HalbenchError> {
    let mut config = ReportConfig::default();
    if let Some(prefix) = strip_prefix {
        config = config.with_strip_prefix(prefix);
    }

    let map = match identifiers {
        Some(path) => IdentifierMap::load_with_reserved(path, &config.strip_prefix)?,
        None => IdentifierMap::builtin_with_reserved(&config.strip_prefix)?,
    };
    let metrics = MetricsSet::load(metrics)?;

    let mut report = ReportAggregator::new(&map, config.clone()).build(&metrics)?;
    if sort {
        report = report.sorted_by_id();
    }

    let rendered = match format {
        ReportFormat::Latex => latex::render_report(&report, &config),
        ReportFormat::Markdown => markdown::render_report(&report, &config),
        ReportFormat::Json => to_json_string(&report)?,
    };
    write_output(&rendered, output)
}
