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

//! Summarize command - prints statistics of stored runs

use super::load_series;
use halbench::reporters::{export_json, print_series_summary, ExperimentSummary, SummaryReport};
use halbench::HalbenchError;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prints one `<label> - Average: .., Std Dev: ..` line per input.
pub fn summarize(
    inputs: &[PathBuf],
    labeled: bool,
    json: Option<&Path>,
) -> Result<(), HalbenchError> {
    let series = load_series(inputs, labeled)?;

    let mut report = SummaryReport::new();
    for s in &series {
        let summary = s.summary()?;
        print_series_summary(&s.label, &summary);
        report.push(ExperimentSummary::new(&s.label, s.len(), &summary));
    }

    if let Some(path) = json {
        export_json(&report, path)?;
        info!(file = %path.display(), "Exported JSON summary");
    }
    Ok(())
}
