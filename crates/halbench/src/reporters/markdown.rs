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

//! Markdown export for Halstead reports.

use crate::config::ReportConfig;
use crate::error::{HalbenchError, Result};
use crate::halstead::{FileTable, HalsteadReport, MetricsTable};
use crate::reporters::latex::format_value;
use std::fs;
use std::path::Path;

/// Renders the metrics-by-id table as a pipe table.
pub fn render_metrics_table(table: &MetricsTable) -> String {
    let mut md = String::new();

    md.push_str("| ID |");
    for column in &table.columns {
        md.push_str(&format!(" {} |", column));
    }
    md.push('\n');

    md.push_str("|----|");
    for column in &table.columns {
        md.push_str(&format!("{}|", "-".repeat(column.len() + 2)));
    }
    md.push('\n');

    for row in &table.rows {
        md.push_str(&format!("| {} |", row.id));
        for value in &row.values {
            md.push_str(&format!(" {} |", format_value(*value)));
        }
        md.push('\n');
    }
    md
}

/// Renders the id-to-path table.
pub fn render_file_table(table: &FileTable) -> String {
    let mut md = String::new();
    md.push_str("| ID | File name |\n");
    md.push_str("|----|-----------|\n");
    for row in &table.rows {
        md.push_str(&format!("| {} | `{}` |\n", row.id, row.path));
    }
    md
}

/// Renders both tables under their captions.
pub fn render_report(report: &HalsteadReport, config: &ReportConfig) -> String {
    let mut md = String::new();
    md.push_str(&format!("## {}\n\n", config.metrics_caption));
    md.push_str(&render_metrics_table(&report.metrics));
    md.push_str(&format!("\n## {}\n\n", config.files_caption));
    md.push_str(&render_file_table(&report.files));
    md
}

/// Exports a Halstead report as Markdown.
pub fn export_markdown(report: &HalsteadReport, config: &ReportConfig, path: &Path) -> Result<()> {
    fs::write(path, render_report(report, config)).map_err(|e| HalbenchError::io_error(path, e))
}
