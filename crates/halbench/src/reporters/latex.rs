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

//! LaTeX table rendering for Halstead reports.
//!
//! Produces two independent `table` floats: metrics by id and the id to
//! file name lookup. Both need the `float` (for `[H]`) and `array` packages.

use crate::config::ReportConfig;
use crate::error::{HalbenchError, Result};
use crate::halstead::{FileTable, HalsteadReport, MetricsTable};
use std::fs;
use std::path::Path;

/// Count columns (h1, h2, N1, N2) get the narrow width.
const NARROW_COLUMNS: usize = 4;

/// Renders the metrics-by-id table.
pub fn render_metrics_table(table: &MetricsTable, config: &ReportConfig) -> String {
    let narrow = table.columns.len().min(NARROW_COLUMNS);
    let wide = table.columns.len() - narrow;

    let mut tex = String::new();
    tex.push_str("\\begin{table}[H]\n");
    tex.push_str("    \\centering\n");
    tex.push_str("    \\tiny\n");
    tex.push_str("    \\begin{tabular}{\n");
    tex.push_str("    >{\\centering\\arraybackslash}p{0.3cm}| % ID column\n");
    if narrow > 0 {
        tex.push_str(&format!(
            "    *{{{}}}{{>{{\\centering\\arraybackslash}}p{{0.3cm}}}}| % Operator and operand counts\n",
            narrow
        ));
    }
    if wide > 0 {
        tex.push_str(&format!(
            "    *{{{}}}{{>{{\\centering\\arraybackslash}}p{{1.3cm}}}} % Derived measures\n",
            wide
        ));
    }
    tex.push_str("    }\n");

    let header: Vec<String> = std::iter::once("ID")
        .chain(table.columns.iter().map(String::as_str))
        .map(|c| format!("\\textbf{{{}}}", escape(c)))
        .collect();
    tex.push_str(&format!("    {} \\\\ \\hline\n", header.join(" & ")));

    for row in &table.rows {
        let cells: Vec<String> = std::iter::once(escape(&row.id))
            .chain(row.values.iter().map(|v| format_value(*v)))
            .collect();
        tex.push_str(&format!("    {} \\\\\n", cells.join(" & ")));
    }

    tex.push_str("    \\end{tabular}\n");
    tex.push_str(&format!("    \\caption{{{}}}\n", escape(&config.metrics_caption)));
    tex.push_str(&format!("    \\label{{{}}}\n", config.metrics_label));
    tex.push_str("\\end{table}\n");
    tex
}

/// Renders the id-to-path table.
pub fn render_file_table(table: &FileTable, config: &ReportConfig) -> String {
    let mut tex = String::new();
    tex.push_str("\\begin{table}[H]\n");
    tex.push_str("    \\centering\n");
    tex.push_str("    \\tiny\n");
    tex.push_str("    \\begin{tabular}{c|l}\n");
    tex.push_str("    \\textbf{ID} & \\textbf{File name} \\\\ \\hline\n");
    for row in &table.rows {
        tex.push_str(&format!(
            "    {} & {} \\\\\n",
            escape(&row.id),
            escape(&row.path)
        ));
    }
    tex.push_str("    \\end{tabular}\n");
    tex.push_str(&format!("    \\caption{{{}}}\n", escape(&config.files_caption)));
    tex.push_str(&format!("    \\label{{{}}}\n", config.files_label));
    tex.push_str("\\end{table}\n");
    tex
}

/// Renders both tables separated by a blank line.
pub fn render_report(report: &HalsteadReport, config: &ReportConfig) -> String {
    format!(
        "{}\n{}",
        render_metrics_table(&report.metrics, config),
        render_file_table(&report.files, config)
    )
}

/// Writes both tables to `path`.
pub fn export_latex(report: &HalsteadReport, config: &ReportConfig, path: &Path) -> Result<()> {
    fs::write(path, render_report(report, config)).map_err(|e| HalbenchError::io_error(path, e))
}

/// Shortest decimal form of an already rounded value (`3`, `111.88`).
pub fn format_value(value: f64) -> String {
    format!("{}", value)
}

/// Escapes characters with special meaning in LaTeX text.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::halstead::{FileRow, MetricsRow, HALSTEAD_COLUMNS};

    fn report() -> HalsteadReport {
        HalsteadReport {
            metrics: MetricsTable {
                columns: HALSTEAD_COLUMNS.iter().map(|c| c.to_string()).collect(),
                rows: vec![MetricsRow {
                    id: "2.01".to_string(),
                    values: vec![
                        7.0, 21.0, 13.0, 25.0, 28.0, 38.0, 111.88, 182.67, 4.17, 761.15, 42.29,
                        0.06,
                    ],
                }],
            },
            files: FileTable {
                rows: vec![FileRow {
                    id: "2.01".to_string(),
                    path: "match/stream_consumer.py".to_string(),
                }],
            },
        }
    }

    #[test]
    fn test_metrics_table_layout() {
        let tex = render_metrics_table(&report().metrics, &ReportConfig::default());
        assert!(tex.starts_with("\\begin{table}[H]\n"));
        assert!(tex.contains("*{4}{>{\\centering\\arraybackslash}p{0.3cm}}|"));
        assert!(tex.contains("*{8}{>{\\centering\\arraybackslash}p{1.3cm}}"));
        assert!(tex.contains("\\textbf{ID} & \\textbf{h1} & \\textbf{h2}"));
        assert!(tex.contains("\\textbf{calculated length}"));
        assert!(tex.contains(
            "    2.01 & 7 & 21 & 13 & 25 & 28 & 38 & 111.88 & 182.67 & 4.17 & 761.15 & 42.29 & 0.06 \\\\\n"
        ));
        assert!(tex.contains("\\label{table:halstead_metrics_by_id}"));
        assert!(tex.ends_with("\\end{table}\n"));
    }

    #[test]
    fn test_file_table_escapes_paths() {
        let tex = render_file_table(&report().files, &ReportConfig::default());
        assert!(tex.contains("\\begin{tabular}{c|l}"));
        assert!(tex.contains("    2.01 & match/stream\\_consumer.py \\\\\n"));
        assert!(tex.contains("\\label{table:halstead_id_to_filename}"));
    }

    #[test]
    fn test_tables_render_independently() {
        let config = ReportConfig::default();
        let report = report();
        let full = render_report(&report, &config);
        assert!(full.contains(&render_metrics_table(&report.metrics, &config)));
        assert!(full.contains(&render_file_table(&report.files, &config)));
        assert_eq!(full.matches("\\begin{table}").count(), 2);
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a_b & 50%"), "a\\_b \\& 50\\%");
        assert_eq!(escape("plain/path.py"), "plain/path.py");
    }
}
