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

//! Console output for experiment summaries.

use crate::halstead::IdentifierMap;
use crate::harness::Summary;

/// One comparison line: `<label> - Average: <mean>, Std Dev: <stddev>`.
pub fn format_series_line(label: &str, summary: &Summary) -> String {
    format!(
        "{} - Average: {:.6}, Std Dev: {:.6}",
        label, summary.mean, summary.stddev
    )
}

/// Prints one comparison line per plotted series.
pub fn print_series_summary(label: &str, summary: &Summary) {
    println!("{}", format_series_line(label, summary));
}

/// Prints the summary of a freshly timed experiment.
pub fn print_run_summary(name: &str, runs: usize, summary: &Summary) {
    println!("\n{}", "=".repeat(60));
    println!("EXPERIMENT: {} ({} runs)", name, runs);
    println!("{}", "=".repeat(60));
    println!("Average execution time: {:.6} seconds", summary.mean);
    println!("Standard Deviation: {:.6} seconds", summary.stddev);
}

/// Formats the identifier table, one `<id>  <path>` line per entry.
pub fn format_identifier_table(map: &IdentifierMap) -> String {
    let width = map.entries().iter().map(|e| e.id.len()).max().unwrap_or(2);
    let mut out = String::new();
    for entry in map.entries() {
        out.push_str(&format!("{:<width$}  {}\n", entry.id, entry.path, width = width));
    }
    out
}
