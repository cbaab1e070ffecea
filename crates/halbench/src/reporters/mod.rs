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

//! Report rendering and export.
//!
//! # Modules
//!
//! - `latex`: `table` floats for the Halstead report
//! - `markdown`: Pipe tables for the Halstead report
//! - `console`: Terminal summaries
//! - `json`: JSON export of summaries and reports

pub mod console;
pub mod json;
pub mod latex;
pub mod markdown;

pub use console::{format_identifier_table, format_series_line, print_run_summary, print_series_summary};
pub use json::{export_json, to_json_string, ExperimentSummary, SummaryReport};
pub use latex::export_latex;
pub use markdown::export_markdown;
