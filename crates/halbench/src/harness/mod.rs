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

//! Benchmark harness: timing, persistence and statistics.
//!
//! # Modules
//!
//! - `experiment`: Duration samples and named experiment runs
//! - `runner`: Sequential wall-clock timing of an external command
//! - `store`: Plain-text timing, summary and labeled result files
//! - `stats`: Mean and population standard deviation

pub mod experiment;
pub mod runner;
pub mod stats;
pub mod store;

pub use experiment::{DurationSample, ExperimentRun};
pub use runner::{CommandSpec, TimingRunner};
pub use stats::{mean, stddev, summarize, Summary};
pub use store::{
    find_times_file, format_summary, parse_durations, parse_labeled, parse_summary,
    read_durations, read_labeled, read_summary, resolve_times_path, save_experiment,
    series_label, write_durations, write_durations_to, write_summary,
};
