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

//! Halbench: parser benchmarking and Halstead reporting
//!
//! Times repeated invocations of an external parser, stores and summarizes
//! the durations, draws comparative box plots and turns Halstead metrics into
//! id-keyed LaTeX or Markdown tables.
//!
//! ## Features
//!
//! - **Timing harness**: Sequential wall-clock runs of an external command
//! - **Result store**: Plain-text timing and summary files per experiment
//! - **Statistics**: Mean and population standard deviation
//! - **Box plots**: Single, per-panel or combined SVG figures
//! - **Halstead reports**: Bijective id table, aggregation and rendering
//!
//! ## Usage
//!
//! ```no_run
//! use halbench::{CommandSpec, ExperimentLayout, RunConfig, TimingRunner};
//!
//! let command = CommandSpec::new("./parse").flag("--file", "input.asm");
//! let runner = TimingRunner::new(RunConfig::new(command).with_runs(30));
//! let run = runner.run("simple_jasm_expr")?;
//! halbench::save_experiment(&run, &ExperimentLayout::default())?;
//! # Ok::<(), halbench::HalbenchError>(())
//! ```

pub mod config;
pub mod error;
pub mod halstead;
pub mod harness;
pub mod plot;
pub mod reporters;

pub use config::{
    default_runs, ExperimentLayout, Layout, OutputTarget, PlotConfig, ReportConfig, RunConfig,
    DEFAULT_RUNS, RUNS_ENV_VAR,
};
pub use error::{require_exists, HalbenchError, Result};
pub use halstead::{HalsteadReport, IdentifierEntry, IdentifierMap, MetricsSet, ReportAggregator};
pub use harness::{
    save_experiment, summarize, CommandSpec, DurationSample, ExperimentRun, Summary, TimingRunner,
};
pub use plot::{ComparativePlotter, PlotArtifact, RenderedLayout, Series};
