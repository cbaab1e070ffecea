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

//! Benchmark commands: timing, summaries and box plots.

use crate::commands;
use clap::{Subcommand, ValueEnum};
use halbench::{HalbenchError, Layout};
use std::path::PathBuf;

/// Multi-series plot layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    /// One sub-panel per series
    Panels,
    /// All boxes in one panel
    Combined,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Panels => Layout::Panels,
            LayoutArg::Combined => Layout::Combined,
        }
    }
}

/// Benchmark commands.
#[derive(Subcommand)]
pub enum BenchCommands {
    /// Time an external command
    ///
    /// Invokes the command sequentially, records each wall-clock duration and
    /// writes `<results>/<name>/<name>_execution_times.txt` plus
    /// `<results>/<name>/avg_and_std.txt`.
    Run {
        /// Experiment name
        #[arg(value_name = "NAME")]
        name: String,

        /// Command to time, after `--`
        #[arg(last = true, required = true, value_name = "COMMAND")]
        command: Vec<String>,

        /// Number of invocations (defaults to $HALBENCH_RUNS or 30)
        #[arg(short = 'n', long)]
        runs: Option<usize>,

        /// Results root directory
        #[arg(short, long, default_value = "results")]
        results: PathBuf,

        /// Discard the command's own output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print mean and standard deviation of stored runs
    Summarize {
        /// Timing files or experiment folders
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<PathBuf>,

        /// Inputs use the `Run N: <secs> seconds` format
        #[arg(long)]
        labeled: bool,

        /// Also export the summaries as JSON
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,
    },

    /// Render a box plot of stored runs
    ///
    /// Writes the SVG document to stdout unless `--output` is given.
    Plot {
        /// Timing files or experiment folders
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<PathBuf>,

        /// Layout used for more than one series
        #[arg(short, long, value_enum, default_value = "combined")]
        layout: LayoutArg,

        /// Annotate each box with its mean
        #[arg(short = 'm', long)]
        annotate_mean: bool,

        /// Figure title
        #[arg(short, long)]
        title: Option<String>,

        /// Output SVG file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Inputs use the `Run N: <secs> seconds` format
        #[arg(long)]
        labeled: bool,

        /// Figure width in pixels
        #[arg(long, default_value = "1000")]
        width: u32,

        /// Figure height in pixels
        #[arg(long, default_value = "600")]
        height: u32,
    },
}

impl BenchCommands {
    /// Execute the benchmark command.
    pub fn execute(self) -> Result<(), HalbenchError> {
        match self {
            BenchCommands::Run {
                name,
                command,
                runs,
                results,
                quiet,
            } => commands::run(&name, &command, runs, &results, quiet),
            BenchCommands::Summarize {
                inputs,
                labeled,
                json,
            } => commands::summarize(&inputs, labeled, json.as_deref()),
            BenchCommands::Plot {
                inputs,
                layout,
                annotate_mean,
                title,
                output,
                labeled,
                width,
                height,
            } => commands::plot(
                &inputs,
                &commands::PlotOptions {
                    layout: layout.into(),
                    annotate_mean,
                    title,
                    output,
                    labeled,
                    size: (width, height),
                },
            ),
        }
    }
}
