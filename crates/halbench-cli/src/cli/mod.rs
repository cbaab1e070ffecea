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

//! CLI command definitions and argument parsing.
//!
//! - [`bench`]: Timing, summary and plot commands
//! - [`halstead`]: Report and identifier table commands
//! - [`utility`]: Shell completion

mod bench;
mod halstead;
mod utility;

use clap::{Parser, Subcommand};
use halbench::HalbenchError;

pub use bench::{BenchCommands, LayoutArg};
pub use halstead::{HalsteadCommands, ReportFormat};
pub use utility::UtilityCommands;

/// Halbench - parser benchmarking and Halstead reporting
///
/// # Examples
///
/// ```bash
/// # Time a parser 30 times
/// halbench run simple_jasm_expr -- python main.py -p expr.yaml -b bash.bin
///
/// # Compare two experiments
/// halbench plot results/list_append results/bytearray --layout panels -o cmp.svg
///
/// # Halstead tables for the paper
/// halbench report hal_metrics.yml --sort > halstead.tex
/// ```
#[derive(Parser)]
#[command(name = "halbench")]
#[command(author, version, about = "Halbench - parser benchmarking and Halstead reporting", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands, flattened from their categories.
#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Bench(BenchCommands),

    #[command(flatten)]
    Halstead(HalsteadCommands),

    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command.
    pub fn execute(self) -> Result<(), HalbenchError> {
        match self {
            Commands::Bench(cmd) => cmd.execute(),
            Commands::Halstead(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
