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

//! Halstead report commands.

use crate::commands;
use clap::{Subcommand, ValueEnum};
use halbench::HalbenchError;
use std::path::PathBuf;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// LaTeX `table` floats
    Latex,
    /// Markdown pipe tables
    Markdown,
    /// JSON document
    Json,
}

/// Halstead commands.
#[derive(Subcommand)]
pub enum HalsteadCommands {
    /// Build the Halstead tables from analyser output
    ///
    /// Every path is mapped to its short id; a module initializer or an
    /// unknown path rejects the whole input.
    Report {
        /// Halstead metrics YAML file
        #[arg(value_name = "FILE")]
        metrics: PathBuf,

        /// Identifier table YAML (defaults to the built-in table)
        #[arg(short, long, value_name = "FILE")]
        identifiers: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "latex")]
        format: ReportFormat,

        /// Order rows by id instead of input order
        #[arg(short, long)]
        sort: bool,

        /// Prefix stripped from analyser paths
        #[arg(long, value_name = "PREFIX")]
        strip_prefix: Option<String>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the identifier table
    Identifiers {
        /// Identifier table YAML (defaults to the built-in table)
        #[arg(value_name = "FILE")]
        table: Option<PathBuf>,

        /// Only validate the table
        #[arg(short, long)]
        check: bool,
    },
}

impl HalsteadCommands {
    /// Execute the Halstead command.
    pub fn execute(self) -> Result<(), HalbenchError> {
        match self {
            HalsteadCommands::Report {
                metrics,
                identifiers,
                format,
                sort,
                strip_prefix,
                output,
            } => commands::report(
                &metrics,
                identifiers.as_deref(),
                format,
                sort,
                strip_prefix,
                output.as_deref(),
            ),
            HalsteadCommands::Identifiers { table, check } => {
                commands::identifiers(table.as_deref(), check)
            }
        }
    }
}
