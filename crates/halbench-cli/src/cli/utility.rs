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

//! Utility commands.

use crate::commands;
use clap::Subcommand;
use clap_complete::Shell;
use halbench::HalbenchError;

/// Utility commands.
#[derive(Subcommand)]
pub enum UtilityCommands {
    /// Generate a shell completion script
    Completion {
        /// Target shell
        #[arg(value_enum, value_name = "SHELL")]
        shell: Shell,
    },
}

impl UtilityCommands {
    /// Execute the utility command.
    pub fn execute(self) -> Result<(), HalbenchError> {
        match self {
            UtilityCommands::Completion { shell } => commands::completion(shell),
        }
    }
}
