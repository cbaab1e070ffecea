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

//! CLI command implementations

mod completion;
mod identifiers;
mod plot;
mod report;
mod run;
mod summarize;

pub use completion::completion;
pub use identifiers::identifiers;
pub use plot::{plot, PlotOptions};
pub use report::report;
pub use run::run;
pub use summarize::summarize;

use halbench::{HalbenchError, Series};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Loads every input as a series, failing before any output if one is missing.
pub fn load_series(inputs: &[PathBuf], labeled: bool) -> Result<Vec<Series>, HalbenchError> {
    for input in inputs {
        halbench::require_exists(input)?;
    }
    inputs
        .iter()
        .map(|input| {
            if labeled {
                Series::load_labeled(input)
            } else {
                Series::load(input)
            }
        })
        .collect()
}

/// Writes `content` to `output`, or to stdout when no file is given.
pub fn write_output(content: &str, output: Option<&Path>) -> Result<(), HalbenchError> {
    match output {
        Some(path) => fs::write(path, content).map_err(|e| HalbenchError::io_error(path, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| HalbenchError::io_error("<stdout>", e)),
    }
}
