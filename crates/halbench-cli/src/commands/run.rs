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

//! Run command - times an external command and stores the results

use colored::Colorize;
use halbench::reporters::print_run_summary;
use halbench::{
    default_runs, save_experiment, CommandSpec, ExperimentLayout, HalbenchError, RunConfig,
    TimingRunner,
};
use std::path::Path;
use tracing::debug;

/// Times `command` and writes the experiment files under `results`.
///
/// Nothing is written unless every invocation succeeds.
pub fn run(
    name: &str,
    command: &[String],
    runs: Option<usize>,
    results: &Path,
    quiet: bool,
) -> Result<(), HalbenchError> {
    let (program, args) = command.split_first().ok_or_else(|| {
        HalbenchError::invalid_config("command", "no program given after '--'")
    })?;
    if name.is_empty() || name.contains(['/', '\\']) {
        return Err(HalbenchError::invalid_config(
            "name",
            format!("'{}' is not a valid experiment folder name", name),
        ));
    }

    let runs = runs.unwrap_or_else(default_runs);
    let spec = CommandSpec::new(program).args(args.iter().cloned());
    let runner = TimingRunner::new(RunConfig::new(spec).with_runs(runs).with_quiet(quiet));
    let experiment = runner.run(name)?;
    let summary = experiment.summary()?;

    let (times, summary_path) = save_experiment(&experiment, &ExperimentLayout::new(results))?;
    debug!(root = %results.display(), "Experiment files written");

    print_run_summary(name, experiment.len(), &summary);
    println!("{} {}", "✓".green().bold(), times.display());
    println!("{} {}", "✓".green().bold(), summary_path.display());
    Ok(())
}
