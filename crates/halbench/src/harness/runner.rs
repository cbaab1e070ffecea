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

//! Sequential wall-clock timing of an external command.

use crate::config::RunConfig;
use crate::error::{HalbenchError, Result};
use crate::harness::experiment::ExperimentRun;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Executable plus the fixed positional arguments passed on every invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandSpec {
    /// Creates a command with no arguments.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Appends one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Appends a flag-value pair such as `-p file.yaml`.
    pub fn flag(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.arg(name).arg(value)
    }

    /// Returns the executable.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Returns the argument list.
    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    /// Renders the command line for logs and error messages.
    pub fn display(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Fails if the program is given as a path that does not exist.
    ///
    /// Bare names (`python`, `true`) are resolved through `PATH` at launch
    /// time and are not checked here.
    fn check_program(&self) -> Result<()> {
        if self.program.components().count() > 1 && !self.program.exists() {
            return Err(HalbenchError::InputNotFound {
                path: self.program.clone(),
            });
        }
        Ok(())
    }
}

/// Times a command N times, one invocation after the other.
///
/// Invocations never overlap.
pub struct TimingRunner {
    config: RunConfig,
}

impl TimingRunner {
    /// Creates a runner with the given configuration.
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Returns the runner configuration.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Runs the full batch and returns it as a named experiment.
    ///
    /// # Errors
    ///
    /// - [`HalbenchError::InvalidConfig`] if the run count is zero
    /// - [`HalbenchError::InputNotFound`] if the program path does not exist
    /// - [`HalbenchError::ExternalProcessFailure`] on the first invocation that
    ///   fails to launch or exits non-zero; no samples are returned
    pub fn run(&self, name: &str) -> Result<ExperimentRun> {
        if self.config.runs == 0 {
            return Err(HalbenchError::invalid_config(
                "runs",
                "at least one invocation is required",
            ));
        }
        self.config.command.check_program()?;

        info!(
            experiment = name,
            runs = self.config.runs,
            command = %self.config.command.display(),
            "Starting timing batch"
        );

        let mut run = ExperimentRun::new(name);
        for invocation in 1..=self.config.runs {
            let elapsed = self.invoke_once(invocation)?;
            debug!(
                invocation,
                seconds = elapsed.as_secs_f64(),
                "Invocation finished"
            );
            run.push(elapsed.into());
        }

        info!(experiment = name, samples = run.len(), "Timing batch complete");
        Ok(run)
    }

    /// Launches the command once and measures launch-to-exit time.
    fn invoke_once(&self, invocation: usize) -> Result<Duration> {
        let spec = &self.config.command;
        let mut command = Command::new(spec.program());
        command.args(spec.arguments()).stdin(Stdio::null());
        if self.config.quiet {
            command.stdout(Stdio::null()).stderr(Stdio::null());
        }

        let failure = |reason: String| HalbenchError::ExternalProcessFailure {
            program: spec.program().display().to_string(),
            invocation,
            reason,
        };

        let start = Instant::now();
        let status = command
            .status()
            .map_err(|e| failure(format!("failed to launch: {}", e)))?;
        let elapsed = start.elapsed();

        if !status.success() {
            return Err(failure(format!("exited with {}", status)));
        }
        Ok(elapsed)
    }
}
