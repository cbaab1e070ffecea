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

//! Centralized configuration.
//!
//! Every knob of the three pipelines lives on an explicit value passed into
//! the component that needs it: [`RunConfig`] for timing, [`ReportConfig`]
//! for Halstead tables, [`PlotConfig`] for box plots, and
//! [`ExperimentLayout`] for where results live on disk.

use crate::harness::runner::CommandSpec;
use std::path::{Path, PathBuf};

/// Default number of invocations per experiment.
pub const DEFAULT_RUNS: usize = 30;

/// Environment variable overriding [`DEFAULT_RUNS`].
pub const RUNS_ENV_VAR: &str = "HALBENCH_RUNS";

/// Root prefix stripped from metric paths before identifier lookup.
pub const DEFAULT_STRIP_PREFIX: &str = "src/jasm/";

/// File name marking a module initializer.
pub const DEFAULT_MODULE_INITIALIZER: &str = "__init__.py";

/// Suffix of raw timing file stems.
pub const EXECUTION_TIMES_SUFFIX: &str = "_execution_times";

/// File name of the three-line summary block.
pub const SUMMARY_FILE_NAME: &str = "avg_and_std.txt";

/// Get the invocation count from the environment or use the default.
///
/// Reads [`RUNS_ENV_VAR`]; falls back to [`DEFAULT_RUNS`] when the variable
/// is unset or not a positive integer.
pub fn default_runs() -> usize {
    std::env::var(RUNS_ENV_VAR)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_RUNS)
}

/// Configuration for a timing batch.
///
/// # Example
///
/// ```no_run
/// use halbench::config::RunConfig;
/// use halbench::harness::CommandSpec;
///
/// let command = CommandSpec::new("python")
///     .arg("main.py")
///     .flag("-p", "tests/yamls/function_return_0.yaml")
///     .flag("-b", "tests/binary/bash.bin");
/// let config = RunConfig::new(command).with_runs(30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Command to invoke.
    pub command: CommandSpec,
    /// Number of sequential invocations.
    pub runs: usize,
    /// Discard the subject's stdout/stderr instead of inheriting them.
    pub quiet: bool,
}

impl RunConfig {
    /// Creates a configuration with the default invocation count.
    pub fn new(command: CommandSpec) -> Self {
        Self {
            command,
            runs: default_runs(),
            quiet: false,
        }
    }

    /// Sets the invocation count.
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    /// Silences the subject's output.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

/// Configuration for Halstead report generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Prefix removed from metric paths when present.
    pub strip_prefix: String,
    /// File name whose presence in a path rejects the whole batch.
    pub module_initializer: String,
    /// Decimal places kept in metric values.
    pub decimals: u32,
    /// Caption of the metrics-by-id table.
    pub metrics_caption: String,
    /// Cross-reference label of the metrics-by-id table.
    pub metrics_label: String,
    /// Caption of the id-to-path table.
    pub files_caption: String,
    /// Cross-reference label of the id-to-path table.
    pub files_label: String,
}

impl ReportConfig {
    /// Sets the stripped root prefix.
    pub fn with_strip_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.strip_prefix = prefix.into();
        self
    }

    /// Sets the number of decimals kept.
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            strip_prefix: DEFAULT_STRIP_PREFIX.to_string(),
            module_initializer: DEFAULT_MODULE_INITIALIZER.to_string(),
            decimals: 2,
            metrics_caption: "Halstead: Metrics by ID".to_string(),
            metrics_label: "table:halstead_metrics_by_id".to_string(),
            files_caption: "Halstead: Mapping between file names and IDs".to_string(),
            files_label: "table:halstead_id_to_filename".to_string(),
        }
    }
}

/// How several series share a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// One titled sub-panel per series, all sharing the y-axis range.
    Panels,
    /// All series as boxes of a single panel with one title.
    Combined,
}

/// Where a rendered plot goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write the SVG document to stdout.
    Display,
    /// Write the SVG document to a file.
    Save(PathBuf),
}

/// Configuration for box plot rendering.
///
/// There is no `Default`: the caller always chooses between
/// [`PlotConfig::display`] and [`PlotConfig::save`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Multi-series layout.
    pub layout: Layout,
    /// Overlay each box with its mean.
    pub annotate_mean: bool,
    /// Output destination.
    pub output: OutputTarget,
    /// Figure title; single plots default to the series label.
    pub title: Option<String>,
    /// Y-axis description.
    pub y_label: String,
    /// Figure size in pixels.
    pub size: (u32, u32),
}

impl PlotConfig {
    fn with_output(output: OutputTarget) -> Self {
        Self {
            layout: Layout::Combined,
            annotate_mean: false,
            output,
            title: None,
            y_label: "Time in seconds".to_string(),
            size: (1000, 600),
        }
    }

    /// Renders to stdout.
    pub fn display() -> Self {
        Self::with_output(OutputTarget::Display)
    }

    /// Renders to an image file.
    pub fn save(path: impl Into<PathBuf>) -> Self {
        Self::with_output(OutputTarget::Save(path.into()))
    }

    /// Sets the multi-series layout.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Enables or disables mean annotations.
    pub fn with_mean_annotation(mut self, annotate: bool) -> Self {
        self.annotate_mean = annotate;
        self
    }

    /// Sets the figure title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the y-axis description.
    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    /// Sets the figure size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }
}

/// On-disk layout of experiment results.
///
/// ```text
/// <root>/<name>/<name>_execution_times.txt
/// <root>/<name>/avg_and_std.txt
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentLayout {
    /// Results root folder.
    pub root: PathBuf,
}

impl ExperimentLayout {
    /// Creates a layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Folder holding one experiment.
    pub fn experiment_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Raw timing file of one experiment.
    pub fn times_file(&self, name: &str) -> PathBuf {
        self.experiment_dir(name)
            .join(format!("{}{}.txt", name, EXECUTION_TIMES_SUFFIX))
    }

    /// Summary file of one experiment.
    pub fn summary_file(&self, name: &str) -> PathBuf {
        self.experiment_dir(name).join(SUMMARY_FILE_NAME)
    }

    /// Results root folder.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for ExperimentLayout {
    fn default() -> Self {
        Self::new("results")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_config_builder() {
        let config = RunConfig::new(CommandSpec::new("true"))
            .with_runs(5)
            .with_quiet(true);
        assert_eq!(config.runs, 5);
        assert!(config.quiet);
        assert_eq!(config.command.program(), Path::new("true"));
    }

    #[test]
    fn test_report_config_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.strip_prefix, "src/jasm/");
        assert_eq!(config.module_initializer, "__init__.py");
        assert_eq!(config.decimals, 2);
    }

    #[test]
    fn test_plot_config_requires_output_choice() {
        let shown = PlotConfig::display();
        assert_eq!(shown.output, OutputTarget::Display);

        let saved = PlotConfig::save("graphs/combined.svg")
            .with_layout(Layout::Panels)
            .with_mean_annotation(true);
        assert_eq!(
            saved.output,
            OutputTarget::Save(PathBuf::from("graphs/combined.svg"))
        );
        assert_eq!(saved.layout, Layout::Panels);
        assert!(saved.annotate_mean);
    }

    #[test]
    fn test_experiment_layout_paths() {
        let layout = ExperimentLayout::new("results");
        assert_eq!(
            layout.times_file("StringConcat"),
            PathBuf::from("results/StringConcat/StringConcat_execution_times.txt")
        );
        assert_eq!(
            layout.summary_file("StringConcat"),
            PathBuf::from("results/StringConcat/avg_and_std.txt")
        );
    }
}
