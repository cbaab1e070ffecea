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

//! Named duration series fed to the plotter.

use crate::error::Result;
use crate::harness::{self, DurationSample, Summary};
use std::path::Path;
use tracing::debug;

/// One labelled sequence of durations, drawn as one box.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Axis or panel label.
    pub label: String,
    /// Durations in seconds.
    pub samples: Vec<DurationSample>,
}

impl Series {
    /// Creates a series.
    pub fn new(label: impl Into<String>, samples: Vec<DurationSample>) -> Self {
        Self {
            label: label.into(),
            samples,
        }
    }

    /// Loads a timing file, or the timing file of an experiment folder.
    ///
    /// The label is the file stem without its `_execution_times` suffix.
    pub fn load(input: &Path) -> Result<Self> {
        let path = harness::resolve_times_path(input)?;
        let samples = harness::read_durations(&path)?;
        let label = harness::series_label(&path);
        debug!(label, samples = samples.len(), file = %path.display(), "Loaded series");
        Ok(Self::new(label, samples))
    }

    /// Loads a labeled (`Run N: <secs> seconds`) results file.
    pub fn load_labeled(path: &Path) -> Result<Self> {
        let samples = harness::read_labeled(path)?;
        let label = harness::series_label(path);
        debug!(label, samples = samples.len(), file = %path.display(), "Loaded labeled series");
        Ok(Self::new(label, samples))
    }

    /// Mean and standard deviation of the samples.
    pub fn summary(&self) -> Result<Summary> {
        harness::summarize(&self.samples)
    }

    /// Samples as plain seconds.
    pub fn seconds(&self) -> Vec<f64> {
        self.samples.iter().map(DurationSample::as_secs).collect()
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if the series has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_folder() {
        let dir = TempDir::new().unwrap();
        let folder = dir.path().join("bytearray");
        fs::create_dir(&folder).unwrap();
        fs::write(
            folder.join("bytearray_execution_times.txt"),
            "0.5\n0.25\n",
        )
        .unwrap();

        let series = Series::load(&folder).unwrap();
        assert_eq!(series.label, "bytearray");
        assert_eq!(series.seconds(), vec![0.5, 0.25]);
    }

    #[test]
    fn test_load_labeled() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("before_execution_times.txt");
        fs::write(&path, "Run 1: 1.5 seconds\nRun 2: 2.5 seconds\n").unwrap();

        let series = Series::load_labeled(&path).unwrap();
        assert_eq!(series.label, "before");
        assert_eq!(series.summary().unwrap().mean, 2.0);
    }
}
