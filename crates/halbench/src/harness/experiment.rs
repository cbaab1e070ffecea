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

//! Experiment runs and their duration samples.

use crate::error::Result;
use crate::harness::stats::{self, Summary};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single wall-clock measurement in seconds.
///
/// Always finite and non-negative, including when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DurationSample(f64);

impl DurationSample {
    /// Creates a sample from seconds, or `None` if the value is negative or not finite.
    pub fn from_secs(secs: f64) -> Option<Self> {
        if secs.is_finite() && secs >= 0.0 {
            Some(Self(secs))
        } else {
            None
        }
    }

    /// Returns the sample in seconds.
    pub fn as_secs(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for DurationSample {
    type Error = String;

    fn try_from(secs: f64) -> std::result::Result<Self, Self::Error> {
        Self::from_secs(secs)
            .ok_or_else(|| format!("{} is not a finite, non-negative number of seconds", secs))
    }
}

impl From<DurationSample> for f64 {
    fn from(sample: DurationSample) -> Self {
        sample.0
    }
}

impl From<Duration> for DurationSample {
    fn from(duration: Duration) -> Self {
        Self(duration.as_secs_f64())
    }
}

/// One named batch of timed invocations.
///
/// Samples keep invocation order. The summary is never stored; it is
/// recomputed from the current samples on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentRun {
    name: String,
    samples: Vec<DurationSample>,
}

impl ExperimentRun {
    /// Creates an empty run.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            samples: Vec::new(),
        }
    }

    /// Creates a run from already recorded samples.
    pub fn with_samples(name: impl Into<String>, samples: Vec<DurationSample>) -> Self {
        Self {
            name: name.into(),
            samples,
        }
    }

    /// Appends a sample.
    pub fn push(&mut self, sample: DurationSample) {
        self.samples.push(sample);
    }

    /// Returns the experiment label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the samples in invocation order.
    pub fn samples(&self) -> &[DurationSample] {
        &self.samples
    }

    /// Returns the number of recorded samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Computes mean and population standard deviation of the samples.
    pub fn summary(&self) -> Result<Summary> {
        stats::summarize(&self.samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HalbenchError;

    fn secs(v: f64) -> DurationSample {
        DurationSample::from_secs(v).unwrap()
    }

    #[test]
    fn test_sample_rejects_negative_and_nan() {
        assert!(DurationSample::from_secs(-0.1).is_none());
        assert!(DurationSample::from_secs(f64::NAN).is_none());
        assert!(DurationSample::from_secs(f64::INFINITY).is_none());
        assert_eq!(DurationSample::from_secs(0.0).unwrap().as_secs(), 0.0);
    }

    #[test]
    fn test_sample_from_duration() {
        let sample = DurationSample::from(Duration::from_millis(1500));
        assert!((sample.as_secs() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_sample_deserialization_validates() {
        let sample: DurationSample = serde_json::from_str("0.25").unwrap();
        assert_eq!(sample.as_secs(), 0.25);
        assert_eq!(serde_json::to_string(&sample).unwrap(), "0.25");

        let err = serde_json::from_str::<DurationSample>("-1.5").unwrap_err();
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn test_run_with_negative_sample_fails_to_load() {
        let json = r#"{"name":"old_parser","samples":[0.5,-0.2]}"#;
        assert!(serde_json::from_str::<ExperimentRun>(json).is_err());

        let json = r#"{"name":"old_parser","samples":[0.5,0.2]}"#;
        let run: ExperimentRun = serde_json::from_str(json).unwrap();
        assert_eq!(run.len(), 2);
    }

    #[test]
    fn test_summary_tracks_mutation() {
        let mut run = ExperimentRun::new("old_parser");
        run.push(secs(1.0));
        run.push(secs(3.0));
        assert_eq!(run.summary().unwrap().mean, 2.0);

        run.push(secs(5.0));
        assert_eq!(run.summary().unwrap().mean, 3.0);
        assert_eq!(run.len(), 3);
    }

    #[test]
    fn test_order_is_preserved() {
        let run = ExperimentRun::with_samples("x", vec![secs(3.0), secs(1.0), secs(2.0)]);
        let values: Vec<f64> = run.samples().iter().map(|s| s.as_secs()).collect();
        assert_eq!(values, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_empty_run_has_no_summary() {
        let run = ExperimentRun::new("nothing");
        assert!(run.is_empty());
        assert!(matches!(run.summary(), Err(HalbenchError::EmptyInput(_))));
    }
}
