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

//! Descriptive statistics over duration samples.
//!
//! Only the mean and the population standard deviation are reported. The
//! standard deviation divides by N, which summarizes a completed run; it is
//! not an estimator for inferential use (that would need N - 1).

use crate::error::{HalbenchError, Result};
use crate::harness::experiment::DurationSample;
use serde::{Deserialize, Serialize};

/// Mean and population standard deviation of a run, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub stddev: f64,
}

/// Arithmetic mean of the samples.
///
/// # Errors
///
/// Returns [`HalbenchError::EmptyInput`] for an empty slice.
pub fn mean(samples: &[DurationSample]) -> Result<f64> {
    if samples.is_empty() {
        return Err(HalbenchError::EmptyInput(
            "cannot compute the mean of zero samples".to_string(),
        ));
    }
    let total: f64 = samples.iter().map(DurationSample::as_secs).sum();
    Ok(total / samples.len() as f64)
}

/// Population standard deviation of the samples (divides by N).
///
/// # Errors
///
/// Returns [`HalbenchError::EmptyInput`] for an empty slice.
pub fn stddev(samples: &[DurationSample]) -> Result<f64> {
    let mean = mean(samples)?;
    let variance = samples
        .iter()
        .map(|s| {
            let diff = s.as_secs() - mean;
            diff * diff
        })
        .sum::<f64>()
        / samples.len() as f64;

    Ok(variance.sqrt())
}

/// Computes both statistics at once.
pub fn summarize(samples: &[DurationSample]) -> Result<Summary> {
    Ok(Summary {
        mean: mean(samples)?,
        stddev: stddev(samples)?,
    })
}
