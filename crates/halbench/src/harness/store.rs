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

//! Plain-text persistence of experiment results.
//!
//! Three formats are handled:
//!
//! - **Timing file**: one duration in seconds per line, no header.
//! - **Summary file**: `Results:`, `Average: <x> seconds`,
//!   `Standard Deviation: <x> seconds`, with six decimals.
//! - **Labeled file**: `<label>: <x> seconds` per run, as written by older
//!   parser comparison scripts.
//!
//! Parsing never recovers: the first bad line aborts with its line number.

use crate::config::{ExperimentLayout, EXECUTION_TIMES_SUFFIX};
use crate::error::{HalbenchError, Result};
use crate::harness::experiment::{DurationSample, ExperimentRun};
use crate::harness::stats::Summary;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const SUMMARY_HEADER: &str = "Results:";
const AVERAGE_KEY: &str = "Average";
const STDDEV_KEY: &str = "Standard Deviation";
const SECONDS_UNIT: &str = "seconds";

/// Writes one sample per line, in order.
pub fn write_durations_to<W: Write>(samples: &[DurationSample], mut writer: W) -> io::Result<()> {
    for sample in samples {
        // `{}` on f64 prints the shortest string that parses back exactly
        writeln!(writer, "{}", sample.as_secs())?;
    }
    writer.flush()
}

/// Writes the raw samples of a run to `path`, replacing any previous content.
pub fn write_durations(run: &ExperimentRun, path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    write_durations_to(run.samples(), &mut buffer).map_err(|e| HalbenchError::io_error(path, e))?;
    fs::write(path, buffer).map_err(|e| HalbenchError::io_error(path, e))
}

/// Parses a timing file's content.
///
/// Blank lines are skipped; any other line must be a non-negative number.
pub fn parse_durations(content: &str, origin: &str) -> Result<Vec<DurationSample>> {
    let mut samples = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        samples.push(parse_sample(trimmed, origin, idx + 1)?);
    }
    Ok(samples)
}

/// Reads a timing file.
pub fn read_durations(path: &Path) -> Result<Vec<DurationSample>> {
    let content = fs::read_to_string(path).map_err(|e| HalbenchError::io_error(path, e))?;
    parse_durations(&content, &path.display().to_string())
}

/// Parses a labeled result file (`Run 1: 0.41 seconds`).
///
/// The value is the text after the first `:` with the `seconds` unit removed.
pub fn parse_labeled(content: &str, origin: &str) -> Result<Vec<DurationSample>> {
    let mut samples = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let value = field_value(line, origin, idx + 1)?;
        samples.push(parse_sample(value, origin, idx + 1)?);
    }
    Ok(samples)
}

/// Reads a labeled result file.
pub fn read_labeled(path: &Path) -> Result<Vec<DurationSample>> {
    let content = fs::read_to_string(path).map_err(|e| HalbenchError::io_error(path, e))?;
    parse_labeled(&content, &path.display().to_string())
}

/// Formats the three-line summary block.
pub fn format_summary(summary: &Summary) -> String {
    format!(
        "{}\n{}: {:.6} {}\n{}: {:.6} {}\n",
        SUMMARY_HEADER,
        AVERAGE_KEY,
        summary.mean,
        SECONDS_UNIT,
        STDDEV_KEY,
        summary.stddev,
        SECONDS_UNIT
    )
}

/// Writes the summary block to `path`.
pub fn write_summary(summary: &Summary, path: &Path) -> Result<()> {
    fs::write(path, format_summary(summary)).map_err(|e| HalbenchError::io_error(path, e))
}

/// Parses a summary block back into its two statistics.
pub fn parse_summary(content: &str, origin: &str) -> Result<Summary> {
    let lines: Vec<&str> = content.lines().collect();
    if lines.first().map(|l| l.trim()) != Some(SUMMARY_HEADER) {
        return Err(HalbenchError::malformed(
            origin,
            1,
            format!("expected '{}' header", SUMMARY_HEADER),
        ));
    }

    let stat = |line_no: usize, key: &str| -> Result<f64> {
        let line = lines.get(line_no - 1).ok_or_else(|| {
            HalbenchError::malformed(origin, line_no, format!("missing '{}' line", key))
        })?;
        let (label, _) = line.split_once(':').ok_or_else(|| {
            HalbenchError::malformed(origin, line_no, "missing ':' delimiter")
        })?;
        if label.trim() != key {
            return Err(HalbenchError::malformed(
                origin,
                line_no,
                format!("expected '{}', found '{}'", key, label.trim()),
            ));
        }
        let value = field_value(line, origin, line_no)?;
        Ok(parse_sample(value, origin, line_no)?.as_secs())
    };

    Ok(Summary {
        mean: stat(2, AVERAGE_KEY)?,
        stddev: stat(3, STDDEV_KEY)?,
    })
}

/// Reads a summary file.
pub fn read_summary(path: &Path) -> Result<Summary> {
    let content = fs::read_to_string(path).map_err(|e| HalbenchError::io_error(path, e))?;
    parse_summary(&content, &path.display().to_string())
}

/// Persists a finished run under `layout`: raw timings plus summary.
///
/// The summary is computed first, so an empty run writes nothing.
/// Returns the paths of the timing file and of the summary file.
pub fn save_experiment(run: &ExperimentRun, layout: &ExperimentLayout) -> Result<(PathBuf, PathBuf)> {
    let summary = run.summary()?;
    let dir = layout.experiment_dir(run.name());
    fs::create_dir_all(&dir).map_err(|e| HalbenchError::io_error(&dir, e))?;

    let times_path = layout.times_file(run.name());
    let summary_path = layout.summary_file(run.name());
    write_durations(run, &times_path)?;
    write_summary(&summary, &summary_path)?;

    info!(
        experiment = run.name(),
        times = %times_path.display(),
        summary = %summary_path.display(),
        "Saved experiment"
    );
    Ok((times_path, summary_path))
}

/// Finds the timing file inside an experiment folder.
///
/// Picks the first entry, in name order, whose file name ends with
/// `execution_times.txt`.
pub fn find_times_file(folder: &Path) -> Result<PathBuf> {
    if !folder.is_dir() {
        return Err(HalbenchError::InputNotFound {
            path: folder.to_path_buf(),
        });
    }

    let mut candidates: Vec<PathBuf> = fs::read_dir(folder)
        .map_err(|e| HalbenchError::io_error(folder, e))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with("execution_times.txt"))
        })
        .collect();
    candidates.sort();

    candidates
        .into_iter()
        .next()
        .ok_or_else(|| HalbenchError::InputNotFound {
            path: folder.join(format!("*{}.txt", EXECUTION_TIMES_SUFFIX)),
        })
}

/// Resolves a series input that is either a timing file or an experiment folder.
pub fn resolve_times_path(input: &Path) -> Result<PathBuf> {
    if input.is_dir() {
        find_times_file(input)
    } else if input.is_file() {
        Ok(input.to_path_buf())
    } else {
        Err(HalbenchError::InputNotFound {
            path: input.to_path_buf(),
        })
    }
}

/// Derives a series label from a timing file name.
///
/// `results/bytearray/bytearray_execution_times.txt` becomes `bytearray`.
pub fn series_label(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    match stem.strip_suffix(EXECUTION_TIMES_SUFFIX) {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => {
            warn!(file = %path.display(), "Timing file name has no '{}' suffix", EXECUTION_TIMES_SUFFIX);
            stem.to_string()
        }
    }
}

/// Text after the first `:` of `line`, without the trailing `seconds` unit.
fn field_value<'a>(line: &'a str, origin: &str, line_no: usize) -> Result<&'a str> {
    let (_, rest) = line
        .split_once(':')
        .ok_or_else(|| HalbenchError::malformed(origin, line_no, "missing ':' delimiter"))?;
    let rest = rest.trim();
    Ok(rest.strip_suffix(SECONDS_UNIT).unwrap_or(rest).trim())
}

fn parse_sample(text: &str, origin: &str, line_no: usize) -> Result<DurationSample> {
    let value: f64 = text.parse().map_err(|_| {
        HalbenchError::malformed(origin, line_no, format!("not a number: '{}'", text))
    })?;
    DurationSample::from_secs(value).ok_or_else(|| {
        HalbenchError::malformed(
            origin,
            line_no,
            format!("not a finite non-negative duration: '{}'", text),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run_of(name: &str, values: &[f64]) -> ExperimentRun {
        ExperimentRun::with_samples(
            name,
            values
                .iter()
                .map(|&v| DurationSample::from_secs(v).unwrap())
                .collect(),
        )
    }

    fn secs(samples: &[DurationSample]) -> Vec<f64> {
        samples.iter().map(|s| s.as_secs()).collect()
    }

    #[test]
    fn test_write_format_has_no_header() {
        let run = run_of("x", &[0.5, 1.25]);
        let mut out = Vec::new();
        write_durations_to(run.samples(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0.5\n1.25\n");
    }

    #[test]
    fn test_file_round_trip_is_exact() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("t_execution_times.txt");
        let values = [0.123_456_789_012_345_6, 2.0, 1e-7, 0.1 + 0.2];
        write_durations(&run_of("t", &values), &path).unwrap();

        let read = read_durations(&path).unwrap();
        assert_eq!(secs(&read), values.to_vec());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let samples = parse_durations("1.0\n\n  \n2.5\n", "mem").unwrap();
        assert_eq!(secs(&samples), vec![1.0, 2.5]);
    }

    #[test]
    fn test_non_numeric_line_names_line_number() {
        let err = parse_durations("1.0\n2.0\nfast\n4.0\n", "times.txt").unwrap_err();
        match err {
            HalbenchError::MalformedData { origin, line, reason } => {
                assert_eq!(origin, "times.txt");
                assert_eq!(line, 3);
                assert!(reason.contains("fast"));
            }
            other => panic!("Expected MalformedData, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_duration_rejected() {
        assert!(matches!(
            parse_durations("-1.0\n", "mem"),
            Err(HalbenchError::MalformedData { line: 1, .. })
        ));
    }

    #[test]
    fn test_summary_block() {
        let summary = Summary {
            mean: 0.5,
            stddev: 0.012_345_67,
        };
        assert_eq!(
            format_summary(&summary),
            "Results:\nAverage: 0.500000 seconds\nStandard Deviation: 0.012346 seconds\n"
        );
    }

    #[test]
    fn test_summary_round_trip() {
        let summary = Summary {
            mean: 1.5,
            stddev: 0.25,
        };
        let parsed = parse_summary(&format_summary(&summary), "mem").unwrap();
        assert_eq!(parsed, summary);
    }

    #[test]
    fn test_summary_missing_delimiter() {
        let content = "Results:\nAverage 0.5 seconds\nStandard Deviation: 0.1 seconds\n";
        assert!(matches!(
            parse_summary(content, "mem"),
            Err(HalbenchError::MalformedData { line: 2, .. })
        ));
    }

    #[test]
    fn test_summary_missing_header() {
        assert!(matches!(
            parse_summary("Average: 1.0 seconds\n", "mem"),
            Err(HalbenchError::MalformedData { line: 1, .. })
        ));
    }

    #[test]
    fn test_labeled_format() {
        let content = "Run 1: 0.41 seconds\nRun 2: 0.39 seconds\n\nRun 3:0.40\n";
        let samples = parse_labeled(content, "results.txt").unwrap();
        assert_eq!(secs(&samples), vec![0.41, 0.39, 0.40]);
    }

    #[test]
    fn test_labeled_missing_delimiter() {
        assert!(matches!(
            parse_labeled("Run 1: 0.4 seconds\nRun 2 0.4 seconds\n", "mem"),
            Err(HalbenchError::MalformedData { line: 2, .. })
        ));
    }

    #[test]
    fn test_save_experiment_layout() {
        let dir = TempDir::new().unwrap();
        let layout = ExperimentLayout::new(dir.path());
        let (times, summary) = save_experiment(&run_of("ListAppending", &[1.0, 2.0, 3.0]), &layout).unwrap();

        assert!(times.ends_with("ListAppending/ListAppending_execution_times.txt"));
        assert_eq!(secs(&read_durations(&times).unwrap()), vec![1.0, 2.0, 3.0]);
        assert_eq!(read_summary(&summary).unwrap().mean, 2.0);
    }

    #[test]
    fn test_save_empty_experiment_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let layout = ExperimentLayout::new(dir.path());
        assert!(save_experiment(&ExperimentRun::new("Empty"), &layout).is_err());
        assert!(!layout.experiment_dir("Empty").exists());
    }

    #[test]
    fn test_find_times_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        fs::write(dir.path().join("bytearray_execution_times.txt"), "1.0\n").unwrap();

        let found = find_times_file(dir.path()).unwrap();
        assert_eq!(series_label(&found), "bytearray");
    }

    #[test]
    fn test_find_times_file_missing() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            find_times_file(dir.path()),
            Err(HalbenchError::InputNotFound { .. })
        ));
        assert!(matches!(
            find_times_file(&dir.path().join("absent")),
            Err(HalbenchError::InputNotFound { .. })
        ));
    }

    #[test]
    fn test_series_label_without_suffix() {
        assert_eq!(series_label(Path::new("dir/results.txt")), "results");
        assert_eq!(
            series_label(Path::new("string_execution_times.txt")),
            "string"
        );
    }
}
