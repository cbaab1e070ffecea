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

//! Negative tests for halbench error handling.
//!
//! Every failure must surface as a typed error, never a panic:
//! - Missing inputs and malformed result files
//! - Failing or missing external commands
//! - Rejected Halstead batches
//! - Empty statistics and plots

use halbench::halstead::{IdentifierMap, MetricsSet, ReportAggregator, HALSTEAD_COLUMNS};
use halbench::harness::{mean, parse_durations, parse_summary, read_durations, CommandSpec, TimingRunner};
use halbench::{HalbenchError, ReportConfig, RunConfig};
use std::path::Path;

// ============================================================================
// Result files
// ============================================================================

#[test]
fn test_missing_timing_file() {
    let result = read_durations(Path::new("/nonexistent/halbench/x_execution_times.txt"));
    assert!(matches!(result, Err(HalbenchError::InputNotFound { .. })));
}

#[test]
fn test_malformed_line_reports_position() {
    let err = parse_durations("0.1\n0.2\nabc\n", "times.txt").unwrap_err();
    match err {
        HalbenchError::MalformedData { origin, line, .. } => {
            assert_eq!(origin, "times.txt");
            assert_eq!(line, 3);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_negative_duration_rejected() {
    assert!(matches!(
        parse_durations("-0.5\n", "times.txt"),
        Err(HalbenchError::MalformedData { line: 1, .. })
    ));
}

#[test]
fn test_summary_without_delimiter() {
    let content = "Results:\nAverage 1.0 seconds\nStandard Deviation: 0.1 seconds\n";
    assert!(matches!(
        parse_summary(content, "avg_and_std.txt"),
        Err(HalbenchError::MalformedData { line: 2, .. })
    ));
}

// ============================================================================
// External command
// ============================================================================

#[cfg(unix)]
#[test]
fn test_failing_command_aborts_run() {
    let runner = TimingRunner::new(
        RunConfig::new(CommandSpec::new("false"))
            .with_runs(5)
            .with_quiet(true),
    );
    let err = runner.run("fails").unwrap_err();
    assert!(matches!(err, HalbenchError::ExternalProcessFailure { .. }));
    assert!(err.to_string().contains("false"));
}

#[test]
fn test_missing_program_path() {
    let runner = TimingRunner::new(RunConfig::new(CommandSpec::new("./no/such/parser")).with_runs(1));
    assert!(matches!(
        runner.run("x"),
        Err(HalbenchError::InputNotFound { .. })
    ));
}

// ============================================================================
// Halstead batches
// ============================================================================

/// One analyser entry for `path` with every Halstead column set to 1.
fn full_entry(path: &str) -> String {
    let mut yaml = format!("{}:\n", path);
    for column in HALSTEAD_COLUMNS {
        yaml.push_str(&format!("  {}: 1\n", column.replace(' ', "_")));
    }
    yaml
}

#[test]
fn test_initializer_anywhere_rejects_batch() {
    let yaml = format!(
        "{}{}",
        full_entry("src/jasm/regex/yaml2regex.py"),
        full_entry("src/jasm/match/__init__.py")
    );
    let map = IdentifierMap::builtin().unwrap();
    let metrics = MetricsSet::from_yaml_str(&yaml, "inline").unwrap();

    let result = ReportAggregator::new(&map, ReportConfig::default()).build(&metrics);
    assert!(matches!(
        result,
        Err(HalbenchError::InvalidInputRow { path, .. }) if path.ends_with("__init__.py")
    ));
}

#[test]
fn test_incomplete_record_rejects_batch() {
    let yaml = format!(
        "{}src/jasm/match/match.py:\n  h1: 7\n  h2: 21\n",
        full_entry("src/jasm/regex/yaml2regex.py")
    );
    let map = IdentifierMap::builtin().unwrap();
    let metrics = MetricsSet::from_yaml_str(&yaml, "inline").unwrap();

    let err = ReportAggregator::new(&map, ReportConfig::default())
        .build(&metrics)
        .unwrap_err();
    match err {
        HalbenchError::InvalidInputRow { path, reason } => {
            assert_eq!(path, "src/jasm/match/match.py");
            assert!(reason.contains("expected 12"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_unknown_path_names_the_key() {
    let yaml = "src/jasm/unknown/module.py:\n  h1: 1\n";
    let map = IdentifierMap::builtin().unwrap();
    let metrics = MetricsSet::from_yaml_str(yaml, "inline").unwrap();

    let err = ReportAggregator::new(&map, ReportConfig::default())
        .build(&metrics)
        .unwrap_err();
    assert!(err.to_string().contains("unknown/module.py"));
}

// ============================================================================
// Empty inputs
// ============================================================================

#[test]
fn test_mean_of_nothing() {
    assert!(matches!(mean(&[]), Err(HalbenchError::EmptyInput(_))));
}
