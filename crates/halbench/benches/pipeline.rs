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

//! Benchmarks for result parsing, statistics and report aggregation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use halbench::halstead::{MetricRecord, MetricsSet, HALSTEAD_COLUMNS};
use halbench::harness::{parse_durations, summarize, write_durations_to, DurationSample};
use halbench::{IdentifierMap, ReportAggregator, ReportConfig};

fn samples(n: usize) -> Vec<DurationSample> {
    (0..n)
        .filter_map(|i| DurationSample::from_secs(0.4 + (i % 17) as f64 * 0.013))
        .collect()
}

// ============================================================================
// Timing files
// ============================================================================

fn bench_parse_durations(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_durations");

    for n in [30usize, 1_000, 100_000] {
        let mut buf = Vec::new();
        if write_durations_to(&samples(n), &mut buf).is_err() {
            continue;
        }
        let text = String::from_utf8_lossy(&buf).into_owned();

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &text, |b, text| {
            b.iter(|| parse_durations(black_box(text), "bench"))
        });
    }
    group.finish();
}

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");

    for n in [30usize, 1_000, 100_000] {
        let data = samples(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter(|| summarize(black_box(data)))
        });
    }
    group.finish();
}

// ============================================================================
// Halstead aggregation
// ============================================================================

fn bench_aggregate_builtin_table(c: &mut Criterion) {
    let Ok(map) = IdentifierMap::builtin() else {
        return;
    };

    let mut metrics = MetricsSet::new();
    for entry in map.entries() {
        let record = HALSTEAD_COLUMNS
            .iter()
            .enumerate()
            .fold(MetricRecord::new(), |r, (i, name)| {
                r.with_field(*name, i as f64 * 1.2345)
            });
        metrics.push(format!("src/jasm/{}", entry.path), record);
    }

    let aggregator = ReportAggregator::new(&map, ReportConfig::default());
    c.bench_function("aggregate_builtin_table", |b| {
        b.iter(|| aggregator.build(black_box(&metrics)))
    });
}

criterion_group!(
    benches,
    bench_parse_durations,
    bench_summarize,
    bench_aggregate_builtin_table
);
criterion_main!(benches);
