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

//! Plot command - renders box plots of stored runs

use super::load_series;
use halbench::reporters::format_series_line;
use halbench::{ComparativePlotter, HalbenchError, Layout, PlotConfig};
use std::path::PathBuf;
use tracing::info;

/// Plot command options.
#[derive(Debug, Clone)]
pub struct PlotOptions {
    /// Layout for more than one series.
    pub layout: Layout,
    /// Overlay means.
    pub annotate_mean: bool,
    /// Figure title.
    pub title: Option<String>,
    /// Output file; stdout when `None`.
    pub output: Option<PathBuf>,
    /// Inputs are labeled result files.
    pub labeled: bool,
    /// Figure size in pixels.
    pub size: (u32, u32),
}

/// Renders the inputs as one figure.
///
/// With an output file the per-series statistics are printed as well; without
/// one, stdout carries only the SVG document.
pub fn plot(inputs: &[PathBuf], options: &PlotOptions) -> Result<(), HalbenchError> {
    let series = load_series(inputs, options.labeled)?;

    let mut config = match &options.output {
        Some(path) => PlotConfig::save(path),
        None => PlotConfig::display(),
    }
    .with_layout(options.layout)
    .with_mean_annotation(options.annotate_mean)
    .with_size(options.size.0, options.size.1);
    if let Some(title) = &options.title {
        config = config.with_title(title);
    }

    let artifact = ComparativePlotter::new(config).plot(&series)?;
    info!(layout = ?artifact.layout_used, panels = artifact.panels, "Plot rendered");

    if options.output.is_some() {
        for s in &series {
            println!("{}", format_series_line(&s.label, &s.summary()?));
        }
    }
    Ok(())
}
