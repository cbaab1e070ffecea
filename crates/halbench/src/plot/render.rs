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

//! Box plot rendering with the `plotters` SVG backend.
//!
//! One series gives a single panel titled with its label. Several series
//! are drawn either as one titled sub-panel each, all sharing the y-axis
//! range, or as neighbouring boxes of one panel.

use crate::config::{Layout, OutputTarget, PlotConfig};
use crate::error::{HalbenchError, Result};
use crate::harness::stats;
use crate::plot::series::Series;
use plotters::coord::Shift;
use plotters::data::Quartiles;
use plotters::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// Title of a combined figure when none is configured.
pub const DEFAULT_COMBINED_TITLE: &str = "Execution Time Distribution";

const FONT: &str = "sans-serif";
const BOX_HALF_WIDTH: f32 = 0.2;
const CAP_HALF_WIDTH: f32 = 0.1;

/// Figure arrangement actually rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderedLayout {
    /// A single series.
    Single,
    /// One sub-panel per series.
    Panels,
    /// All series in one panel.
    Combined,
}

/// A rendered figure.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotArtifact {
    /// Complete SVG document.
    pub svg: String,
    /// Arrangement used.
    pub layout_used: RenderedLayout,
    /// Number of drawn panels.
    pub panels: usize,
}

/// One box ready to draw: label, raw seconds and five-number summary.
struct BoxSpec<'a> {
    label: &'a str,
    values: Vec<f64>,
    summary: FiveNumber,
    mean: f64,
}

/// Quartiles plus whisker ends at the most extreme samples inside the
/// 1.5 IQR fences.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FiveNumber {
    low: f32,
    q1: f32,
    median: f32,
    q3: f32,
    high: f32,
}

impl FiveNumber {
    fn new(values: &[f64]) -> Self {
        let [lower_fence, q1, median, q3, upper_fence] = Quartiles::new(values).values();
        let inside = || {
            values
                .iter()
                .map(|v| *v as f32)
                .filter(move |v| *v >= lower_fence && *v <= upper_fence)
        };
        Self {
            low: inside().fold(f32::INFINITY, f32::min).min(q1),
            q1,
            median,
            q3,
            high: inside().fold(f32::NEG_INFINITY, f32::max).max(q3),
        }
    }

    fn is_outlier(&self, value: f32) -> bool {
        value < self.low || value > self.high
    }
}

/// Renders 1..N duration series as box plots.
pub struct ComparativePlotter {
    config: PlotConfig,
}

impl ComparativePlotter {
    /// Creates a plotter.
    pub fn new(config: PlotConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Renders the figure and sends it to the configured target.
    pub fn plot(&self, series: &[Series]) -> Result<PlotArtifact> {
        let artifact = self.render_svg(series)?;
        match &self.config.output {
            OutputTarget::Display => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(artifact.svg.as_bytes())
                    .and_then(|_| stdout.flush())
                    .map_err(|e| HalbenchError::io_error(PathBuf::from("<stdout>"), e))?;
            }
            OutputTarget::Save(path) => {
                fs::write(path, &artifact.svg).map_err(|e| HalbenchError::io_error(path, e))?;
                info!(file = %path.display(), "Saved plot");
            }
        }
        Ok(artifact)
    }

    /// Renders the figure into an SVG document without any output.
    ///
    /// # Errors
    ///
    /// - [`HalbenchError::EmptyInput`] for no series or a series without samples
    /// - [`HalbenchError::InvalidConfig`] for repeated labels
    /// - [`HalbenchError::Plot`] if the backend fails
    pub fn render_svg(&self, series: &[Series]) -> Result<PlotArtifact> {
        let boxes = prepare(series)?;
        let (y_min, y_max) = shared_y_range(&boxes);
        let size = self.config.size;

        let layout_used = match (boxes.len(), self.config.layout) {
            (1, _) => RenderedLayout::Single,
            (_, Layout::Panels) => RenderedLayout::Panels,
            (_, Layout::Combined) => RenderedLayout::Combined,
        };

        let mut svg = String::new();
        let panels = {
            let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
            root.fill(&WHITE).map_err(plot_error)?;

            let panels = match layout_used {
                RenderedLayout::Single => {
                    let title = self.config.title.as_deref().unwrap_or(boxes[0].label);
                    self.draw_panel(&root, &boxes, 0, Some(title), (y_min, y_max))?;
                    1
                }
                RenderedLayout::Combined => {
                    let title = self
                        .config
                        .title
                        .as_deref()
                        .unwrap_or(DEFAULT_COMBINED_TITLE);
                    self.draw_panel(&root, &boxes, 0, Some(title), (y_min, y_max))?;
                    1
                }
                RenderedLayout::Panels => {
                    let runs = boxes.iter().map(|b| b.values.len()).max().unwrap_or(0);
                    let title = self
                        .config
                        .title
                        .clone()
                        .unwrap_or_else(|| format!("Execution Time Comparison (n={})", runs));
                    let body = root.titled(&title, (FONT, 22)).map_err(plot_error)?;
                    let areas = body.split_evenly((1, boxes.len()));
                    for (idx, area) in areas.iter().enumerate() {
                        let caption = boxes[idx].label;
                        self.draw_panel(
                            area,
                            &boxes[idx..=idx],
                            idx,
                            Some(caption),
                            (y_min, y_max),
                        )?;
                    }
                    boxes.len()
                }
            };

            root.present().map_err(plot_error)?;
            panels
        };

        debug!(?layout_used, panels, bytes = svg.len(), "Rendered box plot");
        Ok(PlotArtifact {
            svg,
            layout_used,
            panels,
        })
    }

    fn draw_panel(
        &self,
        area: &DrawingArea<SVGBackend<'_>, Shift>,
        boxes: &[BoxSpec<'_>],
        color_offset: usize,
        caption: Option<&str>,
        (y_min, y_max): (f32, f32),
    ) -> Result<()> {
        let x_max = boxes.len() as f32 - 0.5;
        let mut builder = ChartBuilder::on(area);
        builder
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(70);
        if let Some(caption) = caption {
            builder.caption(caption, (FONT, 20));
        }
        let mut chart = builder
            .build_cartesian_2d(-0.5f32..x_max, y_min..y_max)
            .map_err(plot_error)?;

        let labels: Vec<&str> = boxes.iter().map(|b| b.label).collect();
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(boxes.len())
            .x_label_formatter(&|x| {
                let idx = x.round();
                if (x - idx).abs() < 1e-3 && idx >= 0.0 && (idx as usize) < labels.len() {
                    labels[idx as usize].to_string()
                } else {
                    String::new()
                }
            })
            .y_desc(self.config.y_label.as_str())
            .label_style((FONT, 14))
            .draw()
            .map_err(plot_error)?;

        for (idx, spec) in boxes.iter().enumerate() {
            let x = idx as f32;
            let color = Palette99::pick(color_offset + idx);
            let style = color.stroke_width(2);
            let FiveNumber {
                low,
                q1,
                median,
                q3,
                high,
            } = spec.summary;

            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [(x - BOX_HALF_WIDTH, q1), (x + BOX_HALF_WIDTH, q3)],
                    style,
                )))
                .map_err(plot_error)?;
            let strokes = vec![
                vec![(x - BOX_HALF_WIDTH, median), (x + BOX_HALF_WIDTH, median)],
                vec![(x, q3), (x, high)],
                vec![(x, q1), (x, low)],
                vec![(x - CAP_HALF_WIDTH, high), (x + CAP_HALF_WIDTH, high)],
                vec![(x - CAP_HALF_WIDTH, low), (x + CAP_HALF_WIDTH, low)],
            ];
            chart
                .draw_series(strokes.into_iter().map(|points| PathElement::new(points, style)))
                .map_err(plot_error)?;

            chart
                .draw_series(
                    spec.values
                        .iter()
                        .map(|v| *v as f32)
                        .filter(|v| spec.summary.is_outlier(*v))
                        .map(|v| Circle::new((x, v), 3, color.stroke_width(1))),
                )
                .map_err(plot_error)?;

            if self.config.annotate_mean {
                let mean = spec.mean as f32;
                chart
                    .draw_series(std::iter::once(Circle::new((x, mean), 4, RED.filled())))
                    .map_err(plot_error)?;
                chart
                    .draw_series(std::iter::once(Text::new(
                        format!("Mean: {:.2}", spec.mean),
                        (x + 0.08, mean),
                        (FONT, 13).into_font(),
                    )))
                    .map_err(plot_error)?;
            }
        }
        Ok(())
    }
}

fn prepare(series: &[Series]) -> Result<Vec<BoxSpec<'_>>> {
    if series.is_empty() {
        return Err(HalbenchError::EmptyInput(
            "no series to plot".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    series
        .iter()
        .map(|s| {
            if !seen.insert(s.label.as_str()) {
                return Err(HalbenchError::invalid_config(
                    "series",
                    format!("label '{}' appears more than once", s.label),
                ));
            }
            if s.is_empty() {
                return Err(HalbenchError::EmptyInput(format!(
                    "series '{}' has no samples",
                    s.label
                )));
            }
            let values = s.seconds();
            Ok(BoxSpec {
                label: &s.label,
                summary: FiveNumber::new(&values),
                mean: stats::mean(&s.samples)?,
                values,
            })
        })
        .collect()
}

/// Y range covering every sample, with a small margin. Whiskers never
/// reach past the samples.
fn shared_y_range(boxes: &[BoxSpec<'_>]) -> (f32, f32) {
    let mut lo = f32::INFINITY;
    let mut hi = f32::NEG_INFINITY;
    for spec in boxes {
        for v in &spec.values {
            lo = lo.min(*v as f32);
            hi = hi.max(*v as f32);
        }
    }
    let span = hi - lo;
    let pad = if span > 0.0 {
        span * 0.05
    } else {
        (hi.abs() * 0.05).max(1e-3)
    };
    (lo - pad, hi + pad)
}

fn plot_error(err: impl std::fmt::Display) -> HalbenchError {
    HalbenchError::Plot(err.to_string())
}
