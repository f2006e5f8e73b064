//! PNG chart rendering with `plotters`.

use std::path::PathBuf;

use plotters::prelude::*;

use crate::error::{RidershipError, RidershipResult};

use super::{BarChart, ChartRenderer, LineChart};

// Line colors (RGB)
const LINE_GREEN: RGBColor = RGBColor(0, 132, 61);
const LINE_BLUE: RGBColor = RGBColor(0, 61, 165);
const LINE_RED: RGBColor = RGBColor(218, 41, 28);
const LINE_ORANGE: RGBColor = RGBColor(237, 139, 0);

/// Writes each chart to its own PNG file.
#[derive(Debug, Clone)]
pub struct PngChartRenderer {
    bar_path: PathBuf,
    time_path: PathBuf,
    size: (u32, u32),
}

impl PngChartRenderer {
    pub fn new(bar_path: impl Into<PathBuf>, time_path: impl Into<PathBuf>) -> Self {
        Self {
            bar_path: bar_path.into(),
            time_path: time_path.into(),
            size: (1024, 640),
        }
    }

    /// Override the image size in pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }
}

impl ChartRenderer for PngChartRenderer {
    fn render_bar(&mut self, chart: &BarChart) -> RidershipResult<()> {
        let root = BitMapBackend::new(&self.bar_path, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let n = chart.values.len() as u32;
        let y_max = padded_max(chart.values.iter().copied());

        let mut cc = ChartBuilder::on(&root)
            .caption(&chart.title, ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d((0u32..n).into_segmented(), 0f64..y_max)
            .map_err(render_err)?;

        let labels = &chart.labels;
        cc.configure_mesh()
            .disable_x_mesh()
            .x_labels(labels.len())
            .x_label_formatter(&|v: &SegmentValue<u32>| match v {
                SegmentValue::CenterOf(i) => labels.get(*i as usize).cloned().unwrap_or_default(),
                _ => String::new(),
            })
            .y_desc("Average boardings")
            .draw()
            .map_err(render_err)?;

        cc.draw_series(
            chart
                .values
                .iter()
                .enumerate()
                .filter(|(_, v)| v.is_finite())
                .map(|(i, &v)| {
                    let label = labels.get(i).map(String::as_str).unwrap_or("");
                    let x = i as u32;
                    let mut bar = Rectangle::new(
                        [(SegmentValue::Exact(x), 0.0), (SegmentValue::Exact(x + 1), v)],
                        line_color(label, i).filled(),
                    );
                    bar.set_margin(0, 0, 12, 12);
                    bar
                }),
        )
        .map_err(render_err)?;

        root.present().map_err(render_err)?;
        tracing::info!(path = %self.bar_path.display(), "rendered bar chart");
        Ok(())
    }

    fn render_lines(&mut self, chart: &LineChart) -> RidershipResult<()> {
        let root = BitMapBackend::new(&self.time_path, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let x_max = chart.x_len.saturating_sub(1).max(1) as f64;
        let y_max = padded_max(chart.series.iter().flat_map(|s| s.values.iter().copied()));

        let mut cc = ChartBuilder::on(&root)
            .caption(&chart.title, ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0f64..x_max, 0f64..y_max)
            .map_err(render_err)?;

        cc.configure_mesh()
            .x_labels(chart.x_len.max(2))
            .x_label_formatter(&|x: &f64| {
                let r = x.round();
                if r < 0.0 || (x - r).abs() > 1e-6 {
                    return String::new();
                }
                chart.tick_label(r as usize).unwrap_or_default().to_string()
            })
            .y_desc("Average boardings")
            .draw()
            .map_err(render_err)?;

        for (idx, series) in chart.series.iter().enumerate() {
            let color = line_color(&series.label, idx);
            let mut labelled = false;
            for run in finite_runs(&series.values) {
                cc.draw_series(run.iter().map(|&p| Circle::new(p, 3, color.filled())))
                    .map_err(render_err)?;
                let anno = cc
                    .draw_series(LineSeries::new(run, color.stroke_width(2)))
                    .map_err(render_err)?;
                if !labelled {
                    anno.label(series.label.as_str()).legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                    });
                    labelled = true;
                }
            }
        }

        cc.configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .position(SeriesLabelPosition::UpperRight)
            .draw()
            .map_err(render_err)?;

        root.present().map_err(render_err)?;
        tracing::info!(path = %self.time_path.display(), "rendered time chart");
        Ok(())
    }
}

fn render_err<E: std::error::Error>(e: E) -> RidershipError {
    RidershipError::Render {
        message: e.to_string(),
    }
}

/// Named lines get their route color; anything else takes a palette entry.
fn line_color(label: &str, idx: usize) -> RGBColor {
    match label.to_ascii_lowercase().as_str() {
        "green" => LINE_GREEN,
        "blue" => LINE_BLUE,
        "red" => LINE_RED,
        "orange" => LINE_ORANGE,
        _ => {
            let c = Palette99::pick(idx).to_rgba();
            RGBColor(c.0, c.1, c.2)
        }
    }
}

/// Upper y bound: 10% above the largest finite value, or 1.0 when there is none.
fn padded_max(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.filter(|v| v.is_finite()).fold(0.0, f64::max);
    if max > 0.0 { max * 1.1 } else { 1.0 }
}

/// Split `values` into runs of consecutive finite points, as `(x, y)` pairs.
fn finite_runs(values: &[f64]) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut cur = Vec::new();
    for (x, &y) in values.iter().enumerate() {
        if y.is_finite() {
            cur.push((x as f64, y));
        } else if !cur.is_empty() {
            runs.push(std::mem::take(&mut cur));
        }
    }
    if !cur.is_empty() {
        runs.push(cur);
    }
    runs
}
