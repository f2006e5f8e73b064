//! Chart models and the rendering seam.
//!
//! [`bar_chart`] and [`time_chart`] turn a [`RidershipSummary`] into backend-neutral chart
//! descriptions. A [`ChartRenderer`] draws them; [`PngChartRenderer`] is the bitmap
//! implementation.

mod png;

pub use png::PngChartRenderer;

use crate::aggregate::RidershipSummary;
use crate::config::BUCKETS_PER_PERIOD;
use crate::error::RidershipResult;

pub const BAR_CHART_TITLE: &str = "MBTA average ridership";
pub const TIME_CHART_TITLE: &str = "Ridership on all lines over the day";

/// One bar per label.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// A named sequence of y-values at x = 0, 1, 2, ...
///
/// `NaN` marks a missing point; renderers leave a gap there.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
}

/// Several series over a shared x-axis with sparse tick labels.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub series: Vec<Series>,
    /// Number of x positions.
    pub x_len: usize,
    /// `(x position, label)` pairs.
    pub x_ticks: Vec<(usize, String)>,
}

impl LineChart {
    /// Tick label at `x`, if one is defined.
    pub fn tick_label(&self, x: usize) -> Option<&str> {
        self.x_ticks
            .iter()
            .find(|(pos, _)| *pos == x)
            .map(|(_, label)| label.as_str())
    }
}

/// Draws chart models into some output.
pub trait ChartRenderer {
    fn render_bar(&mut self, chart: &BarChart) -> RidershipResult<()>;

    fn render_lines(&mut self, chart: &LineChart) -> RidershipResult<()>;
}

/// Overall average per line.
pub fn bar_chart(summary: &RidershipSummary) -> BarChart {
    BarChart {
        title: BAR_CHART_TITLE.to_string(),
        labels: summary.lines.clone(),
        values: summary.overall.clone(),
    }
}

/// One series per line over the time buckets, with a period label every
/// [`BUCKETS_PER_PERIOD`] buckets.
pub fn time_chart(summary: &RidershipSummary, period_labels: &[String]) -> LineChart {
    let series = summary
        .lines
        .iter()
        .enumerate()
        .map(|(idx, line)| Series {
            label: line.clone(),
            values: summary.series_for_line(idx),
        })
        .collect();

    let x_len = summary.by_time.len();
    let x_ticks = (0..x_len)
        .step_by(BUCKETS_PER_PERIOD)
        .zip(period_labels.iter().cloned())
        .collect();

    LineChart {
        title: TIME_CHART_TITLE.to_string(),
        series,
        x_len,
        x_ticks,
    }
}

/// Render both charts for `summary`, bar chart first.
pub fn render_summary<R: ChartRenderer + ?Sized>(
    renderer: &mut R,
    summary: &RidershipSummary,
    period_labels: &[String],
) -> RidershipResult<()> {
    renderer.render_bar(&bar_chart(summary))?;
    renderer.render_lines(&time_chart(summary, period_labels))
}
