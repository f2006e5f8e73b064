//! Prints average ridership per line and renders the ridership charts.

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use ridership_stats::aggregate;
use ridership_stats::charts::{render_summary, PngChartRenderer};
use ridership_stats::config::RidershipConfig;
use ridership_stats::ingestion::{LoadOptions, TracingObserver};
use ridership_stats::report::write_text_report;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let config = RidershipConfig::default();
    let options = LoadOptions {
        observer: Some(Arc::new(TracingObserver)),
        ..Default::default()
    };

    let summary = aggregate::run(&config, &options)
        .with_context(|| format!("Failed to summarize {}", config.data_path.display()))?;

    write_text_report(&mut io::stdout().lock(), &summary).context("Failed to write report")?;

    let mut renderer = PngChartRenderer::new(&config.bar_chart_path, &config.time_chart_path);
    render_summary(&mut renderer, &summary, &config.period_labels)
        .context("Failed to render charts")?;

    Ok(())
}
