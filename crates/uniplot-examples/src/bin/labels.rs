// File: crates/uniplot-examples/src/bin/labels.rs
// Summary: Minimal example that normalizes in-memory series and prints axis label lines.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, NaiveDate};
use tracing::info;
use tracing_subscriber::EnvFilter;
use uniplot_core::{Bounds, LabelSet, MultiSeries, RawSeries};

const WIDTH: usize = 60;
const HEIGHT: usize = 12;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1) Two grouped series on a shared numeric x range
    let speeds = RawSeries::from(vec![vec![20.0, 50.0], vec![75.6, 12.6]]);
    let rms = RawSeries::from(vec![vec![12.4, 23.5], vec![-55.3, f64::NAN]]);
    let grouped = MultiSeries::new(rms, Some(speeds)).context("grouped series")?;
    let bounds = grouped.bounds().context("grouped series has no finite values")?;
    print_axes("grouped", &bounds);

    // 2) Daily time series; x labels in epoch seconds, domain printed as dates
    let start = NaiveDate::from_ymd_opt(2024, 4, 2).context("invalid start date")?;
    let days: Vec<NaiveDate> = (0..100).map(|d| start + Duration::days(d)).collect();
    let ys: Vec<f64> = (0..100)
        .map(|i| {
            let t = i as f64 / 99.0;
            (t * 5.0 * std::f64::consts::PI).sin() * (t * 7.0 * std::f64::consts::PI).cos()
        })
        .collect();
    let mut daily = MultiSeries::new(ys, Some(days.into())).context("daily series")?;
    if let Err(e) = daily.set_x_axis_to_log10() {
        info!(%e, "kept linear time axis");
    }
    let bounds = daily.bounds().context("daily series has no finite values")?;
    let from = DateTime::from_timestamp(bounds.x_min as i64, 0).context("x_min out of range")?;
    let to = DateTime::from_timestamp(bounds.x_max as i64, 0).context("x_max out of range")?;
    println!("daily: {} .. {}", from.format("%y-%m-%d"), to.format("%y-%m-%d"));
    print_axes("daily", &bounds);

    // 3) Log-scaled y
    let mut growth = MultiSeries::from_ys(vec![1.0, 3.0, 12.0, 80.0, 450.0, 2600.0]);
    growth.set_y_axis_to_log10();
    let bounds = growth.bounds().context("growth series has no finite values")?;
    print_axes("growth (log10 y)", &bounds);

    Ok(())
}

fn print_axes(name: &str, bounds: &Bounds) {
    println!("== {name}");
    for line in bounds.y_labels(5, HEIGHT).render() {
        println!("{line} |");
    }
    let x = densest_fit(bounds, 9);
    println!("{}", x.render().join("\n"));
}

/// Drop x labels until they fit without being pushed off their columns.
fn densest_fit(bounds: &Bounds, max_count: usize) -> LabelSet {
    let mut count = max_count;
    loop {
        let set = bounds.x_labels(count, WIDTH);
        if count <= 2 || !set.compute_if_render_does_overlap() {
            info!(count, "x labels fit");
            return set;
        }
        count -= 1;
    }
}
