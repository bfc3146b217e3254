// File: crates/uniplot-core/src/multi_series.rs
// Summary: Normalized x/y series (plain floats, NaN for missing) built from raw plot input.

use tracing::debug;

use crate::error::{Result, SeriesError};
use crate::series::{RawSeries, Row, Shape};
use crate::view::Bounds;

/// One or more paired x/y series of floats.
///
/// Timestamps are stored as epoch seconds and missing values as `NaN`. After
/// construction the data only changes through the log10 axis transforms.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiSeries {
    xs: Vec<Vec<f64>>,
    ys: Vec<Vec<f64>>,
    is_multi_dimensional: bool,
    x_is_timeseries: bool,
}

impl MultiSeries {
    /// Normalize `ys` and optional `xs`.
    ///
    /// Without `xs` every y series gets a 1-based index as x. Date-like x rows become
    /// epoch seconds. Fails when x and y disagree on the number of series or on the
    /// length of any paired series.
    pub fn new(ys: impl Into<RawSeries>, xs: Option<RawSeries>) -> Result<Self> {
        let Some(xs) = xs else {
            return Ok(Self::from_ys(ys));
        };
        let (ys, is_multi_dimensional) = normalize_ys(ys.into());

        let rows = xs.rows();
        let x_is_timeseries = rows.iter().any(|r| r.temporal_kind().is_temporal());
        let xs: Vec<Vec<f64>> = rows
            .iter()
            .map(|r| if r.temporal_kind().is_temporal() { r.to_epoch_seconds() } else { r.to_floats() })
            .collect();

        check_paired(&xs, &ys)?;
        Ok(Self::assemble(xs, ys, is_multi_dimensional, x_is_timeseries))
    }

    /// Normalize `ys` alone, indexing x from 1.
    pub fn from_ys(ys: impl Into<RawSeries>) -> Self {
        let (ys, is_multi_dimensional) = normalize_ys(ys.into());
        let xs = ys.iter().map(|row| index_series(row.len())).collect();
        Self::assemble(xs, ys, is_multi_dimensional, false)
    }

    fn assemble(xs: Vec<Vec<f64>>, ys: Vec<Vec<f64>>, is_multi_dimensional: bool, x_is_timeseries: bool) -> Self {
        debug!(
            series = ys.len(),
            is_multi_dimensional,
            x_is_timeseries,
            "normalized multi-series"
        );
        Self { xs, ys, is_multi_dimensional, x_is_timeseries }
    }

    /// Number of series held (not number of points).
    pub fn len(&self) -> usize { self.ys.len() }
    pub fn is_empty(&self) -> bool { self.ys.is_empty() }

    /// Point count of each series.
    pub fn shape(&self) -> Vec<usize> {
        self.ys.iter().map(Vec::len).collect()
    }

    pub fn is_multi_dimensional(&self) -> bool { self.is_multi_dimensional }
    pub fn x_is_timeseries(&self) -> bool { self.x_is_timeseries }
    pub fn xs(&self) -> &[Vec<f64>] { &self.xs }
    pub fn ys(&self) -> &[Vec<f64>] { &self.ys }

    /// Paired `(x, y)` series in order.
    pub fn iter(&self) -> impl Iterator<Item = (&[f64], &[f64])> + '_ {
        self.xs.iter().zip(&self.ys).map(|(x, y)| (x.as_slice(), y.as_slice()))
    }

    /// Replace every x series by its log10. Time axes are rejected and left untouched.
    pub fn set_x_axis_to_log10(&mut self) -> Result<()> {
        if self.x_is_timeseries {
            return Err(SeriesError::InvalidOperation("cannot format a timeseries as logarithmic"));
        }
        debug!(series = self.xs.len(), "x axis set to log10");
        self.xs.iter_mut().for_each(|row| safe_log10(row));
        Ok(())
    }

    /// Replace every y series by its log10.
    pub fn set_y_axis_to_log10(&mut self) {
        debug!(series = self.ys.len(), "y axis set to log10");
        self.ys.iter_mut().for_each(|row| safe_log10(row));
    }

    // Extremes skip NaN; with no finite value anywhere the result is NaN.
    pub fn x_min(&self) -> f64 { fold_all(&self.xs, f64::min) }
    pub fn x_max(&self) -> f64 { fold_all(&self.xs, f64::max) }
    pub fn y_min(&self) -> f64 { fold_all(&self.ys, f64::min) }
    pub fn y_max(&self) -> f64 { fold_all(&self.ys, f64::max) }

    /// Domain of both axes, or `None` when either axis has no values.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::new(self.x_min(), self.x_max(), self.y_min(), self.y_max())
    }
}

// ---- helpers ----------------------------------------------------------------

/// Float rows of `ys` and whether it held more than one series.
fn normalize_ys(ys: RawSeries) -> (Vec<Vec<f64>>, bool) {
    let is_multi_dimensional = ys.shape() == Shape::Nested;
    (ys.rows().iter().map(Row::to_floats).collect(), is_multi_dimensional)
}

fn index_series(n: usize) -> Vec<f64> {
    (1..=n).map(|i| i as f64).collect()
}

fn check_paired(xs: &[Vec<f64>], ys: &[Vec<f64>]) -> Result<()> {
    if xs.len() != ys.len() {
        return Err(SeriesError::RowCountMismatch { x_rows: xs.len(), y_rows: ys.len() });
    }
    for (row, (x, y)) in xs.iter().zip(ys).enumerate() {
        if x.len() != y.len() {
            return Err(SeriesError::LengthMismatch { row, x_len: x.len(), y_len: y.len() });
        }
    }
    Ok(())
}

/// log10 in place; non-positive values become NaN instead of -inf.
fn safe_log10(values: &mut [f64]) {
    for v in values.iter_mut() {
        *v = if *v > 0.0 { v.log10() } else { f64::NAN };
    }
}

/// `f64::min`/`f64::max` return the non-NaN operand, so folding from NaN skips missing values.
fn fold_all(rows: &[Vec<f64>], pick: fn(f64, f64) -> f64) -> f64 {
    rows.iter().flatten().copied().fold(f64::NAN, pick)
}
