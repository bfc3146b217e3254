// File: crates/uniplot-core/src/view.rs
// Summary: Plot domain (x/y extremes) and per-axis label sets derived from it.

use crate::label_set::LabelSet;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// `None` when any extreme is missing (`NaN`), i.e. an axis had no values.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Option<Self> {
        if [x_min, x_max, y_min, y_max].iter().any(|v| v.is_nan()) {
            return None;
        }
        Some(Self { x_min, x_max, y_min, y_max })
    }

    /// `count` evenly spaced labels along the x axis across `width` columns.
    pub fn x_labels(&self, count: usize, width: usize) -> LabelSet {
        LabelSet::evenly_spaced(self.x_min, self.x_max, count, width)
    }

    /// `count` evenly spaced labels along the y axis across `height` rows, top row = `y_max`.
    pub fn y_labels(&self, count: usize, height: usize) -> LabelSet {
        LabelSet::evenly_spaced(self.y_min, self.y_max, count, height).vertical()
    }
}
