// File: crates/uniplot-core/src/types.rs
// Summary: Shared constants and layout options for axis labels.

/// Columns kept free to the left of the first horizontal label.
pub const LEFT_MARGIN_FOR_HORIZONTAL_AXIS: usize = 1;
/// Number of precisions tried (0..MAX_LABEL_PRECISION) when searching for unique labels.
pub const MAX_LABEL_PRECISION: usize = 10;

/// Tunables for label layout.
/// Contract: all fields are non-negative by type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutOptions {
    pub left_margin: usize,
    pub max_precision: usize,
}

impl LayoutOptions {
    pub const fn new(left_margin: usize, max_precision: usize) -> Self {
        Self { left_margin, max_precision }
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::new(LEFT_MARGIN_FOR_HORIZONTAL_AXIS, MAX_LABEL_PRECISION)
    }
}
