// File: crates/uniplot-core/src/discretizer.rs
// Summary: Map continuous values onto integer grid positions (columns or rows).

/// Map `value` from `[x_min, x_max]` onto `[0, steps]`.
///
/// Rounds half away from zero. Values outside the domain land outside
/// `[0, steps]`; callers clamp as needed. A degenerate domain
/// (`x_min == x_max`) maps every value to 0. Non-finite positions saturate
/// (`NaN` becomes 0).
#[inline]
pub fn discretize(value: f64, x_min: f64, x_max: f64, steps: usize) -> i64 {
    let span = x_max - x_min;
    if span == 0.0 {
        return 0;
    }
    ((value - x_min) / span * steps as f64).round() as i64
}

