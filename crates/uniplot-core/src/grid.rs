// File: crates/uniplot-core/src/grid.rs
// Summary: Tick position helpers.

/// `count` evenly spaced values from `start` to `end` inclusive.
/// Zero yields no values, one yields `[start]`.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let span = end - start;
            let intervals = (count - 1) as f64;
            // float residue near zero would otherwise print as 1e-16
            let snap = (span / intervals).abs() * 1e-9;
            (0..count)
                .map(|i| {
                    if i + 1 == count {
                        return end;
                    }
                    let v = start + span * i as f64 / intervals;
                    if v.abs() < snap { 0.0 } else { v }
                })
                .collect()
        }
    }
}
