// File: crates/uniplot-core/tests/multi_series.rs
// Purpose: Shape detection, float coercion, x indexing, log transforms, NaN-safe extremes.

use uniplot_core::{Datum, MultiSeries, RawSeries, SeriesError};

fn approx(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(x, y)| (x.is_nan() && y.is_nan()) || (x - y).abs() < 1e-12)
}

#[test]
fn flat_input_is_single_series_with_index_x() {
    let s = MultiSeries::from_ys(vec![1.0, 2.0, 3.0]);
    assert!(!s.is_multi_dimensional());
    assert!(!s.x_is_timeseries());
    assert_eq!(s.len(), 1);
    assert_eq!(s.shape(), vec![3]);
    assert_eq!(s.xs(), [vec![1.0, 2.0, 3.0]]);
}

#[test]
fn nested_input_is_multi_dimensional() {
    let s = MultiSeries::from_ys(vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0]]);
    assert!(s.is_multi_dimensional());
    assert_eq!(s.len(), 2);
    assert_eq!(s.shape(), vec![2, 3]);
    assert_eq!(s.xs(), [vec![1.0, 2.0], vec![1.0, 2.0, 3.0]]);
}

#[test]
fn new_without_x_matches_from_ys() {
    let flat = MultiSeries::new(vec![4.0, 5.0], None).unwrap();
    assert_eq!(flat, MultiSeries::from_ys(vec![4.0, 5.0]));

    let nested = MultiSeries::new(vec![vec![1.0], vec![2.0, 3.0]], None).unwrap();
    assert_eq!(nested, MultiSeries::from_ys(vec![vec![1.0], vec![2.0, 3.0]]));
    assert!(nested.is_multi_dimensional());
}

#[test]
fn mixed_nesting_is_treated_as_flat() {
    let raw = RawSeries::Values(vec![Datum::from(1.0), Datum::from(vec![2.0, 3.0])]);
    let s = MultiSeries::from_ys(raw);
    assert!(!s.is_multi_dimensional());
    assert_eq!(s.ys()[0][0], 1.0);
    assert!(s.ys()[0][1].is_nan());
}

#[test]
fn values_are_coerced_to_floats() {
    let ints = MultiSeries::from_ys(vec![1i64, 2, 3]);
    assert_eq!(ints.ys(), [vec![1.0, 2.0, 3.0]]);

    let text = MultiSeries::from_ys(vec!["1.5", " 2 ", "abc"]);
    assert!(approx(&text.ys()[0], &[1.5, 2.0, f64::NAN]));

    let mixed = MultiSeries::from_ys(vec![Datum::from(true), Datum::Missing, Datum::from(Some(4.0))]);
    assert!(approx(&mixed.ys()[0], &[1.0, f64::NAN, 4.0]));
}

#[test]
fn explicit_numeric_x_is_kept() {
    let s = MultiSeries::new(vec![10.0, 20.0], Some(vec![0.5, 1.5].into())).unwrap();
    assert_eq!(s.xs(), [vec![0.5, 1.5]]);
    let pairs: Vec<_> = s.iter().collect();
    assert_eq!(pairs, vec![(&[0.5, 1.5][..], &[10.0, 20.0][..])]);
}

#[test]
fn mismatched_lengths_are_rejected() {
    let err = MultiSeries::new(vec![1.0, 2.0], Some(vec![1.0].into())).unwrap_err();
    assert_eq!(err, SeriesError::LengthMismatch { row: 0, x_len: 1, y_len: 2 });

    let err = MultiSeries::new(vec![vec![1.0], vec![2.0]], Some(vec![1.0].into())).unwrap_err();
    assert_eq!(err, SeriesError::RowCountMismatch { x_rows: 1, y_rows: 2 });
}

#[test]
fn extremes_ignore_nan() {
    let s = MultiSeries::from_ys(vec![vec![1.0, f64::NAN, 3.0]]);
    assert_eq!(s.y_max(), 3.0);
    assert_eq!(s.y_min(), 1.0);

    let s = MultiSeries::from_ys(vec![vec![5.0, -1.0], vec![10.0, 2.0]]);
    assert_eq!((s.y_min(), s.y_max()), (-1.0, 10.0));
    assert_eq!((s.x_min(), s.x_max()), (1.0, 2.0));
}

#[test]
fn extremes_of_all_missing_are_nan() {
    let s = MultiSeries::from_ys(vec![f64::NAN, f64::NAN]);
    assert!(s.y_min().is_nan());
    assert!(s.y_max().is_nan());
    assert!(s.bounds().is_none());
}

#[test]
fn log_y_turns_non_positive_into_nan() {
    let mut s = MultiSeries::from_ys(vec![100.0, 0.0, -5.0, 1.0, f64::NAN]);
    s.set_y_axis_to_log10();
    assert!(approx(&s.ys()[0], &[2.0, f64::NAN, f64::NAN, 0.0, f64::NAN]));
}

#[test]
fn log_x_on_numbers() {
    let mut s = MultiSeries::new(vec![1.0, 2.0], Some(vec![10.0, 1000.0].into())).unwrap();
    s.set_x_axis_to_log10().unwrap();
    assert!(approx(&s.xs()[0], &[1.0, 3.0]));

    let mut s = MultiSeries::from_ys(vec![5.0, 5.0, 5.0]);
    s.set_x_axis_to_log10().unwrap();
    assert!(approx(&s.xs()[0], &[0.0, 2f64.log10(), 3f64.log10()]));
}

#[test]
fn bounds_span_all_series() {
    let s = MultiSeries::from_ys(vec![vec![2.0, 8.0], vec![4.0, 1.0, 3.0]]);
    let b = s.bounds().unwrap();
    assert_eq!((b.x_min, b.x_max, b.y_min, b.y_max), (1.0, 3.0, 1.0, 8.0));
}
