// File: crates/uniplot-core/tests/pipeline.rs
// Purpose: End-to-end: raw input -> normalized series -> bounds -> rendered axis labels.

use uniplot_core::MultiSeries;

#[test]
fn series_to_axis_labels() {
    let series = MultiSeries::from_ys(vec![2.0, 4.0, 8.0, 16.0, 32.0]);
    let bounds = series.bounds().expect("finite data");

    let x = bounds.x_labels(5, 40);
    let gap = " ".repeat(9);
    assert_eq!(x.render(), [format!(" 1{gap}2{gap}3{gap}4{gap}5")]);
    assert!(!x.compute_if_render_does_overlap());

    let y = bounds.y_labels(3, 10);
    let lines = y.render();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "32");
    assert_eq!(lines[4], "17");
    assert_eq!(lines[9], " 2");
    assert!(lines.iter().enumerate().all(|(i, l)| [0, 4, 9].contains(&i) || l == "  "));
}

#[test]
fn log_axis_labels_use_exponents() {
    let mut series = MultiSeries::from_ys(vec![1.0, 10.0, 100.0, 1000.0]);
    series.set_y_axis_to_log10();
    let bounds = series.bounds().expect("finite data");
    assert_eq!((bounds.y_min, bounds.y_max), (0.0, 3.0));

    let y = bounds.y_labels(4, 4);
    assert_eq!(y.render(), ["3", "2", "1", "0"]);
}
