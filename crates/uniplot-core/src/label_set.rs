// File: crates/uniplot-core/src/label_set.rs
// Summary: One axis worth of labels: shortest unique text, grid placement, overlap detection.

use std::sync::OnceLock;

use tracing::debug;

use crate::discretizer::discretize;
use crate::grid::linspace;
use crate::text::shortest_unique_labels;
use crate::types::LayoutOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Labels laid out left to right on a single line.
    #[default]
    Horizontal,
    /// Labels laid out top to bottom, one grid row per line.
    Vertical,
}

#[derive(Debug)]
struct Rendered {
    lines: Vec<String>,
    overlap: bool,
    precision: Option<usize>,
}

/// Labels for one axis, rendered against the domain `[x_min, x_max]` on a grid of
/// `available_space` cells.
///
/// Inputs are fixed at construction. The layout is computed on first access by
/// either [`LabelSet::render`] or [`LabelSet::compute_if_render_does_overlap`] and
/// cached for the lifetime of the instance.
#[derive(Debug)]
pub struct LabelSet {
    labels: Vec<Option<f64>>,
    x_min: f64,
    x_max: f64,
    available_space: usize,
    orientation: Orientation,
    options: LayoutOptions,
    rendered: OnceLock<Rendered>,
}

impl LabelSet {
    /// Build a horizontal label set. `NaN` entries are treated as missing.
    pub fn new(labels: impl IntoIterator<Item = f64>, x_min: f64, x_max: f64, available_space: usize) -> Self {
        let labels = labels.into_iter().map(|v| (!v.is_nan()).then_some(v)).collect();
        Self::with_missing(labels, x_min, x_max, available_space)
    }

    /// Build a horizontal label set where missing labels are explicit `None`s.
    pub fn with_missing(labels: Vec<Option<f64>>, x_min: f64, x_max: f64, available_space: usize) -> Self {
        Self {
            labels,
            x_min,
            x_max,
            available_space,
            orientation: Orientation::Horizontal,
            options: LayoutOptions::default(),
            rendered: OnceLock::new(),
        }
    }

    /// `count` labels evenly spaced across `[x_min, x_max]`, both ends included.
    pub fn evenly_spaced(x_min: f64, x_max: f64, count: usize, available_space: usize) -> Self {
        Self::new(linspace(x_min, x_max, count), x_min, x_max, available_space)
    }

    pub fn vertical(self) -> Self {
        self.with_orientation(Orientation::Vertical)
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self.rendered = OnceLock::new();
        self
    }

    pub fn with_options(mut self, options: LayoutOptions) -> Self {
        self.options = options;
        self.rendered = OnceLock::new();
        self
    }

    pub fn labels(&self) -> &[Option<f64>] { &self.labels }
    pub fn domain(&self) -> (f64, f64) { (self.x_min, self.x_max) }
    pub fn available_space(&self) -> usize { self.available_space }
    pub fn orientation(&self) -> Orientation { self.orientation }

    /// Rendered lines: exactly one for horizontal labels, one per grid row for vertical.
    pub fn render(&self) -> &[String] {
        &self.cached().lines
    }

    /// Whether any label had to be moved off its grid position to keep labels apart.
    pub fn compute_if_render_does_overlap(&self) -> bool {
        self.cached().overlap
    }

    /// Precision adopted by the uniqueness search; `None` when it fell back to plain text.
    pub fn precision(&self) -> Option<usize> {
        self.cached().precision
    }

    fn cached(&self) -> &Rendered {
        self.rendered.get_or_init(|| self.render_and_measure())
    }

    fn render_and_measure(&self) -> Rendered {
        let (texts, precision) = shortest_unique_labels(&self.labels, self.options.max_precision);
        let (lines, overlap) = match self.orientation {
            Orientation::Horizontal => self.layout_horizontal(&texts),
            Orientation::Vertical => self.layout_vertical(&texts),
        };
        debug!(
            labels = self.labels.len(),
            lines = lines.len(),
            overlap,
            ?precision,
            orientation = ?self.orientation,
            "rendered label set"
        );
        Rendered { lines, overlap, precision }
    }

    /// Labels that take part in placement, with their text. Non-finite values are skipped.
    fn placed<'a>(&'a self, texts: &'a [String]) -> impl Iterator<Item = (f64, &'a str)> + 'a {
        self.labels
            .iter()
            .zip(texts)
            .filter_map(|(label, text)| label.filter(|v| v.is_finite()).map(|v| (v, text.as_str())))
    }

    fn layout_horizontal(&self, texts: &[String]) -> (Vec<String>, bool) {
        let mut line = String::new();
        let mut line_len: i64 = 0;
        let mut overlap = false;

        // Labels far past x_max are pinned just right of the grid.
        let right_edge = self.available_space as i64 + self.options.left_margin as i64;

        for (i, (value, text)) in self.placed(texts).enumerate() {
            let width = text.chars().count() as i64;
            let mut start = discretize(value, self.x_min, self.x_max, self.available_space)
                .saturating_sub(width / 2)
                .saturating_add(self.options.left_margin as i64)
                .max(0);
            if start > right_edge {
                start = right_edge;
                overlap = true;
            }

            let min_gap = if i == 0 { 0 } else { 1 };
            let mut buffer = start - line_len;
            if buffer < min_gap {
                buffer = min_gap;
                overlap = true;
            }

            line.extend(std::iter::repeat(' ').take(buffer as usize));
            line.push_str(text);
            line_len += buffer + width;
        }

        (vec![line], overlap)
    }

    fn layout_vertical(&self, texts: &[String]) -> (Vec<String>, bool) {
        let rows = self.available_space.max(1);
        let last = rows as i64 - 1;

        let mut overlap = false;

        // Top row holds x_max; ties within a row keep larger values on top.
        let mut entries: Vec<(i64, f64, &str)> = self
            .placed(texts)
            .map(|(value, text)| {
                let row = last.saturating_sub(discretize(value, self.x_min, self.x_max, rows - 1));
                if !(0..=last).contains(&row) {
                    overlap = true;
                }
                (row.clamp(0, last), value, text)
            })
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.total_cmp(&a.1)));

        let mut next_free: i64 = 0;
        for entry in entries.iter_mut() {
            if entry.0 < next_free {
                entry.0 = next_free;
                overlap = true;
            }
            next_free = entry.0 + 1;
        }
        if next_free > rows as i64 {
            overlap = true;
        }

        let width = entries.iter().map(|(_, _, t)| t.chars().count()).max().unwrap_or(0);
        let mut lines = vec![" ".repeat(width); (next_free.max(0) as usize).max(rows)];
        for (row, _, text) in entries {
            lines[row as usize] = format!("{text:>width$}");
        }
        (lines, overlap)
    }
}
