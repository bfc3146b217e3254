// File: crates/uniplot-core/src/lib.rs
// Summary: Core library entry point; exports axis label layout and multi-series normalization.

pub mod discretizer;
pub mod error;
pub mod grid;
pub mod label_set;
pub mod multi_series;
pub mod series;
pub mod text;
pub mod types;
pub mod view;

pub use discretizer::discretize;
pub use error::{Result, SeriesError};
pub use label_set::{LabelSet, Orientation};
pub use multi_series::MultiSeries;
pub use series::{Datum, RawSeries, Shape, TemporalKind};
pub use types::LayoutOptions;
pub use view::Bounds;
