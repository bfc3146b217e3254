// File: crates/uniplot-core/src/series.rs
// Summary: Raw (un-normalized) plot input: scalar, nested, and date-like values, plus
//          shape/temporal classification and float coercion.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// One raw input element as handed over by a caller.
#[derive(Clone, Debug, PartialEq)]
pub enum Datum {
    Float(f64),
    Int(i64),
    Bool(bool),
    /// Parsed as a float on coercion; unparsable text becomes `NaN`.
    Text(String),
    Missing,
    Date(NaiveDate),
    /// Naive timestamps are read as UTC.
    DateTime(NaiveDateTime),
    Seq(Vec<Datum>),
}

impl Datum {
    pub fn as_seq(&self) -> Option<&[Datum]> {
        match self {
            Self::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Coerce to a plain float. Anything without a numeric reading is `NaN`,
    /// including dates, which only convert inside a temporal row.
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Float(v) => *v,
            Self::Int(v) => *v as f64,
            Self::Bool(b) => if *b { 1.0 } else { 0.0 },
            Self::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
            Self::Missing | Self::Date(_) | Self::DateTime(_) | Self::Seq(_) => f64::NAN,
        }
    }

    /// Whole seconds since the Unix epoch for date-like values. Dates count from midnight UTC;
    /// sub-second parts are floored away.
    pub fn epoch_seconds(&self) -> Option<i64> {
        match self {
            Self::Date(d) => d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc().timestamp()),
            Self::DateTime(dt) => Some(dt.and_utc().timestamp()),
            _ => None,
        }
    }
}

impl From<f64> for Datum { fn from(v: f64) -> Self { Self::Float(v) } }
impl From<f32> for Datum { fn from(v: f32) -> Self { Self::Float(v as f64) } }
impl From<i64> for Datum { fn from(v: i64) -> Self { Self::Int(v) } }
impl From<i32> for Datum { fn from(v: i32) -> Self { Self::Int(v as i64) } }
impl From<u32> for Datum { fn from(v: u32) -> Self { Self::Int(v as i64) } }
impl From<bool> for Datum { fn from(v: bool) -> Self { Self::Bool(v) } }
impl From<&str> for Datum { fn from(v: &str) -> Self { Self::Text(v.to_string()) } }
impl From<String> for Datum { fn from(v: String) -> Self { Self::Text(v) } }
impl From<NaiveDate> for Datum { fn from(v: NaiveDate) -> Self { Self::Date(v) } }
impl From<NaiveDateTime> for Datum { fn from(v: NaiveDateTime) -> Self { Self::DateTime(v) } }
impl From<DateTime<Utc>> for Datum { fn from(v: DateTime<Utc>) -> Self { Self::DateTime(v.naive_utc()) } }

impl<T: Into<Datum>> From<Option<T>> for Datum {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Missing, Into::into)
    }
}

impl<T: Into<Datum>> From<Vec<T>> for Datum {
    fn from(v: Vec<T>) -> Self {
        Self::Seq(v.into_iter().map(Into::into).collect())
    }
}

/// Structural shape of a raw input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// A single series of scalars.
    Flat,
    /// A sequence of series; every element is itself a sequence.
    Nested,
}

impl Shape {
    /// Nested only when there is at least one element and every element is a sequence.
    /// Mixed inputs are flat.
    pub fn classify(values: &[Datum]) -> Self {
        if !values.is_empty() && values.iter().all(|d| d.as_seq().is_some()) {
            Self::Nested
        } else {
            Self::Flat
        }
    }
}

/// Which kind of time axis (if any) an input represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemporalKind {
    NotTemporal,
    /// Every present element is a date (datetimes mixed in count as dates).
    DateList,
    /// Every present element is a datetime.
    DateTimeList,
    /// A column explicitly tagged as datetimes by the caller.
    DateTimeColumn,
}

impl TemporalKind {
    /// Infer from element types. Missing entries are ignored, but at least one
    /// date-like element must be present.
    pub fn of_values(values: &[Datum]) -> Self {
        let mut dates = 0usize;
        let mut datetimes = 0usize;
        for d in values {
            match d {
                Datum::Date(_) => dates += 1,
                Datum::DateTime(_) => datetimes += 1,
                Datum::Missing => {}
                _ => return Self::NotTemporal,
            }
        }
        match (dates, datetimes) {
            (0, 0) => Self::NotTemporal,
            (0, _) => Self::DateTimeList,
            _ => Self::DateList,
        }
    }

    pub fn is_temporal(self) -> bool {
        self != Self::NotTemporal
    }
}

/// Raw x or y input for a plot call.
#[derive(Clone, Debug, PartialEq)]
pub enum RawSeries {
    /// Scalars, sequences of scalars, or date-like values.
    Values(Vec<Datum>),
    /// A caller-tagged datetime column; `None` marks a missing timestamp.
    DateTimeColumn(Vec<Option<DateTime<Utc>>>),
}

impl RawSeries {
    pub fn datetime_column(values: impl IntoIterator<Item = Option<DateTime<Utc>>>) -> Self {
        Self::DateTimeColumn(values.into_iter().collect())
    }

    pub fn shape(&self) -> Shape {
        match self {
            Self::Values(values) => Shape::classify(values),
            Self::DateTimeColumn(_) => Shape::Flat,
        }
    }

    /// Split into rows: one per inner sequence when nested, otherwise a single row.
    pub fn rows(&self) -> Vec<Row<'_>> {
        match self {
            Self::Values(values) => match Shape::classify(values) {
                Shape::Nested => values.iter().filter_map(Datum::as_seq).map(Row::Values).collect(),
                Shape::Flat => vec![Row::Values(values)],
            },
            Self::DateTimeColumn(column) => vec![Row::DateTimes(column)],
        }
    }
}

impl<T: Into<Datum>> From<Vec<T>> for RawSeries {
    fn from(v: Vec<T>) -> Self {
        Self::Values(v.into_iter().map(Into::into).collect())
    }
}

/// Borrowed view of one series inside a [`RawSeries`].
#[derive(Clone, Copy, Debug)]
pub enum Row<'a> {
    Values(&'a [Datum]),
    DateTimes(&'a [Option<DateTime<Utc>>]),
}

impl Row<'_> {
    pub fn len(&self) -> usize {
        match self {
            Self::Values(v) => v.len(),
            Self::DateTimes(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn temporal_kind(&self) -> TemporalKind {
        match self {
            Self::Values(v) => TemporalKind::of_values(v),
            Self::DateTimes(_) => TemporalKind::DateTimeColumn,
        }
    }

    /// Plain float coercion; missing or unparsable entries become `NaN`.
    pub fn to_floats(&self) -> Vec<f64> {
        match self {
            Self::Values(v) => v.iter().map(Datum::to_f64).collect(),
            Self::DateTimes(_) => self.to_epoch_seconds(),
        }
    }

    /// Epoch seconds as floats; non-date-like entries become `NaN`.
    pub fn to_epoch_seconds(&self) -> Vec<f64> {
        match self {
            Self::Values(v) => v
                .iter()
                .map(|d| d.epoch_seconds().map_or(f64::NAN, |s| s as f64))
                .collect(),
            Self::DateTimes(v) => v
                .iter()
                .map(|t| t.map_or(f64::NAN, |t| t.timestamp() as f64))
                .collect(),
        }
    }
}
