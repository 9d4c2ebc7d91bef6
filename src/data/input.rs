//! PlotInput: what a plotting operation was handed.

use super::frame::PriceFrame;
use super::series::LabeledSeries;
use crate::error::{Error, Result};

/// A value passed to a plotting operation.
///
/// Only [`PlotInput::Series`] satisfies the "labeled time series"
/// precondition; the other shapes are accepted by the signature so the
/// mismatch can be reported as [`Error::TypeMismatch`].
#[derive(Debug, Clone, Copy)]
pub enum PlotInput<'a> {
    Series(&'a LabeledSeries),
    Frame(&'a PriceFrame),
    Values(&'a [f64]),
}

impl<'a> PlotInput<'a> {
    pub fn kind(&self) -> &'static str {
        match self {
            PlotInput::Series(_) => "labeled time series",
            PlotInput::Frame(_) => "price frame",
            PlotInput::Values(_) => "unlabeled values",
        }
    }

    /// The labeled series, or `TypeMismatch`.
    pub fn into_series(self) -> Result<&'a LabeledSeries> {
        match self {
            PlotInput::Series(s) => Ok(s),
            other => Err(Error::TypeMismatch {
                expected: "labeled time series",
                found: other.kind(),
            }),
        }
    }
}

impl<'a> From<&'a LabeledSeries> for PlotInput<'a> {
    fn from(s: &'a LabeledSeries) -> Self {
        PlotInput::Series(s)
    }
}

impl<'a> From<&'a PriceFrame> for PlotInput<'a> {
    fn from(f: &'a PriceFrame) -> Self {
        PlotInput::Frame(f)
    }
}

impl<'a> From<&'a [f64]> for PlotInput<'a> {
    fn from(v: &'a [f64]) -> Self {
        PlotInput::Values(v)
    }
}

impl<'a> From<&'a Vec<f64>> for PlotInput<'a> {
    fn from(v: &'a Vec<f64>) -> Self {
        PlotInput::Values(v.as_slice())
    }
}
