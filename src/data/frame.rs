//! PriceFrame: an OHLCV table as returned by historical price sources.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::series::LabeledSeries;
use crate::error::{Error, Result};

/// Columns of a [`PriceFrame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceField {
    Open,
    High,
    Low,
    Close,
    AdjClose,
    Volume,
}

impl PriceField {
    /// Column header used by price CSV exports.
    pub fn label(&self) -> &'static str {
        match self {
            PriceField::Open => "Open",
            PriceField::High => "High",
            PriceField::Low => "Low",
            PriceField::Close => "Close",
            PriceField::AdjClose => "Adj Close",
            PriceField::Volume => "Volume",
        }
    }
}

impl std::fmt::Display for PriceField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PriceField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let norm = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match norm.as_str() {
            "open" => Ok(PriceField::Open),
            "high" => Ok(PriceField::High),
            "low" => Ok(PriceField::Low),
            "close" => Ok(PriceField::Close),
            "adj_close" | "adjclose" => Ok(PriceField::AdjClose),
            "volume" => Ok(PriceField::Volume),
            _ => Err(Error::MissingColumn(s.to_string())),
        }
    }
}

/// One row of a price table before it is assembled into columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRow {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub adj_close: Option<f64>,
    pub volume: f64,
}

/// Column-oriented OHLCV table sharing one timestamp index.
///
/// A frame is not itself a labeled time series: pick a column with
/// [`PriceFrame::column`] before plotting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceFrame {
    index: Vec<DateTime<Utc>>,
    open: Vec<f64>,
    high: Vec<f64>,
    low: Vec<f64>,
    close: Vec<f64>,
    adj_close: Option<Vec<f64>>,
    volume: Vec<f64>,
}

impl PriceFrame {
    /// Assemble rows into a frame, sorting them by timestamp.
    ///
    /// Duplicate timestamps fail with [`Error::UnorderedIndex`]. The
    /// adjusted-close column exists only if at least one row carries it;
    /// rows without it then hold `NaN`.
    pub fn from_rows(mut rows: Vec<PriceRow>) -> Result<Self> {
        rows.sort_by_key(|r| r.timestamp);
        if let Some(pos) = rows.windows(2).position(|w| w[1].timestamp <= w[0].timestamp) {
            return Err(Error::UnorderedIndex { position: pos + 1 });
        }
        let has_adj = rows.iter().any(|r| r.adj_close.is_some());
        let mut frame = PriceFrame {
            adj_close: has_adj.then(|| Vec::with_capacity(rows.len())),
            ..Default::default()
        };
        for r in rows {
            frame.index.push(r.timestamp);
            frame.open.push(r.open);
            frame.high.push(r.high);
            frame.low.push(r.low);
            frame.close.push(r.close);
            frame.volume.push(r.volume);
            if let Some(adj) = frame.adj_close.as_mut() {
                adj.push(r.adj_close.unwrap_or(f64::NAN));
            }
        }
        Ok(frame)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn index(&self) -> &[DateTime<Utc>] {
        &self.index
    }

    /// Extract one column as a labeled series named after the column.
    pub fn column(&self, field: PriceField) -> Result<LabeledSeries> {
        let values = match field {
            PriceField::Open => &self.open,
            PriceField::High => &self.high,
            PriceField::Low => &self.low,
            PriceField::Close => &self.close,
            PriceField::Volume => &self.volume,
            PriceField::AdjClose => self
                .adj_close
                .as_ref()
                .ok_or_else(|| Error::MissingColumn(field.label().to_string()))?,
        };
        LabeledSeries::new(field.label(), self.index.clone(), values.clone())
    }
}
