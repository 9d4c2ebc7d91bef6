//! LabeledSeries: a named, timestamp-indexed sequence of prices.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{Error, Result};

/// An ordered sequence of `(timestamp, value)` pairs.
///
/// Timestamps are unique and strictly increasing; this is checked once at
/// construction and relied upon by every lookup afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSeries {
    name: String,
    index: Vec<DateTime<Utc>>,
    values: Vec<f64>,
}

impl LabeledSeries {
    /// Build a series from a timestamp index and its values.
    pub fn new(
        name: impl Into<String>,
        index: Vec<DateTime<Utc>>,
        values: Vec<f64>,
    ) -> Result<Self> {
        if index.len() != values.len() {
            return Err(Error::LengthMismatch {
                left: index.len(),
                right: values.len(),
            });
        }
        if let Some(pos) = index.windows(2).position(|w| w[1] <= w[0]) {
            return Err(Error::UnorderedIndex { position: pos + 1 });
        }
        Ok(Self {
            name: name.into(),
            index,
            values,
        })
    }

    /// Build a series from `(timestamp, value)` pairs.
    pub fn from_points(
        name: impl Into<String>,
        points: impl IntoIterator<Item = (DateTime<Utc>, f64)>,
    ) -> Result<Self> {
        let (index, values) = points.into_iter().unzip();
        Self::new(name, index, values)
    }

    /// Build a daily series; each date is placed at midnight UTC.
    pub fn from_dates(
        name: impl Into<String>,
        points: impl IntoIterator<Item = (NaiveDate, f64)>,
    ) -> Result<Self> {
        Self::from_points(
            name,
            points
                .into_iter()
                .map(|(d, v)| (d.and_time(chrono::NaiveTime::MIN).and_utc(), v)),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn index(&self) -> &[DateTime<Utc>] {
        &self.index
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over `(timestamp, value)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (DateTime<Utc>, f64)> + '_ {
        self.index.iter().copied().zip(self.values.iter().copied())
    }

    pub fn first_timestamp(&self) -> Option<DateTime<Utc>> {
        self.index.first().copied()
    }

    pub fn last_timestamp(&self) -> Option<DateTime<Utc>> {
        self.index.last().copied()
    }

    /// Value recorded at `ts`, if the index contains it.
    pub fn get(&self, ts: DateTime<Utc>) -> Option<f64> {
        self.index
            .binary_search(&ts)
            .ok()
            .map(|pos| self.values[pos])
    }

    /// Timestamps present in both series, in increasing order.
    pub fn intersect_index(&self, other: &LabeledSeries) -> Vec<DateTime<Utc>> {
        let (mut i, mut j) = (0, 0);
        let mut common = Vec::new();
        while i < self.index.len() && j < other.index.len() {
            match self.index[i].cmp(&other.index[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    common.push(self.index[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        common
    }

    /// Values at the given timestamps; timestamps missing from the index are skipped.
    pub fn select(&self, timestamps: &[DateTime<Utc>]) -> Vec<f64> {
        timestamps.iter().filter_map(|&ts| self.get(ts)).collect()
    }

    /// Same samples under a different name.
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
