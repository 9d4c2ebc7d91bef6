//! Price CSV files in the layout of Yahoo Finance downloads:
//!
//! ```text
//! Date,Open,High,Low,Close,Adj Close,Volume
//! 2020-01-02,10.1,10.5,9.9,10.4,10.4,120000
//! ```
//!
//! Only `Date` and `Close` are required. Unparsable numbers (Yahoo writes
//! `null` on holidays) become missing values; rows without a close are
//! skipped.

use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use tracing::{info, warn};

use crate::data::frame::{PriceFrame, PriceRow};
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct RawPriceRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Open", default, deserialize_with = "csv::invalid_option")]
    open: Option<f64>,
    #[serde(rename = "High", default, deserialize_with = "csv::invalid_option")]
    high: Option<f64>,
    #[serde(rename = "Low", default, deserialize_with = "csv::invalid_option")]
    low: Option<f64>,
    #[serde(rename = "Close", deserialize_with = "csv::invalid_option")]
    close: Option<f64>,
    #[serde(rename = "Adj Close", default, deserialize_with = "csv::invalid_option")]
    adj_close: Option<f64>,
    #[serde(rename = "Volume", default, deserialize_with = "csv::invalid_option")]
    volume: Option<f64>,
}

/// Parse a date as `YYYY-MM-DD` (midnight UTC), RFC 3339, or
/// `YYYY-MM-DD HH:MM:SS±HH:MM`.
pub fn parse_date(s: &str) -> Result<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d.and_time(chrono::NaiveTime::MIN).and_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%:z")
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| Error::InvalidDate(s.to_string()))
}

/// Read a price table from CSV text.
pub fn read_price_csv<R: Read>(reader: R) -> Result<PriceFrame> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for record in rdr.deserialize() {
        let raw: RawPriceRow = record?;
        let Some(close) = raw.close else {
            skipped += 1;
            continue;
        };
        rows.push(PriceRow {
            timestamp: parse_date(&raw.date)?,
            open: raw.open.unwrap_or(f64::NAN),
            high: raw.high.unwrap_or(f64::NAN),
            low: raw.low.unwrap_or(f64::NAN),
            close,
            adj_close: raw.adj_close,
            volume: raw.volume.unwrap_or(f64::NAN),
        });
    }
    if skipped > 0 {
        warn!(skipped, "skipped CSV rows without a close price");
    }
    PriceFrame::from_rows(rows)
}

/// Read a price CSV file from disk.
pub fn load_price_csv(path: impl AsRef<Path>) -> Result<PriceFrame> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let frame = read_price_csv(file)?;
    info!(path = %path.display(), rows = frame.len(), "loaded price CSV");
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_date_layouts() {
        let midnight = parse_date("2020-03-19").unwrap();
        assert_eq!(midnight.to_rfc3339(), "2020-03-19T00:00:00+00:00");
        let zulu = parse_date("2020-03-19T14:30:00Z").unwrap();
        assert_eq!(zulu.timestamp() - midnight.timestamp(), 14 * 3600 + 30 * 60);
        let offset = parse_date("2020-03-19 00:00:00-04:00").unwrap();
        assert_eq!(offset.timestamp() - midnight.timestamp(), 4 * 3600);
        assert!(matches!(parse_date("19/03/2020"), Err(Error::InvalidDate(_))));
    }
}
