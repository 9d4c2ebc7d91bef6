//! Daily price history from the Yahoo Finance chart API.
//!
//! Fetching is illustrative only and is used by the `stockplot` binary;
//! [`parse_chart_response`] holds the decoding and works on any payload.

use std::time::Duration;

use chrono::DateTime;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{info, warn};

use crate::data::frame::{PriceFrame, PriceRow};
use crate::error::{Error, Result};

const CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<Quote>,
    #[serde(default)]
    adjclose: Vec<AdjClose>,
}

#[derive(Debug, Default, Deserialize)]
struct Quote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct AdjClose {
    #[serde(default)]
    adjclose: Vec<Option<f64>>,
}

fn at(col: &[Option<f64>], i: usize) -> Option<f64> {
    col.get(i).copied().flatten()
}

/// Decode a chart API response into a price table.
///
/// Samples without a close price are dropped.
pub fn parse_chart_response(body: &str) -> Result<PriceFrame> {
    let envelope: ChartEnvelope = serde_json::from_str(body)?;
    if let Some(err) = envelope.chart.error {
        return Err(Error::InvalidResponse(format!("{}: {}", err.code, err.description)));
    }
    let result = envelope
        .chart
        .result
        .and_then(|r| r.into_iter().next())
        .ok_or_else(|| Error::InvalidResponse("empty result".to_string()))?;
    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| Error::InvalidResponse("missing quote".to_string()))?;
    let adj = result.indicators.adjclose.into_iter().next().map(|a| a.adjclose);

    let mut rows = Vec::with_capacity(result.timestamp.len());
    let mut skipped = 0usize;
    for (i, &secs) in result.timestamp.iter().enumerate() {
        let Some(close) = at(&quote.close, i) else {
            skipped += 1;
            continue;
        };
        let timestamp = DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| Error::InvalidResponse(format!("timestamp {secs} out of range")))?;
        rows.push(PriceRow {
            timestamp,
            open: at(&quote.open, i).unwrap_or(f64::NAN),
            high: at(&quote.high, i).unwrap_or(f64::NAN),
            low: at(&quote.low, i).unwrap_or(f64::NAN),
            close,
            adj_close: adj.as_deref().and_then(|a| at(a, i)),
            volume: at(&quote.volume, i).unwrap_or(f64::NAN),
        });
    }
    if skipped > 0 {
        warn!(skipped, "dropped chart samples without a close price");
    }
    PriceFrame::from_rows(rows)
}

pub struct YahooClient {
    client: Client,
    base_url: String,
}

impl YahooClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: CHART_URL.to_string(),
        })
    }

    /// Point the client at another chart endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Daily history of `ticker` over `range` (`1y`, `5y`, `max`, ...).
    pub fn history(&self, ticker: &str, range: &str) -> Result<PriceFrame> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), ticker);
        info!(ticker, range, "fetching price history");
        let body = self
            .client
            .get(&url)
            .query(&[("range", range), ("interval", "1d"), ("includeAdjustedClose", "true")])
            .send()?
            .error_for_status()?
            .text()?;
        let frame = parse_chart_response(&body)?;
        info!(ticker, rows = frame.len(), "fetched price history");
        Ok(frame)
    }
}
