//! Historical price sources used by the `stockplot` binary.
//!
//! Both return a [`PriceFrame`](crate::data::frame::PriceFrame); pick a
//! column before plotting.

pub mod csv_file;
pub mod yahoo;

pub use csv_file::{load_price_csv, read_price_csv};
pub use yahoo::{parse_chart_response, YahooClient};
