//! stockplot crate root: re-exports and module wiring.
//!
//! Visualization helpers for stock prices built on egui/eframe:
//! - `visualizer`: predicted-vs-real overlay with MSE, and Fourier approximations
//! - `canvas`: caller-owned plotting surface the overlays draw onto
//! - `plot` / `app`: rendering a canvas in a plot widget or a native window
//! - `data`: labeled series, price tables, FFT and error statistics
//! - `source`: CSV and chart API price sources for the example binary
//! - `export`: curve export
//! - `config`: window and overlay configuration

pub mod app;
pub mod canvas;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod plot;
pub mod source;
pub mod visualizer;

// Public re-exports for a compact external API
pub use app::{run_canvas, CanvasApp};
pub use canvas::{Canvas, Curve, CurveHandle, CurveKind};
pub use config::VisualizerConfig;
pub use data::curve_look::CurveLook;
pub use data::frame::{PriceField, PriceFrame, PriceRow};
pub use data::input::PlotInput;
pub use data::series::LabeledSeries;
pub use error::{Error, Result};
pub use visualizer::{
    plot_fourier, plot_fourier_with, plot_test_prediction, PredictionCurves, PredictionOptions,
    DEFAULT_COMPONENTS,
};
