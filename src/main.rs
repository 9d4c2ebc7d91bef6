//! `stockplot` binary: load a price history and show an overlay in a window.
//!
//! ```bash
//! stockplot fourier --ticker SPCE
//! stockplot fourier --csv SPCE.csv --components 3,6,9,15,30
//! stockplot compare --real SPCE.csv --predicted forecast.csv --mse
//! ```

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use stockplot::source::{load_price_csv, YahooClient};
use stockplot::{
    plot_fourier_with, plot_test_prediction, run_canvas, Canvas, PredictionOptions, PriceField,
    VisualizerConfig,
};

#[derive(Parser)]
#[command(name = "stockplot")]
#[command(about = "Visualize stock prices: Fourier approximations and prediction overlays")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Overlay Fourier approximations on a price series
    Fourier {
        /// Ticker symbol to fetch from the chart API
        #[arg(short, long, required_unless_present = "csv", conflicts_with = "csv")]
        ticker: Option<String>,
        /// Price CSV file to read instead of fetching
        #[arg(long)]
        csv: Option<PathBuf>,
        /// History range to fetch (1y, 5y, max, ...)
        #[arg(long, default_value = "max")]
        range: String,
        /// Price column to plot
        #[arg(short, long, default_value = "close")]
        field: PriceField,
        /// Component counts (comma-separated); overrides the configuration
        #[arg(short, long, value_delimiter = ',')]
        components: Option<Vec<usize>>,
    },
    /// Draw a predicted series over the real one
    Compare {
        /// Price CSV with the real series
        #[arg(long)]
        real: PathBuf,
        /// Price CSV with the predicted series
        #[arg(long)]
        predicted: PathBuf,
        /// Price column to plot
        #[arg(short, long, default_value = "close")]
        field: PriceField,
        /// Annotate the mean squared error over shared dates
        #[arg(long)]
        mse: bool,
    },
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stockplot=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => VisualizerConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => VisualizerConfig::default(),
    };

    let mut canvas = Canvas::new();
    canvas.set_legend(config.legend);

    match cli.command {
        Commands::Fourier {
            ticker,
            csv,
            range,
            field,
            components,
        } => {
            let frame = match (ticker, csv) {
                (_, Some(path)) => load_price_csv(&path)
                    .with_context(|| format!("reading {}", path.display()))?,
                (Some(ticker), None) => YahooClient::new()?
                    .history(&ticker, &range)
                    .with_context(|| format!("fetching history for {ticker}"))?,
                (None, None) => anyhow::bail!("either --ticker or --csv is required"),
            };
            let series = frame.column(field)?;
            let components = components.unwrap_or_else(|| config.components.clone());
            let handles = plot_fourier_with(&mut canvas, &series, &components)?;
            info!(curves = handles.len(), samples = series.len(), "drew Fourier overlay");
        }
        Commands::Compare {
            real,
            predicted,
            field,
            mse,
        } => {
            let real_series = load_price_csv(&real)
                .with_context(|| format!("reading {}", real.display()))?
                .column(field)?
                .renamed("Real data");
            let predicted_series = load_price_csv(&predicted)
                .with_context(|| format!("reading {}", predicted.display()))?
                .column(field)?
                .renamed("Predicted data");
            let curves = plot_test_prediction(
                &mut canvas,
                &real_series,
                &predicted_series,
                PredictionOptions { mse },
            )?;
            match curves.mse {
                Some(value) => info!(mse = value, "drew prediction overlay"),
                None => info!("drew prediction overlay"),
            }
        }
    }

    run_canvas(canvas, &config).map_err(|e| anyhow!("window error: {e}"))
}
