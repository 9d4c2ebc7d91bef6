//! Price overlays: predicted-vs-real with optional MSE, and Fourier
//! approximations of a price series.
//!
//! Both operations validate their inputs, set the canvas title and axis
//! labels, draw their curves and hand back the curve handles so the caller
//! can assemble a legend. Errors are returned as-is; nothing is retried.

use chrono::{DateTime, Utc};
use rustfft::num_complex::Complex;
use tracing::debug;

use crate::canvas::{Canvas, CurveHandle};
use crate::data::curve_look::{CurveLook, PURPLE, RED};
use crate::data::fft;
use crate::data::input::PlotInput;
use crate::data::series::LabeledSeries;
use crate::data::stats::mean_squared_error;
use crate::error::{Error, Result};

/// Component counts drawn by [`plot_fourier`].
pub const DEFAULT_COMPONENTS: [usize; 4] = [3, 6, 9, 15];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PredictionOptions {
    /// Annotate the mean squared error over the overlapping timestamps.
    pub mse: bool,
}

/// Curves drawn by [`plot_test_prediction`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionCurves {
    pub real: CurveHandle,
    pub predicted: CurveHandle,
    /// Set when MSE mode was on and the series overlap.
    pub mse: Option<f64>,
}

impl PredictionCurves {
    /// `[real, predicted]`
    pub fn handles(&self) -> [CurveHandle; 2] {
        [self.real, self.predicted]
    }
}

/// Draw `predicted` over `real` on one date/price frame.
///
/// Real prices are a solid purple line, predictions a dashed red one. With
/// `options.mse` the error over the shared timestamps is added to the legend
/// as `MSE : x.xx`; if the series share no timestamp the annotation is
/// skipped without error.
pub fn plot_test_prediction<'a, 'b>(
    canvas: &mut Canvas,
    real: impl Into<PlotInput<'a>>,
    predicted: impl Into<PlotInput<'b>>,
    options: PredictionOptions,
) -> Result<PredictionCurves> {
    let real = real.into().into_series()?;
    let predicted = predicted.into().into_series()?;

    canvas.set_title("Predicted data above true data.");
    canvas.set_xlabel("Date");
    canvas.set_ylabel("Prices [$]");

    let mut mse = None;
    if options.mse {
        mse = intersection_mse(real, predicted)?;
        match mse {
            Some(value) => {
                canvas.annotate(format!("MSE : {value:.2}"));
            }
            None => debug!("no shared timestamps, MSE annotation skipped"),
        }
    }

    let real_h = canvas.plot("Real data", real.iter(), CurveLook::solid(PURPLE));
    let predicted_h = canvas.plot("Predicted data", predicted.iter(), CurveLook::dashed(RED));
    Ok(PredictionCurves {
        real: real_h,
        predicted: predicted_h,
        mse,
    })
}

/// MSE between `real` and `predicted` restricted to their shared timestamps.
///
/// Returns `None` when the indices do not intersect.
pub fn intersection_mse(real: &LabeledSeries, predicted: &LabeledSeries) -> Result<Option<f64>> {
    let common = real.intersect_index(predicted);
    debug!(
        real = real.len(),
        predicted = predicted.len(),
        shared = common.len(),
        "intersected prediction index"
    );
    if common.is_empty() {
        return Ok(None);
    }
    mean_squared_error(&real.select(&common), &predicted.select(&common)).map(Some)
}

/// Draw Fourier approximations with [`DEFAULT_COMPONENTS`] and the series itself.
pub fn plot_fourier<'a>(
    canvas: &mut Canvas,
    data: impl Into<PlotInput<'a>>,
) -> Result<Vec<CurveHandle>> {
    plot_fourier_with(canvas, data, &DEFAULT_COMPONENTS)
}

/// Draw one Fourier approximation per entry of `components`, then the series.
///
/// Each approximation keeps the first and last `k` bins of the spectrum and
/// is drawn dashed over evenly spaced timestamps spanning the series. The
/// returned handles follow draw order; the real series is last.
pub fn plot_fourier_with<'a>(
    canvas: &mut Canvas,
    data: impl Into<PlotInput<'a>>,
    components: &[usize],
) -> Result<Vec<CurveHandle>> {
    let data = data.into().into_series()?;

    canvas.set_title("Fourier transform of stock prices.");
    canvas.set_xlabel("Date");
    canvas.set_ylabel("Price [$]");

    let (first, last) = match (data.first_timestamp(), data.last_timestamp()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(Error::EmptySeries),
    };
    let spectrum = fft::forward(data.values());

    let mut handles = Vec::with_capacity(components.len() + 1);
    for (i, &k) in components.iter().enumerate() {
        debug!(components = k, samples = data.len(), "fourier approximation");
        let points = fourier_approximation(&spectrum, first, last, k);
        handles.push(canvas.plot(
            format!("Fourier transform with {k} components"),
            points,
            CurveLook::dashed(CurveLook::alloc_color(i)),
        ));
    }
    handles.push(canvas.plot("Real", data.iter(), CurveLook::solid(PURPLE)));
    Ok(handles)
}

/// Inverse transform of `spectrum` truncated to `components`, placed on
/// evenly spaced timestamps from `first` to `last`.
pub fn fourier_approximation(
    spectrum: &[Complex<f64>],
    first: DateTime<Utc>,
    last: DateTime<Utc>,
    components: usize,
) -> Vec<(DateTime<Utc>, f64)> {
    let mut truncated = spectrum.to_vec();
    fft::truncate(&mut truncated, components);
    let values = fft::inverse_real(&truncated);
    fft::linspace_timestamps(first, last, values.len())
        .into_iter()
        .zip(values)
        .collect()
}
