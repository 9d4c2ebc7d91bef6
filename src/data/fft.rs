// Fourier helpers for price series: forward/inverse transforms and
// low-frequency truncation used to draw smoothed approximations.
use std::ops::Range;

use chrono::{DateTime, TimeDelta, Utc};
use rustfft::{num_complex::Complex, FftPlanner};

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// Forward DFT of a real sequence, unnormalized.
pub fn forward(values: &[f64]) -> Vec<Complex<f64>> {
    let mut data: Vec<Complex<f64>> = values
        .iter()
        .map(|&v| Complex { re: v, im: 0.0 })
        .collect();
    if data.is_empty() {
        return data;
    }
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(data.len());
    fft.process(&mut data);
    data
}

/// Inverse DFT scaled by `1/n`, keeping only the real parts.
pub fn inverse_real(spectrum: &[Complex<f64>]) -> Vec<f64> {
    let n = spectrum.len();
    if n == 0 {
        return Vec::new();
    }
    let mut data = spectrum.to_vec();
    let mut planner = FftPlanner::new();
    let ifft = planner.plan_fft_inverse(n);
    ifft.process(&mut data);
    let scale = 1.0 / n as f64;
    data.iter().map(|c| c.re * scale).collect()
}

/// Bins cleared when keeping `components` low-frequency bins on each side.
///
/// Mirrors the slice `[components:-components]`: the stop bound is
/// `len - components` for `0 < components < len` and `0` otherwise, and an
/// inverted range is empty. So `len <= 2 * components` and `components == 0`
/// clear nothing.
pub fn truncation_range(len: usize, components: usize) -> Range<usize> {
    let start = components.min(len);
    let stop = if components == 0 {
        0
    } else {
        len.saturating_sub(components)
    };
    start..stop.max(start)
}

/// Zero every bin except the first and last `components`.
pub fn truncate(spectrum: &mut [Complex<f64>], components: usize) {
    let range = truncation_range(spectrum.len(), components);
    for c in &mut spectrum[range] {
        *c = Complex { re: 0.0, im: 0.0 };
    }
}

/// Reconstruct `values` from its `components` lowest frequencies.
pub fn low_pass(values: &[f64], components: usize) -> Vec<f64> {
    let mut spectrum = forward(values);
    truncate(&mut spectrum, components);
    inverse_real(&spectrum)
}

/// `n` evenly spaced timestamps from `first` to `last`, both inclusive.
///
/// Spacing is computed in `i128` nanoseconds so spans of any length stay
/// exact; `n == 1` yields `[first]`.
pub fn linspace_timestamps(
    first: DateTime<Utc>,
    last: DateTime<Utc>,
    n: usize,
) -> Vec<DateTime<Utc>> {
    match n {
        0 => Vec::new(),
        1 => vec![first],
        _ => {
            let span = (last.timestamp() as i128 - first.timestamp() as i128) * NANOS_PER_SEC
                + (last.timestamp_subsec_nanos() as i128 - first.timestamp_subsec_nanos() as i128);
            let steps = (n - 1) as i128;
            (0..n)
                .map(|i| {
                    let offset = span * i as i128 / steps;
                    first
                        + TimeDelta::seconds(offset.div_euclid(NANOS_PER_SEC) as i64)
                        + TimeDelta::nanoseconds(offset.rem_euclid(NANOS_PER_SEC) as i64)
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_undoes_forward() {
        let values = [3.0, -1.0, 4.5, 2.0, 0.25];
        let back = inverse_real(&forward(&values));
        for (a, b) in values.iter().zip(&back) {
            assert!((a - b).abs() < 1e-9, "{a} vs {b}");
        }
    }

    #[test]
    fn truncation_preserves_mean() {
        // Bin 0 carries the mean and is never cleared.
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let approx = low_pass(&values, 1);
        assert_eq!(approx.len(), values.len());
        let mean: f64 = approx.iter().sum::<f64>() / approx.len() as f64;
        assert!((mean - 3.5).abs() < 1e-9);
    }
}
