//! Error statistics between real and predicted prices.

use crate::error::{Error, Result};

/// Mean squared error between two equal-length sequences.
///
/// ```math
/// MSE = (Σ (y_i - ŷ_i)²) / N
/// ```
///
/// # Errors
/// - [`Error::LengthMismatch`] if the sequences differ in length
/// - [`Error::EmptySeries`] if both are empty
///
/// ```
/// # use stockplot::data::stats::mean_squared_error;
/// let mse = mean_squared_error(&[10.0, 12.0], &[11.0, 12.0]).unwrap();
/// assert!((mse - 0.5).abs() < 1e-12);
/// ```
pub fn mean_squared_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(Error::LengthMismatch {
            left: y_true.len(),
            right: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(Error::EmptySeries);
    }
    let sum: f64 = y_true
        .iter()
        .zip(y_pred)
        .map(|(a, b)| (a - b) * (a - b))
        .sum();
    Ok(sum / y_true.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_sequences_have_zero_error() {
        assert_eq!(mean_squared_error(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap(), 0.0);
    }

    #[test]
    fn mismatched_lengths_fail() {
        let err = mean_squared_error(&[1.0], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { left: 1, right: 2 }));
    }

    #[test]
    fn empty_input_fails() {
        assert!(matches!(mean_squared_error(&[], &[]), Err(Error::EmptySeries)));
    }
}
