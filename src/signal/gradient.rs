//! Numerical differentiation of sampled trajectories
//!
//! Central-difference gradient over a uniform scalar spacing: interior
//! points use `(x[i+1] - x[i-1]) / (2·dx)`, the two boundary points fall
//! back to one-sided differences. Output length equals input length.

use crate::error::{Error, Result};

/// Differentiate a sampled signal with respect to a fixed spacing `dx`
///
/// # Example
/// ```
/// use gati_sim::signal::gradient;
///
/// // x² sampled at 0, 1, 2, 3 with dx = 1: interior slopes are exact
/// let rate = gradient(&[0.0, 1.0, 4.0, 9.0], 1.0).unwrap();
/// assert_eq!(rate, vec![1.0, 2.0, 4.0, 5.0]);
/// ```
pub fn gradient(signal: &[f64], dx: f64) -> Result<Vec<f64>> {
    let n = signal.len();
    if n < 2 {
        return Err(Error::TrajectoryTooShort { len: n });
    }
    if !(dx.is_finite() && dx != 0.0) {
        return Err(Error::InvalidParameter(format!(
            "gradient spacing must be finite and non-zero, got {dx}"
        )));
    }

    let mut rate = Vec::with_capacity(n);
    rate.push((signal[1] - signal[0]) / dx);
    for i in 1..n - 1 {
        rate.push((signal[i + 1] - signal[i - 1]) / (2.0 * dx));
    }
    rate.push((signal[n - 1] - signal[n - 2]) / dx);
    Ok(rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_signal_has_zero_rate() {
        let rate = gradient(&[3.0; 8], 0.5).unwrap();
        assert!(rate.iter().all(|&r| r == 0.0));
    }

    #[test]
    fn test_linear_signal_has_constant_rate() {
        let signal: Vec<f64> = (0..10).map(|i| 2.0 * i as f64).collect();
        let rate = gradient(&signal, 1.0).unwrap();
        for &r in &rate {
            assert_relative_eq!(r, 2.0);
        }
    }

    #[test]
    fn test_output_length_matches_input() {
        let signal = vec![0.0, 1.0, 0.0, -1.0, 0.0];
        assert_eq!(gradient(&signal, 0.1).unwrap().len(), signal.len());
    }

    #[test]
    fn test_boundaries_are_one_sided() {
        let rate = gradient(&[0.0, 1.0, 4.0], 1.0).unwrap();
        assert_relative_eq!(rate[0], 1.0); // (x[1] - x[0]) / dx
        assert_relative_eq!(rate[2], 3.0); // (x[2] - x[1]) / dx
        assert_relative_eq!(rate[1], 2.0); // (x[2] - x[0]) / (2·dx)
    }

    #[test]
    fn test_spacing_scales_inversely() {
        let signal = vec![0.0, 1.0, 2.0, 3.0];
        let coarse = gradient(&signal, 1.0).unwrap();
        let fine = gradient(&signal, 0.5).unwrap();
        for (c, f) in coarse.iter().zip(&fine) {
            assert_relative_eq!(*f, c * 2.0);
        }
    }

    #[test]
    fn test_too_short_rejected() {
        assert!(matches!(
            gradient(&[], 1.0),
            Err(Error::TrajectoryTooShort { len: 0 })
        ));
        assert!(matches!(
            gradient(&[1.0], 1.0),
            Err(Error::TrajectoryTooShort { len: 1 })
        ));
    }

    #[test]
    fn test_zero_spacing_rejected() {
        assert!(gradient(&[0.0, 1.0], 0.0).is_err());
    }
}
