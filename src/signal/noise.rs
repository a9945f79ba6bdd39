//! SNR-calibrated Gaussian measurement noise
//!
//! Provides a seeded Gaussian noise generator and the calibration that
//! sizes its variance to a target signal-to-noise ratio:
//!
//! 1. `sig_avg_mag = mean(|signal|)`
//! 2. `sig_avg_db = 10·log10(sig_avg_mag)`
//! 3. `noise_avg_db = sig_avg_db - target_snr_db`
//! 4. `noise_avg_mag = 10^(noise_avg_db / 10)` — the noise variance
//! 5. draw i.i.d. samples from Normal(mean, √noise_avg_mag)
//!
//! A signal whose mean absolute magnitude is not strictly positive has no
//! well-defined level in dB; calibration fails with
//! [`Error::InvalidSignal`] instead of propagating NaN into the
//! measurement set.

use crate::error::{Error, Result};
use rand::prelude::*;
use rand::rngs::SmallRng;
use rand_distr::StandardNormal;

/// Noise generator with configurable seed for reproducibility
#[derive(Clone)]
pub struct NoiseGenerator {
    rng: SmallRng,
}

impl NoiseGenerator {
    /// Create a new noise generator
    ///
    /// If seed is 0, uses random entropy for non-deterministic behavior.
    /// Otherwise, uses the provided seed for reproducible results.
    pub fn new(seed: u64) -> Self {
        let rng = if seed == 0 {
            SmallRng::from_entropy()
        } else {
            SmallRng::seed_from_u64(seed)
        };
        Self { rng }
    }

    /// Generate Gaussian noise with given standard deviation
    #[inline]
    pub fn gaussian(&mut self, stddev: f64) -> f64 {
        if stddev == 0.0 {
            return 0.0;
        }
        let n: f64 = self.rng.sample(StandardNormal);
        n * stddev
    }

    /// Generate Gaussian noise with bias and standard deviation
    #[inline]
    pub fn biased_gaussian(&mut self, bias: f64, stddev: f64) -> f64 {
        bias + self.gaussian(stddev)
    }
}

/// Noise calibration parameters
#[derive(Debug, Clone, Copy)]
pub struct NoiseParams {
    /// Target signal-to-noise ratio (dB)
    pub target_snr_db: f64,
    /// Mean noise level
    pub mean: f64,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            target_snr_db: 20.0,
            mean: 0.0,
        }
    }
}

/// Noise variance that puts `signal` at `target_snr_db` above the noise
///
/// Fails with [`Error::InvalidSignal`] when the signal's mean absolute
/// magnitude is zero, negative, or not finite (including empty input).
pub fn noise_variance(signal: &[f64], target_snr_db: f64) -> Result<f64> {
    let mean_abs = signal.iter().map(|s| s.abs()).sum::<f64>() / signal.len() as f64;
    if !(mean_abs > 0.0) || !mean_abs.is_finite() {
        return Err(Error::InvalidSignal { mean_abs });
    }
    let signal_db = 10.0 * mean_abs.log10();
    let noise_db = signal_db - target_snr_db;
    Ok(10f64.powf(noise_db / 10.0))
}

/// Additive noise array calibrated against `signal`
///
/// Returns one draw per input sample; the input itself is never modified.
/// The caller adds the result elementwise to the clean channel.
pub fn calibrated_noise(
    signal: &[f64],
    params: &NoiseParams,
    noise: &mut NoiseGenerator,
) -> Result<Vec<f64>> {
    let stddev = noise_variance(signal, params.target_snr_db)?.sqrt();
    Ok((0..signal.len())
        .map(|_| noise.biased_gaussian(params.mean, stddev))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_deterministic_seed() {
        let mut noise1 = NoiseGenerator::new(42);
        let mut noise2 = NoiseGenerator::new(42);

        for _ in 0..100 {
            assert_eq!(noise1.gaussian(1.0), noise2.gaussian(1.0));
        }
    }

    #[test]
    fn test_zero_stddev() {
        let mut noise = NoiseGenerator::new(42);
        for _ in 0..10 {
            assert_eq!(noise.gaussian(0.0), 0.0);
        }
    }

    #[test]
    fn test_variance_for_unit_signal() {
        // |x| = 1 → 0 dB signal level → variance = 10^(-snr/10)
        let signal = vec![1.0; 64];
        let variance = noise_variance(&signal, 20.0).unwrap();
        assert_relative_eq!(variance, 0.01, max_relative = 1e-12);
    }

    #[test]
    fn test_variance_scales_with_magnitude() {
        // Doubling the signal magnitude doubles the noise variance
        let low = noise_variance(&[1.0; 16], 20.0).unwrap();
        let high = noise_variance(&[2.0; 16], 20.0).unwrap();
        assert_relative_eq!(high, low * 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_sign_does_not_matter() {
        // Calibration uses |x|, so a symmetric signal still has level
        let variance = noise_variance(&[-3.0, 3.0, -3.0, 3.0], 10.0).unwrap();
        assert_relative_eq!(variance, 0.3, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_signal_rejected() {
        let err = noise_variance(&[0.0; 32], 20.0).unwrap_err();
        assert!(matches!(err, Error::InvalidSignal { mean_abs } if mean_abs == 0.0));
    }

    #[test]
    fn test_empty_signal_rejected() {
        assert!(noise_variance(&[], 20.0).is_err());
    }

    #[test]
    fn test_calibrated_noise_length_and_purity() {
        let signal = vec![2.0; 100];
        let mut gen = NoiseGenerator::new(7);
        let noise = calibrated_noise(&signal, &NoiseParams::default(), &mut gen).unwrap();
        assert_eq!(noise.len(), signal.len());
        // Input untouched
        assert!(signal.iter().all(|&s| s == 2.0));
    }

    #[test]
    fn test_calibrated_noise_mean_offset() {
        let signal = vec![1.0; 10_000];
        let params = NoiseParams {
            target_snr_db: 20.0,
            mean: 5.0,
        };
        let mut gen = NoiseGenerator::new(11);
        let noise = calibrated_noise(&signal, &params, &mut gen).unwrap();
        let empirical_mean = noise.iter().sum::<f64>() / noise.len() as f64;
        // stddev is 0.1, so the sample mean sits tightly around 5
        assert!((empirical_mean - 5.0).abs() < 0.01);
    }
}
