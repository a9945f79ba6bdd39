//! Pulse schedule expansion
//!
//! Turns a discrete per-axis binary schedule into a continuous angle
//! trajectory: each slot becomes either a half-sine pulse window or a
//! zero window of `⌊fs·t⌋` samples, concatenated in schedule order.
//!
//! Note that the samples-per-slot count truncates via floor. When `fs·t`
//! is not an integer, every motion window (and therefore the total signal)
//! is silently shorter than `fs·t` samples; downstream consumers that
//! align by index rely on this exact behavior.

use crate::config::{ScheduleConfig, SignalConfig};
use crate::error::{Error, Result};
use std::f64::consts::PI;

/// Timing of one schedule slot
#[derive(Debug, Clone, Copy)]
pub struct PulseTiming {
    /// Sampling frequency (Hz)
    pub sampling_frequency_hz: f64,
    /// Frequency of the sine pulse (Hz)
    pub signal_frequency_hz: f64,
    /// Slot duration (seconds)
    pub pulse_duration_s: f64,
    /// Peak pulse amplitude (radians)
    pub amplitude_rad: f64,
}

impl PulseTiming {
    /// Build timing from a signal configuration
    pub fn from_config(config: &SignalConfig) -> Result<Self> {
        let timing = Self {
            sampling_frequency_hz: config.sampling_frequency_hz,
            signal_frequency_hz: config.signal_frequency_hz,
            pulse_duration_s: config.pulse_duration_s(),
            amplitude_rad: config.amplitude_rad,
        };
        timing.validate()?;
        Ok(timing)
    }

    fn validate(&self) -> Result<()> {
        if !(self.sampling_frequency_hz > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "sampling frequency must be positive, got {}",
                self.sampling_frequency_hz
            )));
        }
        if !(self.signal_frequency_hz > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "signal frequency must be positive, got {}",
                self.signal_frequency_hz
            )));
        }
        if !(self.pulse_duration_s > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "pulse duration must be positive, got {} s",
                self.pulse_duration_s
            )));
        }
        if self.samples_per_slot() == 0 {
            return Err(Error::InvalidParameter(format!(
                "pulse duration {} s holds no samples at {} Hz",
                self.pulse_duration_s, self.sampling_frequency_hz
            )));
        }
        Ok(())
    }

    /// Samples per schedule slot: `⌊fs·t⌋` (floor truncation)
    #[inline]
    pub fn samples_per_slot(&self) -> usize {
        (self.sampling_frequency_hz * self.pulse_duration_s) as usize
    }

    /// One motion window: `sin(2π·f·i/fs) · amplitude` for each sample
    pub fn pulse_window(&self) -> Vec<f64> {
        let step = 2.0 * PI * self.signal_frequency_hz / self.sampling_frequency_hz;
        (0..self.samples_per_slot())
            .map(|i| (step * i as f64).sin() * self.amplitude_rad)
            .collect()
    }
}

/// Expand one binary schedule into an angle trajectory
///
/// Slots flagged `1` emit the pulse window, all other values emit the
/// zero window. Output length is `flags.len() · ⌊fs·t⌋`.
///
/// # Example
/// ```
/// use gati_sim::signal::{expand_schedule, PulseTiming};
///
/// let timing = PulseTiming {
///     sampling_frequency_hz: 100.0,
///     signal_frequency_hz: 5.0,
///     pulse_duration_s: 0.1,
///     amplitude_rad: std::f64::consts::FRAC_PI_4,
/// };
/// let trajectory = expand_schedule(&[0, 1], &timing);
/// assert_eq!(trajectory.len(), 20);
/// assert!(trajectory[..10].iter().all(|&a| a == 0.0));
/// ```
pub fn expand_schedule(flags: &[u8], timing: &PulseTiming) -> Vec<f64> {
    let pulse = timing.pulse_window();
    let window = pulse.len();
    let mut trajectory = Vec::with_capacity(flags.len() * window);
    for &flag in flags {
        if flag == 1 {
            trajectory.extend_from_slice(&pulse);
        } else {
            trajectory.resize(trajectory.len() + window, 0.0);
        }
    }
    trajectory
}

/// Validated three-axis pulse schedule
#[derive(Debug, Clone)]
pub struct AttitudeSchedule {
    roll: Vec<u8>,
    pitch: Vec<u8>,
    yaw: Vec<u8>,
}

impl AttitudeSchedule {
    /// Create a schedule, validating that all three axes have equal length
    pub fn new(roll: Vec<u8>, pitch: Vec<u8>, yaw: Vec<u8>) -> Result<Self> {
        if roll.len() != pitch.len() || roll.len() != yaw.len() {
            return Err(Error::ScheduleLengthMismatch {
                roll: roll.len(),
                pitch: pitch.len(),
                yaw: yaw.len(),
            });
        }
        Ok(Self { roll, pitch, yaw })
    }

    /// Build a schedule from configuration
    pub fn from_config(config: &ScheduleConfig) -> Result<Self> {
        Self::new(
            config.roll.clone(),
            config.pitch.clone(),
            config.yaw.clone(),
        )
    }

    /// Number of slots per axis
    pub fn slots(&self) -> usize {
        self.roll.len()
    }

    /// Expand all three axes into (roll, pitch, yaw) trajectories
    pub fn expand(&self, timing: &PulseTiming) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (
            expand_schedule(&self.roll, timing),
            expand_schedule(&self.pitch, timing),
            expand_schedule(&self.yaw, timing),
        )
    }
}
