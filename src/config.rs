//! Configuration for the motion-profile synthesizer
//!
//! Loads configuration from a TOML file with per-field defaults, so an
//! empty file (or no file at all) yields the reference scenario. Every
//! parameter can also be overridden from the command line by the binary.
//!
//! Example configuration (`gati-sim.toml`):
//!
//! ```toml
//! gravity_m_s2 = 9.81
//! random_seed = 42      # 0 = random each run
//!
//! [signal]
//! signal_frequency_hz = 5.0
//! sampling_frequency_hz = 1000.0
//! pulse_duration_ms = 500.0
//!
//! [noise]
//! target_snr_db = 20.0
//! mean = 0.0
//!
//! [schedule]
//! roll  = [0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0]
//! pitch = [0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0]
//! yaw   = [0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0]
//! ```

use crate::error::Result;
use serde::Deserialize;
use std::f64::consts::FRAC_PI_4;
use std::fs;
use std::path::Path;

/// Timing of the excitation signal
#[derive(Debug, Clone, Deserialize)]
pub struct SignalConfig {
    /// Frequency of the sine pulse (Hz)
    #[serde(default = "default_signal_frequency_hz")]
    pub signal_frequency_hz: f64,

    /// Sampling frequency (Hz)
    #[serde(default = "default_sampling_frequency_hz")]
    pub sampling_frequency_hz: f64,

    /// Duration of each schedule slot / motion pulse (milliseconds)
    #[serde(default = "default_pulse_duration_ms")]
    pub pulse_duration_ms: f64,

    /// Peak pulse amplitude (radians)
    #[serde(default = "default_amplitude_rad")]
    pub amplitude_rad: f64,
}

fn default_signal_frequency_hz() -> f64 {
    5.0
}
fn default_sampling_frequency_hz() -> f64 {
    1000.0
}
fn default_pulse_duration_ms() -> f64 {
    500.0
}
fn default_amplitude_rad() -> f64 {
    FRAC_PI_4
}

impl SignalConfig {
    /// Slot duration in seconds
    pub fn pulse_duration_s(&self) -> f64 {
        self.pulse_duration_ms / 1000.0
    }
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            signal_frequency_hz: default_signal_frequency_hz(),
            sampling_frequency_hz: default_sampling_frequency_hz(),
            pulse_duration_ms: default_pulse_duration_ms(),
            amplitude_rad: default_amplitude_rad(),
        }
    }
}

/// Measurement noise parameters
#[derive(Debug, Clone, Deserialize)]
pub struct NoiseConfig {
    /// Target signal-to-noise ratio of each measurement channel (dB)
    #[serde(default = "default_target_snr_db")]
    pub target_snr_db: f64,

    /// Mean of the injected noise
    #[serde(default)]
    pub mean: f64,
}

fn default_target_snr_db() -> f64 {
    20.0
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            target_snr_db: default_target_snr_db(),
            mean: 0.0,
        }
    }
}

/// Per-axis binary pulse schedules (one flag per slot, 1 = motion pulse)
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Roll axis slots
    #[serde(default = "default_roll_schedule")]
    pub roll: Vec<u8>,

    /// Pitch axis slots
    #[serde(default = "default_pitch_schedule")]
    pub pitch: Vec<u8>,

    /// Yaw axis slots
    #[serde(default = "default_yaw_schedule")]
    pub yaw: Vec<u8>,
}

fn default_roll_schedule() -> Vec<u8> {
    vec![0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0]
}
fn default_pitch_schedule() -> Vec<u8> {
    vec![0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0]
}
fn default_yaw_schedule() -> Vec<u8> {
    vec![0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0]
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            roll: default_roll_schedule(),
            pitch: default_pitch_schedule(),
            yaw: default_yaw_schedule(),
        }
    }
}

/// Root synthesizer configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisConfig {
    /// Gravity magnitude (m/s²)
    #[serde(default = "default_gravity_m_s2")]
    pub gravity_m_s2: f64,

    /// Random seed for reproducible noise (0 = random each run)
    #[serde(default)]
    pub random_seed: u64,

    /// Excitation signal timing
    #[serde(default)]
    pub signal: SignalConfig,

    /// Noise parameters
    #[serde(default)]
    pub noise: NoiseConfig,

    /// Per-axis pulse schedules
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

fn default_gravity_m_s2() -> f64 {
    9.81
}

impl SynthesisConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: SynthesisConfig = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            gravity_m_s2: default_gravity_m_s2(),
            random_seed: 0,
            signal: SignalConfig::default(),
            noise: NoiseConfig::default(),
            schedule: ScheduleConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_scenario() {
        let config = SynthesisConfig::default();
        assert_eq!(config.signal.signal_frequency_hz, 5.0);
        assert_eq!(config.signal.sampling_frequency_hz, 1000.0);
        assert_eq!(config.signal.pulse_duration_ms, 500.0);
        assert_eq!(config.signal.pulse_duration_s(), 0.5);
        assert_eq!(config.noise.target_snr_db, 20.0);
        assert_eq!(config.noise.mean, 0.0);
        assert_eq!(config.gravity_m_s2, 9.81);
        assert_eq!(config.random_seed, 0);
        assert_eq!(config.schedule.roll.len(), 16);
        assert_eq!(config.schedule.pitch.len(), 16);
        assert_eq!(config.schedule.yaw.len(), 16);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: SynthesisConfig = toml::from_str("").unwrap();
        assert_eq!(config.signal.sampling_frequency_hz, 1000.0);
        assert_eq!(config.schedule.yaw, default_yaw_schedule());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: SynthesisConfig = toml::from_str(
            r#"
random_seed = 7

[signal]
sampling_frequency_hz = 100.0

[schedule]
roll = [0, 1]
pitch = [0, 0]
yaw = [0, 0]
"#,
        )
        .unwrap();
        assert_eq!(config.random_seed, 7);
        assert_eq!(config.signal.sampling_frequency_hz, 100.0);
        // Untouched fields keep their defaults
        assert_eq!(config.signal.signal_frequency_hz, 5.0);
        assert_eq!(config.schedule.roll, vec![0, 1]);
    }
}
