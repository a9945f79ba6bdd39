//! Measurement synthesis pipeline
//!
//! Single-pass orchestration of the signal stages: expand the pulse
//! schedules into angle trajectories, differentiate them into angular
//! rates, project gravity into body-frame accelerations, then inject
//! SNR-calibrated Gaussian noise into every measurement channel. The
//! ground-truth attitude stays noise-free.
//!
//! The differentiation spacing is `dx = 2π·f/fs`, derived from the pulse
//! angular frequency rather than the sample period. Downstream consumers
//! are calibrated against rates produced with this exact spacing, so it
//! is part of the output contract; pass `1.0/fs` to
//! [`crate::signal::gradient()`] directly if physical rad/s are needed.

use crate::config::SynthesisConfig;
use crate::error::Result;
use crate::signal::{
    calibrated_noise, gradient, project_gravity, AttitudeSchedule, BodyAcceleration,
    NoiseGenerator, NoiseParams, PulseTiming,
};
use crate::types::{AttitudeSample, ImuSample};
use std::f64::consts::PI;

/// Clean (noise-free) motion profile
#[derive(Debug, Clone)]
pub struct MotionProfile {
    /// Uniform timestamps over `[0, N/fs)` (seconds)
    pub timeline: Vec<f64>,
    /// Roll trajectory φ (radians)
    pub roll: Vec<f64>,
    /// Pitch trajectory θ (radians)
    pub pitch: Vec<f64>,
    /// Yaw trajectory ψ (radians)
    pub yaw: Vec<f64>,
    /// Roll rate channel
    pub roll_rate: Vec<f64>,
    /// Pitch rate channel
    pub pitch_rate: Vec<f64>,
    /// Yaw rate channel
    pub yaw_rate: Vec<f64>,
    /// Body-frame gravity projection
    pub accel: BodyAcceleration,
}

impl MotionProfile {
    /// Number of samples per channel
    pub fn len(&self) -> usize {
        self.timeline.len()
    }

    /// True when the profile holds no samples
    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }
}

/// Synthesized measurement set: noisy measurements plus clean truth
#[derive(Debug, Clone)]
pub struct SyntheticImu {
    /// Noisy IMU measurements, one per sample index
    pub measurements: Vec<ImuSample>,
    /// Ground-truth attitude, aligned by index with the measurements
    pub truth: Vec<AttitudeSample>,
}

/// Motion-profile and measurement synthesizer
///
/// Owns the validated configuration and the seeded noise stream. The
/// noise stream feeds the six measurement channels in a fixed order
/// (roll/pitch/yaw rates, then x/y/z accelerations), so a given seed
/// reproduces the full measurement set exactly.
pub struct ProfileSynthesizer {
    timing: PulseTiming,
    schedule: AttitudeSchedule,
    noise_params: NoiseParams,
    gravity: f64,
    noise: NoiseGenerator,
}

impl ProfileSynthesizer {
    /// Build a synthesizer from configuration, validating timing and
    /// schedule lengths up front
    pub fn from_config(config: &SynthesisConfig) -> Result<Self> {
        let timing = PulseTiming::from_config(&config.signal)?;
        let schedule = AttitudeSchedule::from_config(&config.schedule)?;
        Ok(Self {
            timing,
            schedule,
            noise_params: NoiseParams {
                target_snr_db: config.noise.target_snr_db,
                mean: config.noise.mean,
            },
            gravity: config.gravity_m_s2,
            noise: NoiseGenerator::new(config.random_seed),
        })
    }

    /// Samples the profile will contain
    pub fn sample_count(&self) -> usize {
        self.schedule.slots() * self.timing.samples_per_slot()
    }

    /// Differentiation spacing: `2π·f/fs`
    #[inline]
    fn rate_spacing(&self) -> f64 {
        2.0 * PI * self.timing.signal_frequency_hz / self.timing.sampling_frequency_hz
    }

    /// Deterministic part of the pipeline: trajectories, rates, gravity
    pub fn motion_profile(&self) -> Result<MotionProfile> {
        let (roll, pitch, yaw) = self.schedule.expand(&self.timing);

        let fs = self.timing.sampling_frequency_hz;
        let timeline = (0..roll.len()).map(|i| i as f64 / fs).collect();

        let dx = self.rate_spacing();
        let roll_rate = gradient(&roll, dx)?;
        let pitch_rate = gradient(&pitch, dx)?;
        let yaw_rate = gradient(&yaw, dx)?;

        let accel = project_gravity(&roll, &pitch, self.gravity)?;

        Ok(MotionProfile {
            timeline,
            roll,
            pitch,
            yaw,
            roll_rate,
            pitch_rate,
            yaw_rate,
            accel,
        })
    }

    /// Run the full pipeline and inject measurement noise
    pub fn synthesize(&mut self) -> Result<SyntheticImu> {
        let profile = self.motion_profile()?;

        let wx = self.noisy_channel(&profile.roll_rate)?;
        let wy = self.noisy_channel(&profile.pitch_rate)?;
        let wz = self.noisy_channel(&profile.yaw_rate)?;
        let ax = self.noisy_channel(&profile.accel.x)?;
        let ay = self.noisy_channel(&profile.accel.y)?;
        let az = self.noisy_channel(&profile.accel.z)?;

        let n = profile.len();
        let mut measurements = Vec::with_capacity(n);
        let mut truth = Vec::with_capacity(n);
        for i in 0..n {
            let t = profile.timeline[i];
            measurements.push(ImuSample::new(
                t,
                [ax[i], ay[i], az[i]],
                [wx[i], wy[i], wz[i]],
            ));
            truth.push(AttitudeSample::new(
                t,
                profile.roll[i],
                profile.pitch[i],
                profile.yaw[i],
            ));
        }
        Ok(SyntheticImu {
            measurements,
            truth,
        })
    }

    /// One clean channel plus its calibrated noise
    fn noisy_channel(&mut self, clean: &[f64]) -> Result<Vec<f64>> {
        let noise = calibrated_noise(clean, &self.noise_params, &mut self.noise)?;
        Ok(clean.iter().zip(&noise).map(|(s, n)| s + n).collect())
    }
}
