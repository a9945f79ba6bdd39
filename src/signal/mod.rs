//! Signal synthesis building blocks
//!
//! The feed-forward chain that turns a discrete pulse schedule into
//! noisy inertial measurements:
//!
//! | Stage | Module |
//! |-------|--------|
//! | Pulse schedule → angle trajectories | [`schedule`] |
//! | Angle trajectories → angular rates | [`mod@gradient`] |
//! | Roll/pitch → body-frame accelerations | [`gravity`] |
//! | SNR-calibrated additive noise | [`noise`] |
//!
//! Each stage is a pure function over immutable inputs; none of them
//! logs, prints, or keeps state beyond the seeded noise generator.

pub mod gradient;
pub mod gravity;
pub mod noise;
pub mod schedule;

pub use gradient::gradient;
pub use gravity::{project_gravity, BodyAcceleration};
pub use noise::{calibrated_noise, noise_variance, NoiseGenerator, NoiseParams};
pub use schedule::{expand_schedule, AttitudeSchedule, PulseTiming};
