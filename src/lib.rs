//! GatiSim - Reference motion profile and noisy IMU measurement synthesis
//!
//! Generates the ground-truth roll/pitch/yaw trajectories of a simulated
//! rigid body and the matching noisy inertial measurements (body-frame
//! accelerations and angular rates) that an attitude estimator consumes.
//!
//! The pipeline is a single feed-forward pass with no shared mutable
//! state: pulse schedules expand into angle trajectories, trajectories
//! differentiate into angular rates, roll/pitch project gravity into the
//! body frame, and every measurement channel receives additive Gaussian
//! noise calibrated to a target SNR. Each stage is independently callable
//! and safe to use from multiple threads on independent inputs.

pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod rotation;
pub mod signal;
pub mod types;

// Re-export commonly used types
pub use config::{NoiseConfig, ScheduleConfig, SignalConfig, SynthesisConfig};
pub use error::{Error, Result};
pub use pipeline::{MotionProfile, ProfileSynthesizer, SyntheticImu};
pub use signal::{
    AttitudeSchedule, BodyAcceleration, NoiseGenerator, NoiseParams, PulseTiming,
};
pub use types::{AttitudeSample, ImuSample};
