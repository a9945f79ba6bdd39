//! Body-frame gravity projection
//!
//! Resolves the fixed world gravity vector into body-frame accelerometer
//! readings from the roll and pitch trajectories (yaw rotates about the
//! gravity axis and does not affect the projection):
//!
//! ```text
//! ax =  g · sin(pitch)
//! ay = -g · cos(pitch) · sin(roll)
//! az = -g · cos(pitch) · cos(roll)
//! ```
//!
//! The decomposition preserves magnitude: `ax² + ay² + az² = g²` at every
//! sample, up to floating-point rounding.

use crate::error::{Error, Result};

/// Body-frame acceleration channels, one sample per trajectory index
#[derive(Debug, Clone, PartialEq)]
pub struct BodyAcceleration {
    /// Forward axis (m/s²)
    pub x: Vec<f64>,
    /// Lateral axis (m/s²)
    pub y: Vec<f64>,
    /// Vertical axis (m/s²)
    pub z: Vec<f64>,
}

impl BodyAcceleration {
    /// Number of samples per channel
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True when no samples are present
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// One sample as an `[x, y, z]` triple
    #[inline]
    pub fn sample(&self, i: usize) -> [f64; 3] {
        [self.x[i], self.y[i], self.z[i]]
    }
}

/// Project gravity into the body frame along roll/pitch trajectories
///
/// Pure elementwise function; the inputs must have equal length.
pub fn project_gravity(roll: &[f64], pitch: &[f64], gravity: f64) -> Result<BodyAcceleration> {
    if roll.len() != pitch.len() {
        return Err(Error::DimensionMismatch {
            left: roll.len(),
            right: pitch.len(),
        });
    }

    let n = roll.len();
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    let mut z = Vec::with_capacity(n);
    for (&phi, &theta) in roll.iter().zip(pitch) {
        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_theta, cos_theta) = theta.sin_cos();
        x.push(gravity * sin_theta);
        y.push(-gravity * cos_theta * sin_phi);
        z.push(-gravity * cos_theta * cos_phi);
    }
    Ok(BodyAcceleration { x, y, z })
}
