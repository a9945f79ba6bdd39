//! Record types produced by the synthesis pipeline

/// One noisy IMU measurement
///
/// Accelerations are body-frame specific force (m/s²); angular rates are
/// the differentiated attitude trajectories (axis order roll, pitch, yaw).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImuSample {
    /// Sample time (seconds)
    pub timestamp: f64,
    /// Accelerometer data (m/s²)
    pub accel: [f64; 3], // x, y, z
    /// Gyroscope data
    pub gyro: [f64; 3], // roll, pitch, yaw rates
}

impl ImuSample {
    /// Create a new measurement
    pub fn new(timestamp: f64, accel: [f64; 3], gyro: [f64; 3]) -> Self {
        Self {
            timestamp,
            accel,
            gyro,
        }
    }

    /// Accelerometer magnitude
    pub fn accel_magnitude(&self) -> f64 {
        (self.accel[0].powi(2) + self.accel[1].powi(2) + self.accel[2].powi(2)).sqrt()
    }

    /// Gyroscope magnitude
    pub fn gyro_magnitude(&self) -> f64 {
        (self.gyro[0].powi(2) + self.gyro[1].powi(2) + self.gyro[2].powi(2)).sqrt()
    }
}

/// One ground-truth attitude sample (noise-free)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttitudeSample {
    /// Sample time (seconds)
    pub timestamp: f64,
    /// Roll angle φ (radians)
    pub roll: f64,
    /// Pitch angle θ (radians)
    pub pitch: f64,
    /// Yaw angle ψ (radians)
    pub yaw: f64,
}

impl AttitudeSample {
    /// Create a new attitude sample
    pub fn new(timestamp: f64, roll: f64, pitch: f64, yaw: f64) -> Self {
        Self {
            timestamp,
            roll,
            pitch,
            yaw,
        }
    }

    /// Attitude with all angles zero
    pub fn level(timestamp: f64) -> Self {
        Self::new(timestamp, 0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_accel_magnitude() {
        let sample = ImuSample::new(0.0, [3.0, 4.0, 0.0], [0.0, 0.0, 0.0]);
        assert_relative_eq!(sample.accel_magnitude(), 5.0);
    }

    #[test]
    fn test_level_attitude() {
        let sample = AttitudeSample::level(1.5);
        assert_eq!(sample.timestamp, 1.5);
        assert_eq!(sample.roll, 0.0);
        assert_eq!(sample.pitch, 0.0);
        assert_eq!(sample.yaw, 0.0);
    }
}
