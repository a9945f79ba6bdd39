//! Error types for GatiSim

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// GatiSim error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file parse error
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Noise calibration requested for a signal with no usable magnitude
    #[error("Invalid signal: mean absolute magnitude {mean_abs} is not positive")]
    InvalidSignal {
        /// Mean absolute magnitude of the offending signal
        mean_abs: f64,
    },

    /// Per-axis pulse schedules differ in length
    #[error("Schedule length mismatch: roll={roll}, pitch={pitch}, yaw={yaw}")]
    ScheduleLengthMismatch {
        /// Roll schedule slot count
        roll: usize,
        /// Pitch schedule slot count
        pitch: usize,
        /// Yaw schedule slot count
        yaw: usize,
    },

    /// Paired arrays differ in length
    #[error("Dimension mismatch: {left} vs {right} samples")]
    DimensionMismatch {
        /// Length of the first array
        left: usize,
        /// Length of the second array
        right: usize,
    },

    /// Trajectory too short for numerical differentiation
    #[error("Trajectory too short: {len} samples (need at least 2)")]
    TrajectoryTooShort {
        /// Number of samples provided
        len: usize,
    },

    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Malformed record in a CSV file
    #[error("Invalid record at line {line}: {reason}")]
    InvalidRecord {
        /// 1-based line number in the file
        line: usize,
        /// What was wrong with the row
        reason: String,
    },
}
