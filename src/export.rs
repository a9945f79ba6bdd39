//! CSV record files
//!
//! Writes the measurement and attitude record files consumed by the
//! downstream estimator and the plotting tools, and reads attitude files
//! back for the orientation viewer:
//!
//! - `measurements.csv`: `t,ax,ay,az,wx,wy,wz`, one row per sample
//! - `true_position.csv` / `pred_position.csv`: `t,roll,pitch,yaw`
//!
//! All values are 4-decimal fixed point with a header row and no index
//! column. Predicted and true attitude files are aligned by row index,
//! so their row counts must match; [`load_attitude_pair`] enforces that.

use crate::error::{Error, Result};
use crate::types::{AttitudeSample, ImuSample};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Write noisy IMU measurements to a CSV file
pub fn write_measurements<P: AsRef<Path>>(path: P, samples: &[ImuSample]) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "t,ax,ay,az,wx,wy,wz")?;
    for s in samples {
        writeln!(
            file,
            "{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4}",
            s.timestamp, s.accel[0], s.accel[1], s.accel[2], s.gyro[0], s.gyro[1], s.gyro[2]
        )?;
    }
    file.flush()?;
    Ok(())
}

/// Write attitude samples to a CSV file
pub fn write_attitude<P: AsRef<Path>>(path: P, samples: &[AttitudeSample]) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "t,roll,pitch,yaw")?;
    for s in samples {
        writeln!(
            file,
            "{:.4},{:.4},{:.4},{:.4}",
            s.timestamp, s.roll, s.pitch, s.yaw
        )?;
    }
    file.flush()?;
    Ok(())
}

/// Read an attitude CSV file (`t,roll,pitch,yaw` with a header row)
pub fn read_attitude<P: AsRef<Path>>(path: P) -> Result<Vec<AttitudeSample>> {
    let reader = BufReader::new(File::open(path)?);
    let mut samples = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if idx == 0 || line.is_empty() {
            continue; // header row
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 4 {
            return Err(Error::InvalidRecord {
                line: idx + 1,
                reason: format!("expected 4 columns, got {}", fields.len()),
            });
        }
        let mut values = [0.0f64; 4];
        for (slot, field) in values.iter_mut().zip(&fields) {
            *slot = field.trim().parse().map_err(|_| Error::InvalidRecord {
                line: idx + 1,
                reason: format!("not a number: {field:?}"),
            })?;
        }
        samples.push(AttitudeSample::new(values[0], values[1], values[2], values[3]));
    }
    Ok(samples)
}

/// Load a true/predicted attitude file pair, aligned by row index
///
/// The viewer walks both files in lockstep, so differing row counts are
/// rejected rather than silently truncated.
pub fn load_attitude_pair<P: AsRef<Path>, Q: AsRef<Path>>(
    truth_path: P,
    predicted_path: Q,
) -> Result<(Vec<AttitudeSample>, Vec<AttitudeSample>)> {
    let truth = read_attitude(truth_path)?;
    let predicted = read_attitude(predicted_path)?;
    if truth.len() != predicted.len() {
        return Err(Error::DimensionMismatch {
            left: truth.len(),
            right: predicted.len(),
        });
    }
    Ok((truth, predicted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn attitude_fixture() -> Vec<AttitudeSample> {
        vec![
            AttitudeSample::new(0.0, 0.0, 0.0, 0.0),
            AttitudeSample::new(0.001, 0.1234, -0.5678, 0.25),
            AttitudeSample::new(0.002, 0.7853, 0.0001, -0.25),
        ]
    }

    #[test]
    fn test_attitude_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("true_position.csv");
        let samples = attitude_fixture();
        write_attitude(&path, &samples).unwrap();
        let loaded = read_attitude(&path).unwrap();
        assert_eq!(loaded.len(), samples.len());
        for (l, s) in loaded.iter().zip(&samples) {
            // 4-decimal formatting bounds the round-trip error
            assert!((l.roll - s.roll).abs() <= 5e-5);
            assert!((l.pitch - s.pitch).abs() <= 5e-5);
            assert!((l.yaw - s.yaw).abs() <= 5e-5);
        }
    }

    #[test]
    fn test_measurements_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("measurements.csv");
        let samples = vec![
            ImuSample::new(0.0, [0.0, 0.0, -9.81], [0.0, 0.0, 0.0]),
            ImuSample::new(0.001, [0.01, -0.02, -9.8], [0.5, -0.5, 0.0]),
        ];
        write_measurements(&path, &samples).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "t,ax,ay,az,wx,wy,wz");
        assert_eq!(lines[1], "0.0000,0.0000,0.0000,-9.8100,0.0000,0.0000,0.0000");
    }

    #[test]
    fn test_malformed_row_reports_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "t,roll,pitch,yaw\n0.0,0.1,0.2\n").unwrap();
        let err = read_attitude(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidRecord { line: 2, .. }));
    }

    #[test]
    fn test_non_numeric_field_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "t,roll,pitch,yaw\n0.0,x,0.2,0.3\n").unwrap();
        assert!(read_attitude(&path).is_err());
    }

    #[test]
    fn test_pair_row_count_mismatch_rejected() {
        let dir = TempDir::new().unwrap();
        let truth_path = dir.path().join("true_position.csv");
        let pred_path = dir.path().join("pred_position.csv");
        let samples = attitude_fixture();
        write_attitude(&truth_path, &samples).unwrap();
        write_attitude(&pred_path, &samples[..2]).unwrap();
        let err = load_attitude_pair(&truth_path, &pred_path).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { left: 3, right: 2 }));
    }

    #[test]
    fn test_pair_aligned_by_index() {
        let dir = TempDir::new().unwrap();
        let truth_path = dir.path().join("true_position.csv");
        let pred_path = dir.path().join("pred_position.csv");
        let samples = attitude_fixture();
        write_attitude(&truth_path, &samples).unwrap();
        write_attitude(&pred_path, &samples).unwrap();
        let (truth, predicted) = load_attitude_pair(&truth_path, &pred_path).unwrap();
        assert_eq!(truth.len(), predicted.len());
    }
}
