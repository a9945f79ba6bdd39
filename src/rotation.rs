//! Euler-angle rotation support for the orientation viewer
//!
//! Converts a (roll, pitch, yaw) triple into the rotated body-Y unit
//! vector that drives the 3D quiver animation. Rotations compose
//! intrinsically in X, Y, Z order with standard right-handed axis
//! matrices; everything here is a stateless pure function.

/// 3×3 rotation matrix for intrinsic X-Y-Z Euler angles
///
/// Equivalent to `Rx(roll) · Ry(pitch) · Rz(yaw)` applied to column
/// vectors.
pub fn rotation_matrix(roll: f64, pitch: f64, yaw: f64) -> [[f64; 3]; 3] {
    let (sr, cr) = roll.sin_cos();
    let (sp, cp) = pitch.sin_cos();
    let (sy, cy) = yaw.sin_cos();
    [
        [cp * cy, -cp * sy, sp],
        [sr * sp * cy + cr * sy, cr * cy - sr * sp * sy, -sr * cp],
        [sr * sy - cr * sp * cy, cr * sp * sy + sr * cy, cr * cp],
    ]
}

/// Apply a rotation matrix to a vector
#[inline]
pub fn rotate(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Endpoint of the body-Y unit vector under the given attitude
///
/// # Example
/// ```
/// use gati_sim::rotation::attitude_endpoint;
///
/// let v = attitude_endpoint(0.0, 0.0, 0.0);
/// assert_eq!(v, [0.0, 1.0, 0.0]);
/// ```
pub fn attitude_endpoint(roll: f64, pitch: f64, yaw: f64) -> [f64; 3] {
    rotate(&rotation_matrix(roll, pitch, yaw), [0.0, 1.0, 0.0])
}
