//! 4×4 homogeneous matrices and vectors.
//!
//! Points are row vectors and act on the left, so `v' = v · M`.
//! Flat translations therefore live in the bottom row.

pub mod types;
pub mod ops;
pub mod vector;

pub use types::{ImageParity, Matrix4, Vector4};

/// `acos` clamped to [0, π] for inputs outside [-1, 1].
pub fn safe_acos(x: f64) -> f64 {
    if x <= -1.0 {
        return std::f64::consts::PI;
    }
    if x >= 1.0 {
        return 0.0;
    }
    x.acos()
}

/// `acosh` clamped to 0 for inputs at or below 1.
pub fn safe_acosh(x: f64) -> f64 {
    if x <= 1.0 {
        return 0.0;
    }
    x.acosh()
}
