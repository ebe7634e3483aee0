use serde::{Deserialize, Serialize};

/// Whether a matrix preserves or reverses orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageParity {
    Positive,
    Negative,
}

impl ImageParity {
    /// Parity implied by the sign of a determinant
    pub fn from_determinant(det: f64) -> Self {
        if det > 0.0 {
            ImageParity::Positive
        } else {
            ImageParity::Negative
        }
    }

    /// Parity of a product of two matrices
    pub fn compose(self, other: ImageParity) -> Self {
        if self == other {
            ImageParity::Positive
        } else {
            ImageParity::Negative
        }
    }
}

impl std::fmt::Display for ImageParity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageParity::Positive => write!(f, "positive"),
            ImageParity::Negative => write!(f, "negative"),
        }
    }
}

/// A 4×4 real matrix acting on homogeneous row vectors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4 {
    pub m: [[f64; 4]; 4],
    pub parity: ImageParity,
}

/// A homogeneous point or direction (x, y, z, w)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector4 {
    pub v: [f64; 4],
}

impl Vector4 {
    pub const ORIGIN: Vector4 = Vector4 {
        v: [0.0, 0.0, 0.0, 1.0],
    };

    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Vector4 { v: [x, y, z, w] }
    }
}

impl From<[f64; 4]> for Vector4 {
    fn from(v: [f64; 4]) -> Self {
        Vector4 { v }
    }
}
