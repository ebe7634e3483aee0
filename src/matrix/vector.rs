use super::types::{Matrix4, Vector4};
use super::{safe_acos, safe_acosh};
use crate::error::{GenError, GenResult};
use crate::geometry::SpaceType;

impl Vector4 {
    pub fn dot(&self, other: &Vector4) -> f64 {
        (0..4).map(|i| self.v[i] * other.v[i]).sum()
    }

    /// Row vector times matrix, `v · M`
    pub fn times_matrix(&self, matrix: &Matrix4) -> Vector4 {
        let mut out = [0.0; 4];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = (0..4).map(|j| self.v[j] * matrix.m[j][i]).sum();
        }
        Vector4 { v: out }
    }

    /// Length in the given geometry: Euclidean norm on S³, `w` in flat space,
    /// `sqrt(w² - x² - y² - z²)` on the hyperboloid.
    pub fn length(&self, space: SpaceType) -> f64 {
        let [x, y, z, w] = self.v;
        match space {
            SpaceType::Spherical => (x * x + y * y + z * z + w * w).sqrt(),
            SpaceType::Flat => w,
            SpaceType::Hyperbolic => {
                let q = w * w - x * x - y * y - z * z;
                if q > 0.0 {
                    q.sqrt()
                } else {
                    0.0
                }
            }
        }
    }

    /// Rescale onto the model space. Points at infinity or outside the
    /// hyperboloid's light cone have non-positive length and are rejected.
    pub fn normalize(&self, space: SpaceType) -> GenResult<Vector4> {
        let length = self.length(space);
        if length <= 0.0 || !length.is_finite() {
            return Err(GenError::DegenerateVector);
        }
        let factor = 1.0 / length;
        Ok(Vector4 {
            v: self.v.map(|c| c * factor),
        })
    }

    /// Distance from the origin (0, 0, 0, 1), assuming `self` is normalized.
    /// The geometry is read from `w` the same way matrices are classified.
    pub fn geometric_distance(&self) -> f64 {
        let [x, y, z, w] = self.v;
        if w < 1.0 {
            safe_acos(w)
        } else if w == 1.0 {
            (x * x + y * y + z * z).sqrt()
        } else {
            safe_acosh(w)
        }
    }

    /// Distance between two normalized points of the same geometry
    pub fn geometric_distance_to(&self, other: &Vector4, space: SpaceType) -> f64 {
        match space {
            SpaceType::Spherical => safe_acos(self.dot(other)),
            SpaceType::Flat => {
                let d: f64 = (0..3).map(|i| (self.v[i] - other.v[i]).powi(2)).sum();
                d.sqrt()
            }
            SpaceType::Hyperbolic => {
                let [x0, y0, z0, w0] = self.v;
                let [x1, y1, z1, w1] = other.v;
                safe_acosh(w0 * w1 - x0 * x1 - y0 * y1 - z0 * z1)
            }
        }
    }
}
