use std::ops::Mul;

use super::types::{ImageParity, Matrix4};
use crate::geometry::SpaceType;

/// Even permutations of (0, 1, 2, 3) come first, odd ones second.
const PERMUTATIONS: [([usize; 4], f64); 24] = [
    ([0, 1, 2, 3], 1.0),
    ([0, 2, 3, 1], 1.0),
    ([0, 3, 1, 2], 1.0),
    ([1, 0, 3, 2], 1.0),
    ([1, 2, 0, 3], 1.0),
    ([1, 3, 2, 0], 1.0),
    ([2, 0, 1, 3], 1.0),
    ([2, 1, 3, 0], 1.0),
    ([2, 3, 0, 1], 1.0),
    ([3, 0, 2, 1], 1.0),
    ([3, 1, 0, 2], 1.0),
    ([3, 2, 1, 0], 1.0),
    ([0, 1, 3, 2], -1.0),
    ([0, 2, 1, 3], -1.0),
    ([0, 3, 2, 1], -1.0),
    ([1, 0, 2, 3], -1.0),
    ([1, 2, 3, 0], -1.0),
    ([1, 3, 0, 2], -1.0),
    ([2, 0, 3, 1], -1.0),
    ([2, 1, 0, 3], -1.0),
    ([2, 3, 1, 0], -1.0),
    ([3, 0, 1, 2], -1.0),
    ([3, 1, 2, 0], -1.0),
    ([3, 2, 0, 1], -1.0),
];

impl Matrix4 {
    pub fn identity() -> Self {
        let mut m = [[0.0; 4]; 4];
        for (i, row) in m.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Matrix4 {
            m,
            parity: ImageParity::Positive,
        }
    }

    /// The antipodal map `v -> -v`, orientation preserving in dimension 4
    pub fn antipodal() -> Self {
        let mut m = [[0.0; 4]; 4];
        for (i, row) in m.iter_mut().enumerate() {
            row[i] = -1.0;
        }
        Matrix4 {
            m,
            parity: ImageParity::Positive,
        }
    }

    /// Build a matrix from its rows, deriving the parity from the determinant
    pub fn from_rows(m: [[f64; 4]; 4]) -> Self {
        let mut matrix = Matrix4 {
            m,
            parity: ImageParity::Positive,
        };
        matrix.parity = ImageParity::from_determinant(matrix.determinant());
        matrix
    }

    /// Exact comparison against the identity
    pub fn is_identity(&self) -> bool {
        (0..4).all(|i| (0..4).all(|j| self.m[i][j] == if i == j { 1.0 } else { 0.0 }))
    }

    /// Parities must match and every entry must agree within `eps`
    pub fn approx_eq(&self, other: &Matrix4, eps: f64) -> bool {
        if self.parity != other.parity {
            return false;
        }
        self.max_abs_diff(other) <= eps
    }

    pub fn max_abs_diff(&self, other: &Matrix4) -> f64 {
        let mut worst: f64 = 0.0;
        for i in 0..4 {
            for j in 0..4 {
                worst = worst.max((self.m[i][j] - other.m[i][j]).abs());
            }
        }
        worst
    }

    pub fn product(&self, other: &Matrix4) -> Matrix4 {
        let mut m = [[0.0; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                m[i][j] = (0..4).map(|k| self.m[i][k] * other.m[k][j]).sum();
            }
        }
        Matrix4 {
            m,
            parity: self.parity.compose(other.parity),
        }
    }

    pub fn transpose(&self) -> Matrix4 {
        let mut m = [[0.0; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                m[i][j] = self.m[j][i];
            }
        }
        Matrix4 {
            m,
            parity: self.parity,
        }
    }

    /// Leibniz expansion over all 24 permutations
    pub fn determinant(&self) -> f64 {
        PERMUTATIONS
            .iter()
            .map(|(p, sign)| {
                sign * self.m[0][p[0]] * self.m[1][p[1]] * self.m[2][p[2]] * self.m[3][p[3]]
            })
            .sum()
    }

    /// Invert an element of O(4), Isom(E³) or O(3,1) without row reduction.
    ///
    /// The geometry is read from `m[3][3]`, the same way generators are
    /// classified when a file is loaded.
    pub fn geometric_inverse(&self) -> Matrix4 {
        let a = &self.m;
        let mut inv = [[0.0; 4]; 4];

        match SpaceType::classify(self, 0.0) {
            SpaceType::Spherical => {
                for i in 0..4 {
                    for j in 0..4 {
                        inv[i][j] = a[j][i];
                    }
                }
            }
            SpaceType::Flat => {
                for i in 0..3 {
                    for j in 0..3 {
                        inv[i][j] = a[j][i];
                    }
                }
                for i in 0..3 {
                    inv[3][i] = -(0..3).map(|j| a[3][j] * a[i][j]).sum::<f64>();
                }
                inv[3][3] = 1.0;
            }
            SpaceType::Hyperbolic => {
                for i in 0..4 {
                    for j in 0..4 {
                        inv[i][j] = if (i == 3) == (j == 3) { a[j][i] } else { -a[j][i] };
                    }
                }
            }
        }

        Matrix4 {
            m: inv,
            parity: self.parity,
        }
    }

    /// General inverse by Gauss-Jordan elimination with partial pivoting.
    /// Returns `None` when a pivot vanishes.
    pub fn inverse(&self) -> Option<Matrix4> {
        let mut a = self.m;
        let mut inv = Matrix4::identity().m;

        for col in 0..4 {
            let pivot = (col..4)
                .max_by(|&r, &s| a[r][col].abs().total_cmp(&a[s][col].abs()))
                .unwrap_or(col);
            if a[pivot][col].abs() < f64::EPSILON {
                return None;
            }
            a.swap(col, pivot);
            inv.swap(col, pivot);

            let scale = 1.0 / a[col][col];
            for j in 0..4 {
                a[col][j] *= scale;
                inv[col][j] *= scale;
            }

            for row in 0..4 {
                if row == col {
                    continue;
                }
                let factor = a[row][col];
                if factor == 0.0 {
                    continue;
                }
                for j in 0..4 {
                    a[row][j] -= factor * a[col][j];
                    inv[row][j] -= factor * inv[col][j];
                }
            }
        }

        Some(Matrix4 {
            m: inv,
            parity: self.parity,
        })
    }

    /// Isometry moving the origin by the vector (dx, dy, dz).
    ///
    /// With `m` the unit velocity matrix and `L` the length of the motion,
    /// `exp(L m) = 1 + c1 m + c2 m²` where the coefficients depend on
    /// the sign of the curvature.
    pub fn translation(space: SpaceType, dx: f64, dy: f64, dz: f64) -> Matrix4 {
        let length = (dx * dx + dy * dy + dz * dz).sqrt();
        if length == 0.0 {
            return Matrix4::identity();
        }
        let (dx, dy, dz) = (dx / length, dy / length, dz / length);

        let mut m = [[0.0; 4]; 4];
        m[3][0] = dx;
        m[3][1] = dy;
        m[3][2] = dz;

        let (c1, c2) = match space {
            SpaceType::Spherical => {
                m[0][3] = -dx;
                m[1][3] = -dy;
                m[2][3] = -dz;
                (length.sin(), 1.0 - length.cos())
            }
            SpaceType::Flat => (length, 0.0),
            SpaceType::Hyperbolic => {
                m[0][3] = dx;
                m[1][3] = dy;
                m[2][3] = dz;
                (length.sinh(), length.cosh() - 1.0)
            }
        };

        exp_quadratic(m, c1, c2)
    }

    /// Rotation about the origin by the small rotation (dα, dβ, dγ)
    pub fn rotation(da: f64, db: f64, dc: f64) -> Matrix4 {
        let length = (da * da + db * db + dc * dc).sqrt();
        if length == 0.0 {
            return Matrix4::identity();
        }
        let (da, db, dc) = (da / length, db / length, dc / length);

        let m = [
            [0.0, dc, -db, 0.0],
            [-dc, 0.0, da, 0.0],
            [db, -da, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0],
        ];

        exp_quadratic(m, length.sin(), 1.0 - length.cos())
    }
}

/// `1 + c1 m + c2 m²`, always orientation preserving
fn exp_quadratic(m: [[f64; 4]; 4], c1: f64, c2: f64) -> Matrix4 {
    let mut result = Matrix4::identity();
    for i in 0..4 {
        for j in 0..4 {
            let m2: f64 = (0..4).map(|k| m[i][k] * m[k][j]).sum();
            result.m[i][j] += c1 * m[i][j] + c2 * m2;
        }
    }
    result
}

impl Mul for Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: Matrix4) -> Matrix4 {
        self.product(&rhs)
    }
}

impl<'a> Mul<&'a Matrix4> for &'a Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: &'a Matrix4) -> Matrix4 {
        self.product(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::isometry_residual;
    use approx::assert_abs_diff_eq;

    const SPACES: [SpaceType; 3] = [SpaceType::Spherical, SpaceType::Flat, SpaceType::Hyperbolic];

    #[test]
    fn test_permutation_table_is_complete() {
        let mut seen = std::collections::HashSet::new();
        for (p, _) in PERMUTATIONS.iter() {
            assert!(seen.insert(*p), "duplicate permutation {:?}", p);
        }
        assert_eq!(seen.len(), 24);
    }

    #[test]
    fn test_determinant_known_values() {
        assert_abs_diff_eq!(Matrix4::identity().determinant(), 1.0);
        assert_abs_diff_eq!(Matrix4::antipodal().determinant(), 1.0);

        let mut swap = Matrix4::identity();
        swap.m[0] = [0.0, 1.0, 0.0, 0.0];
        swap.m[1] = [1.0, 0.0, 0.0, 0.0];
        assert_abs_diff_eq!(swap.determinant(), -1.0);

        let diag = Matrix4::from_rows([
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 3.0, 0.0, 0.0],
            [0.0, 0.0, 4.0, 0.0],
            [0.0, 0.0, 0.0, 0.5],
        ]);
        assert_abs_diff_eq!(diag.determinant(), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_from_rows_sets_parity() {
        let reflection = Matrix4::from_rows([
            [-1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0, 1.0],
        ]);
        assert_eq!(reflection.parity, ImageParity::Negative);
        let squared = reflection * reflection;
        assert_eq!(squared.parity, ImageParity::Positive);
        assert_abs_diff_eq!(squared.m[3][2], 2.0);
    }

    #[test]
    fn test_translations_are_isometries() {
        for space in SPACES {
            let t = Matrix4::translation(space, 0.3, -0.2, 0.5);
            let residual = isometry_residual(&t, space);
            assert!(residual < 1e-12, "{space} residual {residual}");
            assert_eq!(SpaceType::classify(&t, 0.0), space);
        }
    }

    #[test]
    fn test_flat_translation_moves_origin() {
        let t = Matrix4::translation(SpaceType::Flat, 1.0, 2.0, -3.0);
        assert_abs_diff_eq!(t.m[3][0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(t.m[3][1], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(t.m[3][2], -3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(t.m[3][3], 1.0);
    }

    #[test]
    fn test_geometric_inverse_matches_general_inverse() {
        let rotation = Matrix4::rotation(0.4, -0.1, 0.7);
        for space in SPACES {
            let g = Matrix4::translation(space, 0.2, 0.1, -0.4) * rotation;
            let geometric = g.geometric_inverse();
            let general = g.inverse().expect("isometries are invertible");
            assert!(geometric.max_abs_diff(&general) < 1e-10, "{space}");
            assert!((geometric * g).approx_eq(&Matrix4::identity(), 1e-10), "{space}");
        }
    }

    #[test]
    fn test_inverse_of_singular_matrix() {
        let mut singular = Matrix4::identity();
        singular.m[2] = singular.m[1];
        assert!(singular.inverse().is_none());
    }

    #[test]
    fn test_zero_motion_is_identity() {
        assert!(Matrix4::translation(SpaceType::Hyperbolic, 0.0, 0.0, 0.0).is_identity());
        assert!(Matrix4::rotation(0.0, 0.0, 0.0).is_identity());
    }
}
