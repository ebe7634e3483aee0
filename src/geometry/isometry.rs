use super::SpaceType;
use crate::matrix::Matrix4;

/// How far a matrix is from being an isometry of `space`.
///
/// Row vectors preserve the form `G` exactly when `M G Mᵀ = G`, so on S³ and
/// H³ this is the largest entry of `M G Mᵀ - G`. Flat isometries are affine
/// maps instead: the upper 3×3 block must be orthogonal and the right-hand
/// column must be (0, 0, 0, 1).
pub fn isometry_residual(matrix: &Matrix4, space: SpaceType) -> f64 {
    let a = &matrix.m;
    let mut worst: f64 = 0.0;

    match space {
        SpaceType::Spherical | SpaceType::Hyperbolic => {
            let g = space.metric();
            for i in 0..4 {
                for j in 0..4 {
                    let entry: f64 = (0..4).map(|k| a[i][k] * g[k] * a[j][k]).sum();
                    let target = if i == j { g[i] } else { 0.0 };
                    worst = worst.max((entry - target).abs());
                }
            }
        }
        SpaceType::Flat => {
            for i in 0..3 {
                for j in 0..3 {
                    let entry: f64 = (0..3).map(|k| a[i][k] * a[j][k]).sum();
                    let target = if i == j { 1.0 } else { 0.0 };
                    worst = worst.max((entry - target).abs());
                }
            }
            for i in 0..3 {
                worst = worst.max(a[i][3].abs());
            }
            worst = worst.max((a[3][3] - 1.0).abs());
        }
    }

    worst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_isometry_everywhere() {
        for space in [SpaceType::Spherical, SpaceType::Flat, SpaceType::Hyperbolic] {
            assert_eq!(isometry_residual(&Matrix4::identity(), space), 0.0);
        }
    }

    #[test]
    fn test_scaling_is_not_an_isometry() {
        let mut m = Matrix4::identity();
        m.m[0][0] = 2.0;
        assert!((isometry_residual(&m, SpaceType::Spherical) - 3.0).abs() < 1e-12);
        assert!((isometry_residual(&m, SpaceType::Flat) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_flat_rejects_projective_column() {
        let mut m = Matrix4::identity();
        m.m[0][3] = 0.5;
        assert!((isometry_residual(&m, SpaceType::Flat) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_spherical_rotation_is_not_hyperbolic() {
        let t = Matrix4::translation(SpaceType::Spherical, 0.5, 0.0, 0.0);
        assert!(isometry_residual(&t, SpaceType::Spherical) < 1e-12);
        assert!(isometry_residual(&t, SpaceType::Hyperbolic) > 0.1);
    }
}
