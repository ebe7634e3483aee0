use ndarray::{Array1, Array2, ArrayView2, Axis};
use rayon::prelude::*;

use super::utils::{check_point_shapes, check_points, metric_dot_batched};
use crate::error::{GenError, GenResult};
use crate::geometry::SpaceType;
use crate::matrix::{safe_acos, safe_acosh, Vector4};

/// Row-wise inner product in the geometry's quadratic form.
///
/// Hyperbolic: w·w' - x·x' - y·y' - z·z'. Flat space ignores `w`.
pub fn metric_inner(u: &ArrayView2<f64>, v: &ArrayView2<f64>, space: SpaceType) -> GenResult<Array1<f64>> {
    check_point_shapes(u, v)?;
    Ok(metric_dot_batched(u, v, space))
}

/// Row-wise geometric distance between normalized points
pub fn geometric_distance_batched(
    u: &ArrayView2<f64>,
    v: &ArrayView2<f64>,
    space: SpaceType,
) -> GenResult<Array1<f64>> {
    check_point_shapes(u, v)?;

    let distances = match space {
        SpaceType::Spherical => metric_dot_batched(u, v, space).mapv(safe_acos),
        SpaceType::Hyperbolic => metric_dot_batched(u, v, space).mapv(safe_acosh),
        SpaceType::Flat => {
            let diff = u - v;
            metric_dot_batched(&diff.view(), &diff.view(), space).mapv(f64::sqrt)
        }
    };
    Ok(distances)
}

/// Normalize each row onto the model space.
///
/// Fails with the first row whose length is non-positive.
pub fn normalize_batched(points: &ArrayView2<f64>, space: SpaceType) -> GenResult<Array2<f64>> {
    check_points(points)?;
    let mut result = points.to_owned();

    let bad_rows: Vec<usize> = result
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .filter_map(|(i, mut row)| {
            let p = Vector4::new(row[0], row[1], row[2], row[3]);
            match p.normalize(space) {
                Ok(n) => {
                    for j in 0..4 {
                        row[j] = n.v[j];
                    }
                    None
                }
                Err(_) => Some(i),
            }
        })
        .collect();

    match bad_rows.into_iter().min() {
        Some(row) => Err(GenError::BadVector { row }),
        None => Ok(result),
    }
}
