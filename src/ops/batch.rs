use ndarray::{Array2, Array3, ArrayView2, ArrayView3, Axis};
use rayon::prelude::*;

use super::utils::check_points;
use crate::error::{GenError, GenResult};
use crate::matrix::{Matrix4, Vector4};
use crate::geometry::SpaceType;

/// Apply one generator to a batch of row vectors, `points · M`
pub fn transform_points(points: &ArrayView2<f64>, matrix: &Matrix4) -> GenResult<Array2<f64>> {
    check_points(points)?;
    let mut result = Array2::zeros(points.raw_dim());

    result
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(i, mut row)| {
            let p = points.row(i);
            for j in 0..4 {
                row[j] = (0..4).map(|k| p[k] * matrix.m[k][j]).sum();
            }
        });

    Ok(result)
}

/// Stack generators into an array of shape (n, 4, 4)
pub fn generators_to_array3(generators: &[Matrix4]) -> Array3<f64> {
    let mut stack = Array3::zeros((generators.len(), 4, 4));
    for (mut slot, g) in stack.axis_iter_mut(Axis(0)).zip(generators) {
        for i in 0..4 {
            for j in 0..4 {
                slot[[i, j]] = g.m[i][j];
            }
        }
    }
    stack
}

/// Inverse of [`generators_to_array3`]. Parities are recomputed.
pub fn array3_to_generators(stack: &ArrayView3<f64>) -> GenResult<Vec<Matrix4>> {
    let (_, rows, cols) = stack.dim();
    if rows != 4 || cols != 4 {
        return Err(GenError::shape(format!(
            "expected generators of shape (n, 4, 4), got {:?}",
            stack.dim()
        )));
    }
    if stack.iter().any(|v| !v.is_finite()) {
        return Err(GenError::shape("generator entries must be finite"));
    }

    Ok(stack
        .axis_iter(Axis(0))
        .map(|slot| {
            let mut m = [[0.0; 4]; 4];
            for (i, row) in m.iter_mut().enumerate() {
                for (j, entry) in row.iter_mut().enumerate() {
                    *entry = slot[[i, j]];
                }
            }
            Matrix4::from_rows(m)
        })
        .collect())
}

/// Images of the basepoint (0, 0, 0, 1), one row per generator.
/// These are the generators' bottom rows.
pub fn origin_images(generators: &[Matrix4]) -> Array2<f64> {
    let mut images = Array2::zeros((generators.len(), 4));
    for (mut row, g) in images.axis_iter_mut(Axis(0)).zip(generators) {
        for j in 0..4 {
            row[j] = g.m[3][j];
        }
    }
    images
}

/// How far each generator moves the basepoint
pub fn translation_distances(generators: &[Matrix4], space: SpaceType) -> Vec<f64> {
    generators
        .par_iter()
        .map(|g| Vector4::ORIGIN.geometric_distance_to(&Vector4::from(g.m[3]), space))
        .collect()
}
