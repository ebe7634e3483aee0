use ndarray::{Array1, ArrayView2, Axis};

use crate::error::{GenError, GenResult};
use crate::geometry::SpaceType;

/// Computes the form `Σ g_k x_k y_k` for each pair of rows.
/// x, y: 2D arrays of shape (batch_size, 4).
/// Returns a 1D array of shape (batch_size,).
pub fn weighted_dot_batched(x: &ArrayView2<f64>, y: &ArrayView2<f64>, g: [f64; 4]) -> Array1<f64> {
    let mut prod = x * y;
    for (k, mut column) in prod.axis_iter_mut(Axis(1)).enumerate() {
        column *= g[k];
    }
    prod.sum_axis(Axis(1))
}

/// Inner product of the geometry for each pair of rows
pub fn metric_dot_batched(x: &ArrayView2<f64>, y: &ArrayView2<f64>, space: SpaceType) -> Array1<f64> {
    weighted_dot_batched(x, y, space.metric())
}

/// Both arrays must be (n, 4) with the same n
pub fn check_point_shapes(x: &ArrayView2<f64>, y: &ArrayView2<f64>) -> GenResult<()> {
    check_points(x)?;
    if x.dim() != y.dim() {
        return Err(GenError::shape(format!(
            "point arrays differ in shape: {:?} vs {:?}",
            x.dim(),
            y.dim()
        )));
    }
    Ok(())
}

pub fn check_points(x: &ArrayView2<f64>) -> GenResult<()> {
    if x.ncols() != 4 {
        return Err(GenError::shape(format!(
            "expected homogeneous points of shape (n, 4), got {:?}",
            x.dim()
        )));
    }
    Ok(())
}
