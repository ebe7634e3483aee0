use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::geometry::SpaceType;
use crate::ops::{geometric_distance_batched, metric_inner, normalize_batched};

fn parse_space(name: &str) -> PyResult<SpaceType> {
    match name {
        "spherical" => Ok(SpaceType::Spherical),
        "flat" => Ok(SpaceType::Flat),
        "hyperbolic" => Ok(SpaceType::Hyperbolic),
        other => Err(PyValueError::new_err(format!("unknown geometry '{}'", other))),
    }
}

#[pyfunction]
pub fn geometric_inner<'py>(
    py: Python<'py>,
    u: PyReadonlyArray2<f64>,
    v: PyReadonlyArray2<f64>,
    space: &str,
) -> PyResult<&'py PyArray1<f64>> {
    let result = metric_inner(&u.as_array(), &v.as_array(), parse_space(space)?)?;
    Ok(result.into_pyarray(py))
}

#[pyfunction]
pub fn geometric_distance<'py>(
    py: Python<'py>,
    u: PyReadonlyArray2<f64>,
    v: PyReadonlyArray2<f64>,
    space: &str,
) -> PyResult<&'py PyArray1<f64>> {
    let result = geometric_distance_batched(&u.as_array(), &v.as_array(), parse_space(space)?)?;
    Ok(result.into_pyarray(py))
}

#[pyfunction]
pub fn normalize_points<'py>(
    py: Python<'py>,
    x: PyReadonlyArray2<f64>,
    space: &str,
) -> PyResult<&'py PyArray2<f64>> {
    let result = normalize_batched(&x.as_array(), parse_space(space)?)?;
    Ok(result.into_pyarray(py))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(geometric_inner, m)?)?;
    m.add_function(wrap_pyfunction!(geometric_distance, m)?)?;
    m.add_function(wrap_pyfunction!(normalize_points, m)?)?;
    Ok(())
}
