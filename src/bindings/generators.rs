use std::path::Path;

use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
use pyo3::prelude::*;

use crate::config::{ReadOptions, ValidationOptions, WriteOptions};
use crate::format::{read_gen_file, read_gen_str, write_gen_string, GeneratorFile};
use crate::geometry::detect_space_type;
use crate::ops::{array3_to_generators, generators_to_array3};
use crate::validate::validate;

fn loaded<'py>(py: Python<'py>, file: GeneratorFile) -> PyResult<(&'py PyArray3<f64>, String)> {
    let space = file.space_type(0.0)?;
    let stack = generators_to_array3(&file.generators);
    Ok((stack.into_pyarray(py), space.name().to_string()))
}

/// Load a `.gen` file as an (n, 4, 4) array and its geometry name
#[pyfunction]
pub fn load_generators<'py>(py: Python<'py>, path: &str) -> PyResult<(&'py PyArray3<f64>, String)> {
    let file = read_gen_file(Path::new(path), &ReadOptions::default())?;
    loaded(py, file)
}

#[pyfunction]
pub fn parse_generators<'py>(py: Python<'py>, text: &str) -> PyResult<(&'py PyArray3<f64>, String)> {
    let file = read_gen_str(text, &ReadOptions::default())?;
    loaded(py, file)
}

#[pyfunction]
#[pyo3(signature = (generators, precision = 17))]
pub fn format_generators(generators: PyReadonlyArray3<f64>, precision: usize) -> PyResult<String> {
    let file = GeneratorFile::new(array3_to_generators(&generators.as_array())?);
    let options = WriteOptions {
        precision,
        write_header: false,
    };
    Ok(write_gen_string(&file, &options)?)
}

#[pyfunction]
#[pyo3(name = "detect_space_type")]
pub fn detect_space_type_py(generators: PyReadonlyArray3<f64>) -> PyResult<String> {
    let generators = array3_to_generators(&generators.as_array())?;
    Ok(detect_space_type(&generators, 0.0)?.name().to_string())
}

/// Returns (space, valid, [(index, determinant, parity, residual, [issue, ...]), ...])
#[pyfunction]
pub fn validate_generators(
    generators: PyReadonlyArray3<f64>,
) -> PyResult<(String, bool, Vec<(usize, f64, String, f64, Vec<String>)>)> {
    let generators = array3_to_generators(&generators.as_array())?;
    let report = validate(&generators, &ValidationOptions::default())?;
    let checks = report
        .checks
        .iter()
        .map(|c| {
            (
                c.index,
                c.determinant,
                c.parity.to_string(),
                c.residual,
                c.issues.iter().map(|i| i.to_string()).collect(),
            )
        })
        .collect();
    Ok((report.space.name().to_string(), report.is_valid(), checks))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(load_generators, m)?)?;
    m.add_function(wrap_pyfunction!(parse_generators, m)?)?;
    m.add_function(wrap_pyfunction!(format_generators, m)?)?;
    m.add_function(wrap_pyfunction!(detect_space_type_py, m)?)?;
    m.add_function(wrap_pyfunction!(validate_generators, m)?)?;
    Ok(())
}
