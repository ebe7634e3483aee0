mod generators;
mod metric;

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::error::GenError;

impl From<GenError> for PyErr {
    fn from(err: GenError) -> PyErr {
        match err {
            GenError::Io(e) => PyIOError::new_err(e.to_string()),
            other => PyValueError::new_err(other.to_string()),
        }
    }
}

/// Spaceforms - 3-manifold generator files in Rust
#[pymodule]
pub fn spaceforms(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    // Generator files
    generators::register(m)?;
    // Batched geometry on point sets
    metric::register(m)?;
    Ok(())
}
