//! Spaceforms - generator files for spherical, flat and hyperbolic 3-manifolds
//!
//! A `.gen` file lists the 4×4 matrices that generate the holonomy group of
//! a 3-manifold. This crate reads and writes that format, classifies the
//! geometry of a generator set and checks that each generator is an isometry.
//!
//! ```no_run
//! use spaceforms::{read_gen_file, validate, ReadOptions, ValidationOptions};
//! use std::path::Path;
//!
//! let file = read_gen_file(Path::new("data/klein_space.gen"), &ReadOptions::default())?;
//! let report = validate(&file.generators, &ValidationOptions::default())?;
//! println!("{} generators, {} space", file.len(), report.space);
//! # Ok::<(), spaceforms::GenError>(())
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod geometry;
pub mod matrix;
pub mod ops;
pub mod validate;

#[cfg(feature = "python")]
mod bindings;

pub use config::{ReadOptions, SpaceformsConfig, ValidationOptions, WriteOptions};
pub use error::{ConfigError, GenError, GenResult};
pub use format::{
    read_gen_file, read_gen_from, read_gen_str, write_gen_file, write_gen_string, write_gen_to,
    GenReader, GenWriter, GeneratorFile,
};
pub use geometry::{detect_space_type, horizon_radius, tiling_radius, SpaceType, SpaceVariant};
pub use matrix::{ImageParity, Matrix4, Vector4};
pub use validate::{validate, Issue, ValidationReport};
