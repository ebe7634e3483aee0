//! Error types for reading, writing and checking generator files.

use std::path::PathBuf;

use thiserror::Error;

use crate::geometry::SpaceType;

/// Errors raised while loading or interpreting a `.gen` file
#[derive(Error, Debug)]
pub enum GenError {
    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input starts with a UTF-16 byte-order mark
    #[error("the matrix file is in UTF-16 format, please convert to UTF-8")]
    Utf16,

    /// Parse error with location information
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// Line number where the error occurred (1-based)
        line: usize,
        /// Error message
        message: String,
    },

    /// A matrix block ended before its fourth row
    #[error("matrix block ending at line {line} has {rows} row(s), expected 4")]
    IncompleteBlock { line: usize, rows: usize },

    /// Generators disagree about the geometry
    #[error(
        "generator {index} is {found} but the first generator is {expected} \
         (inconsistent geometries, or an unneeded identity matrix is present)"
    )]
    InconsistentGeometry {
        index: usize,
        expected: SpaceType,
        found: SpaceType,
    },

    /// A vector has non-positive length in the requested geometry
    #[error("vector has non-positive length and cannot be normalized")]
    DegenerateVector,

    /// Row of a point array that could not be normalized
    #[error("row {row} has non-positive length and cannot be normalized")]
    BadVector { row: usize },

    /// Array had the wrong shape for a generator stack
    #[error("shape error: {0}")]
    Shape(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GenError {
    /// Create a parse error at a specific line
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        GenError::Parse {
            line,
            message: message.into(),
        }
    }

    pub fn shape(message: impl Into<String>) -> Self {
        GenError::Shape(message.into())
    }
}

/// Errors raised while loading a TOML configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {0}: {1}")]
    Io(PathBuf, std::io::Error),

    #[error("failed to parse config file {0}: {1}")]
    Parse(PathBuf, toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for generator file operations
pub type GenResult<T> = Result<T, GenError>;
