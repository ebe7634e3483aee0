//! TOML configuration for the reader, the writer and validation.
//!
//! Every section and every field is optional:
//!
//! ```toml
//! [reader]
//! strict_blocks = true        # a blank line inside a matrix block is an error
//!
//! [writer]
//! precision = 17              # fractional digits per entry
//! write_header = true
//!
//! [validation]
//! isometry_tolerance = 1e-9
//! singular_epsilon = 1e-9
//! geometry_epsilon = 0.0      # width of the flat band around m[3][3] = 1
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Digits beyond this only print noise
pub const MAX_PRECISION: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadOptions {
    /// Reject blank lines in the middle of a matrix block
    pub strict_blocks: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            strict_blocks: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteOptions {
    pub precision: usize,
    /// Emit the header comment block before the matrices
    pub write_header: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            precision: 17,
            write_header: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    pub isometry_tolerance: f64,
    pub singular_epsilon: f64,
    /// Tolerance used when classifying generators by `m[3][3]`.
    /// Every command that needs the geometry reads it from here.
    pub geometry_epsilon: f64,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        ValidationOptions {
            isometry_tolerance: 1e-9,
            singular_epsilon: 1e-9,
            geometry_epsilon: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpaceformsConfig {
    pub reader: ReadOptions,
    pub writer: WriteOptions,
    pub validation: ValidationOptions,
}

impl SpaceformsConfig {
    /// Load and validate a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: SpaceformsConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: SpaceformsConfig =
            toml::from_str(contents).map_err(|e| ConfigError::Parse("<string>".into(), e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.writer.precision > MAX_PRECISION {
            return Err(ConfigError::Invalid(format!(
                "writer.precision must be at most {}, got {}",
                MAX_PRECISION, self.writer.precision
            )));
        }
        let tolerances = [
            ("validation.isometry_tolerance", self.validation.isometry_tolerance),
            ("validation.singular_epsilon", self.validation.singular_epsilon),
            ("validation.geometry_epsilon", self.validation.geometry_epsilon),
        ];
        for (name, value) in tolerances {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a non-negative finite number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
