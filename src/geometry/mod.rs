//! Geometry of a generator set: which of the three constant-curvature
//! spaces the matrices act on, and how far a consumer should tile it.

mod isometry;

pub use isometry::isometry_residual;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GenError, GenResult};
use crate::matrix::Matrix4;

/// Extra tiling depth for hyperbolic spaces, whose tile count grows exponentially
pub const HYPERBOLIC_TILING_RADIUS_PADDING: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceType {
    Spherical,
    Flat,
    Hyperbolic,
}

impl SpaceType {
    /// Classify a matrix by its bottom-right entry: below 1 is spherical,
    /// exactly 1 is flat and above 1 is hyperbolic. `eps` widens the flat band.
    pub fn classify(matrix: &Matrix4, eps: f64) -> SpaceType {
        let w = matrix.m[3][3];
        if w < 1.0 - eps {
            SpaceType::Spherical
        } else if w > 1.0 + eps {
            SpaceType::Hyperbolic
        } else {
            SpaceType::Flat
        }
    }

    /// Diagonal of the quadratic form preserved by the isometries.
    /// Flat space has a degenerate form that ignores `w`.
    pub fn metric(&self) -> [f64; 4] {
        match self {
            SpaceType::Spherical => [1.0, 1.0, 1.0, 1.0],
            SpaceType::Flat => [1.0, 1.0, 1.0, 0.0],
            SpaceType::Hyperbolic => [-1.0, -1.0, -1.0, 1.0],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SpaceType::Spherical => "spherical",
            SpaceType::Flat => "flat",
            SpaceType::Hyperbolic => "hyperbolic",
        }
    }
}

impl std::fmt::Display for SpaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Spaces recognised by the first line of their file.
///
/// The two named hyperbolic spaces have fundamental domains large enough
/// that a consumer can afford to tile them more deeply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpaceVariant {
    #[default]
    Generic,
    MirroredDodecahedron,
    SeifertWeber,
}

impl SpaceVariant {
    const MIRRORED_DODECAHEDRON: &'static str = "Mirrored Right-Angled Dodecahedron";
    const SEIFERT_WEBER: &'static str = "Seifert-Weber Dodecahedral Space";

    /// Detect a variant from the first line of a file, BOM already removed
    pub fn from_first_line(line: &str) -> SpaceVariant {
        let Some(rest) = line.strip_prefix('#') else {
            return SpaceVariant::Generic;
        };
        let title = rest.trim_start_matches([' ', '\t']);
        if title.starts_with(Self::MIRRORED_DODECAHEDRON) {
            SpaceVariant::MirroredDodecahedron
        } else if title.starts_with(Self::SEIFERT_WEBER) {
            SpaceVariant::SeifertWeber
        } else {
            SpaceVariant::Generic
        }
    }
}

/// Determine the common geometry of a generator list.
///
/// An empty list describes the 3-sphere itself. Otherwise every generator
/// must agree with the first. An identity matrix reads as flat, so a stray
/// identity in a spherical or hyperbolic file shows up here.
pub fn detect_space_type(generators: &[Matrix4], eps: f64) -> GenResult<SpaceType> {
    let Some(first) = generators.first() else {
        debug!("no generators, treating the space as the 3-sphere");
        return Ok(SpaceType::Spherical);
    };

    let expected = SpaceType::classify(first, eps);
    for (index, g) in generators.iter().enumerate().skip(1) {
        let found = SpaceType::classify(g, eps);
        if found != expected {
            return Err(GenError::InconsistentGeometry {
                index,
                expected,
                found,
            });
        }
    }

    Ok(expected)
}

/// How far a consumer should tile before the scenery fades out.
///
/// Any radius above π covers all of S³. The number of tiles grows cubically
/// in flat space but exponentially in hyperbolic space.
pub fn horizon_radius(space: SpaceType, variant: SpaceVariant) -> f64 {
    match space {
        SpaceType::Spherical => 3.15,
        SpaceType::Flat => 11.0,
        SpaceType::Hyperbolic => match variant {
            SpaceVariant::Generic => 3.0,
            SpaceVariant::MirroredDodecahedron | SpaceVariant::SeifertWeber => 4.0,
        },
    }
}

/// Horizon radius plus the padding applied to hyperbolic spaces
pub fn tiling_radius(space: SpaceType, variant: SpaceVariant) -> f64 {
    let radius = horizon_radius(space, variant);
    match space {
        SpaceType::Hyperbolic => radius + HYPERBOLIC_TILING_RADIUS_PADDING,
        _ => radius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_corner(w: f64) -> Matrix4 {
        let mut m = Matrix4::identity();
        m.m[3][3] = w;
        m
    }

    #[test]
    fn test_classify_by_corner_entry() {
        assert_eq!(SpaceType::classify(&with_corner(0.25), 0.0), SpaceType::Spherical);
        assert_eq!(SpaceType::classify(&with_corner(1.0), 0.0), SpaceType::Flat);
        assert_eq!(SpaceType::classify(&with_corner(1.5), 0.0), SpaceType::Hyperbolic);
        assert_eq!(SpaceType::classify(&with_corner(1.0 + 1e-13), 0.0), SpaceType::Hyperbolic);
        assert_eq!(SpaceType::classify(&with_corner(1.0 + 1e-13), 1e-12), SpaceType::Flat);
    }

    #[test]
    fn test_empty_generator_list_is_three_sphere() {
        assert_eq!(detect_space_type(&[], 0.0).unwrap(), SpaceType::Spherical);
    }

    #[test]
    fn test_inconsistent_geometry_names_generator() {
        let generators = [with_corner(0.5), with_corner(0.5), Matrix4::identity()];
        match detect_space_type(&generators, 0.0) {
            Err(GenError::InconsistentGeometry {
                index,
                expected,
                found,
            }) => {
                assert_eq!(index, 2);
                assert_eq!(expected, SpaceType::Spherical);
                assert_eq!(found, SpaceType::Flat);
            }
            other => panic!("expected inconsistent geometry, got {:?}", other),
        }
    }

    #[test]
    fn test_variant_from_first_line() {
        assert_eq!(
            SpaceVariant::from_first_line("#\tMirrored Right-Angled Dodecahedron"),
            SpaceVariant::MirroredDodecahedron
        );
        assert_eq!(
            SpaceVariant::from_first_line("# Seifert-Weber Dodecahedral Space (hyperbolic)"),
            SpaceVariant::SeifertWeber
        );
        assert_eq!(SpaceVariant::from_first_line("#\tKlein Space"), SpaceVariant::Generic);
        assert_eq!(
            SpaceVariant::from_first_line("Seifert-Weber Dodecahedral Space"),
            SpaceVariant::Generic
        );
    }

    #[test]
    fn test_horizon_radius() {
        assert!(horizon_radius(SpaceType::Spherical, SpaceVariant::Generic) > std::f64::consts::PI);
        assert_eq!(horizon_radius(SpaceType::Flat, SpaceVariant::Generic), 11.0);
        assert_eq!(horizon_radius(SpaceType::Hyperbolic, SpaceVariant::SeifertWeber), 4.0);
        assert_eq!(tiling_radius(SpaceType::Hyperbolic, SpaceVariant::Generic), 4.0);
        assert_eq!(tiling_radius(SpaceType::Flat, SpaceVariant::Generic), 11.0);
    }
}
