//! Opt-in checks that a generator set describes a group of isometries.
//!
//! The file format itself carries no guarantee that its matrices are
//! invertible isometries. Problems found here are reported as data rather
//! than errors so a caller can decide how strict to be.

use rayon::prelude::*;
use tracing::{info, warn};

use crate::config::ValidationOptions;
use crate::error::GenResult;
use crate::geometry::{detect_space_type, isometry_residual, SpaceType};
use crate::matrix::{ImageParity, Matrix4};

#[derive(Debug, Clone, PartialEq)]
pub enum Issue {
    /// Determinant is (numerically) zero
    Singular,
    /// The matrix does not preserve the geometry's metric
    NotAnIsometry { residual: f64 },
    /// An identity generator adds nothing and reads as flat
    Identity,
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Issue::Singular => write!(f, "matrix is singular"),
            Issue::NotAnIsometry { residual } => {
                write!(f, "not an isometry (residual {:.3e})", residual)
            }
            Issue::Identity => write!(f, "unneeded identity matrix"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorCheck {
    pub index: usize,
    pub determinant: f64,
    pub parity: ImageParity,
    pub residual: f64,
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub space: SpaceType,
    pub checks: Vec<GeneratorCheck>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.checks.iter().all(|c| c.issues.is_empty())
    }

    /// True when no generator reverses orientation
    pub fn orientable(&self) -> bool {
        self.checks.iter().all(|c| c.parity == ImageParity::Positive)
    }

    pub fn issue_count(&self) -> usize {
        self.checks.iter().map(|c| c.issues.len()).sum()
    }
}

fn check_generator(
    index: usize,
    g: &Matrix4,
    space: SpaceType,
    options: &ValidationOptions,
) -> GeneratorCheck {
    let determinant = g.determinant();
    let residual = isometry_residual(g, space);
    let mut issues = Vec::new();

    if determinant.abs() < options.singular_epsilon {
        issues.push(Issue::Singular);
    }
    if residual > options.isometry_tolerance {
        issues.push(Issue::NotAnIsometry { residual });
    }
    if g.max_abs_diff(&Matrix4::identity()) <= options.isometry_tolerance {
        issues.push(Issue::Identity);
    }

    for issue in &issues {
        warn!(index, %issue, "generator check failed");
    }

    GeneratorCheck {
        index,
        determinant,
        parity: ImageParity::from_determinant(determinant),
        residual,
        issues,
    }
}

/// Check every generator against the geometry they share.
///
/// Fails only when the generators disagree about the geometry itself.
pub fn validate(generators: &[Matrix4], options: &ValidationOptions) -> GenResult<ValidationReport> {
    let space = detect_space_type(generators, options.geometry_epsilon)?;

    let checks: Vec<GeneratorCheck> = generators
        .par_iter()
        .enumerate()
        .map(|(index, g)| check_generator(index, g, space, options))
        .collect();

    let report = ValidationReport { space, checks };
    info!(
        %space,
        generators = generators.len(),
        issues = report.issue_count(),
        "validated generators"
    );
    Ok(report)
}
