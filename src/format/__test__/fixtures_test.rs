//! Checks against the bundled Klein space and tetrahedral space files

use super::{load, KLEIN_SPACE, TETRAHEDRAL_SPACE};
use crate::config::ValidationOptions;
use crate::geometry::{SpaceType, SpaceVariant};
use crate::matrix::ImageParity;
use crate::validate::validate;

#[test]
fn test_klein_space_generators() {
    let file = load(KLEIN_SPACE);

    assert_eq!(file.len(), 3);
    assert_eq!(file.title(), Some("Klein Space"));
    assert_eq!(file.variant, SpaceVariant::Generic);
    assert_eq!(
        file.generators[0].m,
        [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [1.0, 0.0, 0.0, 1.0],
        ]
    );
    assert_eq!(file.space_type(0.0).unwrap(), SpaceType::Flat);
}

#[test]
fn test_klein_space_is_non_orientable() {
    let file = load(KLEIN_SPACE);
    let parities: Vec<_> = file.generators.iter().map(|g| g.parity).collect();
    assert_eq!(
        parities,
        vec![ImageParity::Positive, ImageParity::Positive, ImageParity::Negative]
    );

    let report = validate(&file.generators, &ValidationOptions::default()).unwrap();
    assert!(report.is_valid(), "{:?}", report);
    assert!(!report.orientable());
}

#[test]
fn test_tetrahedral_space_entries() {
    let file = load(TETRAHEDRAL_SPACE);
    let allowed = [0.25, 0.75, 0.55901699437494742410];

    assert_eq!(file.len(), 2);
    for g in &file.generators {
        for row in &g.m {
            for &entry in row {
                assert!(
                    allowed.iter().any(|a| (entry.abs() - a).abs() < 1e-15),
                    "unexpected entry {}",
                    entry
                );
            }
        }
    }
    assert!((allowed[2] - 5.0f64.sqrt() / 4.0).abs() < 1e-15);
}

#[test]
fn test_tetrahedral_space_is_spherical_and_orientable() {
    let file = load(TETRAHEDRAL_SPACE);
    assert_eq!(file.space_type(0.0).unwrap(), SpaceType::Spherical);

    let report = validate(&file.generators, &ValidationOptions::default()).unwrap();
    assert!(report.is_valid(), "{:?}", report);
    assert!(report.orientable());
    assert_eq!(report.space, SpaceType::Spherical);
}

#[test]
fn test_tetrahedral_generator_has_order_ten() {
    let file = load(TETRAHEDRAL_SPACE);
    let a = file.generators[0];

    let mut power = a;
    for _ in 1..5 {
        power = power * a;
    }
    assert!(power.approx_eq(&crate::matrix::Matrix4::antipodal(), 1e-12));
    assert!((power * a).approx_eq(&file.generators[1], 1e-12));
}
