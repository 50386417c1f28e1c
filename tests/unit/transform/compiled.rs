use super::*;

use crate::foundation::core::Vec2;
use crate::foundation::error::XformError;

fn scaled_shift() -> CompiledTransform {
    let mut b = TransformBuilder::new();
    b.translate((10.0, 5.2)).scale((5.0, 3.0), (2.0, 2.5));
    b.build().unwrap()
}

#[test]
fn transform_slice_checks_length() {
    let t = scaled_shift();
    let p = t.transform_slice(&[5.0, 3.0]).unwrap();
    assert!((p.x - 25.0).abs() < 1e-9);
    assert!((p.y - 16.0).abs() < 1e-9);

    let err = t.transform_slice(&[5.0, 3.0, 1.0]).unwrap_err();
    assert!(matches!(err, XformError::InvalidArgument(_)));
}

#[test]
fn inverse_undoes_the_forward_transform() {
    let t = scaled_shift();
    let inv = t.invert().unwrap();
    for p in [(0.0, 0.0), (5.0, 3.0), (-7.5, 12.0)] {
        let q = inv.transform_point(t.transform_point(p));
        assert!((q.x - p.0).abs() < 1e-9);
        assert!((q.y - p.1).abs() < 1e-9);
    }
}

#[test]
fn inverse_has_no_source_builder() {
    let t = scaled_shift();
    assert!(t.source_builder().is_some());
    assert!(t.invert().unwrap().source_builder().is_none());
}

#[test]
fn invert_singular_fails() {
    let mut b = TransformBuilder::new();
    b.scale((0.0, 0.0), (0.0, 2.0));
    let err = b.build().unwrap().invert().unwrap_err();
    assert!(matches!(err, XformError::SingularMatrix));
}

#[test]
fn matrix_builder_rebuilds_the_same_transform() {
    let t = scaled_shift();
    let single = t.to_matrix_builder();
    assert_eq!(single.len(), 1);
    assert_eq!(single.build().unwrap().matrix(), t.matrix());
}

#[test]
fn source_builder_is_a_build_time_snapshot() {
    let mut b = TransformBuilder::new();
    b.translate((2.0, 0.0));
    let t = b.build().unwrap();

    // Mutation after the build is invisible to the snapshot.
    b.translate((100.0, 100.0));
    let snapshot = t.source_builder().unwrap();
    assert_eq!(snapshot.len(), 1);

    // Mutating a clone of the snapshot and rebuilding yields an independent
    // transform; the original is untouched.
    let mut reworked = (*snapshot).clone();
    reworked.scale((0.0, 0.0), 3.0);
    let rebuilt = reworked.build().unwrap();
    assert_ne!(rebuilt.matrix(), t.matrix());
    assert_eq!(t.matrix(), AffineMatrix::translation(Vec2::new(2.0, 0.0)));
}
