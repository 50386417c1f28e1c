//! Immutable compiled transform: point application and inversion.

use std::sync::Arc;

use crate::foundation::core::{Point, point_from_slice};
use crate::foundation::error::XformResult;
use crate::transform::affine::AffineMatrix;
use crate::transform::builder::TransformBuilder;

/// An immutable transform value wrapping one composed [`AffineMatrix`].
///
/// Produced by [`TransformBuilder::build`]; freely shareable for reads. The
/// optional back-reference to the builder is a build-time snapshot for
/// introspection only and never affects point transformation.
#[derive(Clone, Debug)]
pub struct CompiledTransform {
    matrix: AffineMatrix,
    source: Option<Arc<TransformBuilder>>,
}

impl CompiledTransform {
    /// Wrap a bare matrix with no source builder.
    pub fn new(matrix: AffineMatrix) -> Self {
        Self {
            matrix,
            source: None,
        }
    }

    pub(crate) fn with_source(matrix: AffineMatrix, source: Arc<TransformBuilder>) -> Self {
        Self {
            matrix,
            source: Some(source),
        }
    }

    /// The composed matrix.
    pub fn matrix(&self) -> AffineMatrix {
        self.matrix
    }

    /// Apply the transform to a point.
    pub fn transform_point(&self, point: impl Into<Point>) -> Point {
        self.matrix.apply(point)
    }

    /// Apply the transform to a caller-supplied slice.
    ///
    /// Fails with [`XformError`](crate::XformError) unless the slice has
    /// exactly 2 components.
    pub fn transform_slice(&self, point: &[f64]) -> XformResult<Point> {
        Ok(self.matrix.apply(point_from_slice(point)?))
    }

    /// The algebraic inverse as a new, independent transform.
    ///
    /// Fails with [`XformError::SingularMatrix`](crate::XformError) when the
    /// matrix has a zero determinant. The inverse carries no source builder.
    pub fn invert(&self) -> XformResult<CompiledTransform> {
        Ok(Self::new(self.matrix.invert()?))
    }

    /// A new builder holding exactly one raw-matrix operation equal to this
    /// transform's matrix.
    pub fn to_matrix_builder(&self) -> TransformBuilder {
        let mut builder = TransformBuilder::new();
        builder.matrix(self.matrix);
        builder
    }

    /// The build-time snapshot of the builder that produced this transform,
    /// if any.
    ///
    /// The snapshot is shared, not copied. Mutating a clone of it and
    /// rebuilding yields a new, independent transform; this one never changes.
    pub fn source_builder(&self) -> Option<Arc<TransformBuilder>> {
        self.source.clone()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/compiled.rs"]
mod tests;
